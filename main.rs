//! main.rs - Desktop simulator for the hero bubble field
//! Handles rendering, timing, pointer input and configuration

use anyhow::{Context, Result};
use embedded_graphics::{
    mono_font::{
        iso_8859_1::{FONT_10X20, FONT_6X10, FONT_8X13},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use std::thread;
use std::time::{Duration, Instant};

use hero_bubbles::{BubbleSprite, HeroBubbles, Rgba, Settings, WordSprite};

/// Environment variable naming an optional JSON settings file
const CONFIG_ENV: &str = "BUBBLES_CONFIG";

/// Extra viewports cycled with `R` after the configured one
const PRESETS: [(u32, u32); 3] = [(640, 400), (800, 500), (480, 320)];

// Stand-in for the hero photograph
const BACKDROP: Rgb888 = Rgb888::new(126, 168, 204);
const OFFSCREEN: Rgb888 = Rgb888::new(40, 52, 64);

struct UiState {
    show_status: bool,
    viewports: Vec<(u32, u32)>,
    viewport: usize,
    pointer: Option<Point>,
}

impl UiState {
    fn new(settings: &Settings) -> Self {
        Self {
            show_status: true,
            viewports: viewport_cycle(settings),
            viewport: 0,
            pointer: None,
        }
    }

    fn next_viewport(&mut self) -> (u32, u32) {
        self.viewport = (self.viewport + 1) % self.viewports.len();
        self.viewports[self.viewport]
    }
}

/// Configured viewport first, then the presets it does not already match
fn viewport_cycle(settings: &Settings) -> Vec<(u32, u32)> {
    let configured = (
        settings.viewport_width.round() as u32,
        settings.viewport_height.round() as u32,
    );
    let mut cycle = vec![configured];
    cycle.extend(PRESETS.iter().copied().filter(|&p| p != configured));
    cycle
}

/// Pointer in field coordinates, or `None` over the offscreen border.
/// SDL reports no leave event, so a pointer that left the window keeps
/// its last position, as a browser's last mouse position does.
fn hover_target(pointer: Option<Point>, viewport: (f32, f32)) -> Option<(f32, f32)> {
    let point = pointer?;
    let (x, y) = (point.x as f32, point.y as f32);
    let (width, height) = viewport;
    (x >= 0.0 && y >= 0.0 && x < width && y < height).then_some((x, y))
}

/// The display never changes size; it fits every viewport in the cycle
fn display_size(viewports: &[(u32, u32)]) -> (u32, u32) {
    viewports
        .iter()
        .fold((1, 1), |(w, h), &(vw, vh)| (w.max(vw), h.max(vh)))
}

fn load_settings() -> Result<Settings> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings from {path}"))?;
    let settings: Settings = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse settings in {path}"))?;
    info!("loaded settings from {path}");
    Ok(settings)
}

// No alpha channel in the display: blend against the backdrop
fn blend(color: Rgba) -> Rgb888 {
    let t = color.opacity();
    let mix = |c: u8, bg: u8| (bg as f32 + (c as f32 - bg as f32) * t).round() as u8;
    Rgb888::new(
        mix(color.r, BACKDROP.r()),
        mix(color.g, BACKDROP.g()),
        mix(color.b, BACKDROP.b()),
    )
}

fn circle(x: f32, y: f32, radius: f32) -> Circle {
    let diameter = (radius * 2.0).max(1.0).round() as u32;
    Circle::with_center(Point::new(x.round() as i32, y.round() as i32), diameter)
}

fn draw_bubble<D>(target: &mut D, sprite: &BubbleSprite) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if let Some(pop) = sprite.pop {
        circle(sprite.x, sprite.y, pop.ring_radius)
            .into_styled(PrimitiveStyle::with_stroke(blend(pop.ring_color), 1))
            .draw(target)?;
        circle(sprite.x, sprite.y, pop.flash_radius)
            .into_styled(PrimitiveStyle::with_fill(blend(pop.flash_color)))
            .draw(target)?;
        return Ok(());
    }

    circle(sprite.x, sprite.y, sprite.radius)
        .into_styled(PrimitiveStyle::with_fill(blend(sprite.fill)))
        .draw(target)?;
    let highlight = sprite.highlight;
    circle(highlight.x, highlight.y, highlight.radius)
        .into_styled(PrimitiveStyle::with_fill(blend(highlight.color)))
        .draw(target)?;
    circle(sprite.x, sprite.y, sprite.radius)
        .into_styled(PrimitiveStyle::with_stroke(blend(sprite.outline), 1))
        .draw(target)?;
    Ok(())
}

// Mono fonts do not scale, pick the closest size
fn font_for(size: f32) -> &'static MonoFont<'static> {
    if size < 14.0 {
        &FONT_6X10
    } else if size < 24.0 {
        &FONT_8X13
    } else {
        &FONT_10X20
    }
}

fn draw_word<D>(target: &mut D, sprite: &WordSprite) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let font = font_for(sprite.font_size());
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    for pass in sprite.passes() {
        let style = MonoTextStyle::new(font, blend(pass.color));
        let position = Point::new(pass.x.round() as i32, pass.y.round() as i32);
        Text::with_text_style(sprite.text, position, style, layout).draw(target)?;
    }
    Ok(())
}

fn render<D>(target: &mut D, field: &HeroBubbles, ui: &UiState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let bottom = target.bounding_box().size.height as i32;
    target.clear(OFFSCREEN)?;
    let (width, height) = field.viewport();
    Rectangle::new(Point::zero(), Size::new(width as u32, height as u32))
        .into_styled(PrimitiveStyle::with_fill(BACKDROP))
        .draw(target)?;

    for sprite in field.bubble_sprites() {
        draw_bubble(target, &sprite)?;
    }
    for sprite in field.word_sprites() {
        draw_word(target, &sprite)?;
    }

    if ui.show_status {
        let style = MonoTextStyle::new(&FONT_6X10, Rgb888::WHITE);
        let status = format!(
            "frame {}  bubbles {}/{}  words {}  viewport {}x{}",
            field.frame(),
            field.bubbles().len(),
            field.capacity(),
            field.words().len(),
            width,
            height,
        );
        Text::with_baseline(&status, Point::new(5, 5), style, Baseline::Top).draw(target)?;
        Text::with_baseline(
            "Hover: pop | R: Resize | Space: Status | Q: Quit",
            Point::new(5, bottom - 5),
            style,
            Baseline::Bottom,
        )
        .draw(target)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings()?;
    let mut field = HeroBubbles::try_new(settings).context("invalid bubble settings")?;
    field.initialize(
        settings.viewport_width,
        settings.viewport_height,
        settings.capacity,
    );

    let mut ui = UiState::new(&settings);
    let (display_width, display_height) = display_size(&ui.viewports);
    let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(display_width, display_height));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Hero bubbles", &output_settings);

    let target_fps = 60;
    let frame_duration = Duration::from_secs_f32(1.0 / target_fps as f32);

    println!("=== Hero bubbles ===");
    println!("Controls:");
    println!("  Mouse: hover a bubble to pop it");
    println!("  R: Cycle viewport size");
    println!("  Space: Toggle status line");
    println!("  Q: Quit");

    'main_loop: loop {
        let now = Instant::now();

        // Pointer is sampled once per frame, before the step
        if let Some((x, y)) = hover_target(ui.pointer, field.viewport()) {
            let popped = field.register_pointer(x, y);
            if popped > 0 {
                debug!("pointer at ({}, {}) popped {}", x, y, popped);
            }
        }
        field.advance();

        render(&mut display, &field, &ui)?;
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'main_loop,
                SimulatorEvent::MouseMove { point } => ui.pointer = Some(point),
                SimulatorEvent::KeyDown { keycode, .. } => {
                    let key = format!("{:?}", keycode).to_lowercase();
                    match key.as_str() {
                        "space" => ui.show_status = !ui.show_status,
                        "r" => {
                            let (w, h) = ui.next_viewport();
                            field.on_viewport_resize(w as f32, h as f32);
                            info!("viewport: {}x{}", w, h);
                        }
                        "q" => break 'main_loop,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let elapsed = now.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
    }

    info!("stopped after {} frames", field.frame());
    Ok(())
}
