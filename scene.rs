//! Draw descriptions derived from the field state
//!
//! Nothing here mutates the engine: the same state and frame counter always
//! map to the same sprites, so a renderer can call these as often as it likes.

use crate::{Bubble, BubbleState, Settings, Word};

/// Colour with alpha on a 0..255 scale
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white(a: f32) -> Self {
        Self::new(255, 255, 255, a)
    }

    /// Alpha as a 0..1 blend factor
    pub fn opacity(&self) -> f32 {
        (self.a / 255.0).clamp(0.0, 1.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Highlight {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba,
}

/// Expanding ring and fading flash drawn while a bubble pops
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopEffect {
    pub ring_radius: f32,
    pub ring_color: Rgba,
    pub flash_radius: f32,
    pub flash_color: Rgba,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BubbleSprite {
    pub x: f32,
    pub y: f32,
    /// Base radius with the pulse applied
    pub radius: f32,
    pub rotation: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub highlight: Highlight,
    pub pop: Option<PopEffect>,
}

pub fn bubble_sprite(bubble: &Bubble, frame: u64, settings: &Settings) -> BubbleSprite {
    let phase = frame as f64 * f64::from(settings.pulse_rate) + f64::from(bubble.pulse_offset);
    let pulse = 1.0 + libm::sin(phase) as f32 * settings.pulse_depth;
    let diameter = bubble.size * pulse;

    // Highlight sits up-left of centre in the bubble's rotated frame
    let (sin, cos) = (libm::sinf(bubble.rotation), libm::cosf(bubble.rotation));
    let (hx, hy) = (-diameter * 0.15, -diameter * 0.15);
    let highlight = Highlight {
        x: bubble.x + hx * cos - hy * sin,
        y: bubble.y + hx * sin + hy * cos,
        radius: diameter * 0.1,
        color: Rgba::white(bubble.alpha * 0.5),
    };

    let pop = match bubble.state {
        BubbleState::Floating => None,
        BubbleState::Popping { progress } => {
            let fade = (1.0 - progress).max(0.0);
            Some(PopEffect {
                ring_radius: bubble.size / 2.0 * (1.0 + progress * 2.0),
                ring_color: Rgba::white(80.0 * fade),
                flash_radius: bubble.size / 2.0 * (1.0 + progress * 0.8),
                flash_color: Rgba::white(60.0 * fade),
            })
        }
    };

    let (r, g, b) = bubble.tint.rgb();
    BubbleSprite {
        x: bubble.x,
        y: bubble.y,
        radius: diameter / 2.0,
        rotation: bubble.rotation,
        fill: Rgba::new(r, g, b, bubble.alpha),
        outline: Rgba::white(bubble.alpha * 0.3),
        highlight,
        pop,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassKind {
    Shadow,
    Halo,
    Foreground,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextPass {
    pub kind: PassKind,
    pub x: f32,
    pub y: f32,
    pub color: Rgba,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WordSprite {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub alpha: f32,
    pub text: &'static str,
}

impl WordSprite {
    pub const BASE_FONT_SIZE: f32 = 32.0;

    pub fn font_size(&self) -> f32 {
        Self::BASE_FONT_SIZE * self.scale
    }

    /// Back to front: drop shadow, white halo, navy text
    pub fn passes(&self) -> [TextPass; 3] {
        [
            TextPass {
                kind: PassKind::Shadow,
                x: self.x + 1.0,
                y: self.y + 1.0,
                color: Rgba::new(0, 0, 0, self.alpha * 0.3),
            },
            TextPass {
                kind: PassKind::Halo,
                x: self.x,
                y: self.y,
                color: Rgba::white(self.alpha * 0.4),
            },
            TextPass {
                kind: PassKind::Foreground,
                x: self.x,
                y: self.y,
                color: Rgba::new(0, 0, 136, self.alpha),
            },
        ]
    }
}

pub fn word_sprite(word: &Word) -> WordSprite {
    WordSprite {
        x: word.x,
        y: word.y,
        scale: word.scale.min(1.0),
        alpha: word.alpha(),
        text: word.text,
    }
}
