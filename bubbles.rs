//! hero-bubbles - Hover-to-pop bubble field for a landing page hero
//! No heap allocation, no_std compatible
//!
//! The engine is frame driven: every speed is in units per frame and the
//! host calls [`BubbleField::advance`] once per animation frame, after
//! feeding the pointer position to [`BubbleField::register_pointer`]. The
//! [`scene`] module turns the resulting state into draw descriptions
//! without touching it.

#![cfg_attr(not(test), no_std)]

mod palette;
mod rng;
pub mod scene;
mod settings;

use heapless::Vec;
use log::{debug, trace, warn};

pub use palette::{Tint, VOCABULARY};
pub use rng::Rng;
pub use scene::{BubbleSprite, Highlight, PassKind, PopEffect, Rgba, TextPass, WordSprite};
pub use settings::{PopPolicy, Settings, SettingsError};

/// Lifecycle of a bubble. Popping never goes back to floating.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BubbleState {
    Floating,
    Popping { progress: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bubble {
    pub x: f32,
    pub y: f32,
    /// Diameter
    pub size: f32,
    pub speed_y: f32,
    pub speed_x: f32,
    pub wobble_offset: f32,
    pub wobble_speed: f32,
    pub pulse_offset: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// 0..255
    pub alpha: f32,
    pub tint: Tint,
    pub state: BubbleState,
}

impl Bubble {
    fn random(rng: &mut Rng, settings: &Settings, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            size: rng.range(settings.bubble_min_size, settings.bubble_max_size),
            speed_y: rng.range(settings.rise_speed_min, settings.rise_speed_max),
            speed_x: rng.range(-settings.drift_speed_max, settings.drift_speed_max),
            wobble_offset: rng.range(0.0, 1000.0),
            wobble_speed: rng.range(settings.wobble_speed_min, settings.wobble_speed_max),
            pulse_offset: rng.range(0.0, 1000.0),
            rotation: rng.range(0.0, core::f32::consts::TAU),
            rotation_speed: rng.range(-settings.rotation_speed_max, settings.rotation_speed_max),
            alpha: rng.range(settings.alpha_min, settings.alpha_max),
            tint: Tint::random(rng),
            state: BubbleState::Floating,
        }
    }

    pub fn is_floating(&self) -> bool {
        self.state == BubbleState::Floating
    }

    /// Zero while floating
    pub fn pop_progress(&self) -> f32 {
        match self.state {
            BubbleState::Floating => 0.0,
            BubbleState::Popping { progress } => progress,
        }
    }

    /// Strictly inside the circle of diameter `size`
    pub fn contains(&self, px: f32, py: f32) -> bool {
        libm::hypotf(px - self.x, py - self.y) < self.size / 2.0
    }

    fn is_dead(&self, edge_margin: f32) -> bool {
        match self.state {
            BubbleState::Floating => self.y < -edge_margin,
            BubbleState::Popping { progress } => progress > 1.0,
        }
    }

    fn advance(&mut self, frame: f64, width: f32, settings: &Settings) {
        match &mut self.state {
            BubbleState::Popping { progress } => {
                *progress += settings.pop_step;
            }
            BubbleState::Floating => {
                self.y -= self.speed_y;
                // Phase in f64: an f32 frame count stops advancing after 2^24 frames
                let phase = frame * f64::from(self.wobble_speed) + f64::from(self.wobble_offset);
                self.x += libm::sin(phase) as f32 * settings.wobble_amplitude;
                self.x += self.speed_x;
                self.rotation += self.rotation_speed;

                // Wrap keeps the same bubble, it is not a respawn
                let margin = settings.edge_margin;
                if self.x < -margin {
                    self.x = width + margin;
                } else if self.x > width + margin {
                    self.x = -margin;
                }
            }
        }
    }
}

/// Text revealed where a bubble popped
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Word {
    pub x: f32,
    pub y: f32,
    pub text: &'static str,
    /// Grows from 0; the word is gone once it passes 1
    pub age: f32,
    pub scale: f32,
    pub wobble: f32,
    peak_alpha: f32,
}

impl Word {
    fn new(x: f32, y: f32, text: &'static str, settings: &Settings) -> Self {
        Self {
            x,
            y,
            text,
            age: 0.0,
            scale: settings.word_initial_scale,
            wobble: 0.0,
            peak_alpha: settings.word_peak_alpha,
        }
    }

    /// Linear fade with age, never negative
    pub fn alpha(&self) -> f32 {
        (self.peak_alpha * (1.0 - self.age)).max(0.0)
    }

    pub fn is_dead(&self) -> bool {
        self.age > 1.0
    }

    fn advance(&mut self, settings: &Settings) {
        // Rises, slowing down as it ages
        self.y -= settings.word_float_speed * (1.0 - self.age * 0.5);

        if self.scale < 1.0 {
            self.scale = (self.scale + settings.word_scale_step).min(1.0);
        }

        self.wobble += settings.word_wobble_step;
        self.x += libm::sinf(self.wobble) * settings.word_wobble_amplitude;

        self.age += settings.word_age_step;
    }
}

/// Bubble pool plus the words popped out of it.
///
/// `MAX_BUBBLES` bounds the bubble pool, the runtime capacity is clamped to
/// it. `MAX_WORDS` must cover [`Settings::max_live_words`], which is
/// `MAX_BUBBLES + 3` with default settings.
pub struct BubbleField<const MAX_BUBBLES: usize, const MAX_WORDS: usize> {
    bubbles: Vec<Bubble, MAX_BUBBLES>,
    words: Vec<Word, MAX_WORDS>,
    frame: u64,
    capacity: usize,
    width: f32,
    height: f32,
    rng: Rng,
    settings: Settings,
}

/// Pool sizes used by the hero section
pub type HeroBubbles = BubbleField<25, 32>;

impl<const MAX_BUBBLES: usize, const MAX_WORDS: usize> BubbleField<MAX_BUBBLES, MAX_WORDS> {
    const WORD_POOL_FITS: () = assert!(
        MAX_WORDS >= MAX_BUBBLES + 3,
        "word pool must hold at least MAX_BUBBLES + 3 words"
    );

    /// Empty field; call [`initialize`](Self::initialize) to seed it.
    /// Settings are taken as given, see [`try_new`](Self::try_new).
    pub fn new(settings: Settings) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WORD_POOL_FITS;

        Self {
            bubbles: Vec::new(),
            words: Vec::new(),
            frame: 0,
            capacity: Self::clamp_capacity(settings.capacity),
            width: settings.viewport_width,
            height: settings.viewport_height,
            rng: Rng::new(settings.rng_seed),
            settings,
        }
    }

    pub fn try_new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate(MAX_BUBBLES, MAX_WORDS)?;
        Ok(Self::new(settings))
    }

    fn clamp_capacity(requested: usize) -> usize {
        if requested > MAX_BUBBLES {
            warn!(
                "capacity {} exceeds pool size {}, clamping",
                requested, MAX_BUBBLES
            );
        }
        requested.min(MAX_BUBBLES)
    }

    /// Sets the viewport and tops the pool up to `capacity` with bubbles
    /// already in flight. Existing bubbles are kept as they are, so calling
    /// it again only fills empty slots.
    pub fn initialize(&mut self, width: f32, height: f32, capacity: usize) {
        self.width = width;
        self.height = height;
        self.capacity = Self::clamp_capacity(capacity);

        let mut seeded = 0;
        while self.bubbles.len() < self.capacity {
            let y = self.rng.range(
                height * self.settings.seed_top_fraction,
                height + self.settings.spawn_depth,
            );
            let bubble = self.random_bubble(y);
            if self.bubbles.push(bubble).is_err() {
                break;
            }
            seeded += 1;
        }
        debug!(
            "seeded {} bubbles in {}x{} (capacity {})",
            seeded, width, height, self.capacity
        );
    }

    fn random_bubble(&mut self, y: f32) -> Bubble {
        let margin = self.settings.spawn_margin;
        let x = self.rng.range(margin, self.width - margin);
        Bubble::random(&mut self.rng, &self.settings, x, y)
    }

    /// One animation frame: move, age, cull, then maybe spawn.
    pub fn advance(&mut self) {
        self.frame += 1;
        let frame = self.frame as f64;
        let settings = self.settings;

        for bubble in self.bubbles.iter_mut() {
            bubble.advance(frame, self.width, &settings);
        }
        for word in self.words.iter_mut() {
            word.advance(&settings);
        }

        self.bubbles.retain(|b| !b.is_dead(settings.edge_margin));
        self.words.retain(|w| !w.is_dead());

        if self.bubbles.len() < self.capacity
            && self.frame % u64::from(settings.spawn_interval.max(1)) == 0
        {
            let y = self.rng.range(self.height, self.height + settings.spawn_depth);
            let bubble = self.random_bubble(y);
            debug!("frame {}: spawning bubble at ({:.1}, {:.1})", self.frame, bubble.x, bubble.y);
            // Capacity is clamped to MAX_BUBBLES, so there is room
            let _ = self.bubbles.push(bubble);
        }
    }

    /// Pops floating bubbles under the pointer, each one leaving a word at
    /// its position. Returns how many bubbles popped.
    ///
    /// A bubble only pops if its word fits, so every pop has exactly one
    /// word. With validated settings the word pool never runs out.
    pub fn register_pointer(&mut self, px: f32, py: f32) -> usize {
        let mut popped = 0;

        for bubble in self.bubbles.iter_mut() {
            if !bubble.is_floating() || !bubble.contains(px, py) {
                continue;
            }
            if self.words.is_full() {
                warn!(
                    "word pool full, bubble at ({:.1}, {:.1}) keeps floating",
                    bubble.x, bubble.y
                );
                break;
            }

            bubble.state = BubbleState::Popping { progress: 0.0 };
            popped += 1;

            let text = palette::random_word(&mut self.rng);
            trace!("popped bubble at ({:.1}, {:.1}): {}", bubble.x, bubble.y, text);
            // Room checked above
            let _ = self.words.push(Word::new(bubble.x, bubble.y, text, &self.settings));

            if self.settings.pop_policy == PopPolicy::FirstHit {
                break;
            }
        }

        popped
    }

    /// Changes wrap and spawn bounds. Live bubbles are left untouched.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        debug!("viewport resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Runtime reconfiguration. Pools and the generator are kept; rejected
    /// settings leave the field unchanged.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        settings.validate(MAX_BUBBLES, MAX_WORDS)?;
        self.capacity = settings.capacity;
        self.settings = settings;
        Ok(())
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bubble_sprites(&self) -> impl Iterator<Item = BubbleSprite> + '_ {
        let frame = self.frame;
        let settings = &self.settings;
        self.bubbles
            .iter()
            .map(move |b| scene::bubble_sprite(b, frame, settings))
    }

    pub fn word_sprites(&self) -> impl Iterator<Item = WordSprite> + '_ {
        self.words.iter().map(scene::word_sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> HeroBubbles {
        HeroBubbles::new(Settings::default())
    }

    fn floating_at(x: f32, y: f32, size: f32) -> Bubble {
        Bubble {
            x,
            y,
            size,
            speed_y: 0.2,
            speed_x: 0.0,
            wobble_offset: 0.0,
            wobble_speed: 0.01,
            pulse_offset: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            alpha: 20.0,
            tint: Tint::Pearl,
            state: BubbleState::Floating,
        }
    }

    #[test]
    fn initialize_seeds_capacity_within_bounds() {
        let mut field = field();
        field.initialize(1000.0, 800.0, 25);

        assert_eq!(field.bubbles().len(), 25);
        for b in field.bubbles() {
            assert!(b.y >= 160.0 && b.y < 900.0, "y = {}", b.y);
            assert!(b.x >= 50.0 && b.x <= 950.0, "x = {}", b.x);
            assert!(b.is_floating());
            assert_eq!(b.pop_progress(), 0.0);
        }
    }

    #[test]
    fn initialize_again_only_tops_up() {
        let mut field = field();
        field.initialize(1000.0, 800.0, 25);
        let before: std::vec::Vec<Bubble> = field.bubbles().to_vec();

        field.on_viewport_resize(1200.0, 900.0);
        field.initialize(1200.0, 900.0, 25);
        assert_eq!(field.bubbles(), &before[..]);
    }

    #[test]
    fn initialize_clamps_capacity_to_pool() {
        let mut field: BubbleField<4, 8> = BubbleField::new(Settings::default());
        field.initialize(1000.0, 800.0, 25);
        assert_eq!(field.capacity(), 4);
        assert_eq!(field.bubbles().len(), 4);
    }

    #[test]
    fn try_new_rejects_oversized_capacity() {
        let result: Result<BubbleField<4, 8>, _> = BubbleField::try_new(Settings::default());
        assert!(matches!(
            result,
            Err(SettingsError::CapacityTooLarge { requested: 25, pool: 4 })
        ));
    }

    #[test]
    fn floating_bubbles_only_rise() {
        let mut field = field();
        field.initialize(1000.0, 800.0, 25);

        for _ in 0..2_000 {
            let before: std::vec::Vec<(f32, f32)> =
                field.bubbles().iter().map(|b| (b.wobble_offset, b.y)).collect();
            field.advance();
            for b in field.bubbles().iter().filter(|b| b.is_floating()) {
                // Matched by wobble offset; newly spawned bubbles have no predecessor
                if let Some(&(_, prev_y)) = before.iter().find(|(o, _)| *o == b.wobble_offset) {
                    assert!(b.y <= prev_y);
                }
            }
        }
    }

    #[test]
    fn pool_never_exceeds_capacity() {
        let mut field = field();
        field.initialize(640.0, 400.0, 10);
        for _ in 0..3_000 {
            field.advance();
            assert!(field.bubbles().len() <= 10);
        }
    }

    #[test]
    fn horizontal_position_stays_within_wrap_bounds() {
        let mut field = field();
        field.initialize(300.0, 400.0, 25);
        field.bubbles[0].x = 399.0;
        field.bubbles[0].speed_x = 5.0;
        field.bubbles[1].x = -99.0;
        field.bubbles[1].speed_x = -5.0;

        for _ in 0..500 {
            field.advance();
            for b in field.bubbles() {
                assert!(b.x >= -100.0 && b.x <= 400.0, "x = {}", b.x);
            }
        }
    }

    #[test]
    fn wrap_moves_bubble_to_opposite_edge() {
        let mut field = field();
        field.on_viewport_resize(1000.0, 800.0);
        let mut bubble = floating_at(1099.9, 500.0, 80.0);
        bubble.speed_x = 1.0;
        bubble.wobble_speed = 0.0;
        bubble.wobble_offset = 0.0;
        let _ = field.bubbles.push(bubble);

        field.advance();
        assert_eq!(field.bubbles().len(), 1);
        assert_eq!(field.bubbles()[0].x, -100.0);
    }

    #[test]
    fn pointer_hit_pops_and_spawns_word() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));

        assert_eq!(field.register_pointer(510.0, 505.0), 1);
        assert_eq!(
            field.bubbles()[0].state,
            BubbleState::Popping { progress: 0.0 }
        );
        assert_eq!(field.words().len(), 1);
        let word = &field.words()[0];
        assert_eq!((word.x, word.y), (500.0, 500.0));
        assert!(VOCABULARY.contains(&word.text));
    }

    #[test]
    fn pointer_miss_changes_nothing() {
        let mut field = field();
        field.initialize(1000.0, 800.0, 25);
        let before: std::vec::Vec<Bubble> = field.bubbles().to_vec();

        assert_eq!(field.register_pointer(-5_000.0, -5_000.0), 0);
        assert_eq!(field.bubbles(), &before[..]);
        assert!(field.words().is_empty());
    }

    #[test]
    fn edge_of_bubble_is_not_a_hit() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(0.0, 0.0, 100.0));
        assert_eq!(field.register_pointer(50.0, 0.0), 0);
    }

    #[test]
    fn popping_bubble_is_never_popped_twice() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));

        field.register_pointer(500.0, 500.0);
        field.advance();
        assert_eq!(field.register_pointer(500.0, 500.0), 0);
        assert_eq!(field.words().len(), 1);
    }

    #[test]
    fn overlapping_bubbles_all_pop_by_default() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));
        let _ = field.bubbles.push(floating_at(520.0, 500.0, 100.0));

        assert_eq!(field.register_pointer(510.0, 500.0), 2);
        assert_eq!(field.words().len(), 2);
    }

    #[test]
    fn first_hit_policy_pops_one() {
        let mut field = HeroBubbles::new(Settings {
            pop_policy: PopPolicy::FirstHit,
            ..Settings::default()
        });
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));
        let _ = field.bubbles.push(floating_at(520.0, 500.0, 100.0));

        assert_eq!(field.register_pointer(510.0, 500.0), 1);
        assert_eq!(field.words().len(), 1);
        assert!(field.bubbles()[1].is_floating());
    }

    #[test]
    fn popped_bubble_is_frozen_then_removed() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));
        field.register_pointer(500.0, 500.0);

        // 0.12 per frame passes 1.0 on the ninth frame
        for step in 1..=8 {
            field.advance();
            let b = field.bubbles()[0];
            assert_eq!((b.x, b.y), (500.0, 500.0));
            assert!(!b.is_floating());
            assert!((b.pop_progress() - 0.12 * step as f32).abs() < 1e-4);
        }
        field.advance();
        assert!(field.bubbles().is_empty());
    }

    #[test]
    fn bubble_above_top_is_removed() {
        let mut field = field();
        let mut bubble = floating_at(300.0, -99.95, 80.0);
        bubble.speed_y = 0.1;
        let _ = field.bubbles.push(bubble);

        field.advance();
        assert!(field.bubbles().is_empty());
    }

    #[test]
    fn bubble_exactly_at_top_margin_survives() {
        let mut field = field();
        let mut bubble = floating_at(300.0, -99.0, 80.0);
        bubble.speed_y = 1.0;
        let _ = field.bubbles.push(bubble);

        field.advance();
        assert_eq!(field.bubbles().len(), 1);
    }

    #[test]
    fn word_lives_sixty_seven_frames() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));
        field.register_pointer(500.0, 500.0);

        for _ in 0..66 {
            field.advance();
            assert_eq!(field.words().len(), 1);
        }
        field.advance();
        assert!(field.words().is_empty());
    }

    #[test]
    fn word_fades_and_grows() {
        let mut field = field();
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));
        field.register_pointer(500.0, 500.0);

        let mut last_alpha = field.words()[0].alpha();
        let mut last_scale = field.words()[0].scale;
        while !field.words().is_empty() {
            let word = field.words()[0];
            assert!(word.alpha() <= last_alpha);
            assert!(word.scale >= last_scale && word.scale <= 1.0);
            last_alpha = word.alpha();
            last_scale = word.scale;
            field.advance();
        }
        assert_eq!(last_scale, 1.0);
    }

    #[test]
    fn spawns_once_every_interval() {
        let mut field = field();
        field.on_viewport_resize(1000.0, 800.0);

        for _ in 0..59 {
            field.advance();
            assert!(field.bubbles().is_empty());
        }
        field.advance();
        assert_eq!(field.bubbles().len(), 1);

        let b = field.bubbles()[0];
        assert!(b.y >= 800.0 && b.y < 900.0);
        assert!(b.x >= 50.0 && b.x <= 950.0);
        assert!(b.is_floating());
    }

    #[test]
    fn full_pool_does_not_spawn() {
        let mut field = field();
        field.initialize(1000.0, 800.0, 25);
        for _ in 0..60 {
            field.advance();
        }
        assert_eq!(field.bubbles().len(), 25);
    }

    #[test]
    fn resize_leaves_bubbles_alone() {
        let mut field = field();
        field.initialize(1000.0, 800.0, 25);
        let before: std::vec::Vec<Bubble> = field.bubbles().to_vec();

        field.on_viewport_resize(320.0, 200.0);
        assert_eq!(field.bubbles(), &before[..]);
        assert_eq!(field.viewport(), (320.0, 200.0));
    }

    #[test]
    fn update_settings_rejects_oversized_capacity() {
        let mut field = field();
        let result = field.update_settings(Settings {
            capacity: 100,
            ..Settings::default()
        });
        assert_eq!(
            result,
            Err(SettingsError::CapacityTooLarge {
                requested: 100,
                pool: 25
            })
        );
        assert_eq!(field.capacity(), 25);
    }

    #[test]
    fn update_settings_rejects_zero_spawn_interval() {
        let mut field = field();
        field.initialize(640.0, 400.0, 10);

        let result = field.update_settings(Settings {
            spawn_interval: 0,
            ..Settings::default()
        });
        assert_eq!(result, Err(SettingsError::ZeroSpawnInterval));
        assert_eq!(field.settings().spawn_interval, 60);

        for _ in 0..120 {
            field.advance();
        }
        assert_eq!(field.frame(), 120);
    }

    #[test]
    fn update_settings_applies_valid_capacity() {
        let mut field = field();
        assert_eq!(
            field.update_settings(Settings {
                capacity: 5,
                ..Settings::default()
            }),
            Ok(())
        );
        assert_eq!(field.capacity(), 5);
    }

    #[test]
    fn unchecked_zero_interval_does_not_panic() {
        let mut field = HeroBubbles::new(Settings {
            spawn_interval: 0,
            ..Settings::default()
        });
        field.advance();
        // Treated as one frame
        assert_eq!(field.bubbles().len(), 1);
    }

    #[test]
    fn try_new_rejects_spawn_rate_the_word_pool_cannot_follow() {
        let result = HeroBubbles::try_new(Settings {
            spawn_interval: 1,
            ..Settings::default()
        });
        assert!(matches!(
            result,
            Err(SettingsError::WordPoolTooSmall { pool: 32, .. })
        ));
    }

    #[test]
    fn every_pop_leaves_a_word() {
        let mut field = HeroBubbles::try_new(Settings::default()).unwrap();
        field.initialize(1000.0, 800.0, 25);

        let mut pops = 0;
        for _ in 0..60 {
            let targets: std::vec::Vec<(f32, f32)> = field
                .bubbles()
                .iter()
                .filter(|b| b.is_floating())
                .map(|b| (b.x, b.y))
                .collect();
            for (x, y) in targets {
                pops += field.register_pointer(x, y);
            }
            field.advance();
        }
        // No word is old enough to have faded yet
        assert!(pops >= 25);
        assert_eq!(field.words().len(), pops);
    }

    #[test]
    fn full_word_pool_keeps_bubble_floating() {
        let mut field: BubbleField<1, 4> = BubbleField::new(Settings::default());
        let _ = field.bubbles.push(floating_at(500.0, 500.0, 100.0));
        let settings = Settings::default();
        while !field.words.is_full() {
            let _ = field.words.push(Word::new(0.0, 0.0, "Orden", &settings));
        }

        assert_eq!(field.register_pointer(500.0, 500.0), 0);
        assert!(field.bubbles()[0].is_floating());
        assert_eq!(field.words().len(), 4);
    }

    #[test]
    fn wobble_keeps_moving_after_long_runs() {
        let mut field = field();
        field.on_viewport_resize(1000.0, 800.0);
        let mut bubble = floating_at(0.0, 500.0, 80.0);
        bubble.wobble_speed = 0.01;
        let _ = field.bubbles.push(bubble);
        // Past 2^24 consecutive frames are no longer distinct as f32
        field.frame = (1 << 24) - 1;

        let start = field.bubbles()[0].x;
        field.advance();
        let first = field.bubbles()[0].x - start;
        let mid = field.bubbles()[0].x;
        field.advance();
        let second = field.bubbles()[0].x - mid;
        assert!((first - second).abs() > 1e-4, "{} vs {}", first, second);
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = field();
        let mut b = field();
        a.initialize(800.0, 600.0, 25);
        b.initialize(800.0, 600.0, 25);
        for _ in 0..300 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.bubbles(), b.bubbles());
    }
}
