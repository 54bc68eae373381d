//! Tunable constants for the bubble field

use thiserror::Error;

/// How many bubbles a single pointer sample may pop
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopPolicy {
    /// Every floating bubble under the pointer pops
    #[default]
    AllHits,
    /// Only the first floating bubble under the pointer pops
    FirstHit,
}

/// Configuration rejected by [`Settings::validate`]
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SettingsError {
    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: f32, height: f32 },

    #[error("range `{name}` is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("step `{name}` must be positive, got {value}")]
    NonPositiveStep { name: &'static str, value: f32 },

    #[error("spawn interval must be at least one frame")]
    ZeroSpawnInterval,

    #[error("rng seed must be non-zero")]
    ZeroSeed,

    #[error("capacity {requested} exceeds pool size {pool}")]
    CapacityTooLarge { requested: usize, pool: usize },

    #[error("up to {needed} words can be alive at once, word pool holds {pool}")]
    WordPoolTooSmall { needed: usize, pool: usize },
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    // Pool
    pub capacity: usize,
    pub spawn_interval: u32,
    pub pop_policy: PopPolicy,

    // Viewport
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Horizontal inset for new bubbles
    pub spawn_margin: f32,
    /// Depth below the bottom edge new bubbles start within
    pub spawn_depth: f32,
    /// Fraction of the height above which seeded bubbles never start
    pub seed_top_fraction: f32,
    /// Distance past an edge before a bubble wraps or dies
    pub edge_margin: f32,

    // Bubble generation
    pub bubble_min_size: f32,
    pub bubble_max_size: f32,
    pub rise_speed_min: f32,
    pub rise_speed_max: f32,
    pub drift_speed_max: f32,
    pub wobble_speed_min: f32,
    pub wobble_speed_max: f32,
    pub wobble_amplitude: f32,
    pub rotation_speed_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,

    // Bubble animation
    pub pulse_rate: f32,
    pub pulse_depth: f32,
    pub pop_step: f32,

    // Words
    pub word_age_step: f32,
    pub word_initial_scale: f32,
    pub word_scale_step: f32,
    pub word_wobble_step: f32,
    pub word_wobble_amplitude: f32,
    pub word_float_speed: f32,
    pub word_peak_alpha: f32,

    pub rng_seed: u32,
}

// Values of the landing page hero section
impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: 25,
            spawn_interval: 60,
            pop_policy: PopPolicy::AllHits,
            viewport_width: 640.0,
            viewport_height: 400.0,
            spawn_margin: 50.0,
            spawn_depth: 100.0,
            seed_top_fraction: 0.2,
            edge_margin: 100.0,
            bubble_min_size: 60.0,
            bubble_max_size: 140.0,
            rise_speed_min: 0.1,
            rise_speed_max: 0.3,
            drift_speed_max: 0.1,
            wobble_speed_min: 0.005,
            wobble_speed_max: 0.015,
            wobble_amplitude: 0.4,
            rotation_speed_max: 0.005,
            alpha_min: 15.0,
            alpha_max: 35.0,
            pulse_rate: 0.05,
            pulse_depth: 0.02,
            pop_step: 0.12,
            word_age_step: 0.015,
            word_initial_scale: 0.3,
            word_scale_step: 0.09,
            word_wobble_step: 0.1,
            word_wobble_amplitude: 0.5,
            word_float_speed: 2.0,
            word_peak_alpha: 180.0,
            rng_seed: 0x1234_5678,
        }
    }
}

impl Settings {
    /// Frames a word stays alive: its age passes 1 on this frame
    pub fn word_lifetime(&self) -> usize {
        (libm::floorf(1.0 / self.word_age_step) as usize).saturating_add(1)
    }

    /// Most words alive at once when every bubble pops as soon as it can.
    ///
    /// Words alive now were popped within the last lifetime. Those pops come
    /// from bubbles alive at the start of that window (at most the bubble
    /// pool) plus the ones spawned during it.
    pub fn max_live_words(&self, bubble_pool: usize) -> usize {
        let interval = self.spawn_interval.max(1) as usize;
        bubble_pool
            .saturating_add(self.word_lifetime().div_ceil(interval))
            .saturating_add(1)
    }

    /// Checks ranges and steps against the compile-time pool sizes.
    pub fn validate(&self, pool: usize, word_pool: usize) -> Result<(), SettingsError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(SettingsError::Viewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        let ranges = [
            ("bubble_size", self.bubble_min_size, self.bubble_max_size),
            ("rise_speed", self.rise_speed_min, self.rise_speed_max),
            ("wobble_speed", self.wobble_speed_min, self.wobble_speed_max),
            ("alpha", self.alpha_min, self.alpha_max),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(SettingsError::InvertedRange { name, min, max });
            }
        }

        // Rise speed must stay positive or floating bubbles stop climbing
        let steps = [
            ("rise_speed_min", self.rise_speed_min),
            ("pop_step", self.pop_step),
            ("word_age_step", self.word_age_step),
            ("word_scale_step", self.word_scale_step),
        ];
        for (name, value) in steps {
            if !(value > 0.0) {
                return Err(SettingsError::NonPositiveStep { name, value });
            }
        }

        if self.spawn_interval == 0 {
            return Err(SettingsError::ZeroSpawnInterval);
        }
        if self.rng_seed == 0 {
            return Err(SettingsError::ZeroSeed);
        }
        if self.capacity > pool {
            return Err(SettingsError::CapacityTooLarge {
                requested: self.capacity,
                pool,
            });
        }

        let needed = self.max_live_words(pool);
        if needed > word_pool {
            return Err(SettingsError::WordPoolTooSmall {
                needed,
                pool: word_pool,
            });
        }
        Ok(())
    }
}
