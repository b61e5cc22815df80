use std::str::FromStr;

use crate::game::constants::{bird, driver, round, spawn, timing};
use crate::game::state::{Canvas, KindTable};

/// Spawn throttling and new-bird parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    /// Chance per frame that a spawn is attempted
    pub probability: f32,
    /// Global population cap
    pub max_total: usize,
    /// Per-axis speed range for new birds, `[speed_min, speed_max)`
    pub speed_min: f32,
    pub speed_max: f32,
    /// Glyph diameter before the kind's size factor
    pub base_size: f32,
    /// Per-kind score, size and cap
    pub kinds: KindTable,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            probability: spawn::PROBABILITY,
            max_total: spawn::MAX_TOTAL_BIRDS,
            speed_min: bird::SPEED_MIN,
            speed_max: bird::SPEED_MAX,
            base_size: bird::BASE_SIZE,
            kinds: KindTable::default(),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Canvas used by the headless driver
    pub canvas: Canvas,
    pub spawn: SpawnConfig,
    /// Birds at least this old are removed on the round clock
    pub max_age_ms: u64,
    pub round_seconds: u32,
    pub clear_score: i32,
    pub frame_interval_ms: u64,
    pub second_interval_ms: u64,
    /// Fixed RNG seed for reproducible runs
    pub rng_seed: Option<u64>,
    /// Chance per frame that the autoplayer taps
    pub autoplay_tap_chance: f32,
    pub tap_queue_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(driver::CANVAS_WIDTH, driver::CANVAS_HEIGHT),
            spawn: SpawnConfig::default(),
            max_age_ms: bird::MAX_AGE_MS,
            round_seconds: round::DURATION_SECS,
            clear_score: round::CLEAR_SCORE,
            frame_interval_ms: timing::FRAME_INTERVAL_MS,
            second_interval_ms: timing::SECOND_INTERVAL_MS,
            rng_seed: None,
            autoplay_tap_chance: driver::AUTOPLAY_TAP_CHANCE,
            tap_queue_capacity: driver::TAP_QUEUE_CAPACITY,
        }
    }
}

/// Configuration rejected by [`GameConfig::validate`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    InvalidProbability { name: &'static str, value: f32 },
    #[error("max_total must be at least 1")]
    ZeroMaxTotal,
    #[error("speed range {min}..{max} is empty or non-positive")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("base_size must be positive, got {0}")]
    InvalidBaseSize(f32),
    #[error("round_seconds must be at least 1")]
    ZeroRoundDuration,
    #[error("max_age_ms must be at least 1")]
    ZeroMaxAge,
    #[error("tick intervals must be at least 1 ms")]
    ZeroInterval,
    #[error("tap_queue_capacity must be at least 1")]
    ZeroTapQueue,
}

/// Parse an environment variable, warning and returning `None` on garbage
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Invalid {} '{}', using default", key, raw);
            None
        }
    }
}

impl GameConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Some(width) = env_parse::<f32>("CANVAS_WIDTH") {
            if width > 0.0 && width.is_finite() {
                config.canvas.width = width;
            } else {
                tracing::warn!("CANVAS_WIDTH must be > 0, using default");
            }
        }

        if let Some(height) = env_parse::<f32>("CANVAS_HEIGHT") {
            if height > 0.0 && height.is_finite() {
                config.canvas.height = height;
            } else {
                tracing::warn!("CANVAS_HEIGHT must be > 0, using default");
            }
        }

        if let Some(p) = env_parse::<f32>("SPAWN_PROBABILITY") {
            if (0.0..=1.0).contains(&p) {
                config.spawn.probability = p;
            } else {
                tracing::warn!("SPAWN_PROBABILITY must be 0.0-1.0, using default");
            }
        }

        if let Some(max_total) = env_parse::<usize>("MAX_TOTAL_BIRDS") {
            if max_total > 0 {
                config.spawn.max_total = max_total;
            } else {
                tracing::warn!("MAX_TOTAL_BIRDS must be > 0, using default");
            }
        }

        if let Some(max_age) = env_parse::<u64>("BIRD_MAX_AGE_MS") {
            if max_age > 0 {
                config.max_age_ms = max_age;
            } else {
                tracing::warn!("BIRD_MAX_AGE_MS must be > 0, using default");
            }
        }

        if let Some(secs) = env_parse::<u32>("ROUND_SECONDS") {
            if secs > 0 && secs <= 3600 {
                config.round_seconds = secs;
            } else {
                tracing::warn!("ROUND_SECONDS must be 1-3600, using default");
            }
        }

        if let Some(score) = env_parse::<i32>("CLEAR_SCORE") {
            config.clear_score = score;
        }

        if let Some(seed) = env_parse::<u64>("RNG_SEED") {
            config.rng_seed = Some(seed);
        }

        if let Some(chance) = env_parse::<f32>("AUTOPLAY_TAP_CHANCE") {
            if (0.0..=1.0).contains(&chance) {
                config.autoplay_tap_chance = chance;
            } else {
                tracing::warn!("AUTOPLAY_TAP_CHANCE must be 0.0-1.0, using default");
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spawn = &self.spawn;
        if !(0.0..=1.0).contains(&spawn.probability) {
            return Err(ConfigError::InvalidProbability {
                name: "spawn.probability",
                value: spawn.probability,
            });
        }
        if !(0.0..=1.0).contains(&self.autoplay_tap_chance) {
            return Err(ConfigError::InvalidProbability {
                name: "autoplay_tap_chance",
                value: self.autoplay_tap_chance,
            });
        }
        if spawn.max_total == 0 {
            return Err(ConfigError::ZeroMaxTotal);
        }
        if !(spawn.speed_min > 0.0 && spawn.speed_max > spawn.speed_min) {
            return Err(ConfigError::InvalidSpeedRange {
                min: spawn.speed_min,
                max: spawn.speed_max,
            });
        }
        if !(spawn.base_size > 0.0 && spawn.base_size.is_finite()) {
            return Err(ConfigError::InvalidBaseSize(spawn.base_size));
        }
        if self.round_seconds == 0 {
            return Err(ConfigError::ZeroRoundDuration);
        }
        if self.max_age_ms == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        if self.frame_interval_ms == 0 || self.second_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.tap_queue_capacity == 0 {
            return Err(ConfigError::ZeroTapQueue);
        }
        Ok(())
    }
}
