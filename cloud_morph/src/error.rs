//! Error types for engine construction.

use thiserror::Error;

/// Configuration the engine refuses to run with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    ParticleCount,

    #[error("particle size must be a positive number, got {0}")]
    ParticleSize(f32),

    #[error("photo count {photo_count} exceeds particle count {particle_count}")]
    PhotoCount { photo_count: usize, particle_count: usize },

    #[error("transition speed must lie in (0, 1), got {0}")]
    TransitionSpeed(f32),

    #[error("hand sensitivity must lie in (0, 1), got {0}")]
    HandSensitivity(f32),

    #[error("invalid theme colour \"{0}\" (expected #rrggbb)")]
    ThemeColor(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
