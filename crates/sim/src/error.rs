//! Simulation error types.

use thiserror::Error;

/// Errors raised while loading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} range is empty: min {min} >= max {max}")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a probability in [0, 1] (got {value})")]
    NotAProbability { field: &'static str, value: f64 },

    #[error("world size {size} cannot hold an entity of radius {radius}")]
    WorldTooSmall { size: f64, radius: f64 },

    #[error("session.tick_interval_ms must be at least 1")]
    ZeroTickInterval,

    #[error("session.score_interval_ticks must be at least 1")]
    ZeroScoreInterval,

    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("color palette is empty")]
    EmptyPalette,
}

/// Rejected game phase transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} while in {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: crate::session::GamePhase,
    },
}
