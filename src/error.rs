//! Configuration errors
//!
//! Everything that can be wrong with a maze or simulation setup is caught
//! when it is built. The tick path itself is total.

use thiserror::Error;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Wall has inverted, zero-area or non-finite extents
    #[error("wall {index} is degenerate: left={left} top={top} right={right} bottom={bottom}")]
    InvalidWall {
        index: usize,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },

    /// Ball radius must be finite and positive
    #[error("ball radius must be finite and > 0, got {0}")]
    InvalidRadius(f32),

    /// Play area must be finite and large enough to hold the ball
    #[error("play area {width}x{height} cannot hold a ball of radius {radius}")]
    InvalidPlayArea { width: f32, height: f32, radius: f32 },

    /// Tuning parameter outside its accepted range
    #[error("{name} must be within [{min}, {max}], got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Start position outside the clamped play area
    #[error("start position ({x}, {y}) is outside the play area")]
    StartOutOfBounds { x: f32, y: f32 },

    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
