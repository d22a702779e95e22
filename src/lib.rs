//! Tilt Maze - a ball rolling through a maze of walls, driven by device tilt
//!
//! Core modules:
//! - `sim`: Per-tick physics (velocity, position, bounds, wall collisions)
//! - `input`: Tilt sources (live sensor, manual override, seeded wander)
//! - `renderer`: Read-only snapshots handed to the host renderer
//! - `settings`: Data-driven tuning and maze configuration
//! - `error`: Construction-time configuration errors

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use input::{
    InputMode, LiveSensor, ManualOverride, SensorFeed, TiltInput, TiltSource, WanderTilt,
};
pub use renderer::RenderSnapshot;
pub use settings::Settings;
pub use sim::{BallState, GameState, Maze, Simulation, TiltSample, Wall};

/// Game configuration defaults
pub mod consts {
    /// Velocity added per unit of tilt, per tick
    pub const SENSITIVITY: f32 = 22.0;
    /// Fraction of velocity retained each tick (friction)
    pub const DAMPING: f32 = 0.90;
    /// Fraction of velocity kept (sign-reversed) after hitting a wall
    pub const RESTITUTION: f32 = 0.6;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 300.0;

    /// Play area dimensions (matches the outer edge of the default maze)
    pub const PLAY_AREA_WIDTH: f32 = 1100.0;
    pub const PLAY_AREA_HEIGHT: f32 = 2000.0;

    /// Manual override slider range (debug mode)
    pub const MANUAL_TILT_MIN: f32 = -3.0;
    pub const MANUAL_TILT_MAX: f32 = 3.0;
}
