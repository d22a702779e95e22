//! Simulation settings
//!
//! Loaded from JSON; every field has a default matching the standard game,
//! so a settings file only needs the values it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::input::InputMode;
use crate::sim::{BallState, CollisionPolicy, Maze, PhysicsParams, Wall};

/// Tilt response and friction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Velocity added per unit of tilt, per tick
    pub sensitivity: f32,
    /// Fraction of velocity retained per tick (0 - 1)
    pub damping: f32,
    /// Fraction of velocity kept after a wall bounce (0 - 1)
    pub restitution: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sensitivity: SENSITIVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    pub start_x: f32,
    pub start_y: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            start_x: BALL_START_X,
            start_y: BALL_START_Y,
        }
    }
}

/// Visible play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub ball: BallSettings,
    pub play_area: PlayArea,
    pub collision: CollisionPolicy,
    /// Initial tilt source (debug sliders by default)
    pub input: InputMode,
    /// Custom wall layout; the classic maze when absent
    pub walls: Option<Vec<Wall>>,
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Tuning {
            sensitivity,
            damping,
            restitution,
        } = self.tuning;
        check_range("sensitivity", sensitivity, 0.0, f32::MAX)?;
        check_range("damping", damping, 0.0, 1.0)?;
        check_range("restitution", restitution, 0.0, 1.0)?;

        let radius = self.ball.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }

        let PlayArea { width, height } = self.play_area;
        if !width.is_finite() || !height.is_finite() || width < 2.0 * radius || height < 2.0 * radius {
            return Err(ConfigError::InvalidPlayArea {
                width,
                height,
                radius,
            });
        }

        let (x, y) = (self.ball.start_x, self.ball.start_y);
        let inside = x >= radius && x <= width - radius && y >= radius && y <= height - radius;
        if !inside {
            return Err(ConfigError::StartOutOfBounds { x, y });
        }

        if let Some(walls) = &self.walls {
            Maze::new(walls.clone())?;
        }
        Ok(())
    }

    /// The configured maze (classic layout unless walls were given)
    pub fn build_maze(&self) -> Result<Maze, ConfigError> {
        match &self.walls {
            Some(walls) => Maze::new(walls.clone()),
            None => Ok(Maze::classic()),
        }
    }

    /// The ball at its start position, at rest
    pub fn start_ball(&self) -> Result<BallState, ConfigError> {
        BallState::new(
            Vec2::new(self.ball.start_x, self.ball.start_y),
            self.ball.radius,
        )
    }

    /// Per-tick parameters
    pub fn physics(&self) -> PhysicsParams {
        PhysicsParams {
            sensitivity: self.tuning.sensitivity,
            damping: self.tuning.damping,
            restitution: self.tuning.restitution,
            width: self.play_area.width,
            height: self.play_area.height,
            collision: self.collision,
        }
    }
}

/// Check that `value` is finite and within `[min, max]`
fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            min,
            max,
        })
    }
}
