//! Game state and core simulation types
//!
//! All mutable simulation state lives in `GameState`; it is owned by the
//! `Simulation` and handed explicitly to each step function.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// One tilt reading, consumed by exactly one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSample {
    /// Forward/back tilt, drives vertical (y) velocity
    pub forward_back: f32,
    /// Left/right tilt, drives horizontal (x) velocity
    pub left_right: f32,
}

impl TiltSample {
    pub const ZERO: Self = Self {
        forward_back: 0.0,
        left_right: 0.0,
    };

    pub const fn new(forward_back: f32, left_right: f32) -> Self {
        Self {
            forward_back,
            left_right,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.forward_back.is_finite() && self.left_right.is_finite()
    }

    /// Replace non-finite components with zero
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            forward_back: clean(self.forward_back),
            left_right: clean(self.left_right),
        }
    }
}

/// The ball: position and velocity in pixels (velocity per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Default for BallState {
    fn default() -> Self {
        Self {
            position: Vec2::new(BALL_START_X, BALL_START_Y),
            velocity: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl BallState {
    /// Ball at the given position with zero velocity
    ///
    /// The radius must be finite and positive.
    pub fn new(position: Vec2, radius: f32) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            radius,
        })
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Complete mutable simulation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: BallState,
    /// Ticks applied since the session started
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(ball: BallState) -> Self {
        Self {
            ball,
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_non_finite() {
        let sample = TiltSample::new(f32::NAN, f32::INFINITY).sanitized();
        assert_eq!(sample, TiltSample::ZERO);

        let sample = TiltSample::new(1.5, f32::NEG_INFINITY).sanitized();
        assert_eq!(sample, TiltSample::new(1.5, 0.0));

        let sample = TiltSample::new(-2.0, 0.25);
        assert!(sample.is_finite());
        assert_eq!(sample.sanitized(), sample);
    }

    #[test]
    fn test_default_ball() {
        let ball = BallState::default();
        assert_eq!(ball.position, Vec2::new(300.0, 300.0));
        assert_eq!(ball.velocity, Vec2::ZERO);
        assert_eq!(ball.radius, 30.0);
        assert_eq!(BallState::new(ball.position, 30.0).unwrap(), ball);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let at = Vec2::new(300.0, 300.0);
        for radius in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                BallState::new(at, radius),
                Err(ConfigError::InvalidRadius(_))
            ));
        }
        assert!(BallState::new(at, 0.5).is_ok());
    }
}
