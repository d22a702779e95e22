//! Instance types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::{BallState, Wall};

/// Axis-aligned filled rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub min: [f32; 2],
    pub max: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub const fn new(wall: &Wall, color: [f32; 4]) -> Self {
        Self {
            min: [wall.left, wall.top],
            max: [wall.right, wall.bottom],
            color,
        }
    }
}

/// Filled circle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn new(ball: &BallState, color: [f32; 4]) -> Self {
        Self {
            center: ball.position.to_array(),
            radius: ball.radius,
            _pad: 0.0,
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const WALL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}
