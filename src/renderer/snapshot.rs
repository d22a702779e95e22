//! Per-tick render snapshot

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::vertex::{CircleInstance, RectInstance, colors};
use crate::sim::{BallState, GameState, Maze};

/// Everything a renderer needs for one frame
///
/// The ball is copied, so the next tick cannot change a frame in flight.
/// Walls are shared with the simulation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub ball: BallState,
    pub walls: Arc<Maze>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, maze: &Arc<Maze>) -> Self {
        Self {
            tick: state.time_ticks,
            ball: state.ball,
            walls: Arc::clone(maze),
        }
    }

    /// Wall rectangles in draw order
    pub fn wall_instances(&self) -> Vec<RectInstance> {
        self.walls
            .iter()
            .map(|wall| RectInstance::new(wall, colors::WALL))
            .collect()
    }

    /// The ball, drawn after the walls
    pub fn ball_instance(&self) -> CircleInstance {
        CircleInstance::new(&self.ball, colors::BALL)
    }

    /// Raw bytes of the wall instance buffer, ready for upload
    pub fn wall_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.wall_instances()).to_vec()
    }
}
