//! One simulation tick
//!
//! Order per tick: tilt -> velocity -> position -> bounds clamp -> walls.
//! One tick is one unit of time; there is no delta-time scaling, the tick
//! rate is set by how often tilt samples arrive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionPolicy, PenetrationPolicy, WallHit, resolve_wall_collisions};
use super::maze::Maze;
use super::state::{GameState, TiltSample};
use crate::consts::*;

/// Tuning and play-area parameters used by every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    pub sensitivity: f32,
    pub damping: f32,
    pub restitution: f32,
    /// Play area size; the ball is kept within `[radius, size - radius]`
    pub width: f32,
    pub height: f32,
    pub collision: CollisionPolicy,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            sensitivity: SENSITIVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
            collision: CollisionPolicy::default(),
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick number after this update (1 for the first tick)
    pub tick: u64,
    /// Walls hit, in maze order
    pub hits: Vec<WallHit>,
    /// The tilt sample had non-finite components that were zeroed
    pub sanitized_input: bool,
}

/// Add the tilt-driven delta, then damp the sum
///
/// Left/right tilt drives x, forward/back tilt drives y.
#[inline]
pub fn integrate_velocity(velocity: Vec2, tilt: TiltSample, sensitivity: f32, damping: f32) -> Vec2 {
    Vec2::new(
        (velocity.x + tilt.left_right * sensitivity) * damping,
        (velocity.y + tilt.forward_back * sensitivity) * damping,
    )
}

/// Explicit Euler step of one tick
#[inline]
pub fn integrate_position(position: Vec2, velocity: Vec2) -> Vec2 {
    position + velocity
}

/// Keep a ball of `radius` inside a `width` x `height` area
///
/// A ball wider than the area is pinned at `radius` on that axis. Never
/// panics: a NaN bound leaves the coordinate unchanged.
#[inline]
pub fn clamp_to_bounds(position: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        clamp_axis(position.x, radius, width),
        clamp_axis(position.y, radius, height),
    )
}

#[inline]
fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    // `f32::clamp` panics when min > max
    let hi = (extent - radius).max(radius);
    value.max(radius).min(hi)
}

/// Advance the game state by one tick using `sample`
pub fn tick(state: &mut GameState, maze: &Maze, params: &PhysicsParams, sample: TiltSample) -> TickReport {
    let sanitized_input = !sample.is_finite();
    if sanitized_input {
        log::warn!(
            "non-finite tilt sample ({}, {}) treated as zero",
            sample.forward_back,
            sample.left_right
        );
    }
    let sample = sample.sanitized();

    let ball = &mut state.ball;

    let mut velocity = integrate_velocity(ball.velocity, sample, params.sensitivity, params.damping);
    // Huge finite tilt can still overflow; never carry inf/NaN into the next tick
    if !velocity.is_finite() {
        log::warn!("velocity overflow ({}, {}), stopping ball", velocity.x, velocity.y);
        velocity = Vec2::new(
            if velocity.x.is_finite() { velocity.x } else { 0.0 },
            if velocity.y.is_finite() { velocity.y } else { 0.0 },
        );
    }
    ball.velocity = velocity;

    ball.position = integrate_position(ball.position, ball.velocity);
    ball.position = clamp_to_bounds(ball.position, ball.radius, params.width, params.height);

    let hits = resolve_wall_collisions(ball, maze, params.restitution, params.collision);

    // Containment always has the last word
    if params.collision.penetration == PenetrationPolicy::PushOut && !hits.is_empty() {
        ball.position = clamp_to_bounds(ball.position, ball.radius, params.width, params.height);
    }

    state.time_ticks += 1;

    TickReport {
        tick: state.time_ticks,
        hits,
        sanitized_input,
    }
}
