//! Simulation module
//!
//! All ball physics lives here. This module must stay free of rendering and
//! platform code:
//! - One tick per tilt sample, no delta-time scaling
//! - Walls checked in maze order
//! - Bounds clamping is part of the tick, not of drawing

pub mod collision;
pub mod maze;
pub mod simulation;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionPolicy, MultiHitPolicy, PenetrationPolicy, WallContact, WallHit, resolve_wall_collisions,
};
pub use maze::{Maze, Wall};
pub use simulation::Simulation;
pub use state::{BallState, GameState, TiltSample};
pub use tick::{PhysicsParams, TickReport, clamp_to_bounds, integrate_position, integrate_velocity, tick};
