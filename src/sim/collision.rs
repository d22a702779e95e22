//! Collision detection and response for axis-aligned walls
//!
//! Each wall is checked independently with two interval tests. A hit on an
//! axis reverses that velocity component and scales it by the restitution.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::maze::{Maze, Wall};
use super::state::BallState;

/// What happens to a ball that is already inside a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenetrationPolicy {
    /// Only velocity is reversed; the ball may overlap a wall for a frame
    #[default]
    VelocityOnly,
    /// Also move the ball to the wall boundary along the penetration axis
    PushOut,
}

/// How corrections from several walls in one tick combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiHitPolicy {
    /// Every hit wall reflects the velocity as left by the walls before it
    #[default]
    Sequential,
    /// Each axis is reflected at most once per tick
    ReflectOnce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionPolicy {
    pub penetration: PenetrationPolicy,
    pub multi_hit: MultiHitPolicy,
}

/// Which overlap tests fired for a single wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallContact {
    /// Ball overlaps the wall from the side (reverses x velocity)
    pub horizontal: bool,
    /// Ball overlaps the wall from above or below (reverses y velocity)
    pub vertical: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }

    /// Both axes at once (corner, diagonal bounce)
    pub fn is_corner(&self) -> bool {
        self.horizontal && self.vertical
    }
}

/// A wall hit recorded during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallHit {
    /// Index of the wall in maze order
    pub wall_index: usize,
    pub contact: WallContact,
}

/// Ball center within the wall's vertical span and horizontal extents intersecting
#[inline]
pub fn horizontal_overlap(position: Vec2, radius: f32, wall: &Wall) -> bool {
    wall.spans_y(position.y) && position.x + radius > wall.left && position.x - radius < wall.right
}

/// Ball center within the wall's horizontal span and vertical extents intersecting
#[inline]
pub fn vertical_overlap(position: Vec2, radius: f32, wall: &Wall) -> bool {
    wall.spans_x(position.x) && position.y + radius > wall.top && position.y - radius < wall.bottom
}

pub fn wall_contact(position: Vec2, radius: f32, wall: &Wall) -> WallContact {
    WallContact {
        horizontal: horizontal_overlap(position, radius, wall),
        vertical: vertical_overlap(position, radius, wall),
    }
}

/// Reverse a velocity component and scale it by restitution
#[inline]
pub fn bounce(component: f32, restitution: f32) -> f32 {
    -component * restitution
}

/// Minimum translation that moves the ball clear of `wall` along a hit axis
///
/// The ball leaves through the side nearest its center. When both axes are
/// hit only the shorter of the two moves is applied.
pub fn push_out(position: Vec2, radius: f32, wall: &Wall, contact: WallContact) -> Vec2 {
    let center = wall.center();

    let dx = contact.horizontal.then(|| {
        if position.x < center.x {
            wall.left - radius - position.x
        } else {
            wall.right + radius - position.x
        }
    });
    let dy = contact.vertical.then(|| {
        if position.y < center.y {
            wall.top - radius - position.y
        } else {
            wall.bottom + radius - position.y
        }
    });

    match (dx, dy) {
        (Some(dx), Some(dy)) if dx.abs() <= dy.abs() => position + Vec2::new(dx, 0.0),
        (Some(_), Some(dy)) => position + Vec2::new(0.0, dy),
        (Some(dx), None) => position + Vec2::new(dx, 0.0),
        (None, Some(dy)) => position + Vec2::new(0.0, dy),
        (None, None) => position,
    }
}

/// Check the ball against every wall in maze order and apply bounces
///
/// Brute-force scan with no early exit. Returns the walls that were hit.
pub fn resolve_wall_collisions(
    ball: &mut BallState,
    maze: &Maze,
    restitution: f32,
    policy: CollisionPolicy,
) -> Vec<WallHit> {
    let reflect_once = policy.multi_hit == MultiHitPolicy::ReflectOnce;
    let mut reflected_x = false;
    let mut reflected_y = false;
    let mut hits = Vec::new();

    for (wall_index, wall) in maze.iter().enumerate() {
        let contact = wall_contact(ball.position, ball.radius, wall);
        if !contact.any() {
            continue;
        }

        if contact.horizontal && !(reflect_once && reflected_x) {
            ball.velocity.x = bounce(ball.velocity.x, restitution);
            reflected_x = true;
        }
        if contact.vertical && !(reflect_once && reflected_y) {
            ball.velocity.y = bounce(ball.velocity.y, restitution);
            reflected_y = true;
        }

        if policy.penetration == PenetrationPolicy::PushOut {
            ball.position = push_out(ball.position, ball.radius, wall, contact);
        }

        log::debug!(
            "wall {} hit (h={}, v={}) -> vel=({:.2}, {:.2})",
            wall_index,
            contact.horizontal,
            contact.vertical,
            ball.velocity.x,
            ball.velocity.y
        );
        hits.push(WallHit {
            wall_index,
            contact,
        });
    }

    hits
}
