//! Maze geometry: axis-aligned rectangular walls
//!
//! A maze is built once and then shared read-only between the collision
//! resolver and the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An axis-aligned rectangular wall (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Wall {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Inclusive test on the horizontal span
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }

    /// Inclusive test on the vertical span
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }

    /// Check that the wall is finite with positive area
    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let finite = [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite());

        if !finite || self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(ConfigError::InvalidWall {
                index,
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
            });
        }
        Ok(())
    }
}

/// Ordered, immutable wall list
///
/// Order sets the draw order and the order in which wall corrections are
/// applied within a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Wall>", into = "Vec<Wall>")]
pub struct Maze {
    walls: Vec<Wall>,
}

impl Maze {
    /// Build a maze, rejecting degenerate walls
    pub fn new(walls: Vec<Wall>) -> Result<Self, ConfigError> {
        for (index, wall) in walls.iter().enumerate() {
            wall.validate(index)?;
        }
        Ok(Self { walls })
    }

    /// A maze with no walls (open field)
    pub fn empty() -> Self {
        Self { walls: Vec::new() }
    }

    /// The standard layout: four perimeter walls and one interior obstacle
    pub fn classic() -> Self {
        Self {
            walls: vec![
                Wall::new(0.0, 0.0, 1000.0, 40.0),       // top
                Wall::new(0.0, 1900.0, 1100.0, 2000.0),  // bottom
                Wall::new(0.0, 0.0, 40.0, 2000.0),       // left
                Wall::new(1000.0, 0.0, 1100.0, 2000.0),  // right
                Wall::new(200.0, 900.0, 900.0, 1000.0),  // middle obstacle
            ],
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wall> {
        self.walls.iter()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

impl TryFrom<Vec<Wall>> for Maze {
    type Error = ConfigError;

    fn try_from(walls: Vec<Wall>) -> Result<Self, Self::Error> {
        Self::new(walls)
    }
}

impl From<Maze> for Vec<Wall> {
    fn from(maze: Maze) -> Self {
        maze.walls
    }
}

impl<'a> IntoIterator for &'a Maze {
    type Item = &'a Wall;
    type IntoIter = std::slice::Iter<'a, Wall>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls.iter()
    }
}
