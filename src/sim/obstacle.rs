//! Drifting obstacles
//!
//! Obstacles start off-screen on either side and drift across the playfield.
//! When one reaches the far edge it is recycled to the edge it came from, so
//! the field never thins out.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Bounds;
use crate::consts::{OBSTACLE_SIZE, OBSTACLE_SPAWN_MARGIN};

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed x delta for one unit of travel
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Playfield edge an obstacle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Obstacles always travel away from the side they spawned on
    pub fn heading(self) -> Direction {
        match self {
            Side::Left => Direction::Right,
            Side::Right => Direction::Left,
        }
    }
}

/// An obstacle entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingObstacle {
    pub pos: IVec2,
    pub direction: Direction,
}

impl MovingObstacle {
    pub fn new(pos: IVec2, direction: Direction) -> Self {
        Self { pos, direction }
    }

    /// Spawn on a random side at a random height in the upper playfield
    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let side = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        Self::spawn_on(side, bounds, rng)
    }

    /// Spawn off-screen beyond the given edge, up to one playfield width out
    pub fn spawn_on<R: Rng + ?Sized>(side: Side, bounds: Bounds, rng: &mut R) -> Self {
        let y_span = (bounds.height - OBSTACLE_SPAWN_MARGIN).max(1);
        let y = rng.random_range(0..y_span);

        let offset = rng.random_range(0..bounds.width.max(1));
        let x = match side {
            Side::Left => offset - bounds.width,
            Side::Right => bounds.width + offset,
        };

        Self::new(IVec2::new(x, y), side.heading())
    }

    /// Side this obstacle is recycled to
    pub fn home_side(&self) -> Side {
        match self.direction {
            Direction::Right => Side::Left,
            Direction::Left => Side::Right,
        }
    }

    /// Drift by `step` and wrap back to the home edge on reaching the far edge
    pub fn advance(&mut self, step: i32, bounds: Bounds) {
        let x = self.pos.x + self.direction.sign() * step;
        self.pos.x = match self.direction {
            Direction::Right if x >= bounds.width => 0,
            Direction::Left if x <= 0 => bounds.width,
            _ => x,
        };
    }

    /// Whether the obstacle is inside the visible playfield horizontally
    pub fn is_on_screen(&self, bounds: Bounds) -> bool {
        (0..=bounds.width).contains(&self.pos.x)
    }

    /// Drawn footprint as (x, y, w, h)
    pub fn rect(&self) -> (i32, i32, i32, i32) {
        (self.pos.x, self.pos.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }
}
