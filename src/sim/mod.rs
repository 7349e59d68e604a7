//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, clock reading passed in
//! - Seeded RNG only
//! - Stable iteration order (player one before player two)
//! - No rendering or platform dependencies

pub mod countdown;
pub mod geometry;
pub mod obstacle;
pub mod state;
pub mod tick;
pub mod vessel;

pub use countdown::Countdown;
pub use geometry::{Bounds, Triangle, point_in_triangle, triangle_area};
pub use obstacle::{Direction, MovingObstacle, Side};
pub use state::{GameEvent, GamePhase, GameState, Outcome, RaceResult};
pub use tick::{TickInput, tick};
pub use vessel::{Intent, Player, Vessel};
