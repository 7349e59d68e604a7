//! Player vessels
//!
//! A vessel only moves vertically. Reaching the top scores a point and sends
//! it back to its floor; touching an obstacle sends it back without scoring.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Triangle};
use crate::consts::*;

/// Which way the player is currently steering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    #[default]
    Idle,
    Up,
    Down,
}

impl Intent {
    /// Resolve held keys into a single intent (up wins when both are held)
    pub fn from_keys(up: bool, down: bool) -> Self {
        if up {
            Intent::Up
        } else if down {
            Intent::Down
        } else {
            Intent::Idle
        }
    }
}

/// Player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Spawn column: player one on the left quarter, player two on the right
    pub fn spawn_x(self, bounds: Bounds) -> i32 {
        match self {
            Player::One => bounds.width / 4,
            Player::Two => bounds.width * 3 / 4,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A ship entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    pub pos: IVec2,
    pub intent: Intent,
    pub score: u32,
    /// Spawn height; y never exceeds this
    pub floor_y: i32,
}

impl Vessel {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            intent: Intent::Idle,
            score: 0,
            floor_y: pos.y,
        }
    }

    /// Spawn a player's vessel on the floor of the playfield
    pub fn spawn(player: Player, bounds: Bounds) -> Self {
        Self::new(IVec2::new(
            player.spawn_x(bounds),
            bounds.height - VESSEL_FLOOR_OFFSET,
        ))
    }

    pub fn set_intent(&mut self, up: bool, down: bool) {
        self.intent = Intent::from_keys(up, down);
    }

    /// Move one step along the current intent, then score if at the top
    ///
    /// Returns true if the vessel scored this tick.
    pub fn advance(&mut self) -> bool {
        match self.intent {
            Intent::Up if self.pos.y > 0 => {
                self.pos.y = (self.pos.y - VESSEL_STEP).max(0);
            }
            Intent::Down if self.pos.y < self.floor_y => {
                self.pos.y = (self.pos.y + VESSEL_STEP).min(self.floor_y);
            }
            _ => {}
        }

        // Level check; respawn below keeps this to one point per arrival
        if self.pos.y <= 0 {
            self.score += 1;
            self.respawn();
            return true;
        }
        false
    }

    /// Return to the floor and drop any held intent
    pub fn respawn(&mut self) {
        self.pos.y = self.floor_y;
        self.intent = Intent::Idle;
    }

    /// Collision hull: apex above center, base corners below
    pub fn hull(&self) -> Triangle {
        let center = self.pos.as_vec2();
        Triangle::new(
            center + Vec2::new(-HULL_HALF_WIDTH as f32, HULL_BASE as f32),
            center + Vec2::new(HULL_HALF_WIDTH as f32, HULL_BASE as f32),
            center + Vec2::new(0.0, -HULL_APEX as f32),
        )
    }

    /// Check if an obstacle point lies inside the hull
    pub fn collides_with(&self, point: IVec2) -> bool {
        self.hull().contains(point.as_vec2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn floor_vessel() -> Vessel {
        Vessel::spawn(Player::One, Bounds::default())
    }

    #[test]
    fn test_spawn_positions() {
        let bounds = Bounds::default();
        assert_eq!(Vessel::spawn(Player::One, bounds).pos, IVec2::new(200, 555));
        assert_eq!(Vessel::spawn(Player::Two, bounds).pos, IVec2::new(600, 555));
    }

    #[test]
    fn test_intent_up_wins() {
        assert_eq!(Intent::from_keys(true, true), Intent::Up);
        assert_eq!(Intent::from_keys(true, false), Intent::Up);
        assert_eq!(Intent::from_keys(false, true), Intent::Down);
        assert_eq!(Intent::from_keys(false, false), Intent::Idle);
    }

    #[test]
    fn test_move_up_and_down() {
        let mut vessel = floor_vessel();
        vessel.set_intent(true, false);
        vessel.advance();
        assert_eq!(vessel.pos.y, 553);

        vessel.set_intent(false, true);
        vessel.advance();
        assert_eq!(vessel.pos.y, 555);

        // Already on the floor: down does nothing
        vessel.advance();
        assert_eq!(vessel.pos.y, 555);
    }

    #[test]
    fn test_scores_at_top() {
        let mut vessel = floor_vessel();
        vessel.pos.y = 0;

        assert!(vessel.advance());
        assert_eq!(vessel.score, 1);
        assert_eq!(vessel.pos, IVec2::new(200, 555));
        assert_eq!(vessel.intent, Intent::Idle);

        // Back on the floor, no further points
        assert!(!vessel.advance());
        assert_eq!(vessel.score, 1);
    }

    #[test]
    fn test_full_climb_scores_once() {
        let mut vessel = floor_vessel();
        let mut points = 0;
        for _ in 0..400 {
            vessel.set_intent(true, false);
            if vessel.advance() {
                points += 1;
                break;
            }
        }
        // 555 px at 2 px per tick, the last step clamped
        assert_eq!(points, 1);
        assert_eq!(vessel.score, 1);
        assert_eq!(vessel.pos.y, vessel.floor_y);
    }

    #[test]
    fn test_respawn_clears_intent() {
        let mut vessel = floor_vessel();
        vessel.set_intent(true, false);
        vessel.advance();
        vessel.respawn();
        assert_eq!(vessel.pos.y, vessel.floor_y);
        assert_eq!(vessel.intent, Intent::Idle);
        assert_eq!(vessel.score, 0);
    }

    #[test]
    fn test_collision_hull() {
        let vessel = Vessel::new(IVec2::new(400, 555));
        assert!(vessel.collides_with(IVec2::new(400, 545)));
        assert!(!vessel.collides_with(IVec2::new(400, 400)));

        // Apex and base corners are on the hull
        assert!(vessel.collides_with(IVec2::new(400, 520)));
        assert!(vessel.collides_with(IVec2::new(370, 577)));
        assert!(vessel.collides_with(IVec2::new(430, 577)));

        // Just past the base or the apex
        assert!(!vessel.collides_with(IVec2::new(400, 578)));
        assert!(!vessel.collides_with(IVec2::new(400, 519)));
        // Beside the apex
        assert!(!vessel.collides_with(IVec2::new(420, 525)));
    }

    fn intent() -> impl Strategy<Value = (bool, bool)> {
        (any::<bool>(), any::<bool>())
    }

    proptest! {
        #[test]
        fn y_stays_in_bounds(keys in proptest::collection::vec(intent(), 0..1000)) {
            let mut vessel = floor_vessel();
            let mut last_score = 0;
            for (up, down) in keys {
                vessel.set_intent(up, down);
                vessel.advance();
                prop_assert!(vessel.pos.y >= 0 && vessel.pos.y <= vessel.floor_y);
                prop_assert!(vessel.score >= last_score);
                last_score = vessel.score;
            }
        }
    }
}
