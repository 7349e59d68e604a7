//! Input sources
//!
//! `KeyTracker` folds press/release events into the held-key snapshot the
//! simulation samples each tick. `Autopilot` produces the same snapshot from
//! the game state, for demo play and unattended runs.

use glam::IVec2;

use crate::consts::{OBSTACLE_STEP, VESSEL_STEP};
use crate::sim::{GameState, Player, TickInput, Vessel};

/// Game keys (W/S for player one, arrows for player two on a keyboard host)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
}

impl Key {
    fn player(self) -> Player {
        match self {
            Key::Player1Up | Key::Player1Down => Player::One,
            Key::Player2Up | Key::Player2Down => Player::Two,
        }
    }

    fn is_up(self) -> bool {
        matches!(self, Key::Player1Up | Key::Player2Up)
    }
}

/// Held-key state built from key events
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTracker {
    held: TickInput,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pressing a direction drops the opposite one for that player
    pub fn press(&mut self, key: Key) {
        let up = key.is_up();
        self.held.set_keys(key.player(), up, !up);
    }

    /// Releasing only clears the released key
    pub fn release(&mut self, key: Key) {
        let player = key.player();
        let (up, down) = self.held.keys(player);
        if key.is_up() {
            self.held.set_keys(player, false, down);
        } else {
            self.held.set_keys(player, up, false);
        }
    }

    /// Snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        self.held
    }
}

/// Default number of ticks the autopilot looks ahead
pub const AUTOPILOT_LOOKAHEAD: i32 = 12;

/// Simple collision-avoiding pilot
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub lookahead: i32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead: AUTOPILOT_LOOKAHEAD,
        }
    }
}

impl Autopilot {
    /// Climb when the way up is clear, hold when holding is safe, else back off
    pub fn steer(&self, state: &GameState, player: Player) -> (bool, bool) {
        let vessel = state.vessel(player);
        if self.path_clear(state, vessel, -VESSEL_STEP) {
            (true, false)
        } else if self.path_clear(state, vessel, 0) {
            (false, false)
        } else {
            (false, true)
        }
    }

    /// Fill in keys for every player in `players`
    pub fn apply(&self, state: &GameState, players: &[Player], input: &mut TickInput) {
        for &player in players {
            let (up, down) = self.steer(state, player);
            input.set_keys(player, up, down);
        }
    }

    /// Whether moving `dy` per tick avoids every obstacle for the lookahead window
    fn path_clear(&self, state: &GameState, vessel: &Vessel, dy: i32) -> bool {
        // Wrap is ignored; obstacles near the far edge only make this cautious
        (1..=self.lookahead).all(|k| {
            let mut probe = vessel.clone();
            probe.pos.y = (vessel.pos.y + dy * k).clamp(0, vessel.floor_y);
            state.obstacles.iter().all(|obstacle| {
                let x = obstacle.pos.x + obstacle.direction.sign() * OBSTACLE_STEP * k;
                !probe.collides_with(IVec2::new(x, obstacle.pos.y))
            })
        })
    }
}
