//! Fixed-rate simulation tick
//!
//! Core loop that advances the race by one frame.

use std::time::Duration;

use super::state::{GameEvent, GamePhase, GameState, RaceResult};
use super::vessel::Player;
use crate::consts::OBSTACLE_STEP;

/// Held keys for a single tick, sampled by the host at tick start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub player1_up: bool,
    pub player1_down: bool,
    pub player2_up: bool,
    pub player2_down: bool,
}

impl TickInput {
    /// (up, down) held by a player
    pub fn keys(&self, player: Player) -> (bool, bool) {
        match player {
            Player::One => (self.player1_up, self.player1_down),
            Player::Two => (self.player2_up, self.player2_down),
        }
    }

    pub fn set_keys(&mut self, player: Player, up: bool, down: bool) {
        match player {
            Player::One => {
                self.player1_up = up;
                self.player1_down = down;
            }
            Player::Two => {
                self.player2_up = up;
                self.player2_down = down;
            }
        }
    }
}

/// Advance the race by one tick
///
/// `now` is a monotonic clock reading, sampled once for this tick. Returns the
/// events produced; a finished race produces none.
pub fn tick(state: &mut GameState, input: &TickInput, now: Duration) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Finished {
        return events;
    }

    state.time_ticks += 1;

    // Steer and move vessels
    for player in Player::ALL {
        let (up, down) = input.keys(player);
        let vessel = state.vessel_mut(player);
        vessel.set_intent(up, down);
        if vessel.advance() {
            log::debug!("{} scored ({})", player, vessel.score);
            events.push(GameEvent::Scored {
                player,
                score: vessel.score,
            });
        }
    }

    for obstacle in &mut state.obstacles {
        obstacle.advance(OBSTACLE_STEP, state.bounds);
    }

    // All-pairs hull test; one hit is enough to send a vessel home
    for player in Player::ALL {
        let vessel = &state.vessels[player.index()];
        let hit = state
            .obstacles
            .iter()
            .any(|obstacle| vessel.collides_with(obstacle.pos));
        if hit {
            state.vessel_mut(player).respawn();
            log::debug!("{} crashed", player);
            events.push(GameEvent::Crashed { player });
        }
    }

    state.countdown.advance(now);

    if state.countdown.is_expired() {
        let result = RaceResult::from_scores(state.scores());
        state.phase = GamePhase::Finished;
        state.result = Some(result);
        log::info!(
            "Race over after {} ticks: {} - {} ({})",
            state.time_ticks,
            result.scores[0],
            result.scores[1],
            result.outcome.message()
        );
        events.push(GameEvent::Finished(result));
    }

    events
}
