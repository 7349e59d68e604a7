//! Game state and race outcome types
//!
//! Everything the simulation mutates lives in `GameState`. It is built once at
//! race start and discarded when the race ends.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::countdown::Countdown;
use super::geometry::Bounds;
use super::obstacle::MovingObstacle;
use super::vessel::{Player, Vessel};
use crate::consts::NUM_OBSTACLES;

/// Current phase of the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Race in progress
    Running,
    /// Countdown expired (terminal)
    Finished,
}

/// How the race ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl Outcome {
    /// Banner line shown on the game over screen
    pub fn message(&self) -> String {
        match self {
            Outcome::Winner(player) => format!("{} wins!", player),
            Outcome::Tie => "It's a tie!".to_string(),
        }
    }
}

/// Final scores, reported once when the race ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Indexed by `Player::index`
    pub scores: [u32; 2],
    pub outcome: Outcome,
}

impl RaceResult {
    pub fn from_scores(scores: [u32; 2]) -> Self {
        let outcome = match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        Self { scores, outcome }
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }
}

/// Something that happened during a tick, for the host and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Vessel reached the top
    Scored { player: Player, score: u32 },
    /// Vessel hit an obstacle and was sent back to the floor
    Crashed { player: Player },
    /// Countdown expired
    Finished(RaceResult),
}

/// Complete race state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the obstacle field was generated from
    pub seed: u64,
    pub bounds: Bounds,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Indexed by `Player::index`
    pub vessels: [Vessel; 2],
    pub obstacles: Vec<MovingObstacle>,
    pub countdown: Countdown,
    /// Set once on entering `Finished`
    pub result: Option<RaceResult>,
}

impl GameState {
    /// Create a race on the default 800x600 field
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, Bounds::default(), NUM_OBSTACLES)
    }

    /// Create a race with explicit bounds and obstacle count
    pub fn with_field(seed: u64, bounds: Bounds, obstacle_count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = (0..obstacle_count)
            .map(|_| MovingObstacle::spawn(bounds, &mut rng))
            .collect();

        Self {
            seed,
            bounds,
            phase: GamePhase::Running,
            time_ticks: 0,
            vessels: Player::ALL.map(|player| Vessel::spawn(player, bounds)),
            obstacles,
            countdown: Countdown::new(bounds),
            result: None,
        }
    }

    pub fn vessel(&self, player: Player) -> &Vessel {
        &self.vessels[player.index()]
    }

    pub fn vessel_mut(&mut self, player: Player) -> &mut Vessel {
        &mut self.vessels[player.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.vessels[0].score, self.vessels[1].score]
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }
}
