//! Host settings
//!
//! Loaded from an optional JSON file. Physics constants are fixed in `consts`;
//! only the field, pacing and who is at the controls are configurable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Bounds, Player};

/// Largest accepted field width or height
pub const MAX_FIELD_EXTENT: i32 = 16384;
/// Longest accepted post-race grace period (seconds)
pub const MAX_GRACE_PERIOD_SECS: f32 = 3600.0;

/// Errors from reading or validating a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Obstacle field seed (None = derive from the clock)
    pub seed: Option<u64>,

    // === Field ===
    pub width: i32,
    pub height: i32,
    pub obstacle_count: usize,

    // === Pacing ===
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Seconds between race end and exit
    pub grace_period_secs: f32,
    /// Drive the countdown from the wall clock (false = simulated time, runs as fast as possible)
    pub realtime: bool,

    // === Controls ===
    /// Autopilot flies player one
    pub player1_autopilot: bool,
    /// Autopilot flies player two
    pub player2_autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            width: BOUNDS_WIDTH,
            height: BOUNDS_HEIGHT,
            obstacle_count: NUM_OBSTACLES,

            tick_rate: (1.0 / SIM_DT).round() as u32,
            grace_period_secs: GRACE_PERIOD_SECS,
            realtime: true,

            player1_autopilot: true,
            player2_autopilot: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width <= 0 || self.width > MAX_FIELD_EXTENT {
            return Err(SettingsError::Invalid(format!(
                "width must be in 1..={}, got {}",
                MAX_FIELD_EXTENT, self.width
            )));
        }
        if self.height <= VESSEL_FLOOR_OFFSET || self.height > MAX_FIELD_EXTENT {
            return Err(SettingsError::Invalid(format!(
                "height must be in {}..={}, got {}",
                VESSEL_FLOOR_OFFSET + 1,
                MAX_FIELD_EXTENT,
                self.height
            )));
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be positive".into()));
        }
        if !(0.0..=MAX_GRACE_PERIOD_SECS).contains(&self.grace_period_secs) {
            return Err(SettingsError::Invalid(format!(
                "grace_period_secs must be in 0..={}, got {}",
                MAX_GRACE_PERIOD_SECS, self.grace_period_secs
            )));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Length of one simulation tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Grace period, clamped to the accepted range (NaN reads as zero)
    pub fn grace_period(&self) -> Duration {
        let secs = self.grace_period_secs.clamp(0.0, MAX_GRACE_PERIOD_SECS);
        Duration::try_from_secs_f32(secs).unwrap_or_default()
    }

    /// Players flown by the autopilot
    pub fn autopilot_players(&self) -> Vec<Player> {
        Player::ALL
            .into_iter()
            .filter(|player| match player {
                Player::One => self.player1_autopilot,
                Player::Two => self.player2_autopilot,
            })
            .collect()
    }
}
