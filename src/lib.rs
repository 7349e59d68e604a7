//! Space Race - A two-player race through a drifting obstacle field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, countdown, game state)
//! - `renderer`: Drawing contract the host implements, plus the per-tick scene
//! - `platform`: Clock, key tracking, autopilot input, deferred shutdown
//! - `settings`: Host configuration loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default playfield dimensions
    pub const BOUNDS_WIDTH: i32 = 800;
    pub const BOUNDS_HEIGHT: i32 = 600;

    /// Number of obstacles in the field
    pub const NUM_OBSTACLES: usize = 30;
    /// Obstacles never spawn in the bottom strip of this height
    pub const OBSTACLE_SPAWN_MARGIN: i32 = 100;
    /// Horizontal distance an obstacle drifts per tick
    pub const OBSTACLE_STEP: i32 = 1;
    /// Drawn obstacle size (square)
    pub const OBSTACLE_SIZE: i32 = 5;

    /// Vessel spawn height above the bottom edge
    pub const VESSEL_FLOOR_OFFSET: i32 = 45;
    /// Vertical distance a vessel moves per tick
    pub const VESSEL_STEP: i32 = 2;
    /// Hull triangle: apex above center
    pub const HULL_APEX: i32 = 35;
    /// Hull triangle: base half-width
    pub const HULL_HALF_WIDTH: i32 = 30;
    /// Hull triangle: base below center
    pub const HULL_BASE: i32 = 22;

    /// Countdown bar: starting height
    pub const COUNTDOWN_EXTENT: i32 = 500;
    /// Countdown bar: top edge at start
    pub const COUNTDOWN_TOP: i32 = 100;
    /// Countdown bar: width
    pub const COUNTDOWN_WIDTH: i32 = 10;
    /// Countdown bar: shrink per interval
    pub const COUNTDOWN_STEP: i32 = 4;
    /// Countdown bar: real-time interval between shrinks (ms)
    pub const COUNTDOWN_INTERVAL_MS: u64 = 500;
    /// Countdown bar turns red once its top edge reaches this y
    pub const COUNTDOWN_WARNING_Y: i32 = 550;

    /// Delay between the end of the race and process exit (seconds)
    pub const GRACE_PERIOD_SECS: f32 = 5.0;
}
