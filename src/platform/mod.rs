//! Platform abstraction layer
//!
//! Host-side collaborators the simulation is fed from:
//! - Time (monotonic clock readings)
//! - Input (key tracking, autopilot)
//! - Deferred shutdown after the race ends

pub mod input;
pub mod shutdown;
pub mod time;

pub use input::{Autopilot, Key, KeyTracker};
pub use shutdown::ShutdownTimer;
pub use time::{Clock, ManualClock, MonotonicClock};
