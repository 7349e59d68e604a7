//! Deferred shutdown
//!
//! Armed when the race finishes. The host keeps presenting frames and polls
//! `is_due` instead of sleeping inside a tick.

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ShutdownTimer {
    grace: Duration,
    deadline: Option<Duration>,
}

impl ShutdownTimer {
    pub fn new(grace: Duration) -> Self {
        Self {
            grace,
            deadline: None,
        }
    }

    /// Start the grace period (later calls keep the first deadline)
    pub fn arm(&mut self, now: Duration) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.grace);
            log::info!("Exiting in {:.1}s", self.grace.as_secs_f32());
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_until_armed() {
        let timer = ShutdownTimer::new(Duration::from_secs(5));
        assert!(!timer.is_armed());
        assert!(!timer.is_due(Duration::from_secs(1000)));
    }

    #[test]
    fn test_due_after_grace() {
        let mut timer = ShutdownTimer::new(Duration::from_secs(5));
        timer.arm(Duration::from_secs(60));
        assert!(!timer.is_due(Duration::from_millis(64_999)));
        assert!(timer.is_due(Duration::from_secs(65)));

        // Re-arming does not push the deadline back
        timer.arm(Duration::from_secs(64));
        assert!(timer.is_due(Duration::from_secs(65)));
    }
}
