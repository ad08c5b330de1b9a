//! Timer utilities
//!
//! Elapsed-time measurement on the tokio clock, so paused-time tests see
//! exact durations.

use std::time::Duration;
use tokio::time::Instant;

/// Simple timer for measuring elapsed time
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    label: String,
}

impl Timer {
    /// Create and start a new timer
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            label: label.into(),
        }
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop timer and return elapsed time
    pub fn stop(self) -> Duration {
        let elapsed = self.elapsed();
        tracing::trace!("{}: {:?}", self.label, elapsed);
        elapsed
    }
}
