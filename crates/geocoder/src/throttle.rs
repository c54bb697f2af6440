//! Minimum-interval throttle for outbound requests
//!
//! Nominatim's usage policy allows at most one request per second. The
//! interval is measured from the completion of the previous request, not its
//! start.

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

/// Wall-clock spacing between consecutive calls
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last_completed: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_completed: Mutex::new(None),
        }
    }

    /// Time left before the next call may start
    pub fn remaining(&self, now: Instant) -> Duration {
        match *self.lock() {
            Some(last) => self
                .min_interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Block until the interval since the last completed call has elapsed
    pub fn wait(&self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            debug!("Rate limit: sleeping {}ms", wait.as_millis());
            thread::sleep(wait);
        }
    }

    /// Record that a call just finished
    pub fn mark_complete(&self) {
        *self.lock() = Some(Instant::now());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        // The guarded value is a plain timestamp; a poisoned lock is still usable
        self.last_completed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
