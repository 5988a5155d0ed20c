//! Wall-clock ball spawning
//!
//! The scheduler keeps a deadline rather than counting frames, so the spawn
//! cadence doesn't depend on the frame rate. Polling late emits every spawn
//! that came due in the meantime.

use std::time::Duration;

/// Fixed-interval spawn timer
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    interval: Duration,
    /// Next spawn time; `None` while stopped
    next_due: Option<Duration>,
}

impl SpawnScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start the timer at `now`. No-op if already running.
    pub fn start(&mut self, now: Duration) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
            log::info!("Ball spawning started every {:.1}s", self.interval.as_secs_f32());
        }
    }

    /// Stop the timer. No-op if not running.
    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            log::info!("Ball spawning stopped");
        }
    }

    /// Number of spawns that came due up to `now`
    pub fn poll(&mut self, now: Duration) -> usize {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        if self.interval.is_zero() {
            return 0;
        }

        let mut spawns = 0;
        while due <= now {
            spawns += 1;
            due += self.interval;
        }
        self.next_due = Some(due);
        spawns
    }
}
