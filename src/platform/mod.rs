//! Platform abstraction layer
//!
//! Handles what the simulation must not touch directly:
//! - Time (monotonic clock readings as `Duration` since an arbitrary origin)
//! - Hand detector startup

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::error::AcquisitionError;

/// Source of monotonic timestamps
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Real time since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// External hand tracker. Snapshots arrive separately as
/// [`crate::driver::Command::Hands`]; this only covers bring-up.
pub trait HandDetector {
    /// Open the camera and load the model
    fn init(&mut self) -> Result<(), AcquisitionError>;
}

/// Detector whose startup result is fixed up front
#[derive(Debug, Clone, Default)]
pub struct ScriptedDetector {
    failure: Option<AcquisitionError>,
    /// Number of `init` calls made
    pub attempts: u32,
}

impl ScriptedDetector {
    pub fn ready() -> Self {
        Self::default()
    }

    pub fn failing(err: AcquisitionError) -> Self {
        Self {
            failure: Some(err),
            attempts: 0,
        }
    }
}

impl HandDetector for ScriptedDetector {
    fn init(&mut self) -> Result<(), AcquisitionError> {
        self.attempts += 1;
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
