//! Survival-time scoring

use std::time::Duration;

/// Score derived from time elapsed since play started
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTracker {
    start: Option<Duration>,
    frozen: bool,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting from `start`
    pub fn begin(&mut self, start: Duration) {
        self.start = Some(start);
        self.frozen = false;
    }

    /// Stop updating; the last score stays
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.frozen = false;
    }

    /// Recompute `score` for time `now`. Never lowers it and leaves it alone
    /// when frozen or not started.
    pub fn update(&self, score: &mut u32, now: Duration) {
        if self.frozen {
            return;
        }
        if let Some(start) = self.start {
            *score = (*score).max(whole_seconds_since(start, now));
        }
    }
}

/// Whole seconds from `start` to `now`, zero if `now` is earlier
pub fn whole_seconds_since(start: Duration, now: Duration) -> u32 {
    let secs = now.saturating_sub(start).as_secs();
    u32::try_from(secs).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_floors_seconds() {
        let t0 = Duration::from_secs(100);
        assert_eq!(whole_seconds_since(t0, t0 + Duration::from_millis(2999)), 2);
        assert_eq!(whole_seconds_since(t0, t0 + Duration::from_secs(3)), 3);
        assert_eq!(whole_seconds_since(t0, t0), 0);
        assert_eq!(whole_seconds_since(t0, Duration::from_secs(50)), 0);
    }

    #[test]
    fn test_tracker_updates_until_frozen() {
        let t0 = Duration::from_secs(10);
        let mut tracker = ScoreTracker::new();
        let mut score = 0;

        tracker.update(&mut score, t0 + Duration::from_secs(5));
        assert_eq!(score, 0, "not started");

        tracker.begin(t0);
        tracker.update(&mut score, t0 + Duration::from_millis(2999));
        assert_eq!(score, 2);
        tracker.update(&mut score, t0 + Duration::from_secs(3));
        assert_eq!(score, 3);

        tracker.freeze();
        tracker.update(&mut score, t0 + Duration::from_secs(60));
        assert_eq!(score, 3);
    }

    #[test]
    fn test_score_never_decreases() {
        let t0 = Duration::from_secs(10);
        let mut tracker = ScoreTracker::new();
        tracker.begin(t0);
        let mut score = 0;
        tracker.update(&mut score, t0 + Duration::from_secs(7));
        tracker.update(&mut score, t0 + Duration::from_secs(4));
        assert_eq!(score, 7);
    }
}
