//! Decode-miss filtering.
//!
//! A live decoder reports "no code found" many times per second while the
//! user lines a code up. Surfacing each miss would flood the screen with
//! transient errors, so misses are counted silently and a single summary
//! message is surfaced at most once per interval.

use std::time::{Duration, Instant};

/// Throttling filter for repeated decode misses.
#[derive(Debug)]
pub struct MissFilter {
    interval: Duration,
    last_surfaced: Option<Instant>,
    suppressed: u32,
}

impl MissFilter {
    /// Create a filter that surfaces at most one message per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_surfaced: None,
            suppressed: 0,
        }
    }

    /// Record one decode miss. Returns a user-facing message when the
    /// throttle interval has elapsed (always for the first miss), `None`
    /// while suppressing.
    pub fn observe_miss(&mut self) -> Option<String> {
        self.suppressed += 1;

        let due = match self.last_surfaced {
            None => true,
            Some(at) => at.elapsed() >= self.interval,
        };
        if !due {
            return None;
        }

        let message = summary(self.suppressed);
        self.last_surfaced = Some(Instant::now());
        self.suppressed = 0;
        Some(message)
    }

    /// Misses swallowed since the last surfaced message.
    pub fn suppressed(&self) -> u32 {
        self.suppressed
    }
}

fn summary(misses: u32) -> String {
    if misses == 1 {
        "No code found yet. Keep the code inside the frame.".to_string()
    } else {
        format!(
            "No code found after {} attempts. Keep the code inside the frame.",
            misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_miss_is_surfaced() {
        let mut filter = MissFilter::new(Duration::from_secs(5));
        assert!(filter.observe_miss().is_some());
    }

    #[test]
    fn test_repeat_misses_are_suppressed_within_interval() {
        let mut filter = MissFilter::new(Duration::from_secs(60));

        assert!(filter.observe_miss().is_some());
        for _ in 0..10 {
            assert!(filter.observe_miss().is_none());
        }
        assert_eq!(filter.suppressed(), 10);
    }

    #[test]
    fn test_zero_interval_surfaces_every_miss() {
        let mut filter = MissFilter::new(Duration::ZERO);

        assert!(filter.observe_miss().is_some());
        assert!(filter.observe_miss().is_some());
    }

    #[test]
    fn test_summary_counts_suppressed_misses() {
        let mut filter = MissFilter::new(Duration::ZERO);

        // First message is the singular form
        assert!(filter.observe_miss().unwrap().starts_with("No code found yet"));

        assert_eq!(
            summary(3),
            "No code found after 3 attempts. Keep the code inside the frame."
        );
    }
}
