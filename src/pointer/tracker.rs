//! Pointer Tracker
//!
//! Count-bounded pointer history with a two-sample direction estimate.
//!
//! Samples are evicted purely by count. There is no time-based expiry and
//! no explicit reset: a long idle period simply leaves the last few samples
//! in place until newer ones push them out.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::trace;

use super::{DEFAULT_HISTORY_SIZE, DEFAULT_MAX_SIDEWAYS_PX, MIN_HISTORY_SIZE};

/// Configuration for the pointer tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Number of samples to keep in history
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Sideways movement (pixels) at which motion stops counting as
    /// heading toward the submenu
    #[serde(default = "default_max_sideways_px")]
    pub max_sideways_px: f64,
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}
fn default_max_sideways_px() -> f64 {
    DEFAULT_MAX_SIDEWAYS_PX
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            max_sideways_px: default_max_sideways_px(),
        }
    }
}

/// Pointer position sample with timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// X coordinate (device independent pixels)
    pub x: f64,
    /// Y coordinate (device independent pixels, grows downward)
    pub y: f64,
    /// When the sample was observed
    pub time: Instant,
}

/// Rolling pointer history
#[derive(Debug, Clone)]
pub struct PointerTracker {
    /// Configuration
    config: TrackerConfig,

    /// Oldest sample at the front
    history: VecDeque<PointerSample>,
}

impl PointerTracker {
    /// Create a new tracker
    ///
    /// A configured history smaller than two samples is raised to two so
    /// that the direction estimate stays meaningful.
    pub fn new(mut config: TrackerConfig) -> Self {
        config.history_size = config.history_size.max(MIN_HISTORY_SIZE);
        Self {
            history: VecDeque::with_capacity(config.history_size + 1),
            config,
        }
    }

    /// Record a pointer move
    pub fn on_pointer_move(&mut self, x: f64, y: f64, now: Instant) {
        self.history.push_back(PointerSample { x, y, time: now });

        while self.history.len() > self.config.history_size {
            self.history.pop_front();
        }

        trace!("Pointer sample: ({:.1}, {:.1}), history={}", x, y, self.history.len());
    }

    /// Is the pointer heading toward a submenu rendered below its trigger?
    ///
    /// Compares only the two newest samples. Returns `false` when fewer
    /// than two samples have been recorded.
    pub fn estimate_heading_toward_submenu(&self) -> bool {
        let n = self.history.len();
        if n < 2 {
            return false;
        }

        let recent = &self.history[n - 1];
        let prev = &self.history[n - 2];

        let delta_y = recent.y - prev.y;
        let delta_x = (recent.x - prev.x).abs();

        delta_y > 0.0 && delta_x < self.config.max_sideways_px
    }

    /// Samples in chronological order
    pub fn samples(&self) -> impl Iterator<Item = &PointerSample> + '_ {
        self.history.iter()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&PointerSample> {
        self.history.back()
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Maximum number of retained samples
    pub fn capacity(&self) -> usize {
        self.config.history_size
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn tracker_with(points: &[(f64, f64)]) -> PointerTracker {
        let base = Instant::now();
        let mut tracker = PointerTracker::default();
        for (i, (x, y)) in points.iter().enumerate() {
            tracker.on_pointer_move(*x, *y, base + Duration::from_millis(16 * i as u64));
        }
        tracker
    }

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.history_size, 3);
        assert_eq!(config.max_sideways_px, 50.0);
    }

    #[test]
    fn test_history_size_never_below_two() {
        let tracker = PointerTracker::new(TrackerConfig {
            history_size: 0,
            ..TrackerConfig::default()
        });
        assert_eq!(tracker.capacity(), 2);
    }

    #[test]
    fn test_insufficient_samples() {
        assert!(!tracker_with(&[]).estimate_heading_toward_submenu());
        assert!(!tracker_with(&[(10.0, 10.0)]).estimate_heading_toward_submenu());
    }

    #[test]
    fn test_moving_down() {
        let tracker = tracker_with(&[(100.0, 100.0), (110.0, 120.0)]);
        assert!(tracker.estimate_heading_toward_submenu());
    }

    #[test]
    fn test_moving_up_or_still() {
        assert!(!tracker_with(&[(100.0, 100.0), (100.0, 90.0)]).estimate_heading_toward_submenu());
        assert!(!tracker_with(&[(100.0, 100.0), (100.0, 100.0)]).estimate_heading_toward_submenu());
    }

    #[test]
    fn test_sideways_threshold_is_exclusive() {
        assert!(tracker_with(&[(100.0, 100.0), (149.9, 101.0)]).estimate_heading_toward_submenu());
        assert!(!tracker_with(&[(100.0, 100.0), (150.0, 101.0)]).estimate_heading_toward_submenu());
        assert!(!tracker_with(&[(100.0, 100.0), (50.0, 101.0)]).estimate_heading_toward_submenu());
    }

    #[test]
    fn test_only_two_newest_samples_count() {
        // A long upward move followed by a small downward one still reads as "down"
        let tracker = tracker_with(&[(0.0, 500.0), (0.0, 100.0), (5.0, 104.0)]);
        assert!(tracker.estimate_heading_toward_submenu());
    }

    #[test]
    fn test_oldest_sample_evicted() {
        let tracker = tracker_with(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let xs: Vec<f64> = tracker.samples().map(|s| s.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(tracker.latest().map(|s| s.x), Some(4.0));
    }

    proptest! {
        #[test]
        fn prop_history_holds_newest_samples_in_order(
            points in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 0..64)
        ) {
            let tracker = tracker_with(&points);
            prop_assert!(tracker.len() <= 3);

            let expected = points[points.len().saturating_sub(3)..].to_vec();
            let actual: Vec<(f64, f64)> = tracker.samples().map(|s| (s.x, s.y)).collect();
            prop_assert_eq!(actual, expected);

            let times: Vec<Instant> = tracker.samples().map(|s| s.time).collect();
            prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_upward_motion_never_heads_toward_submenu(
            x0 in -1000.0f64..1000.0, y0 in -1000.0f64..1000.0,
            x1 in -1000.0f64..1000.0, dy in 0.0f64..1000.0,
        ) {
            let tracker = tracker_with(&[(x0, y0), (x1, y0 - dy)]);
            prop_assert!(!tracker.estimate_heading_toward_submenu());
        }

        #[test]
        fn prop_wide_sideways_motion_never_heads_toward_submenu(
            x0 in -1000.0f64..1000.0, y0 in -1000.0f64..1000.0,
            dx in 50.5f64..1000.0, dy in -1000.0f64..1000.0, left in any::<bool>(),
        ) {
            let x1 = if left { x0 - dx } else { x0 + dx };
            let tracker = tracker_with(&[(x0, y0), (x1, y0 + dy)]);
            prop_assert!(!tracker.estimate_heading_toward_submenu());
        }
    }
}
