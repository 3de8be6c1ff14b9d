//! Overlap signal: is the sheet still covering part of the background?

use serde::{Deserialize, Serialize};
use tracing::debug;
use vista_config::schema::BoundaryConfig;

/// Pure rule. Strict: an offset exactly on the boundary is outside.
pub fn within_overlap(offset: f64, boundary: f64) -> bool {
    offset < boundary
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryState {
    pub current_offset: f64,
    pub boundary_distance: f64,
    pub within_overlap: bool,
}

/// [`within_overlap`] with a dead-zone on the way back in.
///
/// Once the sheet has scrolled past the boundary it only counts as
/// overlapping again below `boundary - dead_zone`, so an offset jittering
/// around the boundary does not flip consumers every frame.
#[derive(Debug, Clone)]
pub struct BoundaryTracker {
    dead_zone: f64,
    state: BoundaryState,
    changed: bool,
}

impl BoundaryTracker {
    pub fn new(boundary_distance: f64, dead_zone: f64) -> Self {
        Self {
            dead_zone: dead_zone.max(0.0),
            state: Self::initial(boundary_distance),
            changed: false,
        }
    }

    pub fn from_config(config: &BoundaryConfig) -> Self {
        Self::new(config.distance, config.dead_zone)
    }

    fn initial(boundary_distance: f64) -> BoundaryState {
        BoundaryState {
            current_offset: 0.0,
            boundary_distance,
            within_overlap: within_overlap(0.0, boundary_distance),
        }
    }

    pub fn within_overlap(&self) -> bool {
        self.state.within_overlap
    }

    pub fn boundary_distance(&self) -> f64 {
        self.state.boundary_distance
    }

    /// Whether the last update flipped `within_overlap`.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn state(&self) -> BoundaryState {
        self.state
    }

    /// Evaluate `current_offset` against `boundary_distance` and return the
    /// resulting `within_overlap`.
    pub fn update(&mut self, current_offset: f64, boundary_distance: f64) -> bool {
        let previous = self.state.within_overlap;
        let next = if previous {
            within_overlap(current_offset, boundary_distance)
        } else {
            within_overlap(current_offset, boundary_distance - self.dead_zone)
        };

        self.state = BoundaryState {
            current_offset,
            boundary_distance,
            within_overlap: next,
        };
        self.changed = next != previous;
        if self.changed {
            debug!(
                offset = current_offset,
                boundary = boundary_distance,
                within_overlap = next,
                "overlap boundary crossed"
            );
        }
        next
    }

    /// [`update`](Self::update) against the current boundary distance.
    pub fn update_offset(&mut self, current_offset: f64) -> bool {
        let boundary = self.state.boundary_distance;
        self.update(current_offset, boundary)
    }

    pub fn reset(&mut self) {
        self.state = Self::initial(self.state.boundary_distance);
        self.changed = false;
    }
}

impl Default for BoundaryTracker {
    fn default() -> Self {
        Self::from_config(&BoundaryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tracker: &mut BoundaryTracker, offsets: &[f64], boundary: f64) -> Vec<bool> {
        offsets
            .iter()
            .map(|&offset| tracker.update(offset, boundary))
            .collect()
    }

    #[test]
    fn strict_at_equality() {
        assert!(within_overlap(499.9, 500.0));
        assert!(!within_overlap(500.0, 500.0));
        assert!(!within_overlap(500.1, 500.0));
    }

    #[test]
    fn scroll_past_and_back() {
        let offsets = [0.0, 200.0, 500.0, 520.0, 500.0, 200.0];
        let expected = vec![true, true, false, false, false, true];

        let mut with_dead_zone = BoundaryTracker::new(500.0, 10.0);
        assert_eq!(run(&mut with_dead_zone, &offsets, 500.0), expected);

        let mut strict = BoundaryTracker::new(500.0, 0.0);
        assert_eq!(run(&mut strict, &offsets, 500.0), expected);
    }

    #[test]
    fn monotonic_scroll_flips_once() {
        let mut tracker = BoundaryTracker::new(300.0, 10.0);
        let mut flips = 0;
        let mut offset = 0.0;
        while offset <= 600.0 {
            tracker.update_offset(offset);
            if tracker.changed() {
                flips += 1;
            }
            offset += 7.5;
        }
        assert_eq!(flips, 1);
        assert!(!tracker.within_overlap());
    }

    #[test]
    fn dead_zone_absorbs_jitter_at_boundary() {
        let jitter = [298.0, 301.0, 297.0, 302.0, 299.0, 300.0, 296.0];

        let mut strict = BoundaryTracker::new(300.0, 0.0);
        let strict_flips = jitter
            .iter()
            .filter(|&&o| {
                strict.update_offset(o);
                strict.changed()
            })
            .count();
        assert!(strict_flips >= 4);

        let mut damped = BoundaryTracker::new(300.0, 10.0);
        let damped_flips = jitter
            .iter()
            .filter(|&&o| {
                damped.update_offset(o);
                damped.changed()
            })
            .count();
        assert_eq!(damped_flips, 1);
        assert!(!damped.within_overlap());

        assert!(damped.update_offset(289.0));
        assert!(damped.changed());
    }

    #[test]
    fn boundary_can_move_between_updates() {
        let mut tracker = BoundaryTracker::new(300.0, 0.0);
        assert!(tracker.update(250.0, 300.0));
        assert!(!tracker.update(250.0, 200.0));
        assert_eq!(tracker.boundary_distance(), 200.0);
    }

    #[test]
    fn state_reports_last_update() {
        let mut tracker = BoundaryTracker::default();
        tracker.update_offset(420.0);
        assert_eq!(
            tracker.state(),
            BoundaryState {
                current_offset: 420.0,
                boundary_distance: 300.0,
                within_overlap: false,
            }
        );
    }

    #[test]
    fn reset_returns_to_top() {
        let mut tracker = BoundaryTracker::default();
        tracker.update_offset(900.0);
        tracker.reset();
        assert!(tracker.within_overlap());
        assert!(!tracker.changed());
        assert_eq!(tracker.state().current_offset, 0.0);
    }
}
