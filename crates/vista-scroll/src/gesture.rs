//! Per-region gesture phase tracking.
//!
//! Hosts report four lifecycle points (drag begin/end, momentum begin/end).
//! A fling produces `DragEnd` followed by `MomentumBegin`, and the region is
//! not at rest in between. This tracker folds the raw events into exactly
//! one `Began` and one `Ended` per gesture so the arbiter never unlocks the
//! other region at the drag/momentum boundary.

use tracing::trace;
use vista_common::GestureEvent;
use vista_config::schema::GestureConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    /// Finger lifted fast enough that momentum is expected next.
    Released,
    Momentum,
}

/// What a lifecycle event meant for the gesture as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTransition {
    /// A new gesture started; the region should take ownership.
    Began,
    /// The gesture moved between phases but is not at rest.
    Continued,
    /// The gesture is fully at rest; ownership can be released.
    Ended,
    /// The event did not fit the current phase and was dropped.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    momentum_velocity_threshold: f64,
}

impl GestureTracker {
    pub fn new(momentum_velocity_threshold: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            momentum_velocity_threshold,
        }
    }

    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(config.momentum_velocity_threshold)
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    pub fn apply(&mut self, event: GestureEvent) -> GestureTransition {
        use GesturePhase::{Dragging, Idle, Momentum, Released};

        let (next, transition) = match (self.phase, event) {
            (Idle, GestureEvent::DragBegin) => (Dragging, GestureTransition::Began),
            // Catching a fling continues the same gesture.
            (Released | Momentum, GestureEvent::DragBegin) => {
                (Dragging, GestureTransition::Continued)
            }
            (Dragging, GestureEvent::DragEnd { velocity }) => {
                if velocity.abs() >= self.momentum_velocity_threshold && velocity.abs() > 0.0 {
                    (Released, GestureTransition::Continued)
                } else {
                    (Idle, GestureTransition::Ended)
                }
            }
            (Released, GestureEvent::MomentumBegin) => (Momentum, GestureTransition::Continued),
            // Programmatic momentum (e.g. scroll-to) with no drag before it.
            (Idle, GestureEvent::MomentumBegin) => (Momentum, GestureTransition::Began),
            (Momentum | Released, GestureEvent::MomentumEnd) => (Idle, GestureTransition::Ended),
            (phase, _) => (phase, GestureTransition::Ignored),
        };

        if transition != GestureTransition::Ignored {
            trace!(from = ?self.phase, to = ?next, event = event.name(), "gesture phase");
        }
        self.phase = next;
        transition
    }

    /// Momentum never arrived after a release: treat the region as at rest.
    pub fn settle(&mut self) -> GestureTransition {
        if self.phase == GesturePhase::Released {
            self.phase = GesturePhase::Idle;
            GestureTransition::Ended
        } else {
            GestureTransition::Ignored
        }
    }

    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::from_config(&GestureConfig::default())
    }
}
