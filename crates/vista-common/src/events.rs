use serde::{Deserialize, Serialize};

use crate::types::{RegionId, ScrollSample};

/// Gesture lifecycle points reported by a scrollable view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GestureEvent {
    DragBegin,
    /// `velocity` is the release velocity in px/ms; a fling fast enough is
    /// expected to continue as momentum.
    DragEnd {
        #[serde(default)]
        velocity: f64,
    },
    MomentumBegin,
    MomentumEnd,
}

impl GestureEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::DragBegin => "drag_begin",
            GestureEvent::DragEnd { .. } => "drag_end",
            GestureEvent::MomentumBegin => "momentum_begin",
            GestureEvent::MomentumEnd => "momentum_end",
        }
    }
}

/// Everything a screen forwards to its scroll session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenEvent {
    Scroll {
        region: RegionId,
        offset: f64,
        seq: u64,
    },
    Gesture {
        region: RegionId,
        #[serde(flatten)]
        gesture: GestureEvent,
    },
    /// A tap landed on a region (used for background touch suppression).
    Tap { region: RegionId },
    /// Time passed with no input; lets animations and timers advance.
    Tick,
    /// The screen was hidden or the modal closed.
    Hide,
}

impl ScreenEvent {
    pub fn scroll(region: RegionId, sample: ScrollSample) -> Self {
        ScreenEvent::Scroll {
            region,
            offset: sample.offset,
            seq: sample.seq,
        }
    }

    pub fn gesture(region: RegionId, gesture: GestureEvent) -> Self {
        ScreenEvent::Gesture { region, gesture }
    }

    /// The region this event is scoped to, if any.
    pub fn region(&self) -> Option<RegionId> {
        match self {
            ScreenEvent::Scroll { region, .. }
            | ScreenEvent::Gesture { region, .. }
            | ScreenEvent::Tap { region } => Some(*region),
            ScreenEvent::Tick | ScreenEvent::Hide => None,
        }
    }
}
