//! Clocks and instance-owned one-shot timers.
//!
//! Timers here are plain deadlines owned by the component that armed them.
//! Nothing is scheduled in the background: the owner polls `fire_if_due`
//! whenever an event arrives, and dropping the owner cancels the timer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::trace;

/// Source of "now" for timers and animation frames.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock advanced by hand. Clones share the same time, so a
/// test (or a trace replay) can keep a handle while the session owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Jump to an absolute time since the clock was created. Time never
    /// moves backwards; earlier values are ignored.
    pub fn set_elapsed(&self, elapsed: Duration) {
        if elapsed > self.elapsed.get() {
            self.elapsed.set(elapsed);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }
}

/// A one-shot deadline owned by a single component.
#[derive(Debug)]
pub struct ScopedTimer {
    label: &'static str,
    deadline: Option<Instant>,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer to fire `after` from `now`.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            trace!(timer = self.label, "timer cancelled");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the timer is armed and its deadline has not yet passed.
    pub fn is_pending(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns `true` exactly once when the deadline has been reached,
    /// disarming the timer.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                trace!(timer = self.label, "timer fired");
                true
            }
            _ => false,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
