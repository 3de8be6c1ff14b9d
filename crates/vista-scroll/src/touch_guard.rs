//! Short suppression of background taps after the sheet comes to rest.
//!
//! When a fling on the sheet ends, the finger that stops it is often already
//! on its way to the background carousel. Taps landing inside the window are
//! dropped instead of opening the photo viewer.

use std::time::{Duration, Instant};

use vista_config::schema::TouchGuardConfig;

use crate::timer::ScopedTimer;

#[derive(Debug)]
pub struct TouchGuard {
    enabled: bool,
    window: Duration,
    timer: ScopedTimer,
}

impl TouchGuard {
    pub fn new(enabled: bool, window: Duration) -> Self {
        Self {
            enabled,
            window,
            timer: ScopedTimer::new("touch_guard"),
        }
    }

    pub fn from_config(config: &TouchGuardConfig) -> Self {
        Self::new(config.enabled, Duration::from_millis(config.window_ms))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start (or restart) the suppression window at `now`.
    pub fn arm(&mut self, now: Instant) {
        if self.enabled && !self.window.is_zero() {
            self.timer.arm(now, self.window);
        }
    }

    pub fn is_suppressing(&self, now: Instant) -> bool {
        self.timer.is_pending(now)
    }

    /// Whether a background tap at `now` should be delivered. Expired
    /// windows are disarmed on the way.
    pub fn accepts_tap(&mut self, now: Instant) -> bool {
        if self.timer.is_pending(now) {
            return false;
        }
        self.timer.fire_if_due(now);
        true
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }
}

impl Default for TouchGuard {
    fn default() -> Self {
        Self::from_config(&TouchGuardConfig::default())
    }
}
