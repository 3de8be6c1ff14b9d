//! Hide and teardown: everything a session owns goes back to mount state
//! or is dropped.

use tracing::info;

use super::types::ScrollSession;
use crate::timer::Clock;

// =============================================================================
// HIDE / TEARDOWN
// =============================================================================

impl<C: Clock> ScrollSession<C> {
    /// The screen was hidden or the modal closed. State returns to what a
    /// fresh mount would show; the mount id is kept.
    pub fn hide(&mut self) {
        self.cancel_timers();
        self.arbiter.reset();
        for tracker in self.gestures.values_mut() {
            tracker.reset();
        }
        self.last_seq.clear();

        if let Some(chrome) = self.chrome.as_mut() {
            chrome.reset();
        }
        if let Some(sticky) = self.sticky.as_mut() {
            sticky.reset();
        }
        if let Some(boundary) = self.boundary.as_mut() {
            boundary.reset();
        }
        self.last_frame = self.clock.now();

        info!(mount = self.mount_id.short(), screen = %self.layout.label, "scroll session reset");
    }

    /// Unmount. Pending timers are cancelled and all state is discarded;
    /// a remount must create a new session.
    pub fn teardown(mut self) {
        self.cancel_timers();
        info!(mount = self.mount_id.short(), screen = %self.layout.label, "scroll session torn down");
    }

    fn cancel_timers(&mut self) {
        for timer in self.settle_timers.values_mut() {
            timer.cancel();
        }
        self.touch_guard.cancel();
    }
}
