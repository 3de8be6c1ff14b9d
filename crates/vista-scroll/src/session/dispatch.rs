//! Event routing: scroll samples, gesture lifecycle, taps and frame ticks.

use tracing::{debug, warn};
use vista_common::{GestureEvent, RegionId, ScreenEvent, ScrollError, ScrollSample};

use super::types::{ScrollSession, SessionSnapshot};
use crate::gesture::{GesturePhase, GestureTransition};
use crate::timer::Clock;

impl<C: Clock> ScrollSession<C> {
    /// Route one screen event and return the resulting snapshot.
    ///
    /// Errors from individual components are logged and absorbed: a bad
    /// event never changes state, and the screen keeps rendering. With the
    /// `strict-regions` feature, an unknown region panics in debug builds.
    pub fn handle(&mut self, event: ScreenEvent) -> SessionSnapshot {
        self.poll_timers();

        let result = match event {
            ScreenEvent::Scroll {
                region,
                offset,
                seq,
            } => self.on_scroll(region, ScrollSample::new(offset, seq)),
            ScreenEvent::Gesture { region, gesture } => self.on_gesture(region, gesture),
            ScreenEvent::Tap { region } => self.on_tap(region).map(|_| ()),
            ScreenEvent::Tick => Ok(()),
            ScreenEvent::Hide => {
                self.hide();
                Ok(())
            }
        };
        if let Err(e) = result {
            if cfg!(feature = "strict-regions") {
                debug_assert!(
                    !matches!(e, ScrollError::UnknownRegion(_)),
                    "mount {}: {e}",
                    self.mount_id.short()
                );
            }
            warn!(mount = self.mount_id.short(), error = %e, "event ignored");
        }

        self.tick();
        self.snapshot()
    }

    /// Feed a scroll sample from `region`.
    ///
    /// Only the layout's content region drives chrome, sticky and boundary;
    /// samples from other regions are checked for ordering and dropped.
    pub fn on_scroll(&mut self, region: RegionId, sample: ScrollSample) -> Result<(), ScrollError> {
        self.ensure_known(region)?;

        if !sample.offset.is_finite() {
            warn!(
                mount = self.mount_id.short(),
                %region,
                seq = sample.seq,
                "non-finite scroll offset dropped"
            );
            return Ok(());
        }
        if let Some(&last) = self.last_seq.get(&region) {
            if sample.seq <= last {
                return Err(ScrollError::OutOfOrderSample {
                    region,
                    seq: sample.seq,
                    last,
                });
            }
        }
        self.last_seq.insert(region, sample.seq);

        if region != self.layout.content_region {
            return Ok(());
        }

        let offset = sample.offset;
        if let Some(chrome) = self.chrome.as_mut() {
            chrome.on_scroll(offset);
        }
        if let Some(sticky) = self.sticky.as_mut() {
            if sticky.update(offset) {
                debug!(mount = self.mount_id.short(), offset, sticky = sticky.is_sticky(), "sticky changed");
            }
        }
        if let Some(boundary) = self.boundary.as_mut() {
            boundary.update_offset(offset);
        }
        Ok(())
    }

    /// Feed a gesture lifecycle event from `region`.
    pub fn on_gesture(&mut self, region: RegionId, gesture: GestureEvent) -> Result<(), ScrollError> {
        let Some(tracker) = self.gestures.get_mut(&region) else {
            return Err(ScrollError::UnknownRegion(region));
        };

        // A locked region cannot start a gesture of its own.
        if !tracker.is_active() && self.arbiter.is_locked(region) == Some(true) {
            debug!(
                mount = self.mount_id.short(),
                %region,
                event = gesture.name(),
                "gesture on locked region ignored"
            );
            return Ok(());
        }

        let transition = tracker.apply(gesture);
        let phase = tracker.phase();

        match transition {
            GestureTransition::Began => {
                self.arbiter.on_gesture_begin(region)?;
            }
            GestureTransition::Continued => {
                let now = self.clock.now();
                if let Some(timer) = self.settle_timers.get_mut(&region) {
                    if phase == GesturePhase::Released {
                        timer.arm(now, self.settle_timeout);
                    } else {
                        timer.cancel();
                    }
                }
            }
            GestureTransition::Ended => self.finish_gesture(region)?,
            GestureTransition::Ignored => {
                debug!(
                    mount = self.mount_id.short(),
                    %region,
                    event = gesture.name(),
                    ?phase,
                    "unmatched gesture event"
                );
            }
        }
        Ok(())
    }

    /// A tap landed on `region`. Returns whether it should be delivered.
    pub fn on_tap(&mut self, region: RegionId) -> Result<bool, ScrollError> {
        self.ensure_known(region)?;
        if self.layout.guarded_region != Some(region) {
            return Ok(true);
        }

        let now = self.clock.now();
        let accepted = self.arbiter.scroll_enabled(region) && self.touch_guard.accepts_tap(now);
        if !accepted {
            debug!(mount = self.mount_id.short(), %region, "background tap suppressed");
        }
        Ok(accepted)
    }

    /// Resolve due timers and step the header animation to the clock's
    /// current time. Returns the chrome offset to render.
    pub fn tick(&mut self) -> f64 {
        self.poll_timers();

        let now = self.clock.now();
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        match self.chrome.as_mut() {
            Some(chrome) => chrome.advance(dt),
            None => 0.0,
        }
    }

    /// Bring released regions whose momentum never started to rest.
    pub(super) fn poll_timers(&mut self) {
        let now = self.clock.now();
        let due: Vec<RegionId> = self
            .settle_timers
            .iter_mut()
            .filter_map(|(&region, timer)| timer.fire_if_due(now).then_some(region))
            .collect();

        for region in due {
            let settled = self
                .gestures
                .get_mut(&region)
                .map(|tracker| tracker.settle())
                .unwrap_or(GestureTransition::Ignored);
            if settled == GestureTransition::Ended {
                debug!(mount = self.mount_id.short(), %region, "no momentum after release");
                if let Err(e) = self.finish_gesture(region) {
                    warn!(mount = self.mount_id.short(), error = %e, "settle failed");
                }
            }
        }
    }

    fn finish_gesture(&mut self, region: RegionId) -> Result<(), ScrollError> {
        if let Some(timer) = self.settle_timers.get_mut(&region) {
            timer.cancel();
        }
        let released = self.arbiter.on_gesture_end(region)?;

        if released && region == self.layout.content_region && self.layout.guarded_region.is_some() {
            self.touch_guard.arm(self.clock.now());
        }
        Ok(())
    }

    fn ensure_known(&self, region: RegionId) -> Result<(), ScrollError> {
        if self.arbiter.contains(region) {
            Ok(())
        } else {
            Err(ScrollError::UnknownRegion(region))
        }
    }
}
