//! Gesture begin/end handling for ScrollOwnershipArbiter.

use tracing::debug;
use vista_common::{RegionId, ScrollError};

use super::ScrollOwnershipArbiter;

impl ScrollOwnershipArbiter {
    /// A gesture started on `region`: lock every other region.
    ///
    /// Returns `Ok(true)` if ownership changed. Repeating the call for the
    /// region that already owns the gesture is a no-op, and so is a begin
    /// from a region that is itself locked by someone else.
    pub fn on_gesture_begin(&mut self, region: RegionId) -> Result<bool, ScrollError> {
        self.ensure_known(region)?;

        match self.active {
            Some(active) if active == region => Ok(false),
            Some(active) => {
                debug!(%region, owner = %active, "begin ignored, region is locked");
                Ok(false)
            }
            None => {
                for (id, locked) in self.locked.iter_mut() {
                    *locked = *id != region;
                }
                self.active = Some(region);
                debug!(%region, "gesture ownership acquired");
                Ok(true)
            }
        }
    }

    /// The gesture on `region` is fully at rest: unlock every other region.
    ///
    /// Returns `Ok(true)` if ownership changed. Without a matching begin
    /// (or when called twice) nothing happens.
    pub fn on_gesture_end(&mut self, region: RegionId) -> Result<bool, ScrollError> {
        self.ensure_known(region)?;

        if self.active != Some(region) {
            return Ok(false);
        }
        self.unlock_all();
        debug!(%region, "gesture ownership released");
        Ok(true)
    }

    /// Drop any ownership, e.g. when the screen is hidden mid-gesture.
    pub fn reset(&mut self) {
        self.unlock_all();
    }

    fn unlock_all(&mut self) {
        for locked in self.locked.values_mut() {
            *locked = false;
        }
        self.active = None;
    }

    fn ensure_known(&self, region: RegionId) -> Result<(), ScrollError> {
        if self.contains(region) {
            Ok(())
        } else {
            Err(ScrollError::UnknownRegion(region))
        }
    }
}
