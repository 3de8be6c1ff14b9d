//! Threshold-only "sticky at top" variant used by search bars.

use vista_config::schema::StickyConfig;

/// Pure rule: sticky strictly past the threshold.
pub fn is_sticky(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Caches the last [`is_sticky`] result so callers can skip re-renders.
#[derive(Debug, Clone)]
pub struct StickyThreshold {
    threshold: f64,
    sticky: bool,
}

impl StickyThreshold {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            sticky: false,
        }
    }

    pub fn from_config(config: &StickyConfig) -> Self {
        Self::new(config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Re-evaluate for `offset`. Returns `true` if the flag flipped.
    pub fn update(&mut self, offset: f64) -> bool {
        let next = is_sticky(offset, self.threshold);
        let changed = next != self.sticky;
        self.sticky = next;
        changed
    }

    pub fn reset(&mut self) {
        self.sticky = false;
    }
}
