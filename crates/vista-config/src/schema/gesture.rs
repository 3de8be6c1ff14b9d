//! Gesture lifecycle and touch guard configuration types.

use serde::{Deserialize, Serialize};

/// How a released drag is resolved into "momentum" or "at rest".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Release speed (px/ms) at or above which momentum is expected to follow.
    pub momentum_velocity_threshold: f64,
    /// How long (ms) a released region waits for momentum before it is
    /// considered at rest (valid range: 0-2000).
    pub settle_timeout_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            momentum_velocity_threshold: 0.05,
            settle_timeout_ms: 120,
        }
    }
}

/// Suppression of background taps right after the sheet comes to rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchGuardConfig {
    pub enabled: bool,
    /// Suppression window in milliseconds (valid range: 0-5000).
    pub window_ms: u64,
}

impl Default for TouchGuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_ms: 350,
        }
    }
}
