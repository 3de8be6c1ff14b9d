//! Chrome animation configuration types.

use serde::{Deserialize, Serialize};

/// Damped spring parameters used when the chrome slides in or out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Displacement and speed below which the spring snaps to its target (valid range: 0-10).
    pub rest_threshold: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            mass: 1.0,
            rest_threshold: 0.5,
        }
    }
}
