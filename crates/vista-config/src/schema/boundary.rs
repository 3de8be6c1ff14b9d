//! Overlap boundary configuration types.

use serde::{Deserialize, Serialize};

/// Where the foreground sheet stops overlapping the background region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Sheet offset (px) at which the overlap ends (valid range: 0-10000).
    pub distance: f64,
    /// Hysteresis below `distance` before the overlap is re-entered (valid range: 0-100).
    /// Zero makes the tracker a plain strict threshold.
    pub dead_zone: f64,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            distance: 300.0,
            dead_zone: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_config_defaults() {
        let config = BoundaryConfig::default();
        assert_eq!(config.distance, 300.0);
        assert_eq!(config.dead_zone, 10.0);
    }

    #[test]
    fn boundary_config_partial_toml() {
        let config: BoundaryConfig = toml::from_str("distance = 500.0").unwrap();
        assert_eq!(config.distance, 500.0);
        assert_eq!(config.dead_zone, 10.0);
    }
}
