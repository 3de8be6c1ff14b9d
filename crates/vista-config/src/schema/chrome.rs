//! Chrome visibility and sticky search bar configuration types.

use serde::{Deserialize, Serialize};

/// Hide-on-scroll-down / show-on-scroll-up tuning for headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Deltas smaller than this (px) are treated as scroll noise (valid range: 0-50).
    pub noise_threshold: f64,
    /// Offset (px) the content must pass before the header may hide (valid range: 0-1000).
    pub activation_threshold: f64,
    /// Height of the chrome; hidden means translated by `-chrome_height` (valid range: 1-400).
    pub chrome_height: f64,
    /// Force the chrome back into view whenever the content reaches the top.
    pub reset_at_top: bool,
    /// Advance the last offset on ignored small-delta samples too.
    pub track_ignored_samples: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            noise_threshold: 3.0,
            activation_threshold: 30.0,
            chrome_height: 56.0,
            reset_at_top: false,
            track_ignored_samples: true,
        }
    }
}

/// Sticky search bar threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Offset (px) past which the search bar pins to the top (valid range: 0-5000).
    pub threshold: f64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self { threshold: 120.0 }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_config_defaults() {
        let config = ChromeConfig::default();
        assert_eq!(config.noise_threshold, 3.0);
        assert_eq!(config.activation_threshold, 30.0);
        assert_eq!(config.chrome_height, 56.0);
        assert!(!config.reset_at_top);
        assert!(config.track_ignored_samples);
    }

    #[test]
    fn chrome_config_partial_toml() {
        let toml_str = r#"
reset_at_top = true
chrome_height = 72.0
"#;
        let config: ChromeConfig = toml::from_str(toml_str).unwrap();
        assert!(config.reset_at_top);
        assert_eq!(config.chrome_height, 72.0);
        // Defaults preserved
        assert_eq!(config.noise_threshold, 3.0);
        assert_eq!(config.activation_threshold, 30.0);
    }

    #[test]
    fn sticky_config_partial_toml() {
        let config: StickyConfig = toml::from_str("threshold = 48.0").unwrap();
        assert_eq!(config.threshold, 48.0);
    }
}
