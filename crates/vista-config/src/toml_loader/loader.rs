//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use tracing::{info, warn};
use vista_common::ConfigError;

use crate::schema::VistaConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// If validation fails, a warning is logged and the default config is
/// returned instead.
pub fn load_from_path(path: &Path) -> Result<VistaConfig, ConfigError> {
    let config = read_from_path(path)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(VistaConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Read and deserialize a TOML file without validating it.
pub fn read_from_path(path: &Path) -> Result<VistaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/vista/config.toml`
/// On Linux: `~/.config/vista/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<VistaConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(VistaConfig::default())
        }
        other => other,
    }
}
