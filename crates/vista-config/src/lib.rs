//! Vista scroll-coordination configuration.
//!
//! Provides TOML-based tuning for the scroll session components with full
//! validation. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vista_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{VistaConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use vista_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<VistaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, e.g. a `--config` override.
///
/// Unlike [`load_config`], invalid values are an error rather than a
/// fallback to defaults: the caller asked for this file.
pub fn load_config_from(path: &Path) -> Result<VistaConfig, ConfigError> {
    let config = toml_loader::read_from_path(path)?;
    validation::validate(&config)?;
    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &VistaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
