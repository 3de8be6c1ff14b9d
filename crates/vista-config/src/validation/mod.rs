//! Full configuration validation.
//!
//! Validates all numeric ranges. Each domain has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod chrome;
mod helpers;
mod motion;


use vista_common::ConfigError;

use crate::schema::VistaConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VistaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chrome::validate_chrome(&mut errors, config);
    chrome::validate_sticky(&mut errors, config);
    chrome::validate_boundary(&mut errors, config);
    motion::validate_gesture(&mut errors, config);
    motion::validate_animation(&mut errors, config);
    motion::validate_touch_guard(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
