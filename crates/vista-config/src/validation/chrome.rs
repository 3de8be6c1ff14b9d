//! Chrome, sticky and boundary threshold validation.

use crate::schema::VistaConfig;

use super::helpers::validate_range_f64;

/// Validate hide-on-scroll thresholds.
pub(crate) fn validate_chrome(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range_f64(
        errors,
        "chrome.noise_threshold",
        config.chrome.noise_threshold,
        0.0,
        50.0,
    );
    validate_range_f64(
        errors,
        "chrome.activation_threshold",
        config.chrome.activation_threshold,
        0.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        "chrome.chrome_height",
        config.chrome.chrome_height,
        1.0,
        400.0,
    );
}

pub(crate) fn validate_sticky(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range_f64(
        errors,
        "sticky.threshold",
        config.sticky.threshold,
        0.0,
        5000.0,
    );
}

/// Validate overlap boundary distance and its dead-zone.
pub(crate) fn validate_boundary(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range_f64(
        errors,
        "boundary.distance",
        config.boundary.distance,
        0.0,
        10000.0,
    );
    validate_range_f64(
        errors,
        "boundary.dead_zone",
        config.boundary.dead_zone,
        0.0,
        100.0,
    );
}
