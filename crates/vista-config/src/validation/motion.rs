//! Validation for gesture resolution, spring animation and the touch guard.

use crate::schema::VistaConfig;

use super::helpers::{validate_positive, validate_range_f64, validate_range_u64};

/// Upper bound on `damping / mass + sqrt(stiffness / mass)` (1/s). Above it
/// the integration sub-step gets too small to animate a frame cheaply.
pub(crate) const MAX_SPRING_RATE: f64 = 2000.0;

pub(crate) fn validate_gesture(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range_f64(
        errors,
        "gesture.momentum_velocity_threshold",
        config.gesture.momentum_velocity_threshold,
        0.0,
        10.0,
    );
    validate_range_u64(
        errors,
        "gesture.settle_timeout_ms",
        config.gesture.settle_timeout_ms,
        0,
        2000,
    );
}

/// Spring parameters must all be strictly positive or the integration diverges.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_positive(
        errors,
        "animation.stiffness",
        config.animation.stiffness,
        5000.0,
    );
    validate_positive(errors, "animation.damping", config.animation.damping, 500.0);
    validate_positive(errors, "animation.mass", config.animation.mass, 100.0);
    validate_positive(
        errors,
        "animation.rest_threshold",
        config.animation.rest_threshold,
        10.0,
    );

    let a = &config.animation;
    if a.stiffness > 0.0 && a.damping > 0.0 && a.mass > 0.0 {
        let rate = a.damping / a.mass + (a.stiffness / a.mass).sqrt();
        if rate.is_finite() && rate > MAX_SPRING_RATE {
            errors.push(format!(
                "animation: damping/mass + sqrt(stiffness/mass) = {rate:.0} exceeds {MAX_SPRING_RATE}; raise mass or lower stiffness/damping"
            ));
        }
    }
}

pub(crate) fn validate_touch_guard(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range_u64(
        errors,
        "touch_guard.window_ms",
        config.touch_guard.window_ms,
        0,
        5000,
    );
}
