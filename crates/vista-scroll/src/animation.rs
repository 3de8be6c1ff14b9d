//! Damped spring that moves a value toward a target.
//!
//! Only one animation is ever in flight per spring: retargeting keeps the
//! current value and velocity and simply swaps the destination, so a header
//! that starts hiding and is then asked to show again turns around smoothly
//! instead of stacking two animations.

use std::time::Duration;

use vista_config::schema::AnimationConfig;

/// Largest integration step (seconds).
const STEP: f64 = 1.0 / 120.0;

/// Frames longer than this jump straight to the target.
const SETTLE_HORIZON: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_threshold: f64,
}

impl SpringParams {
    /// Sub-step that keeps semi-implicit Euler stable: both `h * c / m` and
    /// `h * sqrt(k / m)` stay below 1.
    pub fn stable_step(&self) -> f64 {
        let rate = self.damping / self.mass + (self.stiffness / self.mass).sqrt();
        if rate.is_finite() && rate > 0.0 {
            STEP.min(1.0 / rate)
        } else {
            STEP
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for SpringParams {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
            rest_threshold: config.rest_threshold,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpringAnimation {
    params: SpringParams,
    value: f64,
    velocity: f64,
    target: f64,
    in_flight: bool,
}

impl SpringAnimation {
    /// A spring at rest on `value`.
    pub fn new(value: f64, params: SpringParams) -> Self {
        Self {
            params,
            value,
            velocity: 0.0,
            target: value,
            in_flight: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        !self.in_flight
    }

    /// Point the animation at a new target, overriding any in-flight one.
    pub fn retarget(&mut self, target: f64) {
        if target == self.target && !self.in_flight {
            return;
        }
        self.target = target;
        self.in_flight = self.value != target || self.velocity != 0.0;
    }

    /// Jump to `value` with no motion.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.in_flight = false;
    }

    /// Integrate the spring forward by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        if !self.in_flight {
            return self.value;
        }
        if dt >= SETTLE_HORIZON {
            let target = self.target;
            self.snap_to(target);
            return self.value;
        }

        let SpringParams {
            stiffness,
            damping,
            mass,
            rest_threshold,
        } = self.params;

        let step = self.params.stable_step();
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(step);
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            // Semi-implicit Euler: velocity first, then position.
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;

            if (self.value - self.target).abs() < rest_threshold
                && self.velocity.abs() < rest_threshold
            {
                let target = self.target;
                self.snap_to(target);
                break;
            }
        }
        self.value
    }
}
