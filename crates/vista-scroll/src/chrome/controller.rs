//! Hide-on-scroll-down / show-on-scroll-up state machine for headers.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vista_config::schema::{AnimationConfig, ChromeConfig};

use crate::animation::{SpringAnimation, SpringParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeState {
    Shown,
    Hidden,
}

/// Snapshot of the controller for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityState {
    /// Current (animated) translation of the chrome; `0` is fully shown.
    pub chrome_offset: f64,
    pub is_visible: bool,
    pub last_scroll_offset: f64,
}

/// Derives chrome visibility from the content region's scroll offsets.
///
/// Transitions only retarget the spring; the caller advances it once per
/// frame with [`ChromeVisibilityController::advance`].
#[derive(Debug, Clone)]
pub struct ChromeVisibilityController {
    config: ChromeConfig,
    state: ChromeState,
    last_scroll_offset: f64,
    spring: SpringAnimation,
}

impl ChromeVisibilityController {
    pub fn new(config: ChromeConfig, spring: SpringParams) -> Self {
        Self {
            config,
            state: ChromeState::Shown,
            last_scroll_offset: 0.0,
            spring: SpringAnimation::new(0.0, spring),
        }
    }

    pub fn from_config(chrome: &ChromeConfig, animation: &AnimationConfig) -> Self {
        Self::new(chrome.clone(), SpringParams::from(animation))
    }

    pub fn chrome_state(&self) -> ChromeState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ChromeState::Shown
    }

    pub fn chrome_offset(&self) -> f64 {
        self.spring.value()
    }

    /// Where the chrome is heading: `0` when shown, `-chrome_height` when hidden.
    pub fn target_offset(&self) -> f64 {
        match self.state {
            ChromeState::Shown => 0.0,
            ChromeState::Hidden => -self.config.chrome_height,
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }

    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            chrome_offset: self.chrome_offset(),
            is_visible: self.is_visible(),
            last_scroll_offset: self.last_scroll_offset,
        }
    }

    /// Feed one scroll offset. Returns the new state if it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ChromeState> {
        let delta = offset - self.last_scroll_offset;

        if self.config.reset_at_top && offset <= 0.0 {
            self.last_scroll_offset = offset;
            return self.transition(ChromeState::Shown, offset);
        }

        if delta.abs() < self.config.noise_threshold {
            if self.config.track_ignored_samples {
                self.last_scroll_offset = offset;
            }
            return None;
        }
        self.last_scroll_offset = offset;

        match self.state {
            ChromeState::Shown if delta > 0.0 && offset > self.config.activation_threshold => {
                self.transition(ChromeState::Hidden, offset)
            }
            ChromeState::Hidden if delta < 0.0 => self.transition(ChromeState::Shown, offset),
            _ => None,
        }
    }

    /// Step the chrome animation by one frame and return the offset to render.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.spring.advance(dt)
    }

    /// Back to the freshly mounted state: shown, not animating.
    pub fn reset(&mut self) {
        self.state = ChromeState::Shown;
        self.last_scroll_offset = 0.0;
        self.spring.snap_to(0.0);
    }

    fn transition(&mut self, next: ChromeState, offset: f64) -> Option<ChromeState> {
        if self.state == next {
            return None;
        }
        self.state = next;
        self.spring.retarget(self.target_offset());
        debug!(state = ?next, offset, "chrome visibility changed");
        Some(next)
    }
}

impl Default for ChromeVisibilityController {
    fn default() -> Self {
        Self::from_config(&ChromeConfig::default(), &AnimationConfig::default())
    }
}
