//! ScrollSession struct, constructors and read-only accessors.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;
use vista_common::{MountId, RegionId, ScrollError};
use vista_config::schema::VistaConfig;

use super::preset::{ScreenPreset, SessionLayout};
use crate::arbiter::ScrollOwnershipArbiter;
use crate::boundary::BoundaryTracker;
use crate::chrome::{ChromeVisibilityController, StickyThreshold};
use crate::gesture::GestureTracker;
use crate::timer::{Clock, ScopedTimer, SystemClock};
use crate::touch_guard::TouchGuard;

/// What the rendering layer needs after each event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub mount_id: MountId,
    /// Animated header translation; `0` is fully shown.
    pub chrome_offset: f64,
    /// Where the header animation is heading.
    pub chrome_target: f64,
    pub is_visible: bool,
    /// `None` when the screen has no sticky element.
    pub is_sticky: Option<bool>,
    /// `None` when the screen does not track the overlap boundary.
    pub within_overlap: Option<bool>,
    pub active_region: Option<RegionId>,
    pub scroll_enabled: BTreeMap<RegionId, bool>,
    /// `None` when the screen has no guarded background.
    pub background_touch_enabled: Option<bool>,
}

/// Per-mount scroll coordinator.
///
/// Owns one arbiter, one gesture tracker per region, and whichever of the
/// chrome/sticky/boundary components the layout asks for. All state lives
/// here and is dropped with the session.
pub struct ScrollSession<C: Clock = SystemClock> {
    pub(super) mount_id: MountId,
    pub(super) layout: SessionLayout,
    pub(super) clock: C,
    pub(super) arbiter: ScrollOwnershipArbiter,
    pub(super) gestures: BTreeMap<RegionId, GestureTracker>,
    pub(super) settle_timers: BTreeMap<RegionId, ScopedTimer>,
    pub(super) settle_timeout: Duration,
    pub(super) last_seq: BTreeMap<RegionId, u64>,
    pub(super) chrome: Option<ChromeVisibilityController>,
    pub(super) sticky: Option<StickyThreshold>,
    pub(super) boundary: Option<BoundaryTracker>,
    pub(super) touch_guard: TouchGuard,
    pub(super) last_frame: Instant,
}

impl ScrollSession<SystemClock> {
    /// Mount a session for one of the known screens on the wall clock.
    pub fn mount(preset: ScreenPreset, config: &VistaConfig) -> Result<Self, ScrollError> {
        Self::with_layout(preset.layout(), config, SystemClock)
    }
}

impl<C: Clock> ScrollSession<C> {
    pub fn mount_with_clock(
        preset: ScreenPreset,
        config: &VistaConfig,
        clock: C,
    ) -> Result<Self, ScrollError> {
        Self::with_layout(preset.layout(), config, clock)
    }

    /// Mount a session for an arbitrary layout.
    ///
    /// Fails if the layout has no regions, repeats one, or names a content
    /// or guarded region it does not contain.
    pub fn with_layout(
        layout: SessionLayout,
        config: &VistaConfig,
        clock: C,
    ) -> Result<Self, ScrollError> {
        let arbiter = ScrollOwnershipArbiter::new(layout.regions.iter().copied())?;
        if !arbiter.contains(layout.content_region) {
            return Err(ScrollError::UnknownRegion(layout.content_region));
        }
        if let Some(guarded) = layout.guarded_region {
            if !arbiter.contains(guarded) {
                return Err(ScrollError::UnknownRegion(guarded));
            }
        }

        let gestures = layout
            .regions
            .iter()
            .map(|&region| (region, GestureTracker::from_config(&config.gesture)))
            .collect();
        let settle_timers = layout
            .regions
            .iter()
            .map(|&region| (region, ScopedTimer::new("settle")))
            .collect();

        let chrome = layout
            .chrome
            .then(|| ChromeVisibilityController::from_config(&config.chrome, &config.animation));
        let sticky = layout
            .sticky
            .then(|| StickyThreshold::from_config(&config.sticky));
        let boundary = layout
            .boundary
            .then(|| BoundaryTracker::from_config(&config.boundary));

        let mount_id = MountId::new();
        let last_frame = clock.now();
        info!(
            mount = mount_id.short(),
            screen = %layout.label,
            regions = layout.regions.len(),
            "scroll session mounted"
        );

        Ok(Self {
            mount_id,
            layout,
            clock,
            arbiter,
            gestures,
            settle_timers,
            settle_timeout: Duration::from_millis(config.gesture.settle_timeout_ms),
            last_seq: BTreeMap::new(),
            chrome,
            sticky,
            boundary,
            touch_guard: TouchGuard::from_config(&config.touch_guard),
            last_frame,
        })
    }

    // -- Accessors --

    pub fn mount_id(&self) -> &MountId {
        &self.mount_id
    }

    pub fn layout(&self) -> &SessionLayout {
        &self.layout
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn arbiter(&self) -> &ScrollOwnershipArbiter {
        &self.arbiter
    }

    pub fn chrome(&self) -> Option<&ChromeVisibilityController> {
        self.chrome.as_ref()
    }

    pub fn boundary(&self) -> Option<&BoundaryTracker> {
        self.boundary.as_ref()
    }

    pub fn gesture(&self, region: RegionId) -> Option<&GestureTracker> {
        self.gestures.get(&region)
    }

    pub fn scroll_enabled(&self, region: RegionId) -> bool {
        self.arbiter.scroll_enabled(region)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let now = self.clock.now();
        let (chrome_offset, chrome_target, is_visible) = match &self.chrome {
            Some(chrome) => (
                chrome.chrome_offset(),
                chrome.target_offset(),
                chrome.is_visible(),
            ),
            None => (0.0, 0.0, true),
        };

        SessionSnapshot {
            mount_id: self.mount_id.clone(),
            chrome_offset,
            chrome_target,
            is_visible,
            is_sticky: self.sticky.as_ref().map(StickyThreshold::is_sticky),
            within_overlap: self.boundary.as_ref().map(BoundaryTracker::within_overlap),
            active_region: self.arbiter.active_region(),
            scroll_enabled: self
                .arbiter
                .regions()
                .iter()
                .map(|&region| (region, self.arbiter.scroll_enabled(region)))
                .collect(),
            background_touch_enabled: self.layout.guarded_region.map(|region| {
                self.arbiter.scroll_enabled(region) && !self.touch_guard.is_suppressing(now)
            }),
        }
    }
}
