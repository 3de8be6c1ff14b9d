//! Configuration schema types for Vista.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the screens ship with.

mod animation;
mod boundary;
mod chrome;
mod gesture;
mod system;

pub use animation::*;
pub use boundary::*;
pub use chrome::*;
pub use gesture::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Vista.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VistaConfig {
    pub chrome: ChromeConfig,
    pub sticky: StickyConfig,
    pub boundary: BoundaryConfig,
    pub gesture: GestureConfig,
    pub animation: AnimationConfig,
    pub touch_guard: TouchGuardConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
