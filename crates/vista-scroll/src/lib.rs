//! Scroll coordination for screens that stack a scrollable sheet over a
//! scrollable background.
//!
//! The components are plain synchronous state machines: feed them scroll
//! samples and gesture lifecycle events, read back `scroll_enabled` flags,
//! chrome offsets and overlap booleans. [`ScrollSession`] wires one of each
//! together for a mounted screen.

pub mod animation;
pub mod arbiter;
pub mod boundary;
pub mod chrome;
pub mod gesture;
pub mod session;
pub mod timer;
pub mod touch_guard;

pub use animation::{SpringAnimation, SpringParams};
pub use arbiter::{OwnershipState, ScrollOwnershipArbiter};
pub use boundary::{within_overlap, BoundaryState, BoundaryTracker};
pub use chrome::{is_sticky, ChromeState, ChromeVisibilityController, StickyThreshold, VisibilityState};
pub use gesture::{GesturePhase, GestureTracker, GestureTransition};
pub use session::{ScreenPreset, ScrollSession, SessionLayout, SessionSnapshot};
pub use timer::{Clock, ManualClock, ScopedTimer, SystemClock};
pub use touch_guard::TouchGuard;
