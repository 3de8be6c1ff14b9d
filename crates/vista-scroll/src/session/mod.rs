//! Per-screen scroll session.
//!
//! A session is created when a screen mounts, receives every scroll sample,
//! gesture lifecycle event and tap the screen sees, and hands back a
//! [`SessionSnapshot`] for rendering. Hiding the screen resets it; unmounting
//! consumes it.

mod dispatch;
mod lifecycle;
mod preset;
mod types;

pub use preset::{ScreenPreset, SessionLayout};
pub use types::{ScrollSession, SessionSnapshot};
