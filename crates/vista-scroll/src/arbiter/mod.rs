//! Scroll ownership arbitration between nested scrollable regions.

mod operations;
mod types;

pub use types::*;
