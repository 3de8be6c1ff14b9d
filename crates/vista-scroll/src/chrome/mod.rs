//! Chrome (header, search bar) visibility derived from scroll position.

mod controller;
mod sticky;

pub use controller::*;
pub use sticky::*;
