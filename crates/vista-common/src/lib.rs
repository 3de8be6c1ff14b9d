pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, ScrollError, TraceError, VistaError};
pub use events::{GestureEvent, ScreenEvent};
pub use id::{new_id, MountId};
pub use types::{RegionId, ScrollSample};

pub type Result<T> = std::result::Result<T, VistaError>;
