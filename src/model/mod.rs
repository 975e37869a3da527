//! Domain model types (pure).
//!
//! Records are validated when they are decoded; nothing downstream handles
//! untyped JSON.

pub mod error;
pub mod filter;
pub mod key_action;
pub mod page;
pub mod timestamp;
pub mod trip;

// Re-export for convenience
pub use error::{AppError, FetchError};
pub use filter::{FilterField, FilterMap};
pub use key_action::KeyAction;
pub use page::{Pagination, TripPage};
pub use timestamp::{InvalidTimestamp, Timestamp};
pub use trip::{Trip, TripKey, TripStatus};
