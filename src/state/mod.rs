//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod filter_editor;
pub mod filter_editor_handler;
pub mod liked;
pub mod pagination;
pub mod reveal;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, EmptyState};
pub use filter_editor::{FilterEditor, FilterMode};
pub use filter_editor_handler::handle_filter_editor_key;
pub use liked::LikedSet;
pub use reveal::{Reveal, RevealField, RevealMode, RevealState};
