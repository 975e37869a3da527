//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title line (title + Filters button).
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the active filter chip line.
pub const CHIP_BAR_HEIGHT: u16 = 1;

/// Height of the inline filter bar (border + labels + inputs).
pub const INLINE_FILTER_BAR_HEIGHT: u16 = 4;

/// Lines per table row: every cell renders a primary and a secondary line.
pub const ROW_HEIGHT: u16 = 2;

/// Height of the pagination control.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for fetch status, errors and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Fixed width of the filter modal.
pub const FILTER_MODAL_WIDTH: u16 = 64;

/// Maximum width of a detail popover, borders included.
pub const POPOVER_MAX_WIDTH: u16 = 44;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
