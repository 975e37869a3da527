//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row selection
    /// Highlight the next row. Default: j/↓
    SelectNext,
    /// Highlight the previous row. Default: k/↑
    SelectPrev,

    // Pagination
    /// Go to the next page. Default: l/→/]
    NextPage,
    /// Go to the previous page. Default: h/←/[
    PrevPage,
    /// Go to page 1. Default: g/Home
    FirstPage,
    /// Go to the last page. Default: G/End
    LastPage,

    // Row interaction
    /// Like or unlike the highlighted trip. Default: Space
    ToggleLike,
    /// Show the full origin of the highlighted trip. Default: o
    RevealOrigin,
    /// Show the full destination of the highlighted trip. Default: d
    RevealDestination,
    /// Show the full last update of the highlighted trip. Default: u
    RevealLastUpdate,
    /// Close any open detail popover. Default: Esc
    CloseReveal,

    // Filters
    /// Open the filter modal or focus the inline filter bar. Default: f or /
    OpenFilters,
    /// Remove the last active filter chip. Default: x
    ClearLastFilter,
    /// Remove every active filter. Default: C
    ClearAllFilters,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Fetch the current page again. Default: r
    Refresh,
}

impl KeyAction {
    /// Whether the action changes which page of data is requested.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::NextPage | KeyAction::PrevPage | KeyAction::FirstPage | KeyAction::LastPage
        )
    }
}
