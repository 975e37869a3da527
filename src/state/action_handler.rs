//! Keyboard action handler.
//!
//! Pure transitions for every bound action. Quit and Refresh need the shell
//! (terminal and fetcher) and are handled by the event loop before dispatch.

use crate::model::KeyAction;
use crate::state::{AppState, RevealField};

/// Apply a bound action to the state.
///
/// Row-scoped actions (like, reveal) target the highlighted row and do nothing
/// when the page is empty.
pub fn handle_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::SelectNext => state.select_next(),
        KeyAction::SelectPrev => state.select_prev(),

        KeyAction::NextPage => {
            state.next_page();
        }
        KeyAction::PrevPage => {
            state.prev_page();
        }
        KeyAction::FirstPage => {
            state.first_page();
        }
        KeyAction::LastPage => {
            state.last_page();
        }

        KeyAction::ToggleLike => {
            if let Some(row) = state.selected() {
                state.toggle_like(row);
            }
        }
        KeyAction::RevealOrigin => reveal_selected(state, RevealField::Origin),
        KeyAction::RevealDestination => reveal_selected(state, RevealField::Destination),
        KeyAction::RevealLastUpdate => reveal_selected(state, RevealField::LastUpdate),
        KeyAction::CloseReveal => state.reveal.close(),

        KeyAction::OpenFilters => state.open_filter_editor(),
        KeyAction::ClearLastFilter => {
            state.clear_last_filter();
        }
        KeyAction::ClearAllFilters => {
            state.clear_all_filters();
        }

        KeyAction::Help => state.help_visible = !state.help_visible,

        // Handled by the event loop
        KeyAction::Quit | KeyAction::Refresh => {}
    }
}

fn reveal_selected(state: &mut AppState, field: RevealField) {
    if let Some(row) = state.selected() {
        state.toggle_reveal(row, field);
    }
}
