//! Filter modal rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use super::filter_bar::render_field_input;
use super::layout::ScreenLayout;
use super::styles::TableStyles;
use crate::state::AppState;

pub const APPLY_LABEL: &str = "[ Apply Filters ]";
pub const CANCEL_LABEL: &str = "[ Cancel ]";

/// Render the staged filter editor overlay.
///
/// Displays a centered modal with:
/// - One labelled input per filter field, showing the staged draft
/// - Cancel and Apply Filters buttons
///
/// Only renders when the modal layout is present (modal mode, editor open).
pub fn render_filter_modal(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    styles: TableStyles,
) {
    let Some(modal) = &layout.modal else {
        return;
    };

    frame.render_widget(Clear, modal.area);
    frame.render_widget(
        Block::default()
            .title(
                Line::from(Span::styled(" Filters ", styles.title())).alignment(Alignment::Center),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
        modal.area,
    );

    for input in &modal.fields {
        let focused = state.editor.field() == input.field;
        render_field_input(
            frame,
            state,
            input,
            state.editor.value(input.field),
            focused,
            styles,
        );
    }

    let buf = frame.buffer_mut();
    if let Some(cancel) = modal.cancel {
        buf.set_line(
            cancel.x,
            cancel.y,
            &Line::from(Span::styled(CANCEL_LABEL, styles.muted())),
            cancel.width,
        );
    }
    if let Some(apply) = modal.apply {
        buf.set_line(
            apply.x,
            apply.y,
            &Line::from(Span::styled(APPLY_LABEL, styles.button(true))),
            apply.width,
        );
    }
}

#[cfg(test)]
#[path = "filter_modal_tests.rs"]
mod tests;
