//! Pagination control rendering.

use super::layout::ScreenLayout;
use super::styles::TableStyles;
use crate::state::AppState;
use ratatui::prelude::*;

pub fn prev_label() -> &'static str {
    "[ Previous ]"
}

pub fn next_label() -> &'static str {
    "[ Next ]"
}

pub fn status_label(current: u32, total: u32) -> String {
    format!("Page {current} of {total}")
}

pub fn page_button_label(page: u32) -> String {
    format!(" {page} ")
}

/// Prev/Next, `Page N of M`, and the page-number window.
///
/// Disabled buttons are still drawn, dimmed; the click handler checks the
/// same predicates before acting.
pub fn render_pagination(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    styles: TableStyles,
) {
    let pagination = &layout.pagination;
    let buf = frame.buffer_mut();

    let mut put = |rect: Option<Rect>, text: String, style: Style| {
        if let Some(rect) = rect {
            buf.set_line(rect.x, rect.y, &Line::from(Span::styled(text, style)), rect.width);
        }
    };

    put(
        pagination.prev,
        prev_label().to_string(),
        styles.button(state.can_prev()),
    );
    put(
        pagination.label,
        status_label(state.current_page(), state.total_pages()),
        Style::default(),
    );
    put(
        pagination.next,
        next_label().to_string(),
        styles.button(state.can_next()),
    );

    for (page, rect) in &pagination.pages {
        let style = if *page == state.current_page() {
            styles.active_page()
        } else {
            styles.muted()
        };
        put(Some(*rect), page_button_label(*page), style);
    }
}
