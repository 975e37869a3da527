//! Bottom status line: fetch state on the left, key hints on the right.

use super::styles::TableStyles;
use crate::state::AppState;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = "f filters  ? help  q quit ";

/// Left-hand status text and whether it reports a failure.
pub fn status_text(state: &AppState) -> (String, bool) {
    if state.loading {
        return ("Loading...".to_string(), false);
    }
    if let Some(error) = &state.last_error {
        return (format!("Error: {error}"), true);
    }
    let count = state.rows().len();
    let liked = state.liked().len();
    let noun = if count == 1 { "trip" } else { "trips" };
    if liked == 0 {
        (format!("{count} {noun} on this page"), false)
    } else {
        (format!("{count} {noun} on this page, {liked} liked"), false)
    }
}

pub fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect, styles: TableStyles) {
    if area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();

    let hints_width = HINTS.width() as u16;
    let show_hints = area.width > hints_width * 2;
    let text_width = if show_hints {
        area.width - hints_width
    } else {
        area.width
    };

    let (text, failed) = status_text(state);
    let style = if failed { styles.error() } else { styles.muted() };
    buf.set_line(
        area.x,
        area.y,
        &Line::from(Span::styled(format!(" {text}"), style)),
        text_width,
    );

    if show_hints {
        buf.set_line(
            area.right() - hints_width,
            area.y,
            &Line::from(Span::styled(HINTS, styles.muted())),
            hints_width,
        );
    }
}
