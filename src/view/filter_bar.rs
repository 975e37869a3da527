//! Title line, active filter chips and the inline filter bar.

use super::format::ellipsize;
use super::layout::{FieldInput, ScreenLayout};
use super::styles::TableStyles;
use crate::model::FilterField;
use crate::state::AppState;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE: &str = " Data Overview";
pub const CLEAR_FILTERS_LABEL: &str = "[ Clear filters ]";

/// Columns between two chips.
pub const CHIP_GAP: u16 = 2;

/// Longest filter value shown in a chip before it is cut with `…`.
const CHIP_VALUE_MAX_WIDTH: usize = 24;

const FILTERS_BUTTON_OPEN: &str = "[ Filters";
const FILTERS_BUTTON_CLOSE: &str = " ]";

/// Chip text: `field: value ×`.
pub fn chip_text(field: FilterField, value: &str) -> String {
    format!("{}: {} ×", field.key(), ellipsize(value, CHIP_VALUE_MAX_WIDTH))
}

/// Count badge on the Filters button; hidden when no filter is active.
fn badge_text(count: usize) -> Option<String> {
    (count > 0).then(|| format!(" {count} "))
}

pub fn filters_button_width(count: usize) -> u16 {
    let badge = badge_text(count).map_or(0, |b| b.width() + 1);
    (FILTERS_BUTTON_OPEN.width() + badge + FILTERS_BUTTON_CLOSE.width()) as u16
}

/// Title on the left, Filters button with count badge on the right.
pub fn render_title_bar(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    styles: TableStyles,
) {
    let buf = frame.buffer_mut();
    buf.set_line(
        layout.title.x,
        layout.title.y,
        &Line::from(Span::styled(TITLE, styles.title())),
        layout.title.width,
    );

    if let Some(button) = layout.filters_button {
        let mut spans = vec![Span::styled(FILTERS_BUTTON_OPEN, styles.button(true))];
        if let Some(badge) = badge_text(state.filters().len()) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(badge, styles.badge()));
        }
        spans.push(Span::styled(FILTERS_BUTTON_CLOSE, styles.button(true)));
        buf.set_line(button.x, button.y, &Line::from(spans), button.width);
    }
}

/// Active filters as removable chips, then a Clear filters button.
pub fn render_chip_bar(frame: &mut Frame, layout: &ScreenLayout, styles: TableStyles) {
    let buf = frame.buffer_mut();
    for chip in &layout.chips {
        let key = chip.field.key();
        let rest = chip.text.strip_prefix(key).unwrap_or(&chip.text);
        let line = Line::from(vec![
            Span::styled(key, styles.chip_key()),
            Span::styled(rest.to_string(), styles.chip()),
        ]);
        buf.set_line(chip.area.x, chip.area.y, &line, chip.area.width);
    }
    if let Some(clear) = layout.chip_clear {
        buf.set_line(
            clear.x,
            clear.y,
            &Line::from(Span::styled(CLEAR_FILTERS_LABEL, styles.button(true))),
            clear.width,
        );
    }
}

/// One input per field above the table. Edits here apply immediately.
pub fn render_inline_bar(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    styles: TableStyles,
) {
    let Some(bar) = layout.inline_bar else {
        return;
    };
    let focused = state.editor.is_open();
    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(styles.input(focused));
    frame.render_widget(block, bar);

    for input in &layout.inline_inputs {
        let value = if focused {
            state.editor.value(input.field)
        } else {
            state.filters().get(input.field).unwrap_or("")
        };
        let is_focused = focused && state.editor.field() == input.field;
        render_field_input(frame, state, input, value, is_focused, styles);
    }
}

/// Label line and input line of one field; shared with the modal.
pub fn render_field_input(
    frame: &mut Frame,
    state: &AppState,
    input: &FieldInput,
    value: &str,
    focused: bool,
    styles: TableStyles,
) {
    let label_style = if focused {
        styles.input(true).add_modifier(Modifier::BOLD)
    } else {
        styles.header()
    };
    let buf = frame.buffer_mut();
    buf.set_line(
        input.label.x,
        input.label.y,
        &Line::from(Span::styled(
            ellipsize(&input.field.label(), input.label.width as usize),
            label_style,
        )),
        input.label.width,
    );

    let width = input.input.width as usize;
    if value.is_empty() {
        buf.set_line(
            input.input.x,
            input.input.y,
            &Line::from(Span::styled(
                ellipsize(&input.field.placeholder(), width),
                styles.muted(),
            )),
            input.input.width,
        );
    } else {
        let cursor = if focused {
            state.editor.cursor()
        } else {
            value.chars().count()
        };
        let (visible, _) = input_window(value, cursor, width);
        buf.set_line(
            input.input.x,
            input.input.y,
            &Line::from(Span::styled(visible, styles.input(focused))),
            input.input.width,
        );
    }
    buf.set_style(
        input.input,
        Style::default().add_modifier(Modifier::UNDERLINED),
    );

    if focused {
        let (_, cursor_x) = input_window(value, state.editor.cursor(), width);
        frame.set_cursor_position(Position::new(
            input.input.x + cursor_x.min(input.input.width.saturating_sub(1)),
            input.input.y,
        ));
    }
}

/// Part of `value` visible in a `width`-column input so that the cursor
/// (a char index) stays on screen, and the cursor's column within it.
pub fn input_window(value: &str, cursor: usize, width: usize) -> (String, u16) {
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());
    let width = width.max(1);

    let col = |from: usize, to: usize| -> usize {
        chars[from..to].iter().map(|c| c.width().unwrap_or(0)).sum()
    };
    let mut start = 0;
    while start < cursor && col(start, cursor) >= width {
        start += 1;
    }

    let mut used = 0;
    let mut visible = String::new();
    for ch in &chars[start..] {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(*ch);
    }
    (visible, col(start, cursor) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_text_has_key_value_and_cross() {
        assert_eq!(chip_text(FilterField::Origin, "Mumbai"), "origin: Mumbai ×");
    }

    #[test]
    fn chip_text_cuts_long_values() {
        let text = chip_text(FilterField::Name, &"x".repeat(40));
        assert!(text.contains('…'));
        assert!(text.ends_with(" ×"));
    }

    #[test]
    fn button_grows_with_badge() {
        assert_eq!(filters_button_width(0), "[ Filters ]".width() as u16);
        assert_eq!(filters_button_width(3), "[ Filters  3  ]".width() as u16);
    }

    #[test]
    fn input_window_shows_whole_short_value() {
        assert_eq!(input_window("Pune", 4, 10), ("Pune".to_string(), 4));
        assert_eq!(input_window("Pune", 1, 10), ("Pune".to_string(), 1));
    }

    #[test]
    fn input_window_scrolls_to_keep_cursor_visible() {
        let (visible, cursor_x) = input_window("abcdefghij", 10, 4);
        assert_eq!(visible, "hij");
        assert_eq!(cursor_x, 3);
    }
}
