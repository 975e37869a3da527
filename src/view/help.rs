//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::TableStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// The overlay displays all keyboard shortcuts grouped by category:
/// - Rows
/// - Pages
/// - Filters
/// - Filter editor
/// - Application
pub fn render_help_overlay(frame: &mut Frame, styles: TableStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.title()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted().add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[
            ("j/↓", "Select next row"),
            ("k/↑", "Select previous row"),
            ("Space", "Like / unlike trip"),
            ("o", "Show full origin"),
            ("d", "Show full destination"),
            ("u", "Show full last update"),
            ("Esc", "Close popover"),
        ],
    ),
    (
        "Pages",
        &[
            ("l/→/]", "Next page"),
            ("h/←/[", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
        ],
    ),
    (
        "Filters",
        &[
            ("f or /", "Open filters"),
            ("x", "Remove last filter"),
            ("C", "Clear all filters"),
        ],
    ),
    (
        "Filter editor",
        &[
            ("Tab/↓", "Next field"),
            ("Shift+Tab/↑", "Previous field"),
            ("Enter", "Apply (modal) / done (inline)"),
            ("Esc", "Cancel (modal) / done (inline)"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Refresh current page"),
            ("?", "Show help overlay"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Build the help content lines grouped by category.
fn build_help_content(styles: TableStyles) -> Vec<Line<'static>> {
    let category_style = styles.title();
    let key_style = styles.input(true).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (i, (category, shortcuts)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, desc) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<13} "), key_style),
                Span::raw(*desc),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
