//! Detail popover showing the full text of a truncated cell.

use super::format::wrap_to_width;
use super::layout::ScreenLayout;
use super::styles::TableStyles;
use crate::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

/// Draw the open popover, if any, over everything but the modal.
pub fn render_popover(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    styles: TableStyles,
) {
    let (Some(area), Some(text)) = (layout.popover, state.revealed_text()) else {
        return;
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = wrap_to_width(text, inner_width)
        .into_iter()
        .map(Line::from)
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles.title())
                .padding(Padding::horizontal(1)),
        ),
        area,
    );
}
