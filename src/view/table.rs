//! Trip table rendering: header, rows, loading and empty states.
//!
//! Every row is two lines tall. Cells are drawn straight into the buffer at
//! the column spans from [`TableLayout`], so the mouse handler hit-tests the
//! exact cells that are on screen.

use super::filter_bar::CLEAR_FILTERS_LABEL;
use super::format::{date_and_time, ellipsize, truncate_last_update, DisplayZone};
use super::layout::{empty_state_top, Column, ScreenLayout, TableLayout, HEART_WIDTH};
use super::styles::TableStyles;
use crate::model::Trip;
use crate::state::{AppState, EmptyState};
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};
use unicode_width::UnicodeWidthStr;

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_MATCHES_TITLE: &str = "No matches found";
pub const NO_MATCHES_TEXT: &str = "We couldn't find any results matching your search criteria";
pub const NO_TRIPS_TITLE: &str = "No trips available";
pub const NO_TRIPS_TEXT: &str = "There are currently no trips in the system";

const HEART_LIKED: &str = "♥ ";
const HEART_UNLIKED: &str = "♡ ";
const ROUTE_MARK: &str = "● ";
const DELAYED_BADGE: &str = " Delayed ";
const COMMENTS_ICON: &str = "✉";

pub fn render_table(
    frame: &mut Frame,
    state: &AppState,
    layout: &ScreenLayout,
    styles: TableStyles,
    zone: DisplayZone,
) {
    let table = &layout.table;
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.muted()),
        table.block,
    );

    let buf = frame.buffer_mut();
    render_header(buf, table, styles);

    if state.loading {
        render_centered(
            buf,
            table.body,
            table.body.y + table.body.height / 2,
            LOADING_TEXT,
            styles.header(),
        );
        return;
    }

    match state.empty_state() {
        Some(EmptyState::NoMatches) => {
            let top = empty_state_top(table.body);
            render_centered(buf, table.body, top, NO_MATCHES_TITLE, styles.header());
            render_centered(buf, table.body, top + 1, NO_MATCHES_TEXT, styles.muted());
            if let Some(button) = layout.empty_clear {
                buf.set_line(
                    button.x,
                    button.y,
                    &Line::from(Span::styled(CLEAR_FILTERS_LABEL, styles.button(true))),
                    button.width,
                );
            }
        }
        Some(EmptyState::NoTrips) => {
            let top = empty_state_top(table.body);
            render_centered(buf, table.body, top, NO_TRIPS_TITLE, styles.header());
            render_centered(buf, table.body, top + 1, NO_TRIPS_TEXT, styles.muted());
        }
        None => {
            for (row, trip) in state.rows().iter().enumerate() {
                render_row(buf, table, row, trip, state, styles, zone);
            }
        }
    }
}

fn render_header(buf: &mut Buffer, table: &TableLayout, styles: TableStyles) {
    if table.header.height == 0 {
        return;
    }
    for column in Column::ALL {
        let span = table.column(column);
        buf.set_line(
            span.x,
            table.header.y,
            &Line::from(Span::styled(column.title(), styles.header())),
            span.width,
        );
    }
}

fn render_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.bottom() {
        return;
    }
    let text = ellipsize(text, area.width as usize);
    let x = area.x + area.width.saturating_sub(text.width() as u16) / 2;
    buf.set_line(x, y, &Line::from(Span::styled(text, style)), area.width);
}

/// Draw `spans` into one cell line, cut to the column width.
fn put(
    buf: &mut Buffer,
    table: &TableLayout,
    row: usize,
    column: Column,
    line: u16,
    spans: Vec<Span>,
) {
    if let Some(cell) = table.cell_line(row, column, line) {
        buf.set_line(cell.x, cell.y, &Line::from(spans), cell.width);
    }
}

fn render_row(
    buf: &mut Buffer,
    table: &TableLayout,
    row: usize,
    trip: &Trip,
    state: &AppState,
    styles: TableStyles,
    zone: DisplayZone,
) {
    let Some(row_rect) = table.row_rect(row) else {
        return;
    };
    let width = |column: Column| table.column(column).width as usize;

    // Name
    let liked = state.is_liked(row);
    let heart = if liked { HEART_LIKED } else { HEART_UNLIKED };
    let name_width = width(Column::Name).saturating_sub(HEART_WIDTH as usize);
    put(
        buf,
        table,
        row,
        Column::Name,
        0,
        vec![
            Span::styled(heart, styles.heart(liked)),
            Span::raw(ellipsize(&trip.name, name_width)),
        ],
    );

    // Status
    let status = trip.display_status();
    put(
        buf,
        table,
        row,
        Column::Status,
        0,
        vec![Span::styled(status.label(), styles.status(status))],
    );

    // Route
    let route_width = width(Column::Route).saturating_sub(ROUTE_MARK.width());
    put(
        buf,
        table,
        row,
        Column::Route,
        0,
        vec![
            Span::styled(ROUTE_MARK, styles.origin_flag()),
            Span::raw(ellipsize(&trip.origin, route_width)),
        ],
    );
    put(
        buf,
        table,
        row,
        Column::Route,
        1,
        vec![
            Span::styled(ROUTE_MARK, styles.destination_flag()),
            Span::raw(ellipsize(&trip.destination_name, route_width)),
        ],
    );

    // Created / ETA
    for (column, ts) in [(Column::Created, &trip.created_at), (Column::Eta, &trip.eta)] {
        let (date, time) = date_and_time(ts, zone);
        put(buf, table, row, column, 0, vec![Span::raw(date)]);
        put(buf, table, row, column, 1, vec![Span::styled(time, styles.muted())]);
    }

    // Vehicle info
    let vehicle = format!("{} | {}", trip.vehicle_number, trip.tracking_mode);
    let driver = format!("{} ({})", trip.driver_number, trip.tel_operator);
    put(
        buf,
        table,
        row,
        Column::Vehicle,
        0,
        vec![Span::raw(ellipsize(&vehicle, width(Column::Vehicle)))],
    );
    put(
        buf,
        table,
        row,
        Column::Vehicle,
        1,
        vec![Span::styled(
            ellipsize(&driver, width(Column::Vehicle)),
            styles.muted(),
        )],
    );

    // Last update
    put(
        buf,
        table,
        row,
        Column::LastUpdate,
        0,
        vec![Span::raw(truncate_last_update(&trip.last_update))],
    );
    if trip.is_delayed() {
        put(
            buf,
            table,
            row,
            Column::LastUpdate,
            1,
            vec![Span::styled(DELAYED_BADGE, styles.delayed_badge())],
        );
    }

    // Comments
    put(
        buf,
        table,
        row,
        Column::Comments,
        0,
        vec![Span::styled(COMMENTS_ICON, styles.muted())],
    );

    if state.selected() == Some(row) {
        buf.set_style(row_rect, styles.selected_row());
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
