//! Screen geometry and mouse hit-testing.
//!
//! [`ScreenLayout::compute`] is the single source of truth for where every
//! clickable element sits. The renderers draw into these rects and the mouse
//! handler resolves clicks against the same rects, so the two cannot drift.

use super::constants::{
    CHIP_BAR_HEIGHT, FILTER_MODAL_WIDTH, INLINE_FILTER_BAR_HEIGHT, PAGINATION_BAR_HEIGHT,
    POPOVER_MAX_WIDTH, ROW_HEIGHT, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT,
};
use super::filter_bar::{chip_text, filters_button_width, CLEAR_FILTERS_LABEL, CHIP_GAP};
use super::filter_modal::{APPLY_LABEL, CANCEL_LABEL};
use super::format::wrap_to_width;
use super::pagination::{next_label, page_button_label, prev_label, status_label};
use crate::model::FilterField;
use crate::state::pagination::page_window;
use crate::state::{AppState, EmptyState, FilterMode, Reveal, RevealField};
use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

// ===== Columns =====

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Status,
    Route,
    Created,
    Eta,
    Vehicle,
    LastUpdate,
    Comments,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Name,
        Column::Status,
        Column::Route,
        Column::Created,
        Column::Eta,
        Column::Vehicle,
        Column::LastUpdate,
        Column::Comments,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Status => "Status",
            Column::Route => "Route",
            Column::Created => "Created",
            Column::Eta => "ETA",
            Column::Vehicle => "Vehicle Info",
            Column::LastUpdate => "Last Update",
            Column::Comments => "",
        }
    }

    fn constraint(self) -> Constraint {
        match self {
            Column::Name => Constraint::Length(16),
            Column::Status => Constraint::Length(22),
            Column::Route => Constraint::Fill(1),
            Column::Created | Column::Eta => Constraint::Length(18),
            Column::Vehicle => Constraint::Length(24),
            Column::LastUpdate => Constraint::Length(13),
            Column::Comments => Constraint::Length(2),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Width of the heart glyph plus its trailing space in the Name column.
pub const HEART_WIDTH: u16 = 2;

// ===== Hit targets =====

/// What a mouse position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    FiltersButton,
    ChipRemove(FilterField),
    ClearFilters,
    InlineInput(FilterField),
    ModalInput(FilterField),
    ModalApply,
    ModalCancel,
    Like(usize),
    Reveal(Reveal),
    Row(usize),
    PrevPage,
    NextPage,
    Page(u32),
    Popover,
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Clip a one-line rect to `bounds`; `None` when nothing is left.
fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    (clipped.width > 0 && clipped.height > 0).then_some(clipped)
}

// ===== Table =====

/// Geometry of the table: header, body and column spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Outer bordered area.
    pub block: Rect,
    pub header: Rect,
    pub body: Rect,
    /// Column spans; only `x` and `width` are meaningful.
    pub columns: Vec<Rect>,
    /// First row (index into the page) drawn at the top of the body.
    pub first_row: usize,
    /// Rows that fit in the body.
    pub visible_rows: usize,
    /// Rows actually drawn (0 while loading or showing an empty state).
    pub row_count: usize,
}

impl TableLayout {
    fn compute(block: Rect, shown_rows: usize, selected: Option<usize>) -> Self {
        let inner = Rect {
            x: block.x.saturating_add(1),
            y: block.y.saturating_add(1),
            width: block.width.saturating_sub(2),
            height: block.height.saturating_sub(2),
        };
        let header = Rect { height: inner.height.min(1), ..inner };
        let body = Rect {
            y: inner.y + header.height,
            height: inner.height - header.height,
            ..inner
        };

        let columns = Layout::horizontal(Column::ALL.map(Column::constraint))
            .spacing(1)
            .split(inner)
            .to_vec();

        let visible_rows = (body.height / ROW_HEIGHT) as usize;
        let first_row = match selected {
            Some(sel) if visible_rows > 0 && sel >= visible_rows => sel + 1 - visible_rows,
            _ => 0,
        };
        let row_count = shown_rows.saturating_sub(first_row).min(visible_rows);

        Self {
            block,
            header,
            body,
            columns,
            first_row,
            visible_rows,
            row_count,
        }
    }

    /// Span of a column.
    pub fn column(&self, column: Column) -> Rect {
        self.columns
            .get(column.index())
            .copied()
            .unwrap_or_default()
    }

    /// Full rect of a drawn row (both lines), by page index.
    pub fn row_rect(&self, row: usize) -> Option<Rect> {
        let slot = row.checked_sub(self.first_row)?;
        if slot >= self.row_count {
            return None;
        }
        Some(Rect {
            x: self.body.x,
            y: self.body.y + slot as u16 * ROW_HEIGHT,
            width: self.body.width,
            height: ROW_HEIGHT,
        })
    }

    /// One line of one cell.
    pub fn cell_line(&self, row: usize, column: Column, line: u16) -> Option<Rect> {
        let row_rect = self.row_rect(row)?;
        let col = self.column(column);
        Some(Rect {
            x: col.x,
            y: row_rect.y + line.min(ROW_HEIGHT - 1),
            width: col.width,
            height: 1,
        })
    }

    /// Line of the cell a popover is anchored to.
    pub fn reveal_anchor(&self, reveal: Reveal) -> Option<Rect> {
        match reveal.field {
            RevealField::Origin => self.cell_line(reveal.row, Column::Route, 0),
            RevealField::Destination => self.cell_line(reveal.row, Column::Route, 1),
            RevealField::LastUpdate => self.cell_line(reveal.row, Column::LastUpdate, 0),
        }
    }

    fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        if !contains(self.body, x, y) {
            return None;
        }
        let offset = y - self.body.y;
        let slot = (offset / ROW_HEIGHT) as usize;
        let line = offset % ROW_HEIGHT;
        if slot >= self.row_count {
            return None;
        }
        let row = self.first_row + slot;

        let column = Column::ALL
            .into_iter()
            .find(|c| {
                let span = self.column(*c);
                x >= span.x && x < span.x + span.width
            });

        Some(match (column, line) {
            (Some(Column::Name), _) if x < self.column(Column::Name).x + HEART_WIDTH => {
                HitTarget::Like(row)
            }
            (Some(Column::Route), 0) => HitTarget::Reveal(Reveal {
                row,
                field: RevealField::Origin,
            }),
            (Some(Column::Route), _) => HitTarget::Reveal(Reveal {
                row,
                field: RevealField::Destination,
            }),
            (Some(Column::LastUpdate), 0) => HitTarget::Reveal(Reveal {
                row,
                field: RevealField::LastUpdate,
            }),
            _ => HitTarget::Row(row),
        })
    }
}

// ===== Pagination =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLayout {
    pub area: Rect,
    pub prev: Option<Rect>,
    pub label: Option<Rect>,
    pub next: Option<Rect>,
    pub pages: Vec<(u32, Rect)>,
}

impl PaginationLayout {
    fn compute(area: Rect, current: u32, total: u32) -> Self {
        let mut x = area.x.saturating_add(1);
        let mut place = |text_width: usize, gap: u16| {
            let rect = Rect::new(x, area.y, text_width as u16, area.height.min(1));
            x = x.saturating_add(text_width as u16).saturating_add(gap);
            clip(rect, area)
        };
        let prev = place(prev_label().width(), 2);
        let label = place(status_label(current, total).width(), 2);
        let next = place(next_label().width(), 0);

        let window = page_window(current, total);
        let labels: Vec<String> = window.iter().map(|p| page_button_label(*p)).collect();
        let total_width: u16 = labels
            .iter()
            .map(|l| l.width() as u16)
            .sum::<u16>()
            + labels.len().saturating_sub(1) as u16;
        let mut px = area.right().saturating_sub(total_width + 1).max(x.saturating_add(2));
        let mut pages = Vec::with_capacity(window.len());
        for (page, label) in window.into_iter().zip(labels) {
            let w = label.width() as u16;
            if let Some(rect) = clip(Rect::new(px, area.y, w, area.height.min(1)), area) {
                pages.push((page, rect));
            }
            px = px.saturating_add(w + 1);
        }

        Self {
            area,
            prev,
            label,
            next,
            pages,
        }
    }

    fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        if self.prev.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::PrevPage);
        }
        if self.next.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::NextPage);
        }
        self.pages
            .iter()
            .find(|(_, r)| contains(*r, x, y))
            .map(|(page, _)| HitTarget::Page(*page))
    }
}

// ===== Filters =====

/// One active filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipLayout {
    pub field: FilterField,
    pub text: String,
    pub area: Rect,
    /// The `×` cell.
    pub remove: Rect,
}

/// Input areas of the inline bar or the modal, one per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub field: FilterField,
    pub label: Rect,
    pub input: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    pub area: Rect,
    pub fields: Vec<FieldInput>,
    pub cancel: Option<Rect>,
    pub apply: Option<Rect>,
}

impl ModalLayout {
    fn compute(screen: Rect) -> Self {
        // Border, a label and an input line per field, a spacer, buttons, border.
        let wanted = 2 + 2 * FilterField::ALL.len() as u16 + 2;
        let width = FILTER_MODAL_WIDTH.min(screen.width);
        let height = wanted.min(screen.height);
        let area = Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        };
        let inner = Rect {
            x: area.x.saturating_add(2),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };

        let fields = FilterField::ALL
            .into_iter()
            .enumerate()
            .filter_map(|(i, field)| {
                let label_y = inner.y + 2 * i as u16;
                let label = clip(Rect::new(inner.x, label_y, inner.width, 1), inner)?;
                let input = clip(Rect::new(inner.x, label.y + 1, inner.width, 1), inner)?;
                Some(FieldInput { field, label, input })
            })
            .collect();

        let buttons_y = inner.bottom().saturating_sub(1);
        let apply_w = APPLY_LABEL.width() as u16;
        let cancel_w = CANCEL_LABEL.width() as u16;
        let apply_x = inner.right().saturating_sub(apply_w);
        let cancel_x = apply_x.saturating_sub(cancel_w + 2);
        let apply = clip(Rect::new(apply_x, buttons_y, apply_w, 1), inner);
        let cancel = clip(Rect::new(cancel_x, buttons_y, cancel_w, 1), inner);

        Self {
            area,
            fields,
            cancel,
            apply,
        }
    }

    fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        if self.apply.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::ModalApply);
        }
        if self.cancel.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::ModalCancel);
        }
        self.fields
            .iter()
            .find(|f| contains(f.input, x, y) || contains(f.label, x, y))
            .map(|f| HitTarget::ModalInput(f.field))
    }
}

/// First line of an empty-state message block (title, text, blank, button).
pub fn empty_state_top(body: Rect) -> u16 {
    body.y + body.height.saturating_sub(4) / 2
}

/// The "Clear filters" button of the "No matches found" state.
pub fn empty_state_clear_button(body: Rect) -> Option<Rect> {
    let top = empty_state_top(body);
    let width = CLEAR_FILTERS_LABEL.width() as u16;
    let x = body.x + body.width.saturating_sub(width) / 2;
    clip(Rect::new(x, top + 3, width, 1), body)
}

// ===== Screen =====

/// Every area of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub screen: Rect,
    pub title: Rect,
    pub filters_button: Option<Rect>,
    pub inline_bar: Option<Rect>,
    pub inline_inputs: Vec<FieldInput>,
    pub chip_bar: Rect,
    pub chips: Vec<ChipLayout>,
    pub chip_clear: Option<Rect>,
    pub table: TableLayout,
    pub empty_clear: Option<Rect>,
    pub pagination: PaginationLayout,
    pub status: Rect,
    pub modal: Option<ModalLayout>,
    pub popover: Option<Rect>,
}

impl ScreenLayout {
    pub fn compute(screen: Rect, state: &AppState) -> Self {
        let inline = state.filter_mode() == FilterMode::Inline;
        let inline_height = if inline { INLINE_FILTER_BAR_HEIGHT } else { 0 };

        let [title, inline_area, chip_bar, table_area, pagination_area, status] =
            Layout::vertical([
                Constraint::Length(TITLE_BAR_HEIGHT),
                Constraint::Length(inline_height),
                Constraint::Length(CHIP_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(PAGINATION_BAR_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(screen);

        let button_w = filters_button_width(state.filters().len());
        let filters_button = clip(
            Rect::new(
                title.right().saturating_sub(button_w + 1),
                title.y,
                button_w,
                title.height.min(1),
            ),
            title,
        );

        let (inline_bar, inline_inputs) = if inline {
            (Some(inline_area), inline_field_inputs(inline_area))
        } else {
            (None, Vec::new())
        };

        let (chips, chip_clear) = chip_geometry(chip_bar, state);

        let empty_state = state.empty_state();
        let shown_rows = if state.loading || empty_state.is_some() {
            0
        } else {
            state.rows().len()
        };
        let table = TableLayout::compute(table_area, shown_rows, state.selected());
        let empty_clear = (!state.loading && empty_state == Some(EmptyState::NoMatches))
            .then(|| empty_state_clear_button(table.body))
            .flatten();

        let pagination =
            PaginationLayout::compute(pagination_area, state.current_page(), state.total_pages());

        let modal = (state.editor.is_open() && state.filter_mode() == FilterMode::Modal)
            .then(|| ModalLayout::compute(screen));

        let popover = state
            .reveal
            .current()
            .and_then(|reveal| table.reveal_anchor(reveal))
            .zip(state.revealed_text())
            .map(|(anchor, text)| popover_rect(anchor, text, screen));

        Self {
            screen,
            title,
            filters_button,
            inline_bar,
            inline_inputs,
            chip_bar,
            chips,
            chip_clear,
            table,
            empty_clear,
            pagination,
            status,
            modal,
            popover,
        }
    }

    /// Resolve a mouse position.
    ///
    /// While the modal is open only its own controls respond.
    pub fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        if let Some(modal) = &self.modal {
            return modal.hit(x, y);
        }
        if self.popover.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::Popover);
        }
        if self.filters_button.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::FiltersButton);
        }
        if let Some(input) = self.inline_inputs.iter().find(|f| {
            contains(f.input, x, y) || contains(f.label, x, y)
        }) {
            return Some(HitTarget::InlineInput(input.field));
        }
        if let Some(chip) = self.chips.iter().find(|c| contains(c.remove, x, y)) {
            return Some(HitTarget::ChipRemove(chip.field));
        }
        if self.chip_clear.is_some_and(|r| contains(r, x, y))
            || self.empty_clear.is_some_and(|r| contains(r, x, y))
        {
            return Some(HitTarget::ClearFilters);
        }
        self.table
            .hit(x, y)
            .or_else(|| self.pagination.hit(x, y))
    }
}

fn inline_field_inputs(bar: Rect) -> Vec<FieldInput> {
    let inner = Rect {
        x: bar.x.saturating_add(1),
        y: bar.y.saturating_add(1),
        width: bar.width.saturating_sub(2),
        height: bar.height.saturating_sub(2),
    };
    if inner.height < 2 {
        return Vec::new();
    }
    let count = FilterField::ALL.len() as u32;
    let columns = Layout::horizontal(FilterField::ALL.map(|_| Constraint::Ratio(1, count)))
        .spacing(1)
        .split(inner);

    FilterField::ALL
        .into_iter()
        .zip(columns.iter())
        .map(|(field, col)| FieldInput {
            field,
            label: Rect::new(col.x, inner.y, col.width, 1),
            input: Rect::new(col.x, inner.y + 1, col.width, 1),
        })
        .collect()
}

fn chip_geometry(bar: Rect, state: &AppState) -> (Vec<ChipLayout>, Option<Rect>) {
    let mut chips = Vec::new();
    if state.filters().is_empty() || bar.height == 0 {
        return (chips, None);
    }

    let mut x = bar.x.saturating_add(1);
    for (field, value) in state.filters().iter() {
        let text = chip_text(field, value);
        let width = text.width() as u16;
        let area = Rect::new(x, bar.y, width, 1);
        if area.right() > bar.right() {
            break;
        }
        chips.push(ChipLayout {
            field,
            text,
            area,
            remove: Rect::new(area.right() - 1, bar.y, 1, 1),
        });
        x = area.right().saturating_add(CHIP_GAP);
    }

    let clear_w = CLEAR_FILTERS_LABEL.width() as u16;
    let clear = Rect::new(x, bar.y, clear_w, 1);
    let clear = (clear.right() <= bar.right()).then_some(clear);
    (chips, clear)
}

/// Box for a popover showing `text`, below its anchor line when it fits,
/// above otherwise.
pub fn popover_rect(anchor: Rect, text: &str, screen: Rect) -> Rect {
    let max_width = POPOVER_MAX_WIDTH.min(screen.width).max(3);
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .clamp(3, max_width);
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let lines = u16::try_from(wrap_to_width(text, inner_width).len().max(1)).unwrap_or(u16::MAX);
    let height = lines.saturating_add(2).min(screen.height);

    let below = anchor.y.saturating_add(1);
    let y = if below.saturating_add(height) <= screen.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height).max(screen.y)
    };
    let x = anchor.x.min(screen.right().saturating_sub(width));

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
