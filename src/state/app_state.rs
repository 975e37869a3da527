//! Application state and transitions.
//!
//! AppState is the view state container for one table instance. It holds the
//! fetched rows and everything the user has done to them. Transitions are
//! plain methods with no I/O; the event loop decides when to fetch by
//! comparing [`AppState::query`] with the last query it issued.

use super::filter_editor::{FilterEditor, FilterMode};
use super::liked::LikedSet;
use super::pagination::{can_next, can_prev, clamp_page};
use super::reveal::{Reveal, RevealField, RevealMode, RevealState};
use crate::fetch::TripQuery;
use crate::model::{FetchError, FilterField, FilterMap, Trip, TripPage};
use tracing::{debug, warn};

/// What the table body shows instead of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Filters are active and no row on the page matches them.
    NoMatches,
    /// No filters and no rows.
    NoTrips,
}

/// View state. Pure data, no side effects.
///
/// # Lifecycle
///
/// - `rows` and `total_pages` are replaced wholesale by every accepted response.
/// - `filters` and `liked` persist across fetches and die with the instance.
/// - `reveal` and `selected` are positional and reset when rows are replaced.
///
/// # Invariants
///
/// - `current_page` is in `[1, total_pages]` whenever `total_pages > 0`
///   (restored by [`AppState::apply_page`] if the server shrinks the page count)
/// - `filters` holds only non-empty values
#[derive(Debug, Clone)]
pub struct AppState {
    rows: Vec<Trip>,

    /// A request is in flight; the table body shows a loading indicator.
    pub loading: bool,

    current_page: u32,
    total_pages: u32,
    filters: FilterMap,
    liked: LikedSet,

    /// Highlighted row on the current page.
    selected: Option<usize>,

    pub reveal: RevealState,
    reveal_mode: RevealMode,

    pub editor: FilterEditor,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Message of the most recent failed fetch, cleared by the next success.
    pub last_error: Option<String>,
}

impl AppState {
    /// Fresh state: page 1, no rows, loading until the first response.
    pub fn new(filter_mode: FilterMode, reveal_mode: RevealMode) -> Self {
        Self {
            rows: Vec::new(),
            loading: true,
            current_page: 1,
            total_pages: 0,
            filters: FilterMap::new(),
            liked: LikedSet::new(),
            selected: None,
            reveal: RevealState::default(),
            reveal_mode,
            editor: FilterEditor::new(filter_mode),
            help_visible: false,
            last_error: None,
        }
    }

    // ===== Accessors =====

    pub fn rows(&self) -> &[Trip] {
        &self.rows
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filters(&self) -> &FilterMap {
        &self.filters
    }

    pub fn liked(&self) -> &LikedSet {
        &self.liked
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn reveal_mode(&self) -> RevealMode {
        self.reveal_mode
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.editor.mode()
    }

    /// The request this state currently calls for.
    pub fn query(&self) -> TripQuery {
        TripQuery::new(self.current_page, self.filters.clone())
    }

    // ===== Fetch lifecycle =====

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace rows and page count from an accepted response.
    pub fn apply_page(&mut self, page: TripPage) {
        if page.pagination.current_page != self.current_page {
            debug!(
                requested = self.current_page,
                reported = page.pagination.current_page,
                "server reported a different current page"
            );
        }

        self.rows = page.data;
        self.total_pages = page.pagination.total_pages;
        self.loading = false;
        self.last_error = None;
        self.reveal.close();
        self.selected = match self.rows.len() {
            0 => None,
            n => Some(self.selected.unwrap_or(0).min(n - 1)),
        };

        let clamped = clamp_page(self.current_page, self.total_pages);
        if clamped != self.current_page {
            debug!(
                from = self.current_page,
                to = clamped,
                "current page out of range; clamping"
            );
            self.current_page = clamped;
        }
    }

    /// Record a failed fetch. Rows stay as they were.
    pub fn apply_error(&mut self, error: &FetchError) {
        warn!(error = %error, "fetching trips failed");
        self.loading = false;
        self.last_error = Some(error.to_string());
    }

    // ===== Pagination =====

    pub fn can_prev(&self) -> bool {
        can_prev(self.current_page)
    }

    pub fn can_next(&self) -> bool {
        can_next(self.current_page, self.total_pages)
    }

    /// Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.go_to_page(self.current_page - 1)
    }

    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.go_to_page(self.current_page + 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages)
    }

    /// Jump to a page, clamped to the known range.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = clamp_page(page, self.total_pages);
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        self.reveal.close();
        true
    }

    // ===== Filters =====

    /// Replace the active filters. Any change returns to page 1.
    pub fn set_filters(&mut self, filters: FilterMap) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.current_page = 1;
        self.reveal.close();
        true
    }

    /// Remove one active filter (chip ×).
    pub fn clear_filter(&mut self, field: FilterField) -> bool {
        let mut next = self.filters.clone();
        next.remove(field);
        self.set_filters(next)
    }

    /// Remove the last chip in display order.
    pub fn clear_last_filter(&mut self) -> bool {
        match self.filters.last_field() {
            Some(field) => self.clear_filter(field),
            None => false,
        }
    }

    /// The "Clear filters" action: reset to `{}`.
    pub fn clear_all_filters(&mut self) -> bool {
        self.set_filters(FilterMap::new())
    }

    /// Open the modal, or focus the inline bar.
    pub fn open_filter_editor(&mut self) {
        self.reveal.close();
        self.editor.open(&self.filters);
    }

    /// Whether any row on the page satisfies every active filter.
    pub fn has_matching_rows(&self) -> bool {
        if self.filters.is_empty() {
            return true;
        }
        self.rows
            .iter()
            .any(|trip| self.filters.matches(|field| trip.field_text(field)))
    }

    /// Which empty state, if any, replaces the rows.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.has_matching_rows() {
            Some(EmptyState::NoMatches)
        } else if self.rows.is_empty() {
            Some(EmptyState::NoTrips)
        } else {
            None
        }
    }

    // ===== Rows =====

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select(&mut self, row: usize) {
        if row < self.rows.len() {
            self.selected = Some(row);
        }
    }

    /// Like/unlike a row. Returns the new liked state, or `None` for a bad index.
    pub fn toggle_like(&mut self, row: usize) -> Option<bool> {
        let key = self.rows.get(row)?.key();
        Some(self.liked.toggle(key))
    }

    pub fn is_liked(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|trip| self.liked.contains(&trip.key()))
    }

    /// Toggle a popover on a row (keyboard and click path).
    pub fn toggle_reveal(&mut self, row: usize, field: RevealField) {
        if row < self.rows.len() {
            self.reveal.toggle(Reveal { row, field });
        }
    }

    /// Pointer moved; only meaningful in hover mode.
    pub fn hover_reveal(&mut self, target: Option<Reveal>) {
        if self.reveal_mode != RevealMode::Hover {
            return;
        }
        let target = target.filter(|r| r.row < self.rows.len());
        self.reveal.hover(target);
    }

    /// Full text of the open popover.
    pub fn revealed_text(&self) -> Option<&str> {
        let reveal = self.reveal.current()?;
        let trip = self.rows.get(reveal.row)?;
        Some(match reveal.field {
            RevealField::Origin => trip.origin.as_str(),
            RevealField::Destination => trip.destination_name.as_str(),
            RevealField::LastUpdate => trip.last_update.as_str(),
        })
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
