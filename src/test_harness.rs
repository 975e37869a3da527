//! Acceptance test harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend, FakeTripApi>` with methods that simulate what a
//! user does: press keys, type, click, hover. Every interaction syncs the
//! fetch loop the way the real event loop does, and [`TableHarness::settle`]
//! waits for the latest response to land.

use crate::config::ResolvedConfig;
use crate::fetch::{TripClient, TripQuery, ROWS_PER_PAGE};
use crate::model::trip::fixtures::trip;
use crate::model::{FetchError, FilterField, Pagination, Trip, TripPage};
use crate::state::{AppState, FilterMode, RevealMode};
use crate::view::format::DisplayZone;
use crate::view::test_support::buffer_to_string;
use crate::view::{ColorConfig, ScreenLayout, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory trip API: filters and pages a fixed list like the real server.
#[derive(Clone)]
pub struct FakeTripApi {
    trips: Arc<Mutex<Vec<Trip>>>,
    requests: Arc<Mutex<Vec<TripQuery>>>,
    failing: Arc<Mutex<bool>>,
}

impl FakeTripApi {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self {
            trips: Arc::new(Mutex::new(trips)),
            requests: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// `count` fixture trips named `Trip 0`, `Trip 1`, ...
    pub fn with_trip_count(count: usize) -> Self {
        Self::new(numbered_trips(count))
    }

    /// Replace the server-side data set.
    pub fn set_trips(&self, trips: Vec<Trip>) {
        *self.trips.lock().unwrap() = trips;
    }

    pub fn requests(&self) -> Vec<TripQuery> {
        self.requests.lock().unwrap().clone()
    }

    /// Make every following request fail with HTTP 500.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

impl TripClient for FakeTripApi {
    fn fetch(&self, query: &TripQuery) -> Result<TripPage, FetchError> {
        self.requests.lock().unwrap().push(query.clone());
        if *self.failing.lock().unwrap() {
            return Err(FetchError::Status {
                url: "http://fake/data".to_string(),
                status: 500,
            });
        }

        let trips = self.trips.lock().unwrap();
        let matching: Vec<&Trip> = trips
            .iter()
            .filter(|t| query.filters.matches(|field| t.field_text(field)))
            .collect();
        let limit = query.limit as usize;
        let total_pages = matching.len().div_ceil(limit) as u32;
        let start = (query.page as usize).saturating_sub(1) * limit;
        let data = matching
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Ok(TripPage {
            data,
            pagination: Pagination {
                total_pages,
                current_page: query.page,
            },
        })
    }
}

pub fn numbered_trips(count: usize) -> Vec<Trip> {
    (0..count).map(|i| trip(&format!("Trip {i}"))).collect()
}

/// Test harness for acceptance testing
pub struct TableHarness {
    app: TuiApp<TestBackend, FakeTripApi>,
    api: FakeTripApi,
    running: bool,
}

impl TableHarness {
    /// 160x40 terminal, modal filters, hover popovers, first page loaded.
    pub fn new(api: FakeTripApi) -> Self {
        Self::with_modes(api, FilterMode::Modal, RevealMode::Hover)
    }

    pub fn with_modes(api: FakeTripApi, filter_mode: FilterMode, reveal_mode: RevealMode) -> Self {
        let config = ResolvedConfig {
            filter_mode,
            reveal_mode,
            timezone: DisplayZone::Utc,
            ..ResolvedConfig::default()
        };
        let terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        let app = TuiApp::new_for_test(terminal, api.clone(), &config, ColorConfig::enabled());

        let mut harness = Self {
            app,
            api,
            running: true,
        };
        harness.app.sync_fetch_test();
        harness.settle();
        harness
    }

    /// Wait for the latest request and apply it, then redraw.
    pub fn settle(&mut self) {
        // A clamped page may trigger one follow-up request.
        while self.app.settle_test(SETTLE_TIMEOUT) {}
        self.app.render_test().unwrap();
    }

    pub fn send_key(&mut self, key: KeyCode) {
        self.send_key_with_mods(key, KeyModifiers::NONE);
    }

    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) {
        if self.app.handle_key_test(KeyEvent::new(key, mods)) {
            self.running = false;
        }
        self.app.render_test().unwrap();
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let mods = if ch.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            self.send_key_with_mods(KeyCode::Char(ch), mods);
        }
    }

    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Moved, column, row);
    }

    pub fn scroll_down_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::ScrollDown, column, row);
    }

    pub fn scroll_up_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::ScrollUp, column, row);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.app.render_test().unwrap();
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn layout(&self) -> &ScreenLayout {
        self.app.layout().expect("a frame has been drawn")
    }

    pub fn api(&self) -> &FakeTripApi {
        &self.api
    }

    pub fn requests_issued(&self) -> u64 {
        self.app.requests_issued()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Page numbers requested so far, in arrival order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.api.requests().iter().map(|q| q.page).collect()
    }

    /// Value sent for `field` by the most recently issued request.
    ///
    /// Superseded requests may reach the fake API in any order, so this reads
    /// the app's own record rather than the API's request log.
    pub fn last_filter(&self, field: FilterField) -> Option<String> {
        self.app
            .last_query()
            .and_then(|q| q.filters.get(field).map(str::to_string))
    }
}

/// Rows per page the fake API serves.
pub const PAGE_SIZE: usize = ROWS_PER_PAGE as usize;
