//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter_bar;
mod filter_modal;
pub mod format;
mod help;
pub mod layout;
mod pagination;
mod popover;
mod status_bar;
mod styles;
mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use help::render_help_overlay;
pub use layout::{HitTarget, ScreenLayout};
pub use styles::{ColorConfig, TableStyles};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::fetch::{FetchOutcome, Fetcher, HttpTripClient, TripClient, TripQuery};
use crate::model::{AppError, KeyAction};
use crate::state::{
    handle_action, handle_filter_editor_key, AppState, FilterMode, RevealMode,
};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use format::DisplayZone;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// client so tests can serve pages without a network.
pub struct TuiApp<B, C>
where
    B: Backend,
    C: TripClient,
{
    terminal: Terminal<B>,
    state: AppState,
    fetcher: Fetcher<C>,
    key_bindings: KeyBindings,
    styles: TableStyles,
    zone: DisplayZone,
    /// Query of the most recently issued request.
    last_query: Option<TripQuery>,
    /// Geometry of the last drawn frame, for mouse hit-testing.
    layout: Option<ScreenLayout>,
}

impl<C: TripClient> TuiApp<CrosstermBackend<Stdout>, C> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(client: C, config: &ResolvedConfig, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::from_parts(terminal, client, config, colors))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Redraws after every input
    /// event and whenever a fetch completes.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Short enough that a finished fetch shows up without visible lag
        const TICK: Duration = Duration::from_millis(50);

        self.sync_fetch();
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
                self.sync_fetch();
            }

            if self.poll_fetcher() {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B, C> TuiApp<B, C>
where
    B: Backend,
    C: TripClient,
{
    fn from_parts(
        terminal: Terminal<B>,
        client: C,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            state: AppState::new(config.filter_mode, config.reveal_mode),
            fetcher: Fetcher::new(client),
            key_bindings: KeyBindings::default(),
            styles: TableStyles::with_color_config(colors),
            zone: config.timezone,
            last_query: None,
            layout: None,
        }
    }

    // ===== Fetching =====

    /// Issue a request if the state now calls for a different page or filter set.
    ///
    /// At most one request per distinct query; repeated calls are free.
    fn sync_fetch(&mut self) {
        let query = self.state.query();
        if self.last_query.as_ref() != Some(&query) {
            self.issue(query);
        }
    }

    fn issue(&mut self, query: TripQuery) {
        self.state.begin_fetch();
        self.fetcher.request(query.clone());
        self.last_query = Some(query);
    }

    /// Apply the latest response if it has arrived. Returns true when state changed.
    fn poll_fetcher(&mut self) -> bool {
        match self.fetcher.poll() {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome.result {
            Ok(page) => {
                debug!(
                    seq = outcome.seq.get(),
                    rows = page.data.len(),
                    total_pages = page.pagination.total_pages,
                    "applying trip page"
                );
                self.state.apply_page(page);
            }
            Err(error) => self.state.apply_error(&error),
        }
        // Clamping to the reported page count may call for another page.
        self.sync_fetch();
    }

    // ===== Input =====

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing into a filter
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The open filter editor captures typing before any binding
        if handle_filter_editor_key(&mut self.state, key) {
            return false;
        }

        if key.code == KeyCode::Esc && self.state.help_visible {
            self.state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help covers the table; only closing it or quitting gets through
        if self.state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Refresh => {
                info!(page = self.state.current_page(), "refreshing current page");
                self.issue(self.state.query());
            }
            _ => {
                if action.is_navigation() {
                    debug!(?action, page = self.state.current_page(), "page navigation");
                }
                handle_action(&mut self.state, action);
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left clicks dispatch on the hit target of the last drawn frame. Pointer
    /// movement drives popovers in hover mode. The wheel moves the selection.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.help_visible {
            return;
        }

        let target = self
            .layout
            .as_ref()
            .and_then(|layout| layout.hit(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Moved => {
                if self.state.reveal_mode() == RevealMode::Hover {
                    let hovered = match target {
                        Some(HitTarget::Reveal(reveal)) => Some(reveal),
                        // Keep the popover open while the pointer is on it
                        Some(HitTarget::Popover) => self.state.reveal.current(),
                        _ => None,
                    };
                    self.state.hover_reveal(hovered);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(target) => self.click(target),
                None => self.blur_inline_editor(),
            },
            MouseEventKind::ScrollDown => self.state.select_next(),
            MouseEventKind::ScrollUp => self.state.select_prev(),
            _ => {}
        }
    }

    fn click(&mut self, target: HitTarget) {
        if !matches!(target, HitTarget::InlineInput(_)) {
            self.blur_inline_editor();
        }
        let click_mode = self.state.reveal_mode() == RevealMode::Click;

        match target {
            HitTarget::FiltersButton => self.state.open_filter_editor(),
            HitTarget::ChipRemove(field) => {
                self.state.clear_filter(field);
            }
            HitTarget::ClearFilters => {
                self.state.clear_all_filters();
            }
            HitTarget::InlineInput(field) => {
                if !self.state.editor.is_open() {
                    self.state.open_filter_editor();
                }
                self.state.editor.focus(field);
            }
            HitTarget::ModalInput(field) => self.state.editor.focus(field),
            HitTarget::ModalApply => {
                let draft = self.state.editor.apply();
                self.state.set_filters(draft);
            }
            HitTarget::ModalCancel => self.state.editor.close(),
            HitTarget::Like(row) => {
                self.state.select(row);
                self.state.toggle_like(row);
            }
            HitTarget::Reveal(reveal) => {
                self.state.select(reveal.row);
                if click_mode {
                    self.state.toggle_reveal(reveal.row, reveal.field);
                }
            }
            HitTarget::Row(row) => {
                self.state.select(row);
                if click_mode {
                    self.state.reveal.close();
                }
            }
            HitTarget::PrevPage => {
                self.state.prev_page();
            }
            HitTarget::NextPage => {
                self.state.next_page();
            }
            HitTarget::Page(page) => {
                self.state.go_to_page(page);
            }
            HitTarget::Popover => {}
        }
    }

    /// Clicking away from the inline bar stops routing keys to it.
    fn blur_inline_editor(&mut self) {
        if self.state.filter_mode() == FilterMode::Inline && self.state.editor.is_open() {
            self.state.editor.close();
        }
    }

    // ===== Rendering =====

    /// Render the current frame and remember its geometry for hit-testing.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        let layout = ScreenLayout::compute(screen, &self.state);

        let state = &self.state;
        let styles = self.styles;
        let zone = self.zone;
        self.terminal.draw(|frame| {
            filter_bar::render_title_bar(frame, state, &layout, styles);
            filter_bar::render_inline_bar(frame, state, &layout, styles);
            filter_bar::render_chip_bar(frame, &layout, styles);
            table::render_table(frame, state, &layout, styles, zone);
            pagination::render_pagination(frame, state, &layout, styles);
            status_bar::render_status_bar(frame, state, layout.status, styles);
            popover::render_popover(frame, state, &layout, styles);
            filter_modal::render_filter_modal(frame, state, &layout, styles);
            if state.help_visible {
                render_help_overlay(frame, styles);
            }
        })?;

        self.layout = Some(layout);
        Ok(())
    }
}

// ===== Test Helpers =====
//
// Crate-internal hooks for the acceptance harness. Not part of the public API.

#[cfg(test)]
impl<B, C> TuiApp<B, C>
where
    B: Backend,
    C: TripClient,
{
    /// Create TuiApp around an existing terminal without touching the real tty.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        client: C,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        Self::from_parts(terminal, client, config, colors)
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.state
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        let quit = self.handle_key(key);
        self.sync_fetch();
        quit
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
        self.sync_fetch();
    }

    pub(crate) fn sync_fetch_test(&mut self) {
        self.sync_fetch();
    }

    /// Block until the latest request completes, then apply it.
    ///
    /// Returns false if nothing arrived within `timeout`.
    pub(crate) fn settle_test(&mut self, timeout: Duration) -> bool {
        match self.fetcher.wait(timeout) {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    pub(crate) fn requests_issued(&self) -> u64 {
        self.fetcher.issued_count()
    }

    pub(crate) fn last_query(&self) -> Option<&TripQuery> {
        self.last_query.as_ref()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn layout(&self) -> Option<&ScreenLayout> {
        self.layout.as_ref()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI against the configured API.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by the caller.
pub fn run_app(config: &ResolvedConfig, colors: ColorConfig) -> Result<(), TuiError> {
    let client = HttpTripClient::new(&config.api_url, config.request_timeout)
        .map_err(AppError::from)?;
    info!(api_url = %config.api_url, "starting tripboard");

    let mut app = TuiApp::new(client, config, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
