//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod filter_bar;
pub mod footer;
mod help;
mod layout;
pub mod styles;
pub mod table;
pub mod tabs;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::source::{spawn_fetch, FetchOutcome, RecordSource};
use crate::state::{
    finish_editing, handle_backspace, handle_char_input, handle_clear_input, handle_key_action,
    AppState, InputMode,
};
use constants::POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => AppError::Terminal(io),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: Arc<dyn RecordSource>,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Cloned into every fetch thread.
    outcomes_tx: Sender<FetchOutcome>,
    outcomes_rx: Receiver<FetchOutcome>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        source: Arc<dyn RecordSource>,
        config: &ResolvedConfig,
        palette: Palette,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let app_state = AppState::new(config.initial_table, config.rows_per_page);
        let (outcomes_tx, outcomes_rx) = mpsc::channel();

        Ok(Self {
            terminal,
            app_state,
            source,
            key_bindings: KeyBindings::default(),
            palette,
            outcomes_tx,
            outcomes_rx,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(POLL_INTERVAL_MS);

        let mut dirty = true;
        loop {
            self.dispatch_fetches();
            dirty |= self.drain_outcomes();

            if dirty {
                self.draw()?;
                dirty = false;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    dirty = true;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    dirty = true;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Start a background fetch for every table the state asked for.
    ///
    /// Handles are only kept by tests; the threads end on their own once
    /// the outcome is sent.
    fn dispatch_fetches(&mut self) -> Vec<JoinHandle<()>> {
        self.app_state
            .take_fetch_requests()
            .into_iter()
            .map(|kind| {
                debug!(table = kind.key(), "Dispatching fetch");
                spawn_fetch(Arc::clone(&self.source), kind, self.outcomes_tx.clone())
            })
            .collect()
    }

    /// Fold finished fetches into the state.
    ///
    /// Returns true if anything arrived.
    fn drain_outcomes(&mut self) -> bool {
        let mut received = false;
        loop {
            match self.outcomes_rx.try_recv() {
                Ok(FetchOutcome { kind, result }) => {
                    self.update(|state| state.receive(kind, result));
                    received = true;
                }
                // The app holds a sender, so Disconnected cannot happen while it lives.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        received
    }

    fn update(&mut self, transition: impl FnOnce(AppState) -> AppState) {
        let state = std::mem::take(&mut self.app_state);
        self.app_state = transition(state);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Typed characters go to the filter being edited (before key binding dispatch)
        if matches!(self.app_state.input, InputMode::Editing { .. }) {
            self.handle_editing_key(key);
            return false;
        }

        // Special case: Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay is modal: only closing it or quitting gets through
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        if action == KeyAction::Quit {
            return true;
        }

        debug!(?action, table = self.app_state.active_kind().key(), "Key action");
        self.update(|state| handle_key_action(state, action));
        false
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.update(handle_clear_input);
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.update(|state| handle_char_input(state, ch));
            }
            KeyCode::Backspace => self.update(handle_backspace),
            KeyCode::Enter | KeyCode::Esc => self.update(finish_editing),
            _ => {}
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let palette = self.palette;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state, &palette);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization so tests can pass a TestBackend.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        source: Arc<dyn RecordSource>,
    ) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::channel();
        Self {
            terminal,
            app_state,
            source,
            key_bindings: KeyBindings::default(),
            palette: Palette::default(),
            outcomes_tx,
            outcomes_rx,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Run every requested fetch to completion and fold in the outcomes
    /// (test-only accessor).
    pub(crate) fn settle_fetches_test(&mut self) {
        for handle in self.dispatch_fetches() {
            handle.join().unwrap();
        }
        self.drain_outcomes();
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application with a record source
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    source: Arc<dyn RecordSource>,
    config: &ResolvedConfig,
    palette: Palette,
) -> Result<(), TuiError> {
    info!(
        table = config.initial_table.key(),
        rows_per_page = config.rows_per_page.get(),
        "Starting dashboard"
    );
    let mut app = TuiApp::new(source, config, palette)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
