//! TUI rendering and terminal management (impure shell).
//!
//! The event loop is the only place where the pure state layer meets the
//! provider worker: key events become state transitions, the [`Command`]s
//! those transitions return become worker jobs, and completed outcomes are
//! drained on the poll tick and fed back through the `apply_*` functions.

pub mod constants;
mod detail;
mod form;
mod help;
mod layout;
mod results;
mod styles;

pub use styles::{AppStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::provider::{Job, ProviderHandle};
use crate::state::{
    search, summary, AppState, Command, FilterForm, Focus,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    provider: ProviderHandle,
    key_bindings: KeyBindings,
    styles: AppStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen, seeds the
    /// filter form and issues the initial search.
    pub fn new(
        provider: ProviderHandle,
        initial_form: FilterForm,
        styles: AppStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut app_state = AppState::new();
        app_state.form = initial_form;

        let mut app = Self {
            terminal,
            app_state,
            provider,
            key_bindings: KeyBindings::default(),
            styles,
        };

        // First results arrive without any user interaction. An untouched
        // form produces the unfiltered search; a form seeded from CLI args
        // produces a filtered one.
        let command = if app.app_state.form == FilterForm::default() {
            search::startup_search(&mut app.app_state)
        } else {
            search::submit_search(&mut app.app_state)
        };
        app.execute(command);

        Ok(app)
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits. Redraws on input events and whenever a
    /// poll tick drains completed provider outcomes; an idle application
    /// consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TIMER_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                        continue;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.draw()?;
                        continue;
                    }
                    _ => {}
                }
            }

            // Timer tick: pick up finished searches and summaries.
            if self.apply_outcomes() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, bindings or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes the topmost overlay before binding dispatch, so it
        // works even while a text field would otherwise swallow keys.
        if key.code == KeyCode::Esc {
            if self.app_state.help_visible {
                self.app_state.help_visible = false;
                return false;
            }
            if self.app_state.detail.is_some() {
                summary::close_detail(&mut self.app_state);
                return false;
            }
        }

        // Typed characters edit the focused text field; everything else
        // falls through to the bindings. Select fields take no text, so
        // their keys (arrows, j/k) reach the bindings too.
        let overlay_open = self.app_state.help_visible || self.app_state.detail.is_some();
        if !overlay_open
            && self.app_state.focus == Focus::Form
            && self.app_state.form.focused().is_text()
        {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state.form.insert_char(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.form.backspace();
                    return false;
                }
                _ => {}
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Overlays capture input: only dismissal, summarizing (detail) and
        // quitting remain live underneath.
        if self.app_state.help_visible {
            match action {
                KeyAction::Help => {
                    self.app_state.help_visible = false;
                    return false;
                }
                KeyAction::Quit => return true,
                _ => return false,
            }
        }
        if self.app_state.detail.is_some() {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help => {
                    self.app_state.help_visible = true;
                    return false;
                }
                KeyAction::CloseOverlay => {
                    summary::close_detail(&mut self.app_state);
                    return false;
                }
                KeyAction::Summarize => {
                    if let Some(command) = summary::request_summary(&mut self.app_state) {
                        self.execute(command);
                    }
                    return false;
                }
                _ => return false,
            }
        }

        self.dispatch(action)
    }

    /// Dispatch a bound action against the current focus.
    ///
    /// Returns true if the app should quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::CloseOverlay => self.app_state.status_notice = None,

            KeyAction::NextField => match self.app_state.focus {
                Focus::Form => self.app_state.form.next_field(),
                Focus::Results => self.app_state.select_next(),
            },
            KeyAction::PrevField => match self.app_state.focus {
                Focus::Form => self.app_state.form.prev_field(),
                Focus::Results => self.app_state.select_prev(),
            },
            KeyAction::NextOption => {
                if self.app_state.focus == Focus::Form {
                    self.app_state.form.cycle_option(1);
                }
            }
            KeyAction::PrevOption => {
                if self.app_state.focus == Focus::Form {
                    self.app_state.form.cycle_option(-1);
                }
            }

            KeyAction::Submit => match self.app_state.focus {
                Focus::Form => {
                    let command = search::submit_search(&mut self.app_state);
                    self.execute(command);
                }
                Focus::Results => self.open_selected(),
            },

            KeyAction::NextResult => {
                if self.app_state.focus == Focus::Results {
                    self.app_state.select_next();
                }
            }
            KeyAction::PrevResult => {
                if self.app_state.focus == Focus::Results {
                    self.app_state.select_prev();
                }
            }
            KeyAction::OpenDetail => {
                if self.app_state.focus == Focus::Results {
                    self.open_selected();
                }
            }
            KeyAction::Summarize => {
                if self.app_state.focus == Focus::Results {
                    if let Some(record) = self.app_state.selected_record().cloned() {
                        if let Some(command) =
                            summary::summarize_from_list(&mut self.app_state, record)
                        {
                            self.execute(command);
                        }
                    }
                }
            }

            KeyAction::NextPage => {
                let target = self.app_state.current_page + 1;
                if let Some(command) = search::change_page(&mut self.app_state, target) {
                    self.execute(command);
                }
            }
            KeyAction::PrevPage => {
                let target = self.app_state.current_page.saturating_sub(1);
                if let Some(command) = search::change_page(&mut self.app_state, target) {
                    self.execute(command);
                }
            }

            KeyAction::FocusForm => self.app_state.focus = Focus::Form,
            KeyAction::FocusResults => self.app_state.focus = Focus::Results,
            KeyAction::CycleFocus => self.app_state.cycle_focus(),
        }
        false
    }

    fn open_selected(&mut self) {
        if let Some(record) = self.app_state.selected_record().cloned() {
            summary::open_detail(&mut self.app_state, record);
        }
    }

    /// Convert a state-layer command into a worker job.
    fn execute(&self, command: Command) {
        let job = match command {
            Command::Search { seq, request } => Job::Search { seq, request },
            Command::Summarize { seq, record } => Job::Summarize { seq, record },
        };
        self.provider.submit(job);
    }

    /// Drain completed outcomes into the state. Returns true if any applied.
    fn apply_outcomes(&mut self) -> bool {
        let outcomes = self.provider.drain();
        let any = !outcomes.is_empty();
        for outcome in outcomes {
            match outcome {
                crate::provider::Outcome::Search { seq, page, result } => {
                    search::apply_search_outcome(&mut self.app_state, seq, page, result);
                }
                crate::provider::Outcome::Summary {
                    seq,
                    record_id,
                    result,
                } => {
                    summary::apply_summary_outcome(&mut self.app_state, seq, &record_id, result);
                }
            }
        }
        any
    }

    /// Render the current frame.
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

/// Restore the terminal to its normal state.
///
/// Must run even when the event loop errors, so callers wrap `run` and
/// invoke this unconditionally.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Test-only constructor bypassing terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        provider: ProviderHandle,
    ) -> Self {
        Self {
            terminal,
            app_state,
            provider,
            key_bindings: KeyBindings::default(),
            styles: AppStyles::default(),
        }
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CourtRecord, CourtType, ProviderError, SearchRequest, SearchResponse, SummaryError,
    };
    use crate::provider::{RecordsProvider, Summarizer};
    use crate::state::SummaryState;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;

    struct StubRecords;

    impl RecordsProvider for StubRecords {
        fn search(&self, _request: &SearchRequest) -> Result<SearchResponse, ProviderError> {
            Ok(SearchResponse::default())
        }
    }

    struct StubSummarizer;

    impl Summarizer for StubSummarizer {
        fn summarize(&self, _record: &CourtRecord) -> Result<String, SummaryError> {
            Ok("stub".to_string())
        }
    }

    fn record(id: &str) -> CourtRecord {
        CourtRecord {
            id: id.to_string(),
            court_type: CourtType::Clerk,
            county: "Adams".to_string(),
            case_number: format!("2024-CV-{id}"),
            plaintiff: "Jane Doe".to_string(),
            defendant: "John Roe".to_string(),
            filing_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "Active".to_string(),
            details: "Test.".to_string(),
            charges: None,
            links: None,
        }
    }

    fn test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let provider = ProviderHandle::spawn(Box::new(StubRecords), Box::new(StubSummarizer));
        TuiApp::new_for_test(terminal, AppState::new(), provider)
    }

    fn app_with_results(count: usize, total: usize) -> TuiApp<TestBackend> {
        let mut app = test_app();
        app.state_mut().results = SearchResponse {
            records: (0..count).map(|i| record(&format!("{i:04}"))).collect(),
            total_results: total,
        };
        app
    }

    /// Flatten the rendered test buffer into one string for content asserts.
    fn rendered(app: &mut TuiApp<TestBackend>) -> String {
        app.draw().unwrap();
        let buffer = app.terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn draw_shows_total_count_and_record_cards() {
        let mut app = app_with_results(10, 25);
        let text = rendered(&mut app);
        assert!(text.contains("Results (25 total matches)"));
        assert!(text.contains("2024-CV-0000"));
        assert!(text.contains("Page 1 of 3"));
    }

    #[test]
    fn loading_and_empty_states_render_distinct_messages() {
        let mut app = test_app();
        app.state_mut().loading = true;
        let text = rendered(&mut app);
        assert!(text.contains("Searching public records"));
        assert!(!text.contains("No records match"));

        app.state_mut().loading = false;
        let text = rendered(&mut app);
        assert!(text.contains("No records match your criteria"));
    }

    #[test]
    fn zero_results_render_no_pagination_bar() {
        let mut app = test_app();
        let text = rendered(&mut app);
        assert!(!text.contains("Page "));
        assert!(!text.contains("[n] Next"));
    }

    #[test]
    fn failed_summary_renders_the_fallback_text() {
        let mut app = app_with_results(1, 1);
        summary::open_detail(app.state_mut(), record("a"));
        app.state_mut().summary = SummaryState::Failed;
        let text = rendered(&mut app);
        assert!(text.contains("Failed to generate summary."));
    }

    #[test]
    fn help_overlay_renders_over_the_main_screen() {
        let mut app = app_with_results(1, 1);
        app.state_mut().help_visible = true;
        let text = rendered(&mut app);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn q_quits_from_results_but_types_into_a_form_field() {
        let mut app = test_app();
        assert_eq!(app.state().focus, Focus::Form);
        assert!(!app.press(KeyCode::Char('q')));
        assert_eq!(app.state().form.name, "q");

        app.state_mut().focus = Focus::Results;
        assert!(app.press(KeyCode::Char('q')));
    }

    #[test]
    fn ctrl_c_quits_even_while_typing() {
        let mut app = test_app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = test_app();
        assert!(!app.press(KeyCode::Tab));
        assert_eq!(app.state().focus, Focus::Results);
        assert!(!app.press(KeyCode::Tab));
        assert_eq!(app.state().focus, Focus::Form);
    }

    #[test]
    fn enter_in_form_issues_a_search() {
        let mut app = test_app();
        assert!(!app.press(KeyCode::Enter));
        assert!(app.state().loading);
    }

    #[test]
    fn enter_in_results_opens_the_highlighted_record() {
        let mut app = app_with_results(3, 3);
        app.state_mut().focus = Focus::Results;
        app.press(KeyCode::Char('j'));
        app.press(KeyCode::Enter);
        assert_eq!(app.state().detail.as_ref().unwrap().id, "0001");
    }

    #[test]
    fn escape_closes_detail_before_help() {
        let mut app = app_with_results(1, 1);
        summary::open_detail(app.state_mut(), record("a"));
        app.press(KeyCode::Esc);
        assert!(app.state().detail.is_none());
    }

    #[test]
    fn navigation_is_blocked_while_detail_is_open() {
        let mut app = app_with_results(3, 3);
        app.state_mut().focus = Focus::Results;
        summary::open_detail(app.state_mut(), record("a"));

        app.press(KeyCode::Char('j'));
        assert_eq!(app.state().selected, 0, "list must not move under overlay");
    }

    #[test]
    fn summarize_in_detail_sets_pending() {
        let mut app = app_with_results(1, 1);
        summary::open_detail(app.state_mut(), record("a"));
        app.press(KeyCode::Char('s'));
        assert!(app.state().summary.is_pending());
    }

    #[test]
    fn page_keys_reject_out_of_range_targets() {
        let mut app = app_with_results(10, 25);
        app.state_mut().current_page = 1;
        app.state_mut().focus = Focus::Results;

        app.press(KeyCode::Char('p'));
        assert!(!app.state().loading, "page 0 must be rejected");

        app.press(KeyCode::Char('n'));
        assert!(app.state().loading, "page 2 exists");
    }

    #[test]
    fn help_blocks_everything_but_dismissal_and_quit() {
        let mut app = app_with_results(3, 3);
        app.state_mut().focus = Focus::Results;
        app.press(KeyCode::Char('?'));
        assert!(app.state().help_visible);

        app.press(KeyCode::Char('j'));
        assert_eq!(app.state().selected, 0);

        app.press(KeyCode::Char('?'));
        assert!(!app.state().help_visible);
    }
}
