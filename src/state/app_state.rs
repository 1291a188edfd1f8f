//! Application state root.
//!
//! `AppState` is pure data mutated only by the transition functions in this
//! module's siblings; every collaborator call they need is returned as a
//! [`Command`] value for the shell to execute. The shell feeds completed
//! outcomes back through the `apply_*` functions, which guard against stale
//! responses using the sequence numbers allocated here.

use crate::model::{total_pages, CourtRecord, SearchFilters, SearchRequest, SearchResponse, PAGE_SIZE};
use crate::state::{FilterForm, SummaryState};

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The filter form; typing edits the focused field.
    Form,
    /// The result list; navigation keys move the highlight.
    Results,
}

/// A collaborator call requested by a state transition.
///
/// The state layer never performs I/O; the shell converts commands into
/// provider worker jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a records search.
    Search {
        /// Sequence number guarding the eventual outcome.
        seq: u64,
        /// The search to run.
        request: SearchRequest,
    },
    /// Summarize one record.
    Summarize {
        /// Sequence number guarding the eventual outcome.
        seq: u64,
        /// The record to summarize.
        record: CourtRecord,
    },
}

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Filter form contents and cursor.
    pub form: FilterForm,
    /// Most recent successful result page; replaced wholesale, never merged.
    pub results: SearchResponse,
    /// Whether a search is in flight.
    pub loading: bool,
    /// 1-based page the shown results belong to.
    pub current_page: usize,
    /// Highlighted card index within the current page.
    pub selected: usize,
    /// Record open in the detail overlay, if any.
    pub detail: Option<CourtRecord>,
    /// Summary lifecycle for the open record.
    pub summary: SummaryState,
    /// Which pane receives keyboard input.
    pub focus: Focus,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// Transient status-bar notice (e.g. after a failed search).
    pub status_notice: Option<String>,

    /// Latest issued search sequence; older outcomes are dropped.
    pub(crate) latest_search_seq: Option<u64>,
    /// Latest issued summary sequence; older outcomes are dropped.
    pub(crate) latest_summary_seq: Option<u64>,
    next_seq: u64,
}

impl AppState {
    /// Fresh state: empty form, no results, form focused.
    pub fn new() -> Self {
        Self {
            form: FilterForm::default(),
            results: SearchResponse::default(),
            loading: false,
            current_page: 1,
            selected: 0,
            detail: None,
            summary: SummaryState::Absent,
            focus: Focus::Form,
            help_visible: false,
            status_notice: None,
            latest_search_seq: None,
            latest_summary_seq: None,
            next_seq: 0,
        }
    }

    /// Allocate the next request sequence number.
    ///
    /// One counter serves both searches and summaries; each state slot
    /// remembers its own latest value.
    pub(crate) fn alloc_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Total page count derived from the current total match count.
    pub fn total_pages(&self) -> usize {
        total_pages(self.results.total_results, PAGE_SIZE)
    }

    /// Whether the last completed search matched nothing.
    ///
    /// Distinct from `loading`; the empty state only shows once a search
    /// has finished.
    pub fn has_no_records(&self) -> bool {
        !self.loading && self.results.records.is_empty()
    }

    /// The currently highlighted record, if the page is non-empty.
    pub fn selected_record(&self) -> Option<&CourtRecord> {
        self.results.records.get(self.selected)
    }

    /// Move the highlight down one card, clamped to the page.
    pub fn select_next(&mut self) {
        let len = self.results.records.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the highlight up one card.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle focus between the form and the result list.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::Results,
            Focus::Results => Focus::Form,
        };
    }

    /// Filter set a search issued right now would use.
    pub fn current_filters(&self) -> SearchFilters {
        self.form.to_filters()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
