//! Search and pagination transitions.
//!
//! A search replaces the result page wholesale on success and leaves it
//! untouched on failure. Overlapping searches are resolved by sequence
//! number: only the outcome of the most recently issued search is applied,
//! so a slow early response can never clobber a fresher one.

use crate::model::{ProviderError, SearchFilters, SearchRequest, SearchResponse, PAGE_SIZE};
use crate::state::{AppState, Command};
use tracing::{debug, error};

/// Issue the one-time startup search: unfiltered, page 1.
pub fn startup_search(state: &mut AppState) -> Command {
    issue(state, SearchFilters::default(), 1)
}

/// Submit the current form filters as a fresh page-1 search.
pub fn submit_search(state: &mut AppState) -> Command {
    let filters = state.current_filters();
    issue(state, filters, 1)
}

/// Move to `new_page` with the existing filters.
///
/// A no-op (no command, no state change) when the target is outside
/// `[1, total_pages]` — including the zero-results case where total pages
/// is 0 and every target is rejected.
pub fn change_page(state: &mut AppState, new_page: usize) -> Option<Command> {
    let total = state.total_pages();
    if new_page < 1 || new_page > total {
        debug!(new_page, total_pages = total, "rejecting out-of-range page change");
        return None;
    }
    let filters = state.current_filters();
    Some(issue(state, filters, new_page))
}

fn issue(state: &mut AppState, filters: SearchFilters, page: usize) -> Command {
    let seq = state.alloc_seq();
    state.latest_search_seq = Some(seq);
    state.loading = true;
    debug!(seq, page, "search issued");
    Command::Search {
        seq,
        request: SearchRequest {
            filters,
            page,
            limit: PAGE_SIZE,
        },
    }
}

/// Apply a completed search outcome.
///
/// Stale outcomes (sequence older than the latest issued search) are
/// dropped entirely. On success the result page is replaced, the current
/// page becomes the requested page and the highlight resets. On failure the
/// previous results stay untouched; the error goes to the log and a short
/// notice to the status bar.
pub fn apply_search_outcome(
    state: &mut AppState,
    seq: u64,
    page: usize,
    result: Result<SearchResponse, ProviderError>,
) {
    if state.latest_search_seq != Some(seq) {
        debug!(seq, "dropping stale search outcome");
        return;
    }

    state.loading = false;
    match result {
        Ok(response) => {
            state.results = response;
            state.current_page = page;
            state.selected = 0;
            state.status_notice = None;
        }
        Err(err) => {
            error!(error = %err, page, "search failed");
            state.status_notice = Some("Search failed — showing previous results".to_string());
        }
    }
}
