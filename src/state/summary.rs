//! Selection and summary lifecycle.
//!
//! At most one record is open in the detail overlay; its summary moves
//! through Absent → Pending → Ready/Failed. Summaries are never cached:
//! closing the overlay or switching records resets to Absent. Outcomes are
//! applied only when they are still relevant — same sequence number and
//! same open record — so a summary resolving after the overlay closed
//! cannot resurface.

use crate::state::{AppState, Command};
use crate::model::{CourtRecord, SummaryError};
use tracing::{debug, warn};

/// Fixed user-facing text shown when a summary request fails.
pub const SUMMARY_FALLBACK_TEXT: &str = "Failed to generate summary.";

/// Lifecycle of the summary for the currently open record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    /// No summary requested for this detail session.
    #[default]
    Absent,
    /// A request is in flight; the generate affordance is inert.
    Pending,
    /// The summarizer answered with this text.
    Ready(String),
    /// The request failed; rendered as [`SUMMARY_FALLBACK_TEXT`].
    Failed,
}

impl SummaryState {
    /// Whether a request is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, SummaryState::Pending)
    }
}

/// Open the detail overlay for `record`, resetting any prior summary.
pub fn open_detail(state: &mut AppState, record: CourtRecord) {
    state.detail = Some(record);
    state.summary = SummaryState::Absent;
}

/// Close the detail overlay and clear summary state unconditionally.
pub fn close_detail(state: &mut AppState) {
    state.detail = None;
    state.summary = SummaryState::Absent;
}

/// Request a summary for the currently open record.
///
/// Returns `None` when no record is open or a request is already pending
/// (the generate affordance is disabled while Pending).
pub fn request_summary(state: &mut AppState) -> Option<Command> {
    if state.summary.is_pending() {
        return None;
    }
    let record = state.detail.clone()?;

    let seq = state.alloc_seq();
    state.latest_summary_seq = Some(seq);
    state.summary = SummaryState::Pending;
    debug!(seq, record_id = %record.id, "summary requested");
    Some(Command::Summarize { seq, record })
}

/// Eagerly summarize a record from the list view: opens its detail overlay
/// and immediately issues the summary request.
pub fn summarize_from_list(state: &mut AppState, record: CourtRecord) -> Option<Command> {
    open_detail(state, record);
    request_summary(state)
}

/// Apply a completed summary outcome.
///
/// Dropped when the sequence number is stale or the record is no longer the
/// open one; either way the outcome belongs to a detail session that has
/// moved on.
pub fn apply_summary_outcome(
    state: &mut AppState,
    seq: u64,
    record_id: &str,
    result: Result<String, SummaryError>,
) {
    if state.latest_summary_seq != Some(seq) {
        debug!(seq, "dropping stale summary outcome");
        return;
    }
    if state.detail.as_ref().map(|r| r.id.as_str()) != Some(record_id) {
        debug!(record_id, "dropping summary for a record no longer open");
        return;
    }

    state.summary = match result {
        Ok(text) => SummaryState::Ready(text),
        Err(err) => {
            warn!(record_id, error = %err, "summary request failed");
            SummaryState::Failed
        }
    };
}
