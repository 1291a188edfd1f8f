//! End-to-end flows through the state layer and the provider worker.
//!
//! These drive the same path the event loop does: a transition issues a
//! command, the command becomes a worker job, and the drained outcome is fed
//! back through the apply functions. The terminal is the only part left out.

use chrono::NaiveDate;
use courtview::model::{
    CourtRecord, CourtType, SearchRequest, SearchResponse, SummaryError, PAGE_SIZE,
};
use courtview::provider::{
    search_slice, Job, Outcome, ProviderHandle, RecordsProvider, Summarizer,
};
use courtview::state::{search, summary, AppState, Command, SummaryState, SUMMARY_FALLBACK_TEXT};
use std::time::{Duration, Instant};

struct InMemoryRecords {
    records: Vec<CourtRecord>,
}

impl InMemoryRecords {
    fn with_count(count: usize) -> Self {
        let records = (0..count)
            .map(|i| CourtRecord {
                id: format!("rec-{i:04}"),
                court_type: CourtType::CommonPleas,
                county: if i % 2 == 0 { "Adams" } else { "Franklin" }.to_string(),
                case_number: format!("2024-CV-{i:04}"),
                plaintiff: format!("Plaintiff {i}"),
                defendant: format!("Defendant {i}"),
                filing_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                status: "Active".to_string(),
                details: "Integration fixture.".to_string(),
                charges: None,
                links: None,
            })
            .collect();
        Self { records }
    }
}

impl RecordsProvider for InMemoryRecords {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, courtview::model::ProviderError> {
        Ok(search_slice(&self.records, request))
    }
}

struct EchoSummarizer;

impl Summarizer for EchoSummarizer {
    fn summarize(&self, record: &CourtRecord) -> Result<String, SummaryError> {
        if record.id.ends_with("0013") {
            return Err(SummaryError::EmptyResponse);
        }
        Ok(format!("Summary of {}", record.case_number))
    }
}

fn spawn(count: usize) -> ProviderHandle {
    ProviderHandle::spawn(Box::new(InMemoryRecords::with_count(count)), Box::new(EchoSummarizer))
}

fn submit(handle: &ProviderHandle, command: Command) {
    let job = match command {
        Command::Search { seq, request } => Job::Search { seq, request },
        Command::Summarize { seq, record } => Job::Summarize { seq, record },
    };
    handle.submit(job);
}

/// Drain outcomes until `count` arrived, applying each to the state.
fn pump(handle: &ProviderHandle, state: &mut AppState, count: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut applied = 0;
    while applied < count && Instant::now() < deadline {
        for outcome in handle.drain() {
            match outcome {
                Outcome::Search { seq, page, result } => {
                    search::apply_search_outcome(state, seq, page, result);
                }
                Outcome::Summary {
                    seq,
                    record_id,
                    result,
                } => {
                    summary::apply_summary_outcome(state, seq, &record_id, result);
                }
            }
            applied += 1;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(applied, count, "timed out waiting for outcomes");
}

#[test]
fn startup_search_fills_the_first_page() {
    let handle = spawn(25);
    let mut state = AppState::new();

    submit(&handle, search::startup_search(&mut state));
    assert!(state.loading);

    pump(&handle, &mut state, 1);
    assert!(!state.loading);
    assert_eq!(state.results.total_results, 25);
    assert_eq!(state.results.records.len(), PAGE_SIZE);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages(), 3);
}

#[test]
fn paging_to_the_last_page_shows_the_remainder() {
    let handle = spawn(25);
    let mut state = AppState::new();
    submit(&handle, search::startup_search(&mut state));
    pump(&handle, &mut state, 1);

    submit(&handle, search::change_page(&mut state, 3).unwrap());
    pump(&handle, &mut state, 1);

    assert_eq!(state.current_page, 3);
    assert_eq!(state.results.records.len(), 5);
    assert_eq!(state.results.records[0].id, "rec-0020");
    assert_eq!(state.results.records[4].id, "rec-0024");

    // No page 4.
    assert!(search::change_page(&mut state, 4).is_none());
}

#[test]
fn filtered_submit_resets_to_page_one_with_the_filtered_total() {
    let handle = spawn(25);
    let mut state = AppState::new();
    submit(&handle, search::startup_search(&mut state));
    pump(&handle, &mut state, 1);

    submit(&handle, search::change_page(&mut state, 2).unwrap());
    pump(&handle, &mut state, 1);
    assert_eq!(state.current_page, 2);

    // Narrow to Adams county (the 13 even-indexed records) from the form.
    state.form.county = Some("Adams");
    submit(&handle, search::submit_search(&mut state));
    pump(&handle, &mut state, 1);

    assert_eq!(state.current_page, 1);
    assert_eq!(state.results.total_results, 13);
    assert!(state
        .results
        .records
        .iter()
        .all(|r| r.county == "Adams"));
}

#[test]
fn summary_flow_reaches_ready_through_the_worker() {
    let handle = spawn(25);
    let mut state = AppState::new();
    submit(&handle, search::startup_search(&mut state));
    pump(&handle, &mut state, 1);

    let record = state.selected_record().cloned().unwrap();
    summary::open_detail(&mut state, record);
    submit(&handle, summary::request_summary(&mut state).unwrap());
    assert!(state.summary.is_pending());

    pump(&handle, &mut state, 1);
    assert_eq!(
        state.summary,
        SummaryState::Ready("Summary of 2024-CV-0000".to_string())
    );
}

#[test]
fn summary_failure_reaches_failed_not_a_panic() {
    let handle = spawn(25);
    let mut state = AppState::new();
    submit(&handle, search::startup_search(&mut state));
    pump(&handle, &mut state, 1);

    submit(&handle, search::change_page(&mut state, 2).unwrap());
    pump(&handle, &mut state, 1);

    // rec-0013 is the summarizer's designated failure.
    let record = state
        .results
        .records
        .iter()
        .find(|r| r.id == "rec-0013")
        .cloned()
        .unwrap();
    summary::open_detail(&mut state, record);
    submit(&handle, summary::request_summary(&mut state).unwrap());
    pump(&handle, &mut state, 1);

    assert_eq!(state.summary, SummaryState::Failed);
    // The overlay renders the fixed fallback text for this state.
    assert_eq!(SUMMARY_FALLBACK_TEXT, "Failed to generate summary.");
}

#[test]
fn summary_outcome_after_close_is_ignored() {
    let handle = spawn(25);
    let mut state = AppState::new();
    submit(&handle, search::startup_search(&mut state));
    pump(&handle, &mut state, 1);

    let record = state.selected_record().cloned().unwrap();
    summary::open_detail(&mut state, record);
    submit(&handle, summary::request_summary(&mut state).unwrap());

    // Close before the outcome arrives; wait for it, then apply.
    summary::close_detail(&mut state);
    pump(&handle, &mut state, 1);

    assert_eq!(state.summary, SummaryState::Absent);
    assert!(state.detail.is_none());
}

#[test]
fn overlapping_searches_resolve_to_the_newest() {
    let handle = spawn(25);
    let mut state = AppState::new();
    submit(&handle, search::startup_search(&mut state));
    pump(&handle, &mut state, 1);

    // Issue two page changes back to back; the worker answers in order, but
    // only the second outcome may apply.
    submit(&handle, search::change_page(&mut state, 2).unwrap());
    submit(&handle, search::change_page(&mut state, 3).unwrap());
    pump(&handle, &mut state, 2);

    assert_eq!(state.current_page, 3);
    assert_eq!(state.results.records[0].id, "rec-0020");
    assert!(!state.loading);
}
