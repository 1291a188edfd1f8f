//! Background provider worker.
//!
//! The event loop never calls a provider directly: it submits [`Job`]s to a
//! worker thread that owns the trait objects, and drains [`Outcome`]s on its
//! poll tick. Jobs run sequentially in submission order; ordering across the
//! channel boundary is otherwise unspecified, which is why every job carries
//! a sequence number the state layer uses to drop stale outcomes.

use crate::model::{CourtRecord, ProviderError, SearchRequest, SearchResponse, SummaryError};
use crate::provider::{RecordsProvider, Summarizer};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// Work submitted to the provider worker.
#[derive(Debug)]
pub enum Job {
    /// Execute a records search.
    Search {
        /// Sequence number allocated by the state layer.
        seq: u64,
        /// The search to run.
        request: SearchRequest,
    },
    /// Summarize one record.
    Summarize {
        /// Sequence number allocated by the state layer.
        seq: u64,
        /// The record to summarize (full copy; the worker owns it).
        record: CourtRecord,
    },
}

/// Result of one completed job, delivered back to the event loop.
#[derive(Debug)]
pub enum Outcome {
    /// A search finished.
    Search {
        /// Sequence number of the originating job.
        seq: u64,
        /// Page number the search was issued for.
        page: usize,
        /// The provider's answer.
        result: Result<SearchResponse, ProviderError>,
    },
    /// A summary finished.
    Summary {
        /// Sequence number of the originating job.
        seq: u64,
        /// Id of the record that was summarized.
        record_id: String,
        /// The summarizer's answer.
        result: Result<String, SummaryError>,
    },
}

/// Handle to the provider worker thread.
///
/// Dropping the handle closes the job channel; the worker exits after the
/// jobs already queued. In-flight work cannot be cancelled, only ignored.
#[derive(Debug)]
pub struct ProviderHandle {
    jobs: Sender<Job>,
    outcomes: Receiver<Outcome>,
}

impl ProviderHandle {
    /// Spawn the worker thread owning the two collaborators.
    pub fn spawn(
        records: Box<dyn RecordsProvider + Send>,
        summarizer: Box<dyn Summarizer + Send>,
    ) -> Self {
        let (jobs_tx, jobs_rx) = mpsc::channel::<Job>();
        let (outcomes_tx, outcomes_rx) = mpsc::channel::<Outcome>();

        thread::spawn(move || run_worker(jobs_rx, outcomes_tx, records, summarizer));

        Self {
            jobs: jobs_tx,
            outcomes: outcomes_rx,
        }
    }

    /// Queue a job for the worker.
    ///
    /// A send failure means the worker thread is gone; during shutdown that
    /// is expected, so it is logged rather than propagated.
    pub fn submit(&self, job: Job) {
        if self.jobs.send(job).is_err() {
            warn!("provider worker is no longer running; job dropped");
        }
    }

    /// Drain every outcome that has arrived since the last call.
    ///
    /// Non-blocking; returns an empty vec when nothing completed.
    pub fn drain(&self) -> Vec<Outcome> {
        self.outcomes.try_iter().collect()
    }
}

fn run_worker(
    jobs: Receiver<Job>,
    outcomes: Sender<Outcome>,
    records: Box<dyn RecordsProvider + Send>,
    summarizer: Box<dyn Summarizer + Send>,
) {
    while let Ok(job) = jobs.recv() {
        let outcome = match job {
            Job::Search { seq, request } => {
                debug!(seq, page = request.page, "running search job");
                let page = request.page;
                let result = records.search(&request);
                Outcome::Search { seq, page, result }
            }
            Job::Summarize { seq, record } => {
                debug!(seq, record_id = %record.id, "running summarize job");
                let record_id = record.id.clone();
                let result = summarizer.summarize(&record);
                Outcome::Summary {
                    seq,
                    record_id,
                    result,
                }
            }
        };

        // Receiver gone means the app is shutting down.
        if outcomes.send(outcome).is_err() {
            break;
        }
    }
}
