//! Error taxonomy for the courtview application.
//!
//! Hierarchical error types built on `thiserror`, composing via `From` so
//! call sites can use `?` without manual mapping.
//!
//! Recovery strategy: provider and summary failures are non-fatal — a search
//! failure is logged and the previously shown results stay untouched, a
//! summary failure renders as a fixed fallback message. Terminal errors are
//! fatal and propagate to the top-level handler.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A records provider call failed.
    ///
    /// Non-fatal: logged to the tracing sink, the loading flag is cleared and
    /// previously shown results remain untouched. No retry is attempted; the
    /// user issues a fresh search when ready.
    #[error("records provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A summarizer call failed.
    ///
    /// Non-fatal: rendered as the fixed fallback text in the detail overlay,
    /// after which the generate affordance becomes usable again.
    #[error("summarizer error: {0}")]
    Summary(#[from] SummaryError),

    /// Configuration could not be loaded.
    ///
    /// Fatal at startup: the app refuses to run with a config file it cannot
    /// parse rather than silently falling back to defaults.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    ///
    /// Fatal at startup for the same reason as config errors.
    #[error("logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the TUI cannot continue. The shell
    /// restores the terminal and exits.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures from a records provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The records dataset file could not be read.
    #[error("failed to read records dataset at {path:?}: {source}")]
    DatasetRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The records dataset file is not valid JSON for `Vec<CourtRecord>`.
    #[error("invalid records dataset at {path:?}: {reason}")]
    DatasetParse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The provider backend could not be reached or answered abnormally.
    #[error("provider transport failure: {reason}")]
    Transport {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Failures from a summarizer.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The configured API key environment variable is unset or empty.
    #[error("summarizer API key not set (environment variable {var})")]
    MissingApiKey {
        /// Name of the environment variable that was consulted.
        var: String,
    },

    /// The HTTP call to the summarization service failed.
    #[error("summarizer request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered but carried no usable summary text.
    #[error("summarizer returned no text")]
    EmptyResponse,
}
