//! Case summarizers.
//!
//! Two implementations of the [`Summarizer`] trait: a Gemini-style HTTP
//! client and a local template fallback used when no API key is configured.
//! Both run on the provider worker thread, never on the UI thread.

use crate::model::{CourtRecord, SummaryError};
use crate::provider::Summarizer;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request timeout for summarization calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the summarization prompt from the full record.
///
/// The whole record goes into the prompt; the service sees the same fields
/// the detail overlay shows.
fn build_prompt(record: &CourtRecord) -> String {
    let mut prompt = String::from(
        "Provide a concise executive summary of the following public court \
         case record in plain language, two to four sentences, for a \
         non-lawyer reader.\n\n",
    );
    prompt.push_str(&format!("Case number: {}\n", record.case_number));
    prompt.push_str(&format!("Court: {}\n", record.court_type));
    prompt.push_str(&format!("County: {}\n", record.county));
    prompt.push_str(&format!("Plaintiff: {}\n", record.plaintiff));
    prompt.push_str(&format!("Defendant: {}\n", record.defendant));
    prompt.push_str(&format!("Filing date: {}\n", record.filing_date));
    prompt.push_str(&format!("Status: {}\n", record.status));
    if let Some(charges) = &record.charges {
        prompt.push_str(&format!("Charges: {charges}\n"));
    }
    prompt.push_str(&format!("Details: {}\n", record.details));
    prompt
}

// ===== Gemini HTTP summarizer =====

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Summarizer backed by a Gemini-style `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiSummarizer {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiSummarizer {
    /// Create a summarizer for `endpoint`/`model`, reading the API key from
    /// the `api_key_env` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::MissingApiKey`] when the variable is unset or
    /// empty, and a transport error if the HTTP client cannot be built.
    pub fn new(endpoint: &str, model: &str, api_key_env: &str) -> Result<Self, SummaryError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SummaryError::MissingApiKey {
                var: api_key_env.to_string(),
            })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }
}

impl Summarizer for GeminiSummarizer {
    fn summarize(&self, record: &CourtRecord) -> Result<String, SummaryError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(record),
                }],
            }],
        };

        debug!(record_id = %record.id, model = %self.model, "requesting case summary");

        let response: GenerateResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(SummaryError::EmptyResponse)?;

        Ok(text.trim().to_string())
    }
}

// ===== Local template summarizer =====

/// Offline summarizer that renders a deterministic synopsis from the record
/// fields. Used when no API key is configured so the app stays usable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummarizer;

impl Summarizer for TemplateSummarizer {
    fn summarize(&self, record: &CourtRecord) -> Result<String, SummaryError> {
        let mut summary = format!(
            "Case {} is a {} matter filed in {} County on {}, brought by {} against {}.",
            record.case_number,
            record.court_type,
            record.county,
            record.filing_date.format("%B %-d, %Y"),
            record.plaintiff,
            record.defendant,
        );
        if let Some(charges) = &record.charges {
            summary.push_str(&format!(" The charges at issue are: {charges}."));
        }
        summary.push_str(&format!(
            " The case is currently {}.",
            record.status.to_lowercase()
        ));
        Ok(summary)
    }
}
