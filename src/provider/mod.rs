//! External collaborators: records search and case summarization.
//!
//! The client core only knows the two traits here. Concrete providers live
//! in submodules: a deterministic simulated backend, a JSON-file backend,
//! and HTTP/local summarizers. The `worker` submodule runs providers on a
//! background thread so the UI stays interactive during slow calls.

use crate::model::{
    CourtRecord, ProviderError, SearchFilters, SearchRequest, SearchResponse, SummaryError,
};

pub mod file;
pub mod simulated;
pub mod summarizer;
pub mod worker;

pub use file::FileRecords;
pub use simulated::SimulatedRecords;
pub use summarizer::{GeminiSummarizer, TemplateSummarizer};
pub use worker::{Job, Outcome, ProviderHandle};

/// A searchable source of court records.
///
/// Match semantics and result ordering are provider-defined. The client
/// assumes only the page contract: at most `limit` records per call and a
/// total count that stays consistent across pages for one filter set.
pub trait RecordsProvider {
    /// Fetch one page of records matching the request's filters.
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError>;
}

/// A service that produces a natural-language synopsis of one record.
///
/// Every call is treated as fallible and potentially slow; callers must not
/// block the UI on it.
pub trait Summarizer {
    /// Produce a plain-text summary of the record.
    fn summarize(&self, record: &CourtRecord) -> Result<String, SummaryError>;
}

/// Filter semantics shared by the shipped providers.
///
/// Name and case number match as case-insensitive substrings (name against
/// both parties); county, status and court type match exactly; the filing
/// date range is inclusive on both ends. Blank text filters match anything.
pub fn record_matches(record: &CourtRecord, filters: &SearchFilters) -> bool {
    if let Some(name) = filters.name.as_deref() {
        if !name.trim().is_empty() {
            let needle = name.trim().to_lowercase();
            let in_plaintiff = record.plaintiff.to_lowercase().contains(&needle);
            let in_defendant = record.defendant.to_lowercase().contains(&needle);
            if !in_plaintiff && !in_defendant {
                return false;
            }
        }
    }

    if let Some(case_number) = filters.case_number.as_deref() {
        if !case_number.trim().is_empty() {
            let needle = case_number.trim().to_lowercase();
            if !record.case_number.to_lowercase().contains(&needle) {
                return false;
            }
        }
    }

    if let Some(county) = filters.county.as_deref() {
        if record.county != county {
            return false;
        }
    }

    if let Some(status) = filters.status.as_deref() {
        if record.status != status {
            return false;
        }
    }

    if let Some(court_type) = filters.court_type {
        if record.court_type != court_type {
            return false;
        }
    }

    if let Some(start) = filters.start_date {
        if record.filing_date < start {
            return false;
        }
    }

    if let Some(end) = filters.end_date {
        if record.filing_date > end {
            return false;
        }
    }

    true
}

/// Apply filters and pagination to an in-memory record set.
///
/// Both shipped providers go through this, so they share exact semantics.
pub fn search_slice(records: &[CourtRecord], request: &SearchRequest) -> SearchResponse {
    let matches: Vec<&CourtRecord> = records
        .iter()
        .filter(|r| record_matches(r, &request.filters))
        .collect();

    let total_results = matches.len();
    let offset = request.page.saturating_sub(1).saturating_mul(request.limit);
    let page: Vec<CourtRecord> = matches
        .into_iter()
        .skip(offset)
        .take(request.limit)
        .cloned()
        .collect();

    SearchResponse {
        records: page,
        total_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CourtType;
    use chrono::NaiveDate;

    fn record(id: &str, plaintiff: &str, county: &str, status: &str, date: (i32, u32, u32)) -> CourtRecord {
        CourtRecord {
            id: id.to_string(),
            court_type: CourtType::CommonPleas,
            county: county.to_string(),
            case_number: format!("2024-CV-{id}"),
            plaintiff: plaintiff.to_string(),
            defendant: "Acme Corp".to_string(),
            filing_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status: status.to_string(),
            details: "Test case.".to_string(),
            charges: None,
            links: None,
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let r = record("0001", "Jane Doe", "Adams", "Active", (2024, 1, 5));
        assert!(record_matches(&r, &SearchFilters::default()));
    }

    #[test]
    fn name_matches_either_party_case_insensitively() {
        let r = record("0001", "Jane Doe", "Adams", "Active", (2024, 1, 5));
        let by_plaintiff = SearchFilters {
            name: Some("jane".to_string()),
            ..Default::default()
        };
        let by_defendant = SearchFilters {
            name: Some("ACME".to_string()),
            ..Default::default()
        };
        let miss = SearchFilters {
            name: Some("smith".to_string()),
            ..Default::default()
        };
        assert!(record_matches(&r, &by_plaintiff));
        assert!(record_matches(&r, &by_defendant));
        assert!(!record_matches(&r, &miss));
    }

    #[test]
    fn blank_name_filter_is_ignored() {
        let r = record("0001", "Jane Doe", "Adams", "Active", (2024, 1, 5));
        let filters = SearchFilters {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(record_matches(&r, &filters));
    }

    #[test]
    fn county_and_status_match_exactly() {
        let r = record("0001", "Jane Doe", "Franklin", "Pending", (2024, 1, 5));
        let hit = SearchFilters {
            county: Some("Franklin".to_string()),
            status: Some("Pending".to_string()),
            ..Default::default()
        };
        let wrong_county = SearchFilters {
            county: Some("Adams".to_string()),
            ..Default::default()
        };
        assert!(record_matches(&r, &hit));
        assert!(!record_matches(&r, &wrong_county));
    }

    #[test]
    fn date_range_is_inclusive() {
        let r = record("0001", "Jane Doe", "Adams", "Active", (2024, 6, 15));
        let exact = SearchFilters {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            ..Default::default()
        };
        let before = SearchFilters {
            end_date: NaiveDate::from_ymd_opt(2024, 6, 14),
            ..Default::default()
        };
        let after = SearchFilters {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 16),
            ..Default::default()
        };
        assert!(record_matches(&r, &exact));
        assert!(!record_matches(&r, &before));
        assert!(!record_matches(&r, &after));
    }

    #[test]
    fn search_slice_pages_without_overlap() {
        let records: Vec<CourtRecord> = (0..25)
            .map(|i| record(&format!("{i:04}"), "Jane Doe", "Adams", "Active", (2024, 1, 5)))
            .collect();

        let page = |n: usize| SearchRequest {
            filters: SearchFilters::default(),
            page: n,
            limit: 10,
        };

        let p1 = search_slice(&records, &page(1));
        let p3 = search_slice(&records, &page(3));
        assert_eq!(p1.total_results, 25);
        assert_eq!(p1.records.len(), 10);
        assert_eq!(p3.total_results, 25);
        assert_eq!(p3.records.len(), 5);
        assert_eq!(p3.records[0].id, "0020");
        assert_eq!(p3.records[4].id, "0024");
    }

    #[test]
    fn search_slice_past_the_end_is_empty_but_keeps_total() {
        let records: Vec<CourtRecord> = (0..5)
            .map(|i| record(&format!("{i:04}"), "Jane Doe", "Adams", "Active", (2024, 1, 5)))
            .collect();
        let request = SearchRequest {
            filters: SearchFilters::default(),
            page: 4,
            limit: 10,
        };
        let response = search_slice(&records, &request);
        assert!(response.records.is_empty());
        assert_eq!(response.total_results, 5);
    }
}
