//! Search criteria and result page types.

use crate::model::{CourtRecord, CourtType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed number of records per result page.
pub const PAGE_SIZE: usize = 10;

/// The combination of all active search criteria at a point in time.
///
/// Every field is optional; `None` means "do not filter on this". Owned by
/// the filter form state and mutated only by direct user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Party name fragment, matched against plaintiff and defendant.
    pub name: Option<String>,
    /// Case number fragment.
    pub case_number: Option<String>,
    /// Exact county name.
    pub county: Option<String>,
    /// Exact status value.
    pub status: Option<String>,
    /// Court type.
    pub court_type: Option<CourtType>,
    /// Earliest filing date (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Latest filing date (inclusive).
    pub end_date: Option<NaiveDate>,
}

/// One search call to a records provider: filters plus pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Active filter set.
    pub filters: SearchFilters,
    /// 1-based page number. Always ≥ 1; callers validate before issuing.
    pub page: usize,
    /// Maximum records per page. Always > 0.
    pub limit: usize,
}

/// A provider's answer to one [`SearchRequest`].
///
/// `records` is at most `limit` long; `total_results` counts every match
/// across all pages and is stable for a given filter set within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    /// The requested slice of matches, in provider order.
    pub records: Vec<CourtRecord>,
    /// Total number of matches across all pages.
    pub total_results: usize,
}

/// Number of pages needed to show `total_results` matches.
///
/// Zero matches means zero pages; pagination is disabled entirely in that
/// state rather than showing an empty page 1.
pub fn total_pages(total_results: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    total_results.div_ceil(page_size)
}
