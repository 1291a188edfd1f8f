//! Deterministic simulated records backend.
//!
//! Stands in for a real court records search service. The dataset is
//! generated arithmetically from record indices, so the same build always
//! sees the same cases and tests can assert on stable counts.

use crate::model::{
    CourtRecord, CourtType, ProviderError, SearchRequest, SearchResponse, CASE_STATUSES, COUNTIES,
};
use crate::provider::{search_slice, RecordsProvider};
use chrono::{Days, NaiveDate};

/// Number of cases in the simulated dataset.
const DATASET_SIZE: usize = 137;

const FIRST_NAMES: &[&str] = &[
    "James", "Maria", "Robert", "Linda", "Michael", "Patricia", "David", "Jennifer", "William",
    "Elizabeth", "Richard", "Barbara", "Thomas", "Susan", "Charles", "Jessica",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson",
];

const ORGANIZATIONS: &[&str] = &[
    "Buckeye Holdings LLC",
    "Riverside Property Group",
    "Summit Lending Co.",
    "Capital Auto Finance",
    "Maple Street Partners",
    "State of Ohio",
];

const CHARGE_TEXTS: &[&str] = &[
    "Theft, R.C. 2913.02, felony of the fifth degree",
    "Operating a vehicle under the influence, R.C. 4511.19",
    "Breaking and entering, R.C. 2911.13",
    "Possession of a controlled substance, R.C. 2925.11",
];

/// In-memory records provider backed by a generated dataset.
#[derive(Debug, Clone)]
pub struct SimulatedRecords {
    records: Vec<CourtRecord>,
}

impl SimulatedRecords {
    /// Build the full simulated dataset.
    pub fn new() -> Self {
        let records = (0..DATASET_SIZE).map(generate_record).collect();
        Self { records }
    }

    /// Number of records in the dataset (before any filtering).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty. Never true for the shipped generator.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SimulatedRecords {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsProvider for SimulatedRecords {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError> {
        Ok(search_slice(&self.records, request))
    }
}

/// splitmix64 finalizer; enough mixing for a fake dataset, no RNG crate.
fn mix(index: usize, salt: u64) -> u64 {
    let mut z = (index as u64)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(salt);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn pick<'a>(options: &[&'a str], index: usize, salt: u64) -> &'a str {
    options[(mix(index, salt) as usize) % options.len()]
}

fn person_name(index: usize, salt: u64) -> String {
    format!(
        "{} {}",
        pick(FIRST_NAMES, index, salt),
        pick(LAST_NAMES, index, salt.wrapping_add(1))
    )
}

fn generate_record(index: usize) -> CourtRecord {
    let court_type = CourtType::ALL[(mix(index, 2) as usize) % CourtType::ALL.len()];
    let county = pick(COUNTIES, index, 3).to_string();
    let status = pick(CASE_STATUSES, index, 4).to_string();

    // Filing dates spread over roughly three years ending 2024-12-31.
    let filing_date = NaiveDate::from_ymd_opt(2022, 1, 1)
        .unwrap_or_default()
        .checked_add_days(Days::new(mix(index, 5) % 1095))
        .unwrap_or_default();

    let criminal = matches!(court_type, CourtType::CommonPleas | CourtType::County)
        && mix(index, 6) % 2 == 0;

    let (case_code, plaintiff, defendant, charges) = if criminal {
        (
            "CR",
            "State of Ohio".to_string(),
            person_name(index, 7),
            Some(pick(CHARGE_TEXTS, index, 8).to_string()),
        )
    } else if court_type == CourtType::Probate {
        (
            "PR",
            format!("Estate of {}", person_name(index, 9)),
            "N/A".to_string(),
            None,
        )
    } else {
        let plaintiff = if mix(index, 10) % 3 == 0 {
            pick(ORGANIZATIONS, index, 11).to_string()
        } else {
            person_name(index, 12)
        };
        ("CV", plaintiff, person_name(index, 13), None)
    };

    let year = filing_date.format("%Y");
    let case_number = format!("{year}-{case_code}-{:04}", index + 1);

    let details = format!(
        "{court_type} case filed in {county} County on {}. {} v. {}. Current status: {status}.",
        filing_date.format("%B %-d, %Y"),
        plaintiff,
        defendant,
    );

    let links = (mix(index, 14) % 4 == 0).then(|| {
        vec![format!(
            "https://records.example.gov/{}/docket/{case_number}",
            county.to_lowercase()
        )]
    });

    CourtRecord {
        id: format!("sim-{:04}", index + 1),
        court_type,
        county,
        case_number,
        plaintiff,
        defendant,
        filing_date,
        status,
        details,
        charges,
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchFilters;

    fn request(filters: SearchFilters, page: usize) -> SearchRequest {
        SearchRequest {
            filters,
            page,
            limit: 10,
        }
    }

    #[test]
    fn dataset_is_deterministic() {
        let a = SimulatedRecords::new();
        let b = SimulatedRecords::new();
        let ra = a.search(&request(SearchFilters::default(), 1)).unwrap();
        let rb = b.search(&request(SearchFilters::default(), 1)).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.len(), DATASET_SIZE);
    }

    #[test]
    fn unfiltered_total_spans_the_whole_dataset() {
        let provider = SimulatedRecords::new();
        let response = provider.search(&request(SearchFilters::default(), 1)).unwrap();
        assert_eq!(response.total_results, DATASET_SIZE);
        assert_eq!(response.records.len(), 10);
    }

    #[test]
    fn total_is_consistent_across_pages() {
        let provider = SimulatedRecords::new();
        let filters = SearchFilters {
            county: Some("Franklin".to_string()),
            ..Default::default()
        };
        let p1 = provider.search(&request(filters.clone(), 1)).unwrap();
        let p2 = provider.search(&request(filters, 2)).unwrap();
        assert_eq!(p1.total_results, p2.total_results);
    }

    #[test]
    fn county_filter_returns_only_that_county() {
        let provider = SimulatedRecords::new();
        let filters = SearchFilters {
            county: Some("Adams".to_string()),
            ..Default::default()
        };
        let response = provider.search(&request(filters, 1)).unwrap();
        assert!(!response.records.is_empty());
        assert!(response.records.iter().all(|r| r.county == "Adams"));
    }

    #[test]
    fn criminal_cases_name_the_state_and_carry_charges() {
        let provider = SimulatedRecords::new();
        let has_criminal = provider.records.iter().any(|r| {
            r.case_number.contains("-CR-")
                && r.plaintiff == "State of Ohio"
                && r.charges.is_some()
        });
        assert!(has_criminal, "expected some criminal cases in the dataset");
    }

    #[test]
    fn record_ids_are_unique() {
        let provider = SimulatedRecords::new();
        let mut ids: Vec<&str> = provider.records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DATASET_SIZE);
    }
}
