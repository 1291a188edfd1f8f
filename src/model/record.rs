//! Court record domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counties covered by the shipped record providers.
pub const COUNTIES: &[&str] = &["Adams", "Franklin", "Hamilton"];

/// Conventional case status values used by the status filter.
///
/// `CourtRecord::status` itself is free text; providers are not required to
/// stay inside this set, but the filter select only offers these values.
pub const CASE_STATUSES: &[&str] = &["Active", "Pending", "Closed"];

/// The fixed set of court types a record can belong to.
///
/// Serializes to the full display name ("Common Pleas Court" etc.) so the
/// JSON dataset format matches what a human would write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtType {
    /// Clerk of Courts filings.
    #[serde(rename = "Clerk of Courts")]
    Clerk,
    /// Common Pleas Court cases.
    #[serde(rename = "Common Pleas Court")]
    CommonPleas,
    /// County Court cases.
    #[serde(rename = "County Court")]
    County,
    /// Probate Court cases.
    #[serde(rename = "Probate Court")]
    Probate,
}

impl CourtType {
    /// All court types, in the order the filter select offers them.
    pub const ALL: [CourtType; 4] = [
        CourtType::Clerk,
        CourtType::CommonPleas,
        CourtType::County,
        CourtType::Probate,
    ];

    /// Human-readable name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            CourtType::Clerk => "Clerk of Courts",
            CourtType::CommonPleas => "Common Pleas Court",
            CourtType::County => "County Court",
            CourtType::Probate => "Probate Court",
        }
    }

    /// Parse a display name back into a court type.
    ///
    /// Returns `None` for anything outside the fixed enumeration.
    pub fn from_name(name: &str) -> Option<Self> {
        CourtType::ALL.into_iter().find(|ct| ct.as_str() == name)
    }
}

impl fmt::Display for CourtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One court case entry as returned by a records provider.
///
/// Immutable once created: the client renders and summarizes records but
/// never mutates them. Replaced wholesale when a new result page arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtRecord {
    /// Provider-assigned stable identifier.
    pub id: String,
    /// Which court the case was filed in.
    pub court_type: CourtType,
    /// County name (one of [`COUNTIES`] for the shipped providers).
    pub county: String,
    /// Docket case number, e.g. "2024-CV-0173".
    pub case_number: String,
    /// Plaintiff party name.
    pub plaintiff: String,
    /// Defendant party name.
    pub defendant: String,
    /// Date the case was filed.
    pub filing_date: NaiveDate,
    /// Free-text status, conventionally one of [`CASE_STATUSES`].
    pub status: String,
    /// Free-text case description.
    pub details: String,
    /// Charges text, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charges: Option<String>,
    /// External document links, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}
