//! Domain model types (pure).
//!
//! All types in this module are pure data; nothing here performs I/O.

pub mod error;
pub mod filters;
pub mod key_action;
pub mod record;

pub use error::{AppError, ProviderError, SummaryError};
pub use filters::{total_pages, SearchFilters, SearchRequest, SearchResponse, PAGE_SIZE};
pub use key_action::KeyAction;
pub use record::{CourtRecord, CourtType, CASE_STATUSES, COUNTIES};
