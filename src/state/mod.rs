//! Application state and transitions (pure core).

pub mod app_state;
pub mod form;
pub mod search;
pub mod summary;

pub use app_state::{AppState, Command, Focus};
pub use form::{FilterForm, FormField};
pub use summary::{SummaryState, SUMMARY_FALLBACK_TEXT};
