//! courtview
//!
//! TUI client for searching public county court records: a filter form, a
//! paginated result list, a record detail overlay, and on-demand AI case
//! summaries.
//!
//! Built as a pure core / impure shell: `model` and `state` hold data and
//! transitions with no I/O, `provider` runs searches and summaries on a
//! worker thread, and `view` owns the terminal and the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod provider;
pub mod state;
pub mod view;
