//! Schedule search: filter compilation over raw schedule records and
//! reshaping of the matching records into a day-by-day view.
pub mod aggregator;
pub mod error;
pub mod executor;
pub mod helpers;
pub mod models;
pub mod record_source;
pub mod run_tool;
pub mod search;
