//! Display formatting for terminal output
//!
//! Formats totals, expense days and audit entries for the CLI.

pub mod audit;
pub mod day;
pub mod summary;

pub use audit::format_audit_entries;
pub use day::{format_day_details, format_day_table};
pub use summary::format_summary;
