//! Activity audit for the expense tracker
//!
//! Records every successful toggle-paid and attach-receipt mutation with the
//! day's value before and after the change.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, day position and
//!   before/after values.
//! - `AuditLogger`: appends entries to a line-delimited JSON file (JSONL) and
//!   reads them back.
//! - `AuditTrail`: the session's in-memory history, optionally mirrored to an
//!   `AuditLogger`.

mod entry;
mod logger;
mod trail;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
pub use trail::AuditTrail;
