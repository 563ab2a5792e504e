//! In-memory activity trail
//!
//! Keeps every entry for the current session and mirrors it to an optional
//! file logger. A failing file sink is reported through tracing and never
//! interrupts the caller.

use super::entry::AuditEntry;
use super::logger::AuditLogger;

/// Session history of successful mutations
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
    sink: Option<AuditLogger>,
}

impl AuditTrail {
    /// Create a trail that only keeps entries in memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail that also appends to the given logger
    pub fn with_sink(sink: AuditLogger) -> Self {
        Self {
            entries: Vec::new(),
            sink: Some(sink),
        }
    }

    /// Record an entry
    pub fn record(&mut self, entry: AuditEntry) {
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.log(&entry) {
                tracing::warn!(path = %sink.path().display(), error = %e, "failed to append audit entry");
            }
        }
        tracing::debug!(operation = %entry.operation, day = entry.day_index, "{}", entry.summary);
        self.entries.push(entry);
    }

    /// All entries recorded this session, oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
