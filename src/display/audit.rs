//! Audit entry display formatting

use crate::audit::AuditEntry;

/// One human-readable line per entry
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No activity recorded.".to_string();
    }

    entries
        .iter()
        .map(|entry| entry.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n")
}
