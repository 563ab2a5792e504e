//! Audit entry data structures
//!
//! Defines the operations that can be recorded and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ExpenseDay;

/// Types of mutations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A day's paid flag was flipped
    TogglePaid,
    /// A receipt name was attached to a day
    AttachReceipt,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::TogglePaid => write!(f, "TOGGLE PAID"),
            Operation::AttachReceipt => write!(f, "ATTACH RECEIPT"),
        }
    }
}

/// A single audit log entry
///
/// Records one successful mutation of an expense day with the day's value
/// before and after the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of mutation performed
    pub operation: Operation,

    /// Position of the day in the collection
    pub day_index: usize,

    /// Display label of the day
    pub day_label: String,

    /// JSON representation of the day before the mutation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the day after the mutation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary
    pub summary: String,
}

impl AuditEntry {
    /// Build an entry describing the change from `before` to `after`
    pub fn new(
        operation: Operation,
        day_index: usize,
        before: &ExpenseDay,
        after: &ExpenseDay,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            day_index,
            day_label: after.date.clone(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary: describe_change(operation, before, after),
        }
    }

    /// Format the entry as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} #{} ({}): {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.day_index,
            self.day_label,
            self.summary
        )
    }
}

fn describe_change(operation: Operation, before: &ExpenseDay, after: &ExpenseDay) -> String {
    match operation {
        Operation::TogglePaid => format!(
            "paid: {} -> {}",
            paid_label(before.paid),
            paid_label(after.paid)
        ),
        Operation::AttachReceipt => format!(
            "receipt: {} -> {}",
            before.receipt.as_deref().unwrap_or("none"),
            after.receipt.as_deref().unwrap_or("none")
        ),
    }
}

fn paid_label(paid: bool) -> &'static str {
    if paid {
        "paid"
    } else {
        "unpaid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;

    fn day() -> ExpenseDay {
        ExpenseDay::new("Day 1", vec![ExpenseItem::new("Cement", 500)])
    }

    #[test]
    fn test_toggle_entry() {
        let before = day();
        let after = before.with_paid_toggled();
        let entry = AuditEntry::new(Operation::TogglePaid, 0, &before, &after);

        assert_eq!(entry.day_label, "Day 1");
        assert_eq!(entry.summary, "paid: unpaid -> paid");
        assert_eq!(entry.before.as_ref().unwrap()["paid"], false);
        assert_eq!(entry.after.as_ref().unwrap()["paid"], true);
    }

    #[test]
    fn test_receipt_entry() {
        let before = day().receipt("old.pdf");
        let after = before.with_receipt("new.png");
        let entry = AuditEntry::new(Operation::AttachReceipt, 3, &before, &after);

        assert_eq!(entry.summary, "receipt: old.pdf -> new.png");
        assert!(entry
            .format_human_readable()
            .contains("ATTACH RECEIPT #3 (Day 1): receipt: old.pdf -> new.png"));
    }

    #[test]
    fn test_serialization() {
        let before = day();
        let entry = AuditEntry::new(Operation::TogglePaid, 0, &before, &before.with_paid_toggled());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"toggle_paid\""));

        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.operation, Operation::TogglePaid);
        assert_eq!(parsed.day_index, 0);
    }
}
