//! Expense state store
//!
//! The store is the single owner of the expense collection. It exposes the two
//! permitted mutations, toggling a day's paid flag and attaching a receipt
//! name, and hands out immutable [`Snapshot`]s for readers.
//!
//! Every mutation validates its input before touching anything, then swaps in
//! a new snapshot in one assignment. A rejected mutation leaves the current
//! snapshot untouched, and a snapshot held by a reader never changes.

mod snapshot;

pub use snapshot::Snapshot;

use crate::audit::{AuditEntry, AuditTrail, Operation};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseDay, Money};
use crate::projection::Totals;

/// Owner of the expense collection
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    current: Snapshot,
    trail: AuditTrail,
}

impl ExpenseStore {
    /// Create a store from seed days
    pub fn new(days: Vec<ExpenseDay>) -> Self {
        Self::with_trail(days, AuditTrail::new())
    }

    /// Create a store that records mutations into the given trail
    pub fn with_trail(days: Vec<ExpenseDay>, trail: AuditTrail) -> Self {
        tracing::debug!(days = days.len(), "expense store initialized");
        Self {
            current: Snapshot::new(days),
            trail,
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    /// Number of days in the collection
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Get a day by position
    pub fn day(&self, index: usize) -> ExpenseResult<&ExpenseDay> {
        self.current
            .get(index)
            .ok_or_else(|| ExpenseError::out_of_range(index, self.current.len()))
    }

    /// Flip the paid flag of the day at `index`
    ///
    /// Returns the new value of the flag. Applying it twice restores the
    /// original value.
    pub fn toggle_day_paid(&mut self, index: usize) -> ExpenseResult<bool> {
        let before = self.day(index)?;
        let after = before.with_paid_toggled();
        let paid = after.paid;

        let entry = AuditEntry::new(Operation::TogglePaid, index, before, &after);
        self.current = self.current.replace(index, after);
        self.trail.record(entry);

        Ok(paid)
    }

    /// Record `filename` as the receipt of the day at `index`
    ///
    /// Overwrites any earlier receipt; the paid flag is not touched. The name
    /// is stored exactly as given but must contain something other than
    /// whitespace.
    pub fn attach_receipt(&mut self, index: usize, filename: &str) -> ExpenseResult<()> {
        let before = self.day(index)?;
        if filename.trim().is_empty() {
            return Err(ExpenseError::InvalidArgument(
                "Receipt filename cannot be empty".into(),
            ));
        }
        let after = before.with_receipt(filename);

        let entry = AuditEntry::new(Operation::AttachReceipt, index, before, &after);
        self.current = self.current.replace(index, after);
        self.trail.record(entry);

        Ok(())
    }

    /// Aggregate totals of the current snapshot
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.current)
    }

    /// Daily total of the day at `index`
    pub fn daily_total(&self, index: usize) -> ExpenseResult<Money> {
        self.day(index).map(ExpenseDay::total)
    }

    /// Mutations recorded this session
    pub fn history(&self) -> &[AuditEntry] {
        self.trail.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;

    fn scenario() -> ExpenseStore {
        ExpenseStore::new(vec![
            ExpenseDay::new(
                "Day 1",
                vec![ExpenseItem::new("Cement", 500), ExpenseItem::new("Sand", 300)],
            ),
            ExpenseDay::new("Day 2", vec![ExpenseItem::new("Bricks", 1200)])
                .paid(true)
                .receipt("r.pdf"),
        ])
    }

    fn assert_invariants(store: &ExpenseStore) {
        let totals = store.totals();
        assert_eq!(totals.grand_total, totals.paid_amount + totals.unpaid_amount);
        assert_eq!(totals.paid_days + totals.unpaid_days, store.len());
    }

    #[test]
    fn test_scenario_initial_totals() {
        let store = scenario();
        let totals = store.totals();

        assert_eq!(totals.grand_total, Money::new(2000));
        assert_eq!(totals.paid_amount, Money::new(1200));
        assert_eq!(totals.unpaid_amount, Money::new(800));
        assert_eq!(totals.paid_days, 1);
        assert_eq!(totals.unpaid_days, 1);
        assert_eq!(totals.receipt_days, 1);
    }

    #[test]
    fn test_scenario_toggle_then_attach() {
        let mut store = scenario();

        assert!(store.toggle_day_paid(0).unwrap());
        let totals = store.totals();
        assert_eq!(totals.paid_amount, Money::new(2000));
        assert_eq!(totals.unpaid_amount, Money::zero());
        assert_eq!(totals.paid_days, 2);

        store.attach_receipt(0, "invoice.jpg").unwrap();
        assert_eq!(store.totals().receipt_days, 2);
        assert_eq!(store.day(0).unwrap().receipt.as_deref(), Some("invoice.jpg"));
        assert_invariants(&store);
    }

    #[test]
    fn test_toggle_twice_restores_everything() {
        let mut store = scenario();
        let original = store.snapshot();

        for i in 0..store.len() {
            store.toggle_day_paid(i).unwrap();
            assert_ne!(store.day(i).unwrap().paid, original.get(i).unwrap().paid);
            assert_invariants(&store);

            store.toggle_day_paid(i).unwrap();
            assert_eq!(store.snapshot(), original);
        }
    }

    #[test]
    fn test_toggle_is_a_flip_not_set() {
        let mut store = scenario();
        assert!(!store.toggle_day_paid(1).unwrap());
        assert!(!store.day(1).unwrap().paid);
    }

    #[test]
    fn test_toggle_leaves_other_days_alone() {
        let mut store = scenario();
        let before = store.snapshot();

        store.toggle_day_paid(0).unwrap();
        let after = store.snapshot();

        assert_eq!(after.get(1), before.get(1));
        assert!(after.shares_day(&before, 1));
        assert_eq!(after.get(0).unwrap().items, before.get(0).unwrap().items);
        assert_eq!(after.get(0).unwrap().receipt, before.get(0).unwrap().receipt);
    }

    #[test]
    fn test_attach_receipt_keeps_paid_and_others() {
        let mut store = scenario();
        let before = store.snapshot();

        store.attach_receipt(1, "bricks-invoice.png").unwrap();

        assert_eq!(store.day(1).unwrap().receipt.as_deref(), Some("bricks-invoice.png"));
        assert!(store.day(1).unwrap().paid);
        assert_eq!(store.day(0).unwrap(), before.get(0).unwrap());
    }

    #[test]
    fn test_attach_receipt_overwrites() {
        let mut store = scenario();
        store.attach_receipt(0, "first.pdf").unwrap();
        store.attach_receipt(0, "second.pdf").unwrap();
        assert_eq!(store.day(0).unwrap().receipt.as_deref(), Some("second.pdf"));
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let mut store = scenario();
        let before = store.snapshot();

        let err = store.toggle_day_paid(2).unwrap_err();
        assert!(err.is_out_of_range());
        let err = store.attach_receipt(7, "x.pdf").unwrap_err();
        assert!(matches!(err, ExpenseError::OutOfRange { index: 7, len: 2 }));

        assert_eq!(store.snapshot(), before);
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_empty_filename_rejected() {
        let mut store = scenario();
        let before = store.snapshot();

        assert!(store.attach_receipt(0, "").unwrap_err().is_invalid_argument());
        assert!(store.attach_receipt(0, "   ").unwrap_err().is_invalid_argument());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_out_of_range_checked_before_filename() {
        let mut store = scenario();
        assert!(store.attach_receipt(9, "").unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_held_snapshot_is_unchanged() {
        let mut store = scenario();
        let held = store.snapshot();

        store.toggle_day_paid(0).unwrap();
        store.attach_receipt(0, "invoice.jpg").unwrap();

        assert!(!held.get(0).unwrap().paid);
        assert!(held.get(0).unwrap().receipt.is_none());
        assert_eq!(Totals::compute(&held).paid_amount, Money::new(1200));
    }

    #[test]
    fn test_history_records_successful_mutations() {
        let mut store = scenario();
        store.toggle_day_paid(0).unwrap();
        let _ = store.attach_receipt(0, "");
        store.attach_receipt(0, "invoice.jpg").unwrap();

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].operation, Operation::TogglePaid);
        assert_eq!(history[1].operation, Operation::AttachReceipt);
        assert_eq!(history[1].summary, "receipt: none -> invoice.jpg");
    }

    #[test]
    fn test_empty_store() {
        let mut store = ExpenseStore::new(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.totals().grand_total, Money::zero());
        assert!(store.toggle_day_paid(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_daily_total() {
        let store = scenario();
        assert_eq!(store.daily_total(0).unwrap(), Money::new(800));
        assert!(store.daily_total(5).is_err());
    }

    #[test]
    fn test_totals_with_huge_costs_do_not_panic() {
        let mut store = ExpenseStore::new(vec![
            ExpenseDay::new(
                "Day 1",
                vec![ExpenseItem::new("A", u64::MAX), ExpenseItem::new("B", 1)],
            ),
            ExpenseDay::new("Day 2", vec![ExpenseItem::new("C", 7)]).paid(true),
        ]);

        assert_eq!(store.totals().grand_total, Money::new(u64::MAX));
        assert_invariants(&store);

        store.toggle_day_paid(0).unwrap();
        assert_invariants(&store);
    }
}
