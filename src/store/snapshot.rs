//! Immutable view of the expense collection
//!
//! A snapshot is a cheap, reference-counted handle. Mutations in the store
//! build a new day list and swap it in, so a snapshot taken earlier keeps
//! showing exactly the days it was taken with.

use std::sync::Arc;

use crate::models::ExpenseDay;

/// An ordered, read-only collection of expense days
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    days: Arc<[Arc<ExpenseDay>]>,
}

impl Snapshot {
    /// Build a snapshot from owned days
    pub fn new(days: Vec<ExpenseDay>) -> Self {
        days.into_iter().map(Arc::new).collect::<Vec<_>>().into()
    }

    /// Number of days
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the collection has no days
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Get a day by position
    pub fn get(&self, index: usize) -> Option<&ExpenseDay> {
        self.days.get(index).map(|day| day.as_ref())
    }

    /// Iterate over days in display order
    pub fn iter(&self) -> impl Iterator<Item = &ExpenseDay> + '_ {
        self.days.iter().map(|day| day.as_ref())
    }

    /// Copy the day list with the day at `index` replaced
    ///
    /// Untouched days are shared with `self`. Caller checks the index.
    pub(crate) fn replace(&self, index: usize, day: ExpenseDay) -> Self {
        let mut days: Vec<Arc<ExpenseDay>> = self.days.to_vec();
        days[index] = Arc::new(day);
        days.into()
    }

    /// Whether two snapshots share the same day record at `index`
    pub fn shares_day(&self, other: &Snapshot, index: usize) -> bool {
        match (self.days.get(index), other.days.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Owned copies of all days
    pub fn to_vec(&self) -> Vec<ExpenseDay> {
        self.iter().cloned().collect()
    }
}

impl From<Vec<Arc<ExpenseDay>>> for Snapshot {
    fn from(days: Vec<Arc<ExpenseDay>>) -> Self {
        Self { days: days.into() }
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for Snapshot {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;

    fn days() -> Vec<ExpenseDay> {
        vec![
            ExpenseDay::new("Day 1", vec![ExpenseItem::new("Cement", 500)]),
            ExpenseDay::new("Day 2", vec![ExpenseItem::new("Bricks", 1200)]),
        ]
    }

    #[test]
    fn test_new_and_get() {
        let snapshot = Snapshot::new(days());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(1).unwrap().date, "Day 2");
        assert!(snapshot.get(2).is_none());
    }

    #[test]
    fn test_replace_shares_untouched_days() {
        let original = Snapshot::new(days());
        let updated = original.replace(0, original.get(0).unwrap().with_paid_toggled());

        assert!(!original.get(0).unwrap().paid);
        assert!(updated.get(0).unwrap().paid);
        assert!(!updated.shares_day(&original, 0));
        assert!(updated.shares_day(&original, 1));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Snapshot::new(days()), Snapshot::new(days()));
        assert_ne!(Snapshot::new(days()), Snapshot::default());
    }
}
