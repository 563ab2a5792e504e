//! Detail visibility (expanded/collapsed) per day
//!
//! Purely a display concern: it lives next to the view, keyed by day
//! position, and never touches the expense model.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseDay, Money};
use crate::store::Snapshot;

/// Expanded flags for each day, all collapsed initially
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailVisibility {
    expanded: Vec<bool>,
}

impl DetailVisibility {
    /// Collapsed state for `len` days
    pub fn new(len: usize) -> Self {
        Self {
            expanded: vec![false; len],
        }
    }

    /// Whether the day at `index` shows its details
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flip the flag of one day, returning the new value
    pub fn toggle(&mut self, index: usize) -> ExpenseResult<bool> {
        let len = self.expanded.len();
        let flag = self
            .expanded
            .get_mut(index)
            .ok_or_else(|| ExpenseError::out_of_range(index, len))?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Expand or collapse every day
    pub fn set_all(&mut self, expanded: bool) {
        self.expanded.iter_mut().for_each(|flag| *flag = expanded);
    }

    /// Number of days tracked
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether no days are tracked
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

/// A day paired with its display-only state
#[derive(Debug, Clone, Copy)]
pub struct DayView<'a> {
    pub index: usize,
    pub day: &'a ExpenseDay,
    pub daily_total: Money,
    pub expanded: bool,
}

impl<'a> DayView<'a> {
    /// Build views for every day of a snapshot
    pub fn collect(snapshot: &'a Snapshot, visibility: &DetailVisibility) -> Vec<DayView<'a>> {
        snapshot
            .iter()
            .enumerate()
            .map(|(index, day)| DayView {
                index,
                day,
                daily_total: day.total(),
                expanded: visibility.is_expanded(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;

    #[test]
    fn test_initially_collapsed() {
        let visibility = DetailVisibility::new(3);
        assert_eq!(visibility.len(), 3);
        assert!((0..3).all(|i| !visibility.is_expanded(i)));
        assert!(!visibility.is_expanded(10));
    }

    #[test]
    fn test_toggle() {
        let mut visibility = DetailVisibility::new(2);
        assert!(visibility.toggle(1).unwrap());
        assert!(visibility.is_expanded(1));
        assert!(!visibility.is_expanded(0));
        assert!(!visibility.toggle(1).unwrap());
        assert!(visibility.toggle(2).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_set_all() {
        let mut visibility = DetailVisibility::new(2);
        visibility.set_all(true);
        assert!(visibility.is_expanded(0) && visibility.is_expanded(1));
        visibility.set_all(false);
        assert!(!visibility.is_expanded(0));
    }

    #[test]
    fn test_day_views_do_not_touch_model() {
        let snapshot = Snapshot::new(vec![
            ExpenseDay::new("Day 1", vec![ExpenseItem::new("Cement", 500)]),
            ExpenseDay::new("Day 2", Vec::new()),
        ]);
        let mut visibility = DetailVisibility::new(snapshot.len());
        visibility.toggle(0).unwrap();

        let views = DayView::collect(&snapshot, &visibility);
        assert_eq!(views.len(), 2);
        assert!(views[0].expanded);
        assert_eq!(views[0].daily_total, Money::new(500));
        assert!(!views[1].expanded);
        assert_eq!(views[1].day.date, "Day 2");
    }
}
