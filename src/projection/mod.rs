//! View projection
//!
//! Pure derivations of display data from a store [`Snapshot`]. Nothing here
//! caches or mutates: every call walks the snapshot from scratch.

mod visibility;

pub use visibility::{DayView, DetailVisibility};

use serde::Serialize;

use crate::models::{ExpenseDay, Money};
use crate::store::Snapshot;

/// Aggregate figures over the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    /// Sum of all daily totals
    pub grand_total: Money,
    /// Sum of daily totals of paid days
    pub paid_amount: Money,
    /// `grand_total - paid_amount`
    pub unpaid_amount: Money,
    /// Number of paid days
    pub paid_days: usize,
    /// Number of unpaid days
    pub unpaid_days: usize,
    /// Number of days with a receipt
    pub receipt_days: usize,
    /// Number of days in the collection
    pub day_count: usize,
}

impl Totals {
    /// Compute totals for a snapshot
    pub fn compute(snapshot: &Snapshot) -> Self {
        let mut totals = Totals {
            day_count: snapshot.len(),
            ..Totals::default()
        };

        for day in snapshot.iter() {
            let daily = day.total();
            totals.grand_total += daily;
            if day.paid {
                totals.paid_amount += daily;
                totals.paid_days += 1;
            }
            if day.has_receipt() {
                totals.receipt_days += 1;
            }
        }

        totals.unpaid_amount = totals.grand_total.saturating_sub(totals.paid_amount);
        totals.unpaid_days = totals.day_count - totals.paid_days;
        totals
    }
}

/// Per-day figures for one row of the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub index: usize,
    pub date: String,
    pub item_count: usize,
    pub daily_total: Money,
    pub paid: bool,
    pub receipt: Option<String>,
}

impl DaySummary {
    /// Summarize one day
    pub fn of(index: usize, day: &ExpenseDay) -> Self {
        Self {
            index,
            date: day.date.clone(),
            item_count: day.item_count(),
            daily_total: day.total(),
            paid: day.paid,
            receipt: day.receipt.clone(),
        }
    }
}

/// Everything the display needs for one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub totals: Totals,
    pub days: Vec<DaySummary>,
}

/// Project a snapshot into totals plus per-day summaries
pub fn project(snapshot: &Snapshot) -> Projection {
    Projection {
        totals: Totals::compute(snapshot),
        days: snapshot
            .iter()
            .enumerate()
            .map(|(index, day)| DaySummary::of(index, day))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;

    fn scenario() -> Snapshot {
        Snapshot::new(vec![
            ExpenseDay::new(
                "Day 1",
                vec![ExpenseItem::new("Cement", 500), ExpenseItem::new("Sand", 300)],
            ),
            ExpenseDay::new("Day 2", vec![ExpenseItem::new("Bricks", 1200)])
                .paid(true)
                .receipt("r.pdf"),
        ])
    }

    #[test]
    fn test_project_scenario() {
        let projection = project(&scenario());

        assert_eq!(
            projection.totals,
            Totals {
                grand_total: Money::new(2000),
                paid_amount: Money::new(1200),
                unpaid_amount: Money::new(800),
                paid_days: 1,
                unpaid_days: 1,
                receipt_days: 1,
                day_count: 2,
            }
        );
        assert_eq!(projection.days.len(), 2);
        assert_eq!(projection.days[0].daily_total, Money::new(800));
        assert_eq!(projection.days[0].item_count, 2);
        assert_eq!(projection.days[1].receipt.as_deref(), Some("r.pdf"));
    }

    #[test]
    fn test_empty_collection() {
        let totals = Totals::compute(&Snapshot::default());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_day_without_items() {
        let snapshot = Snapshot::new(vec![ExpenseDay::new("Idle", Vec::new()).paid(true)]);
        let projection = project(&snapshot);

        assert_eq!(projection.days[0].daily_total, Money::zero());
        assert_eq!(projection.totals.paid_days, 1);
        assert_eq!(projection.totals.paid_amount, Money::zero());
    }

    #[test]
    fn test_projection_is_repeatable() {
        let snapshot = scenario();
        assert_eq!(project(&snapshot), project(&snapshot));
    }
}
