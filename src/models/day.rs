//! Expense day model
//!
//! An expense day groups the line items spent on one calendar day together
//! with its payment flag and optional receipt name. Only `paid` and `receipt`
//! ever change, and they change by producing a new value rather than editing
//! a shared one (see [`ExpenseDay::with_paid_toggled`] and
//! [`ExpenseDay::with_receipt`]).

use serde::{Deserialize, Deserializer, Serialize};

use super::item::ExpenseItem;
use super::money::Money;

/// One dated record of construction spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDay {
    /// Display label for the day (not required to be a parseable date)
    pub date: String,

    /// Line items in display order
    #[serde(default)]
    pub items: Vec<ExpenseItem>,

    /// Whether the day's expenses have been paid
    #[serde(default)]
    pub paid: bool,

    /// Display name of the attached receipt file
    #[serde(
        default,
        deserialize_with = "deserialize_receipt",
        skip_serializing_if = "Option::is_none"
    )]
    pub receipt: Option<String>,
}

impl ExpenseDay {
    /// Create an unpaid day without a receipt
    pub fn new(date: impl Into<String>, items: Vec<ExpenseItem>) -> Self {
        Self {
            date: date.into(),
            items,
            paid: false,
            receipt: None,
        }
    }

    /// Set the initial paid flag
    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// Set the initial receipt name
    pub fn receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }

    /// Sum of all item costs (zero for a day without items)
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.cost).sum()
    }

    /// Number of line items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether a receipt has been recorded
    pub fn has_receipt(&self) -> bool {
        self.receipt.is_some()
    }

    /// A copy of this day with the paid flag flipped
    pub fn with_paid_toggled(&self) -> Self {
        Self {
            paid: !self.paid,
            ..self.clone()
        }
    }

    /// A copy of this day with the given receipt name
    pub fn with_receipt(&self, filename: impl Into<String>) -> Self {
        Self {
            receipt: Some(filename.into()),
            ..self.clone()
        }
    }
}

/// A blank receipt never counts as uploaded
fn deserialize_receipt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let receipt: Option<String> = Option::deserialize(deserializer)?;
    Ok(receipt.filter(|name| !name.trim().is_empty()))
}
