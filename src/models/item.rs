//! Expense line item model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single described cost entry belonging to one expense day
///
/// Items are created once from seed data and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// What was bought or paid for
    #[serde(rename = "desc", alias = "description")]
    pub description: String,

    /// Cost of the item
    pub cost: Money,
}

impl ExpenseItem {
    /// Create a new line item
    pub fn new(description: impl Into<String>, cost: u64) -> Self {
        Self {
            description: description.into(),
            cost: Money::new(cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = ExpenseItem::new("Cement", 500);
        assert_eq!(item.description, "Cement");
        assert_eq!(item.cost, Money::new(500));
    }

    #[test]
    fn test_wire_names() {
        let item: ExpenseItem = serde_json::from_str(r#"{"desc":"Sand","cost":300}"#).unwrap();
        assert_eq!(item, ExpenseItem::new("Sand", 300));

        let item: ExpenseItem =
            serde_json::from_str(r#"{"description":"Rods","cost":4500}"#).unwrap();
        assert_eq!(item.description, "Rods");

        let json = serde_json::to_string(&ExpenseItem::new("Bricks", 1200)).unwrap();
        assert_eq!(json, r#"{"desc":"Bricks","cost":1200}"#);
    }
}
