//! Summary card formatting

use crate::projection::Totals;

/// Format the totals card
pub fn format_summary(title: &str, totals: &Totals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("{}\n", "=".repeat(title.chars().count())));
    output.push_str(&format!(
        "Total Expenses: {:>14}  ({} expense days)\n",
        totals.grand_total.format_with_symbol(symbol),
        totals.day_count
    ));
    output.push_str(&format!(
        "Paid:           {:>14}  ({} days paid)\n",
        totals.paid_amount.format_with_symbol(symbol),
        totals.paid_days
    ));
    output.push_str(&format!(
        "Unpaid:         {:>14}  ({} days pending)\n",
        totals.unpaid_amount.format_with_symbol(symbol),
        totals.unpaid_days
    ));
    output.push_str(&format!(
        "Receipts uploaded: {}/{} days\n",
        totals.receipt_days, totals.day_count
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_summary() {
        let totals = Totals {
            grand_total: Money::new(2000),
            paid_amount: Money::new(1200),
            unpaid_amount: Money::new(800),
            paid_days: 1,
            unpaid_days: 1,
            receipt_days: 1,
            day_count: 2,
        };

        let output = format_summary("Site", &totals, "৳");
        assert!(output.starts_with("Site\n====\n"));
        assert!(output.contains("৳2,000"));
        assert!(output.contains("(1 days paid)"));
        assert!(output.contains("৳800"));
        assert!(output.contains("Receipts uploaded: 1/2 days"));
    }
}
