//! Expense day display formatting
//!
//! Formats days for terminal output in table and detail views.

use tabled::{settings::Style, Table, Tabled};

use crate::models::ExpenseDay;
use crate::projection::Projection;
use crate::store::Snapshot;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "ITEMS")]
    items: usize,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "STATUS")]
    status: &'static str,
    #[tabled(rename = "RECEIPT")]
    receipt: String,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "COST")]
    cost: String,
}

/// Format the per-day table with a grand total line
pub fn format_day_table(projection: &Projection, symbol: &str) -> String {
    if projection.days.is_empty() {
        return "No expense days found.".to_string();
    }

    let rows: Vec<DayRow> = projection
        .days
        .iter()
        .map(|day| DayRow {
            index: day.index,
            date: day.date.clone(),
            items: day.item_count,
            total: day.daily_total.format_with_symbol(symbol),
            status: if day.paid { "Paid" } else { "Unpaid" },
            receipt: day.receipt.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let totals = &projection.totals;
    format!(
        "{}\nGrand Total: {}  (Paid: {} in {} days, Unpaid: {} in {} days)\n",
        Table::new(rows).with(Style::rounded()),
        totals.grand_total.format_with_symbol(symbol),
        totals.paid_amount.format_with_symbol(symbol),
        totals.paid_days,
        totals.unpaid_amount.format_with_symbol(symbol),
        totals.unpaid_days,
    )
}

/// Format every day with its line items
pub fn format_day_details(snapshot: &Snapshot, symbol: &str) -> String {
    let mut output = String::new();

    for (index, day) in snapshot.iter().enumerate() {
        output.push_str(&format_one_day(index, day, symbol));
        output.push('\n');
    }

    output
}

fn format_one_day(index: usize, day: &ExpenseDay, symbol: &str) -> String {
    let mut output = format!(
        "[{}] {}  ({})\n",
        index,
        day.date,
        if day.paid { "Paid" } else { "Unpaid" }
    );

    if day.items.is_empty() {
        output.push_str("  No line items.\n");
    } else {
        let rows: Vec<ItemRow> = day
            .items
            .iter()
            .map(|item| ItemRow {
                description: item.description.clone(),
                cost: item.cost.format_with_symbol(symbol),
            })
            .collect();
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push_str(&format!("  Total: {}\n", day.total().format_with_symbol(symbol)));
    if let Some(receipt) = &day.receipt {
        output.push_str(&format!("  Receipt: {}\n", receipt));
    }

    output
}
