//! `days` command

use clap::Args;

use crate::config::Settings;
use crate::display::{format_day_details, format_day_table};
use crate::error::ExpenseResult;
use crate::projection::project;
use crate::store::ExpenseStore;

use super::MutationArgs;

/// Arguments for `expenses days`
#[derive(Args, Debug, Clone, Default)]
pub struct DaysArgs {
    /// Show each day's line items
    #[arg(short, long)]
    pub details: bool,

    #[command(flatten)]
    pub mutations: MutationArgs,
}

/// Print the expense days
pub fn handle_days_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    args: DaysArgs,
) -> ExpenseResult<()> {
    args.mutations.apply(store)?;

    let snapshot = store.snapshot();
    if args.details {
        print!("{}", format_day_details(&snapshot, &settings.currency_symbol));
    }
    println!(
        "{}",
        format_day_table(&project(&snapshot), &settings.currency_symbol)
    );

    Ok(())
}
