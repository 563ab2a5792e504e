//! `summary` command

use clap::Args;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::store::ExpenseStore;

use super::MutationArgs;

/// Arguments for `expenses summary`
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub mutations: MutationArgs,
}

/// Print the totals card
pub fn handle_summary_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    args.mutations.apply(store)?;

    let totals = store.totals();
    print!(
        "{}",
        format_summary(&settings.title, &totals, &settings.currency_symbol)
    );

    Ok(())
}
