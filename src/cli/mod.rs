//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the store and the display layer.

pub mod audit;
pub mod days;
pub mod summary;

pub use audit::{handle_audit_command, AuditArgs};
pub use days::{handle_days_command, DaysArgs};
pub use summary::{handle_summary_command, SummaryArgs};

use std::str::FromStr;

use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::store::ExpenseStore;

/// A `<INDEX>=<FILE>` receipt attachment given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptArg {
    pub index: usize,
    pub filename: String,
}

impl FromStr for ReceiptArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, filename) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <INDEX>=<FILE>, got '{}'", s))?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| format!("invalid day index '{}'", index))?;

        Ok(Self {
            index,
            filename: filename.to_string(),
        })
    }
}

/// Mutations applied to the session's store before printing
#[derive(Args, Debug, Clone, Default)]
pub struct MutationArgs {
    /// Toggle the paid flag of a day (repeatable)
    #[arg(long = "toggle", value_name = "INDEX")]
    pub toggles: Vec<usize>,

    /// Attach a receipt name to a day (repeatable)
    #[arg(long = "receipt", value_name = "INDEX=FILE")]
    pub receipts: Vec<ReceiptArg>,
}

impl MutationArgs {
    /// Apply toggles, then receipts, stopping at the first rejection
    pub fn apply(&self, store: &mut ExpenseStore) -> ExpenseResult<()> {
        for &index in &self.toggles {
            store.toggle_day_paid(index)?;
        }
        for receipt in &self.receipts {
            store.attach_receipt(receipt.index, &receipt.filename)?;
        }
        Ok(())
    }
}

/// Convert a store error into the message shown on the command line
pub fn describe_error(err: &ExpenseError) -> String {
    match err {
        ExpenseError::OutOfRange { .. } => format!("{} (use 'expenses days' to list days)", err),
        _ => err.to_string(),
    }
}
