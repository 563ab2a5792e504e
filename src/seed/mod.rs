//! Seed data provider
//!
//! Supplies the initial expense collection, either from the built-in dataset
//! or from a JSON/YAML file shaped as
//! `[{date, items: [{desc, cost}], paid, receipt?}]`. The collection is read
//! once at startup; nothing is ever written back.

mod builtin;

pub use builtin::builtin_days;

use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseDay, Money};

/// Seed file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    /// Pick the format from a file extension (JSON unless `.yaml`/`.yml`)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse seed days from text
pub fn parse_days(contents: &str, format: SeedFormat) -> ExpenseResult<Vec<ExpenseDay>> {
    let days: Vec<ExpenseDay> = match format {
        SeedFormat::Json => serde_json::from_str(contents)?,
        SeedFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    check_amounts(&days)?;
    Ok(days)
}

/// Reject data whose daily totals or grand total do not fit in `Money`
fn check_amounts(days: &[ExpenseDay]) -> ExpenseResult<()> {
    let too_large = |date: &str| {
        ExpenseError::Seed(format!("amounts for '{}' exceed the largest total", date))
    };

    let mut grand_total = Money::zero();
    for day in days {
        let daily = day
            .items
            .iter()
            .try_fold(Money::zero(), |sum, item| sum.checked_add(item.cost))
            .ok_or_else(|| too_large(&day.date))?;
        grand_total = grand_total
            .checked_add(daily)
            .ok_or_else(|| too_large(&day.date))?;
    }
    Ok(())
}

/// Load seed days from a file
pub fn load_file(path: &Path) -> ExpenseResult<Vec<ExpenseDay>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ExpenseError::Seed(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let days = parse_days(&contents, SeedFormat::from_path(path))
        .map_err(|e| ExpenseError::Seed(format!("Failed to parse {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), days = days.len(), "loaded seed file");
    Ok(days)
}

/// Load from `path` when given, otherwise use the built-in dataset
pub fn load_or_builtin(path: Option<&Path>) -> ExpenseResult<Vec<ExpenseDay>> {
    match path {
        Some(path) => load_file(path),
        None => Ok(builtin_days()),
    }
}
