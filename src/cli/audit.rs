//! `audit` command
//!
//! Reads back the audit log file written when `audit_log_enabled` is set.

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::display::format_audit_entries;
use crate::error::ExpenseResult;

/// Arguments for `expenses audit`
#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Print recent audit log entries
pub fn handle_audit_command(
    paths: &ExpensePaths,
    settings: &Settings,
    args: AuditArgs,
) -> ExpenseResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() && !settings.audit_log_enabled {
        println!("Audit logging is disabled. Set \"audit_log_enabled\": true in");
        println!("{} to record activity.", paths.settings_file().display());
        return Ok(());
    }

    println!("{}", format_audit_entries(&entries));
    Ok(())
}
