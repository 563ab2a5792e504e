use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    describe_error, handle_audit_command, handle_days_command, handle_summary_command, AuditArgs,
    DaysArgs, SummaryArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::error::ExpenseResult;
use expense_tracker::session::open_store;

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "EXPENSES_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track daily construction expenses from the terminal",
    long_about = "Lists expense days with their items and totals, tracks which days \
                  have been paid and which have a receipt, and keeps every figure \
                  consistent with the current state."
)]
struct Cli {
    /// JSON or YAML file to load expense days from instead of the built-in data
    #[arg(long, global = true, env = "EXPENSES_SEED", value_name = "FILE")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show the totals card
    Summary(SummaryArgs),

    /// List expense days
    Days(DaysArgs),

    /// Show recorded activity from the audit log
    Audit(AuditArgs),

    /// Write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    init_logging(&paths, matches!(cli.command, Some(Commands::Tui)));

    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "loaded settings");

    match cli.command {
        Some(Commands::Tui) => {
            let store = open_store(&paths, &settings, cli.seed.as_deref())?;
            expense_tracker::tui::run_tui(store, &settings)?;
        }
        Some(Commands::Summary(args)) => {
            let mut store = open_store(&paths, &settings, cli.seed.as_deref())?;
            report(handle_summary_command(&mut store, &settings, args))?;
        }
        Some(Commands::Days(args)) => {
            let mut store = open_store(&paths, &settings, cli.seed.as_deref())?;
            report(handle_days_command(&mut store, &settings, args))?;
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&paths, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Set \"seed_file\" there to load your own expense days.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Title:           {}", settings.title);
            println!("  Currency symbol: {}", settings.currency_symbol);
            match &settings.seed_file {
                Some(seed) => println!("  Seed file:       {}", seed.display()),
                None => println!("  Seed file:       (built-in)"),
            }
            println!("  Audit logging:   {}", settings.audit_log_enabled);
            println!("  Tick rate:       {} ms", settings.tick_rate().as_millis());
        }
        None => {
            println!("Expense Tracker - daily construction expenses");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Turn a rejected command into the message shown on the command line
fn report(result: ExpenseResult<()>) -> Result<()> {
    result.map_err(|e| anyhow!(describe_error(&e)))
}

/// Set up the tracing subscriber
///
/// The command line logs warnings to stderr. The TUI owns the terminal, so it
/// only logs when `EXPENSES_LOG` is set, and then to a file.
fn init_logging(paths: &ExpensePaths, tui: bool) {
    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };
    if paths.ensure_directories().is_err() {
        return;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file());
    if let Ok(file) = file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}
