//! Expense tracker - daily construction expenses in the terminal
//!
//! This library holds a session's collection of expense days, applies the two
//! permitted mutations (toggling a day's paid flag and attaching a receipt
//! name) and derives every displayed figure from the current state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Expense items, days and amounts
//! - `store`: The authoritative collection and its mutations
//! - `projection`: Totals and per-day figures derived from a snapshot
//! - `seed`: Built-in dataset and seed file loading
//! - `audit`: Activity history of successful mutations
//! - `config`: Paths and user settings
//! - `cli`, `display`: Command-line surface
//! - `tui`: Interactive terminal page
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::seed::builtin_days;
//! use expense_tracker::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::new(builtin_days());
//! store.toggle_day_paid(0).unwrap();
//! let totals = store.totals();
//! assert_eq!(totals.grand_total, totals.paid_amount + totals.unpaid_amount);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod projection;
pub mod seed;
pub mod session;
pub mod store;
pub mod tui;

pub use error::ExpenseError;
