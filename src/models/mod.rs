//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: amounts, line items and expense days.

pub mod day;
pub mod item;
pub mod money;

pub use day::ExpenseDay;
pub use item::ExpenseItem;
pub use money::{Money, DEFAULT_CURRENCY_SYMBOL};
