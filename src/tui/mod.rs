//! Terminal User Interface module
//!
//! An interactive page over the expense collection built on ratatui: summary
//! cards, the day list with expandable details, a session activity log and
//! dialogs for help and receipt upload.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
