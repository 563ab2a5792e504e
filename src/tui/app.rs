//! Application state for the TUI
//!
//! The App owns the session's store (it is the only mutator) together with
//! the display-only state: selection, detail visibility, dialogs and
//! notifications.

use std::time::Duration;

use crate::config::Settings;
use crate::projection::{DetailVisibility, Totals};
use crate::store::ExpenseStore;

use super::dialogs::receipt::receipt_display_name;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Days,
    Activity,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Receipt chooser for the day at this index
    AttachReceipt(usize),
}

/// Main application state
pub struct App<'a> {
    /// The expense collection
    pub store: ExpenseStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Expanded/collapsed flag per day
    pub visibility: DetailVisibility,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected day index
    pub selected_index: usize,

    /// Input of the receipt chooser
    pub receipt_input: TextInput,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: ExpenseStore, settings: &'a Settings) -> Self {
        let visibility = DetailVisibility::new(store.len());
        Self {
            store,
            settings,
            visibility,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            receipt_input: TextInput::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Totals of the current snapshot
    pub fn totals(&self) -> Totals {
        self.store.totals()
    }

    /// Switch between the days and activity views
    pub fn toggle_view(&mut self) {
        self.active_view = match self.active_view {
            ActiveView::Days => ActiveView::Activity,
            ActiveView::Activity => ActiveView::Days,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if let ActiveDialog::AttachReceipt(_) = dialog {
            self.receipt_input = TextInput::new()
                .label("File")
                .placeholder("receipt.pdf")
                .focused(true);
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Select the first day
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Select the last day
    pub fn select_last(&mut self) {
        self.selected_index = self.store.len().saturating_sub(1);
    }

    /// Show or hide the selected day's details
    pub fn toggle_details(&mut self) {
        if let Err(e) = self.visibility.toggle(self.selected_index) {
            tracing::debug!(error = %e, "no day to expand");
        }
    }

    /// Flip the paid flag of the selected day
    pub fn toggle_selected_paid(&mut self) {
        match self.store.toggle_day_paid(self.selected_index) {
            Ok(paid) => {
                let label = self.selected_label();
                let message = if paid {
                    format!("{} marked as paid", label)
                } else {
                    format!("{} marked as unpaid", label)
                };
                self.notifications.push(Notification::success(message));
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    /// Open the receipt chooser for the selected day
    pub fn open_receipt_chooser(&mut self) {
        if self.store.is_empty() {
            self.notifications
                .push(Notification::warning("There are no expense days"));
            return;
        }
        self.open_dialog(ActiveDialog::AttachReceipt(self.selected_index));
    }

    /// Attach the chooser's file to its day
    ///
    /// The dialog stays open when the input is rejected so it can be fixed.
    pub fn submit_receipt(&mut self) {
        let ActiveDialog::AttachReceipt(index) = self.active_dialog else {
            return;
        };

        let filename = match receipt_display_name(self.receipt_input.value()) {
            Ok(filename) => filename,
            Err(message) => {
                self.notifications.push(Notification::warning(message));
                return;
            }
        };

        match self.store.attach_receipt(index, &filename) {
            Ok(()) => {
                self.notifications
                    .push(Notification::success(format!("Receipt uploaded: {}", filename)));
                self.close_dialog();
            }
            Err(e) => {
                self.notify_error(e.to_string());
                self.close_dialog();
            }
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    fn notify_error(&mut self, message: String) {
        tracing::warn!(%message, "mutation rejected");
        self.notifications
            .push(Notification::error(message).with_duration(Duration::from_secs(5)));
    }

    fn selected_label(&self) -> String {
        self.store
            .day(self.selected_index)
            .map(|day| day.date.clone())
            .unwrap_or_default()
    }
}
