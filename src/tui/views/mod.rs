//! TUI Views module
//!
//! Contains the page sections: title, summary cards, the day list or the
//! activity log, the grand total footer and the status bar.

pub mod activity;
pub mod days;
pub mod footer;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let totals = app.totals();

    render_title(frame, app, layout.title);
    summary::render(frame, app, &totals, layout.summary);

    match app.active_view {
        ActiveView::Days => days::render(frame, app, layout.main),
        ActiveView::Activity => activity::render(frame, app, layout.main),
    }

    footer::render(frame, app, &totals, layout.footer);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(40, 4, frame.area());
        frame.render_widget(notification, area);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.settings.title.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AttachReceipt(index) => dialogs::receipt::render(frame, app, index),
        ActiveDialog::None => {}
    }
}
