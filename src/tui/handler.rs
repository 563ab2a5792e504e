//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::AttachReceipt(_) => handle_receipt_key(app, key),
    }
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.toggle_view(),
        _ => {
            if app.active_view == ActiveView::Days {
                handle_days_key(app, key);
            }
        }
    }
}

/// Handle keys in the day list
fn handle_days_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_details(),
        KeyCode::Char('e') => app.visibility.set_all(true),
        KeyCode::Char('c') => app.visibility.set_all(false),
        KeyCode::Char('p') => app.toggle_selected_paid(),
        KeyCode::Char('r') => app.open_receipt_chooser(),
        _ => {}
    }
}

/// Handle keys in the receipt chooser
fn handle_receipt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_receipt(),
        KeyCode::Backspace => app.receipt_input.backspace(),
        KeyCode::Delete => app.receipt_input.delete(),
        KeyCode::Left => app.receipt_input.move_left(),
        KeyCode::Right => app.receipt_input.move_right(),
        KeyCode::Home => app.receipt_input.move_start(),
        KeyCode::End => app.receipt_input.move_end(),
        KeyCode::Char(c) => app.receipt_input.insert(c),
        _ => {}
    }
}
