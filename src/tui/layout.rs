//! Layout definitions for the TUI
//!
//! The page stacks a title, the summary cards, the main content, the grand
//! total footer and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the page
pub struct AppLayout {
    pub title: Rect,
    pub summary: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(6), // Summary cards + receipts line
                Constraint::Min(3),    // Day list / activity
                Constraint::Length(4), // Grand total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            title: chunks[0],
            summary: chunks[1],
            main: chunks[2],
            footer: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Layout for the summary area: three cards over a receipts line
pub struct SummaryLayout {
    pub cards: [Rect; 3],
    pub receipts: Rect,
}

impl SummaryLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(1)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[0]);

        Self {
            cards: [cards[0], cards[1], cards[2]],
            receipts: rows[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
