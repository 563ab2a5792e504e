//! Activity view
//!
//! Every change made this session, oldest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::audit::Operation;
use crate::tui::app::App;

/// Render the activity log
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Activity ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let history = app.store.history();
    if history.is_empty() {
        let text = Paragraph::new("No changes yet. Mark a day as paid or upload a receipt.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(10), // Time
        Constraint::Length(16), // Operation
        Constraint::Length(14), // Day
        Constraint::Min(20),    // Change
    ];

    let header = Row::new(vec![
        Cell::from("Time"),
        Cell::from("Operation"),
        Cell::from("Day"),
        Cell::from("Change"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = history
        .iter()
        .map(|entry| {
            let color = match entry.operation {
                Operation::TogglePaid => Color::Green,
                Operation::AttachReceipt => Color::Blue,
            };
            Row::new(vec![
                Cell::from(entry.timestamp.format("%H:%M:%S").to_string()),
                Cell::from(entry.operation.to_string()).style(Style::default().fg(color)),
                Cell::from(entry.day_label.clone()),
                Cell::from(entry.summary.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
