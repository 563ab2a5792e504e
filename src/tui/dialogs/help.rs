//! Help dialog
//!
//! Shows keyboard shortcuts for the current view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch between Days and Activity"),
        Line::from(""),
    ];

    match view {
        ActiveView::Days => {
            lines.push(heading("Expense Days"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("g/G", "Go to first/last day"));
            lines.push(key_line("Enter/Space", "Show/hide details"));
            lines.push(key_line("e/c", "Expand/collapse all days"));
            lines.push(key_line("p", "Mark as paid/unpaid"));
            lines.push(key_line("r", "Upload receipt"));
        }
        ActiveView::Activity => {
            lines.push(heading("Activity"));
            lines.push(Line::from(""));
            lines.push(Line::from("Every change made this session, oldest first."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
