//! Grand total footer

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::projection::Totals;
use crate::tui::app::App;

/// Render the grand total with its paid/unpaid breakdown
pub fn render(frame: &mut Frame, app: &App, totals: &Totals, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::styled("Grand Total: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                totals.grand_total.format_with_symbol(symbol),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Paid: "),
            Span::styled(
                totals.paid_amount.format_with_symbol(symbol),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   Unpaid: "),
            Span::styled(
                totals.unpaid_amount.format_with_symbol(symbol),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}
