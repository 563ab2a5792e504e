//! Summary cards
//!
//! Total expense, total paid and total unpaid, followed by the receipt count.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::projection::Totals;
use crate::tui::app::App;
use crate::tui::layout::SummaryLayout;

/// Render the summary area
pub fn render(frame: &mut Frame, app: &App, totals: &Totals, area: Rect) {
    let layout = SummaryLayout::new(area);
    let symbol = app.settings.currency_symbol.as_str();

    let cards = [
        (
            "Total Expense",
            totals.grand_total,
            format!("{} days", totals.day_count),
            Color::Cyan,
        ),
        (
            "Total Paid",
            totals.paid_amount,
            format!("{} days", totals.paid_days),
            Color::Green,
        ),
        (
            "Total Unpaid",
            totals.unpaid_amount,
            format!("{} days", totals.unpaid_days),
            Color::Red,
        ),
    ];

    for ((title, amount, detail, color), card_area) in cards.into_iter().zip(layout.cards) {
        frame.render_widget(card(title, amount, detail, color, symbol), card_area);
    }

    let receipts = Line::from(vec![
        Span::raw(" Receipts uploaded: "),
        Span::styled(
            format!("{}/{} days", totals.receipt_days, totals.day_count),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(receipts), layout.receipts);
}

fn card<'a>(
    title: &'a str,
    amount: Money,
    detail: String,
    color: Color,
    symbol: &str,
) -> Paragraph<'a> {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    Paragraph::new(vec![
        Line::from(Span::styled(
            amount.format_with_symbol(symbol),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(block)
}
