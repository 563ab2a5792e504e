//! Day list view
//!
//! One entry per expense day. Collapsed entries show the headline figures;
//! expanded entries also list the items and the receipt.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::projection::DayView;
use crate::tui::app::App;

/// Render the day list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expense Days ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let snapshot = app.store.snapshot();
    if snapshot.is_empty() {
        let text = Paragraph::new("No expense days to show.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let items: Vec<ListItem> = DayView::collect(&snapshot, &app.visibility)
        .iter()
        .map(|view| ListItem::new(day_lines(view, symbol)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn day_lines(view: &DayView, symbol: &str) -> Vec<Line<'static>> {
    let day = view.day;

    let (badge, badge_color) = if day.paid {
        (" Paid ", Color::Green)
    } else {
        (" Unpaid ", Color::Red)
    };
    let marker = if view.expanded { "▾" } else { "▸" };

    let mut header = vec![
        Span::raw(format!("{} ", marker)),
        Span::styled(
            day.date.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} items · {}",
                day.item_count(),
                view.daily_total.format_with_symbol(symbol)
            ),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(
            badge,
            Style::default()
                .fg(Color::Black)
                .bg(badge_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if day.has_receipt() {
        header.push(Span::styled("  receipt ✓", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(header)];
    if !view.expanded {
        return lines;
    }

    for item in &day.items {
        lines.push(Line::from(vec![
            Span::raw("    • "),
            Span::raw(item.description.clone()),
            Span::raw("  "),
            Span::styled(
                item.cost.format_with_symbol(symbol),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    let receipt = match &day.receipt {
        Some(name) => Span::styled(name.clone(), Style::default().fg(Color::Green)),
        None => Span::styled("none", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(vec![Span::raw("    Receipt: "), receipt]));
    lines.push(Line::from(vec![
        Span::raw("    Total: "),
        Span::styled(
            view.daily_total.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines
}
