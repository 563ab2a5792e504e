//! Status bar view
//!
//! Shows the active view, the selected day and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = match app.active_view {
        ActiveView::Days => "Days",
        ActiveView::Activity => "Activity",
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", view),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Ok(day) = app.store.day(app.selected_index) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{}/{} {}", app.selected_index + 1, app.store.len(), day.date),
            Style::default().fg(Color::White),
        ));
    }

    let changes = app.store.history().len();
    if changes > 0 {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} changes", changes),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.active_view {
        ActiveView::Days => " p:Paid  r:Receipt  Enter:Details  Tab:Activity  ?:Help  q:Quit ",
        ActiveView::Activity => " Tab:Days  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
