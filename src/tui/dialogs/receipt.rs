//! Receipt chooser dialog
//!
//! Stands in for a file picker: the user types a file name or path and the
//! dialog hands its display name to the store. The file itself is never
//! opened.

use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Extensions the chooser accepts, matching the original picker filter
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// Reduce chooser input to the name recorded as the receipt
///
/// Returns the final path component, or a message explaining why the input
/// cannot be used.
pub fn receipt_display_name(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Choose a receipt file first".to_string());
    }

    let name = Path::new(input)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("'{}' is not a file name", input))?;

    let accepted = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false);

    if !accepted {
        return Err(format!(
            "Receipts must be one of: {}",
            ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    Ok(name.to_string())
}

/// Render the receipt chooser
pub fn render(frame: &mut Frame, app: &App, day_index: usize) {
    let area = centered_rect_fixed(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let day_label = app
        .store
        .day(day_index)
        .map(|day| day.date.clone())
        .unwrap_or_default();

    let block = Block::default()
        .title(" Upload Receipt ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Day: "),
            Span::styled(day_label, Style::default().add_modifier(Modifier::BOLD)),
        ])),
        rows[0],
    );
    frame.render_widget(&app.receipt_input, rows[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Accepted: .pdf .jpg .jpeg .png   Enter: attach   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
        rows[4],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(receipt_display_name("invoice.jpg").unwrap(), "invoice.jpg");
        assert_eq!(receipt_display_name("  scan.PDF ").unwrap(), "scan.PDF");
    }

    #[test]
    fn test_path_reduced_to_name() {
        assert_eq!(
            receipt_display_name("/home/site/receipts/day2.png").unwrap(),
            "day2.png"
        );
    }

    #[test]
    fn test_rejected_inputs() {
        assert!(receipt_display_name("").is_err());
        assert!(receipt_display_name("   ").is_err());
        assert!(receipt_display_name("notes.txt")
            .unwrap_err()
            .contains(".pdf, .jpg, .jpeg, .png"));
        assert!(receipt_display_name("no-extension").is_err());
        assert!(receipt_display_name("/").is_err());
    }
}
