//! Toast notifications
//!
//! Short-lived messages confirming a mutation or explaining why one was
//! rejected. Only the oldest live toast is drawn.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const DEFAULT_LIFETIME: Duration = Duration::from_secs(3);

/// How a toast is framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    fn frame(self) -> (Color, &'static str) {
        match self {
            Self::Success => (Color::Green, " Done "),
            Self::Warning => (Color::Yellow, " Warning "),
            Self::Error => (Color::Red, " Error "),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    expires_at: Instant,
}

impl Notification {
    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            expires_at: Instant::now() + DEFAULT_LIFETIME,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Keep the toast up for `lifetime` from now
    pub fn with_duration(mut self, lifetime: Duration) -> Self {
        self.expires_at = Instant::now() + lifetime;
        self
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

impl Widget for &Notification {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, title) = self.severity.frame();
        Clear.render(area, buf);

        Paragraph::new(self.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title)
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    /// Drop every toast whose lifetime has passed
    pub fn remove_expired(&mut self) {
        self.pending.retain(|n| !n.is_expired());
    }

    /// The toast to draw, if any
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_toast_shown_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.current().is_none());

        queue.push(Notification::success("Day 1 marked as paid"));
        queue.push(Notification::error("Day index 9 is out of range"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_expired_toasts_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::warning("gone").with_duration(Duration::ZERO));
        queue.push(Notification::success("stays"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "stays");
    }

    #[test]
    fn test_render_frames_by_severity() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        Notification::error("Rejected").render(area, &mut buf);

        let top: String = buf.content[..30].iter().map(|c| c.symbol()).collect();
        assert!(top.contains("Error"));
        assert_eq!(buf.content[0].fg, Color::Red);
    }
}
