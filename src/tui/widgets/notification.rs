//! Feedback notification widget
//!
//! Shows the outcome of a form submission and hides itself after a delay.
//! Dismissal is cosmetic only and never touches the budget state.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Rejected input
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Error => "x",
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Done",
            Self::Error => "Invalid input",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// How long to display it
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification shown for three seconds
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set the display duration in seconds
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Duration::from_secs(seconds);
        self
    }

    /// Check if the notification has expired at a given instant
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();
        let icon = self.notification.notification_type.icon();
        let title = self.notification.notification_type.title();

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);

        paragraph.render(area, buf);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove notifications that expired by `now`
    pub fn remove_expired_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::error("Budget must be greater than zero");
        assert_eq!(n.message, "Budget must be greater than zero");
        assert_eq!(n.notification_type, NotificationType::Error);
        assert_eq!(n.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_expiry() {
        let n = Notification::info("hello").with_duration(5);
        assert!(!n.is_expired_at(n.created_at + Duration::from_secs(4)));
        assert!(n.is_expired_at(n.created_at + Duration::from_secs(5)));
    }

    #[test]
    fn test_notification_queue() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        let first = Notification::info("First").with_duration(1);
        let start = first.created_at;
        queue.push(first);
        queue.push(Notification::success("Second").with_duration(60));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");

        queue.remove_expired_at(start + Duration::from_secs(2));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "Second");

        queue.clear();
        assert!(queue.is_empty());
    }
}
