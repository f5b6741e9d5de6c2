//! Status notifications
//!
//! Short-lived messages shown in the status bar after an action.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
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
}

/// A status bar notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    /// Create a new notification that expires after three seconds
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set how long the notification stays visible
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Queue of pending notifications; the oldest is displayed first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
