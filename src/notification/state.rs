use std::time::{Duration, Instant};

/// How long a notification stays on screen.
const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient status message with an auto-dismiss deadline.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    deadline: Instant,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Error);
    }

    fn show(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.current = Some(Notification {
            message: message.into(),
            level,
            deadline: Instant::now() + DISMISS_AFTER,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the notification once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notification) = &self.current {
            if now >= notification.deadline {
                self.current = None;
            }
        }
    }
}
