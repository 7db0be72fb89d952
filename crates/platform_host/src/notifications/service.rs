use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a user-visible notification.
pub enum NotificationLevel {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A rejected or failed action.
    Error,
}

/// Host service for transient user-visible notifications (toasts).
pub trait NotificationService {
    /// Dispatches a notification message.
    fn notify(&self, level: NotificationLevel, message: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A notification captured by [`MemoryNotificationService`].
pub struct NotificationRecord {
    /// Notification severity.
    pub level: NotificationLevel,
    /// Rendered message text.
    pub message: String,
}

#[derive(Debug, Clone, Default)]
/// Notification service that records every dispatch; clones share the same log.
pub struct MemoryNotificationService {
    records: Rc<RefCell<Vec<NotificationRecord>>>,
}

impl MemoryNotificationService {
    /// Returns a snapshot of every notification dispatched so far.
    pub fn records(&self) -> Vec<NotificationRecord> {
        self.records.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn notify(&self, level: NotificationLevel, message: &str) -> Result<(), String> {
        self.records.borrow_mut().push(NotificationRecord {
            level,
            message: message.to_string(),
        });
        Ok(())
    }
}
