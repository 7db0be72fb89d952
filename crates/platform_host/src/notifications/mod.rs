//! Notification service contracts and in-memory adapters.

mod service;

pub use service::{
    MemoryNotificationService, NotificationLevel, NotificationRecord, NotificationService,
};
