//! Typed host-service contracts shared by the favorites app and its browser adapters.
//!
//! This crate owns the narrow seams the app calls into without knowing which host it runs on:
//! a synchronous key/value preference slot and a user-visible notification sink. Concrete
//! browser adapters live in `platform_host_web`; in-memory adapters here back unit tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod notifications;
pub mod storage;

pub use notifications::{
    MemoryNotificationService, NotificationLevel, NotificationRecord, NotificationService,
};
pub use storage::prefs::{
    save_pref_with, MemoryPrefsStore, PrefsStore,
};
