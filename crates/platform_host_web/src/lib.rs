//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Only the preference slot has a browser adapter; notifications are rendered in-page by the app
//! itself. Non-`wasm32` builds compile the same types with inert behavior so native unit tests
//! and tooling keep working.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::local_prefs::WebPrefsStore;
