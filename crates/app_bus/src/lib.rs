//! Application-scoped publish/subscribe bus.
//!
//! The bus is an explicit service: the application root creates one [`AppBus`] and hands clones
//! to whoever needs to publish or listen. Subscribing returns a [`Subscription`] handle that
//! unsubscribes when dropped, so a view tying the handle to its own teardown can never be called
//! back after it is gone.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bus;
mod event;

pub use bus::{AppBus, Subscription, SubscriptionId};
pub use event::{AppEvent, APP_EVENT_SCHEMA_VERSION};
