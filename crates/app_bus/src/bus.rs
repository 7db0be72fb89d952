use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::{Rc, Weak},
};

use serde::Serialize;
use serde_json::Value;

use crate::event::AppEvent;

type Handler = Rc<dyn Fn(&AppEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Token identifying one registration on an [`AppBus`].
pub struct SubscriptionId(u64);

struct Registration {
    id: SubscriptionId,
    handler: Handler,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    next_sequence: u64,
    topics: HashMap<String, Vec<Registration>>,
}

impl BusState {
    fn subscribe(&mut self, topic: &str, handler: Handler) -> SubscriptionId {
        self.next_id = self.next_id.saturating_add(1);
        let id = SubscriptionId(self.next_id);
        self.topics
            .entry(topic.to_string())
            .or_default()
            .push(Registration { id, handler });
        id
    }

    /// Detaches the registration for `id` and hands it back, so its handler is dropped by the
    /// caller after the state borrow ends.
    fn unsubscribe(&mut self, id: SubscriptionId) -> Option<Registration> {
        let mut removed = None;
        for registrations in self.topics.values_mut() {
            if let Some(position) = registrations.iter().position(|r| r.id == id) {
                removed = Some(registrations.remove(position));
                break;
            }
        }
        self.topics
            .retain(|_, registrations| !registrations.is_empty());
        removed
    }

    fn is_registered(&self, topic: &str, id: SubscriptionId) -> bool {
        self.topics
            .get(topic)
            .is_some_and(|registrations| registrations.iter().any(|r| r.id == id))
    }

    fn begin_dispatch(
        &mut self,
        topic: &str,
        payload: Value,
    ) -> (AppEvent, Vec<(SubscriptionId, Handler)>) {
        self.next_sequence = self.next_sequence.saturating_add(1);
        let event = AppEvent::new(topic, payload, self.next_sequence);
        let targets = self
            .topics
            .get(topic)
            .map(|registrations| {
                registrations
                    .iter()
                    .map(|r| (r.id, Rc::clone(&r.handler)))
                    .collect()
            })
            .unwrap_or_default();
        (event, targets)
    }
}

#[derive(Clone, Default)]
/// Single-threaded topic bus shared by cloning.
///
/// Dispatch is synchronous and runs handlers in registration order. The set of handlers is fixed
/// when `publish` starts: handlers registered during a dispatch first run on the next publish,
/// while handlers unsubscribed during a dispatch are skipped for the rest of it. The internal
/// borrow is released before any handler runs, so handlers may freely subscribe, unsubscribe, or
/// publish again.
pub struct AppBus {
    state: Rc<RefCell<BusState>>,
}

impl AppBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `topic` and returns the handle that owns the registration.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        topic: impl Into<String>,
        handler: impl Fn(&AppEvent) + 'static,
    ) -> Subscription {
        let topic = topic.into();
        let id = self.state.borrow_mut().subscribe(&topic, Rc::new(handler));
        Subscription {
            state: Rc::downgrade(&self.state),
            id,
            topic,
        }
    }

    /// Removes a registration by token. Returns `false` when the token is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.state.borrow_mut().unsubscribe(id);
        removed.is_some()
    }

    /// Publishes `payload` on `topic` and returns how many handlers ran.
    pub fn publish(&self, topic: &str, payload: Value) -> usize {
        let (event, targets) = self.state.borrow_mut().begin_dispatch(topic, payload);
        let mut delivered = 0usize;
        for (id, handler) in targets {
            if !self.state.borrow().is_registered(topic, id) {
                continue;
            }
            handler(&event);
            delivered += 1;
        }
        delivered
    }

    /// Serializes `payload` and publishes it on `topic`.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be serialized; nothing is published then.
    pub fn publish_json<T: Serialize>(&self, topic: &str, payload: &T) -> Result<usize, String> {
        let value = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        Ok(self.publish(topic, value))
    }

    /// Returns the number of live registrations for `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.state
            .borrow()
            .topics
            .get(topic)
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for AppBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        let mut topics: Vec<(&str, usize)> = state
            .topics
            .iter()
            .map(|(topic, registrations)| (topic.as_str(), registrations.len()))
            .collect();
        topics.sort_unstable();
        f.debug_struct("AppBus")
            .field("topics", &topics)
            .field("published", &state.next_sequence)
            .finish()
    }
}

/// Owned bus registration; dropping it unsubscribes.
///
/// The handle holds the bus weakly, so it never keeps a torn-down bus alive.
pub struct Subscription {
    state: Weak<RefCell<BusState>>,
    id: SubscriptionId,
    topic: String,
}

impl Subscription {
    /// Returns the registration token.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns the subscribed topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns whether the registration is still present on a live bus.
    pub fn is_active(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.borrow().is_registered(&self.topic, self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let removed = state.borrow_mut().unsubscribe(self.id);
            drop(removed);
        }
    }
}
