//! Programmatic "add to favorites" requests carried over the application bus.
//!
//! Requesters only need the bus: [`request_add_favorite`] publishes without validating, and the
//! mounted favorites view validates through the store when the request arrives.

use app_bus::{AppBus, Subscription};
use leptos::{logging, RwSignal, SignalUpdate};
use platform_host::{NotificationLevel, NotificationService};
use serde::{Deserialize, Serialize};

use crate::{
    model::FavoriteEntry,
    store::FavoritesStore,
    toast::{announce, ADDED_MESSAGE},
    validation::ValidationError,
};

/// Topic the favorites view listens on for add requests.
pub const ADD_FAVORITE_TOPIC: &str = "app.favorites.add.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload of an add request.
pub struct AddFavoriteRequest {
    /// Display label.
    pub name: String,
    /// URL to bookmark.
    pub url: String,
    /// Optional bundled icon asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl AddFavoriteRequest {
    /// Converts the request into an entry with the default presentation.
    pub fn into_entry(self) -> FavoriteEntry {
        FavoriteEntry::new(self.name, self.url).with_icon(self.icon)
    }
}

/// Asks the mounted favorites view to bookmark `url`; returns how many listeners received it.
///
/// Nothing is validated here. With no favorites view mounted the request is dropped.
pub fn request_add_favorite(bus: &AppBus, name: &str, url: &str, icon: Option<&str>) -> usize {
    let request = AddFavoriteRequest {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.map(str::to_string),
    };
    match bus.publish_json(ADD_FAVORITE_TOPIC, &request) {
        Ok(delivered) => delivered,
        Err(err) => {
            logging::warn!("favorites add request not published: {err}");
            0
        }
    }
}

/// Registers `on_request` for decoded add requests; undecodable payloads are logged and skipped.
#[must_use = "dropping the subscription stops add requests immediately"]
pub fn subscribe_add_requests(
    bus: &AppBus,
    on_request: impl Fn(AddFavoriteRequest) + 'static,
) -> Subscription {
    bus.subscribe(ADD_FAVORITE_TOPIC, move |event| {
        match event.decode::<AddFavoriteRequest>() {
            Ok(request) => on_request(request),
            Err(err) => {
                logging::warn!("favorites add request #{} ignored: {err}", event.sequence);
            }
        }
    })
}

/// Feeds add requests from `bus` into the reactive `store`, announcing each outcome on
/// `notifier`. Dropping the returned subscription detaches the view.
#[must_use = "dropping the subscription stops add requests immediately"]
pub fn listen_for_add_requests(
    bus: &AppBus,
    store: RwSignal<FavoritesStore>,
    notifier: impl NotificationService + 'static,
) -> Subscription {
    subscribe_add_requests(bus, move |request| {
        store.update(|store| {
            let _ = accept_add_request(store, &notifier, request);
        });
    })
}

/// Validates and stores an external request, reporting the outcome as a toast.
///
/// # Errors
///
/// Returns the validation failure after it has been announced.
pub fn accept_add_request(
    store: &mut FavoritesStore,
    notifier: &dyn NotificationService,
    request: AddFavoriteRequest,
) -> Result<FavoriteEntry, ValidationError> {
    let entry = request.into_entry();
    match store.add(entry.clone()) {
        Ok(()) => {
            announce(notifier, NotificationLevel::Success, ADDED_MESSAGE);
            Ok(entry)
        }
        Err(err) => {
            announce(notifier, NotificationLevel::Error, &err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use leptos::{create_runtime, create_rw_signal, SignalWithUntracked};
    use platform_host::{MemoryNotificationService, MemoryPrefsStore, NotificationRecord};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{form::AddFavoriteForm, model::IconStyle};

    struct Mounted {
        prefs: MemoryPrefsStore,
        store: Rc<RefCell<FavoritesStore>>,
        notifier: MemoryNotificationService,
        form: AddFavoriteForm,
        subscription: Subscription,
    }

    fn mount(bus: &AppBus) -> Mounted {
        let prefs = MemoryPrefsStore::default();
        let store = Rc::new(RefCell::new(FavoritesStore::load(
            Rc::new(prefs.clone()),
            "favorites",
        )));
        let notifier = MemoryNotificationService::default();
        let subscription = {
            let store = Rc::clone(&store);
            let notifier = notifier.clone();
            subscribe_add_requests(bus, move |request| {
                let _ = accept_add_request(&mut store.borrow_mut(), &notifier, request);
            })
        };
        Mounted {
            prefs,
            store,
            notifier,
            form: AddFavoriteForm::default(),
            subscription,
        }
    }

    #[test]
    fn request_while_mounted_stores_entry_without_dialog() {
        let bus = AppBus::new();
        let mounted = mount(&bus);

        let delivered = request_add_favorite(&bus, "Docs", "https://docs.example.com", None);

        assert_eq!(delivered, 1);
        let store = mounted.store.borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].name, "Docs");
        assert_eq!(store.entries()[0].icon_style, Some(IconStyle::Api));
        assert!(!mounted.form.is_open());
        assert!(mounted.prefs.raw("favorites").is_some());
        assert_eq!(
            mounted.notifier.records(),
            vec![NotificationRecord {
                level: NotificationLevel::Success,
                message: ADDED_MESSAGE.to_string(),
            }]
        );
    }

    #[test]
    fn invalid_request_is_announced_and_not_stored() {
        let bus = AppBus::new();
        let mounted = mount(&bus);

        request_add_favorite(&bus, "Docs", "docs.example.com", Some("docs.png"));

        assert!(mounted.store.borrow().is_empty());
        assert_eq!(
            mounted.notifier.records(),
            vec![NotificationRecord {
                level: NotificationLevel::Error,
                message: ValidationError::InvalidUrl.to_string(),
            }]
        );
    }

    #[test]
    fn duplicate_request_checks_current_contents() {
        let bus = AppBus::new();
        let mounted = mount(&bus);

        request_add_favorite(&bus, "Docs", "https://docs.example.com", None);
        request_add_favorite(&bus, "Docs again", "https://docs.example.com", None);

        assert_eq!(mounted.store.borrow().len(), 1);
        assert_eq!(
            mounted.notifier.records().last().map(|r| r.message.clone()),
            Some(ValidationError::DuplicateUrl.to_string())
        );
    }

    #[test]
    fn unmounted_view_receives_nothing() {
        let bus = AppBus::new();
        let mounted = mount(&bus);
        let store = Rc::clone(&mounted.store);
        drop(mounted.subscription);

        let delivered = request_add_favorite(&bus, "Docs", "https://docs.example.com", None);

        assert_eq!(delivered, 0);
        assert!(store.borrow().is_empty());
    }

    #[test]
    fn malformed_payload_is_skipped() {
        let bus = AppBus::new();
        let mounted = mount(&bus);

        bus.publish(ADD_FAVORITE_TOPIC, json!({ "title": "missing fields" }));

        assert!(mounted.store.borrow().is_empty());
        assert!(mounted.notifier.records().is_empty());
    }

    #[test]
    fn reactive_listener_stores_request_and_announces() {
        let runtime = create_runtime();
        let bus = AppBus::new();
        let prefs = MemoryPrefsStore::default();
        let store = create_rw_signal(FavoritesStore::load(Rc::new(prefs.clone()), "favorites"));
        let notifier = MemoryNotificationService::default();
        let subscription = listen_for_add_requests(&bus, store, notifier.clone());

        let delivered = request_add_favorite(&bus, "Docs", "https://docs.example.com", None);

        assert_eq!(delivered, 1);
        assert_eq!(
            store.with_untracked(|store| store.entries().to_vec()),
            vec![FavoriteEntry::new("Docs", "https://docs.example.com")]
        );
        assert!(prefs.raw("favorites").is_some());
        assert_eq!(notifier.records()[0].level, NotificationLevel::Success);

        drop(subscription);
        assert_eq!(
            request_add_favorite(&bus, "Blog", "https://blog.example.com", None),
            0
        );
        assert_eq!(store.with_untracked(FavoritesStore::len), 1);
        runtime.dispose();
    }

    #[test]
    fn reactive_listener_rejects_duplicates_from_current_contents() {
        let runtime = create_runtime();
        let bus = AppBus::new();
        let store = create_rw_signal(FavoritesStore::load(
            Rc::new(MemoryPrefsStore::default()),
            "favorites",
        ));
        let notifier = MemoryNotificationService::default();
        let _subscription = listen_for_add_requests(&bus, store, notifier.clone());
        store.update(|store| {
            store
                .add(FavoriteEntry::new("Docs", "https://docs.example.com"))
                .expect("seed");
        });

        request_add_favorite(&bus, "Docs", "https://docs.example.com", None);

        assert_eq!(store.with_untracked(FavoritesStore::len), 1);
        assert_eq!(
            notifier.records(),
            vec![NotificationRecord {
                level: NotificationLevel::Error,
                message: ValidationError::DuplicateUrl.to_string(),
            }]
        );
        runtime.dispose();
    }

    #[test]
    fn icon_is_carried_into_entry() {
        let entry = AddFavoriteRequest {
            name: "Docs".to_string(),
            url: "https://docs.example.com".to_string(),
            icon: Some("icons/docs.svg".to_string()),
        }
        .into_entry();

        assert_eq!(entry.icon.as_deref(), Some("icons/docs.svg"));
    }
}
