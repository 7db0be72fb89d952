//! In-page toast notifications.

use std::time::Duration;

use leptos::*;
use platform_host::{NotificationLevel, NotificationService};
use system_ui::{ToastItem, ToastStack, ToastTone};

/// Message shown after an entry is stored.
pub const ADDED_MESSAGE: &str = "Added to favorites";

const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One visible toast.
pub struct Toast {
    /// Queue-local identifier.
    pub id: u64,
    /// Severity.
    pub level: NotificationLevel,
    /// Message text.
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Bounded list of visible toasts, oldest first.
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Appends a toast, evicting the oldest beyond the visible limit, and returns its id.
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(Toast {
            id: self.next_id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(0..overflow);
        }
        self.next_id
    }

    /// Removes a toast; returns `false` if it already expired or was dismissed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Visible toasts, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Dispatches `message` through `notifier`, logging host failures.
pub fn announce(notifier: &dyn NotificationService, level: NotificationLevel, message: &str) {
    if let Err(err) = notifier.notify(level, message) {
        logging::warn!("notification dispatch failed: {err}");
    }
}

fn tone_for(level: NotificationLevel) -> ToastTone {
    match level {
        NotificationLevel::Info => ToastTone::Info,
        NotificationLevel::Success => ToastTone::Success,
        NotificationLevel::Error => ToastTone::Error,
    }
}

#[derive(Debug, Clone, Copy)]
/// Signal-backed [`NotificationService`] whose toasts expire on a timer.
pub struct ToastNotifier {
    queue: RwSignal<ToastQueue>,
    duration: Duration,
}

impl ToastNotifier {
    /// Creates an empty notifier in the current reactive owner.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Removes a toast before it expires.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

impl NotificationService for ToastNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) -> Result<(), String> {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(level, message));
        let queue = self.queue;
        set_timeout_with_handle(
            move || {
                queue.update(|queue| {
                    queue.dismiss(id);
                });
            },
            self.duration,
        )
        .map(|_| ())
        .map_err(|err| format!("toast expiry timer failed: {err:?}"))
    }
}

#[component]
/// Renders the notifier's visible toasts.
pub fn ToastRegion(notifier: ToastNotifier) -> impl IntoView {
    view! {
        <ToastStack>
            <For
                each=move || notifier.queue.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <ToastItem
                            tone=tone_for(toast.level)
                            message=toast.message
                            on_dismiss=Callback::new(move |_| notifier.dismiss(id))
                        />
                    }
                }
            />
        </ToastStack>
    }
}
