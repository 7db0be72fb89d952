//! Favorites widget: a persisted list of bookmarked sites with an add dialog, letter badges, and
//! remote favicons.
//!
//! The view is [`FavoritesApp`]. Other parts of the page add entries without touching the store
//! by publishing through [`request_add_favorite`] on the shared [`app_bus::AppBus`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bus;
mod components;
mod config;
mod form;
mod model;
mod presentation;
mod store;
mod toast;
mod url_field;
mod validation;

pub use bus::{
    accept_add_request, listen_for_add_requests, request_add_favorite, subscribe_add_requests,
    AddFavoriteRequest, ADD_FAVORITE_TOPIC,
};
pub use components::{FavoriteIcon, FavoritesApp};
pub use config::{
    FavoritesConfig, DEFAULT_FALLBACK_FAVICON, DEFAULT_FAVICON_ENDPOINT, DEFAULT_STORAGE_KEY,
    DEFAULT_TOAST_DURATION_MS,
};
pub use form::{AddFavoriteForm, DialogPhase};
pub use model::{
    is_hex_color, FavoriteEntry, IconStyle, PresetColor, DEFAULT_ICON_COLOR, PRESET_COLORS,
};
pub use presentation::{
    badge_color, badge_initial, favicon_url, icon_visual, tile_href, IconDisplaySize, IconVisual,
    LayoutMode, TextBadge, TileOrientation,
};
pub use store::{FavoritesStore, StoreError};
pub use toast::{announce, Toast, ToastNotifier, ToastQueue, ToastRegion, ADDED_MESSAGE};
pub use url_field::{UrlField, UrlScheme, UrlSuggestion};
pub use validation::{is_valid_url, validate_entry, ValidationError};
