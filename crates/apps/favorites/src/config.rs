//! Launch configuration for the favorites app.

use leptos::logging;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::presentation::LayoutMode;

/// Preference key the favorites collection is stored under by default.
pub const DEFAULT_STORAGE_KEY: &str = "favorites";
/// Favicon service prefix; the hostname is appended.
pub const DEFAULT_FAVICON_ENDPOINT: &str = "https://api.qqsuu.cn/api/dm-get?url=";
/// Image used when a URL has no hostname to look up.
pub const DEFAULT_FALLBACK_FAVICON: &str = "/default-favicon.png";
/// How long a toast stays visible.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables read from the app's launch parameters; every field has a default.
pub struct FavoritesConfig {
    /// Preference key holding the JSON array of entries.
    pub storage_key: String,
    /// Favicon lookup prefix.
    pub favicon_endpoint: String,
    /// Image for URLs without a hostname.
    pub fallback_favicon: String,
    /// Tile layout for every entry.
    pub layout: LayoutMode,
    /// Toast lifetime in milliseconds.
    pub toast_duration_ms: u64,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            favicon_endpoint: DEFAULT_FAVICON_ENDPOINT.to_string(),
            fallback_favicon: DEFAULT_FALLBACK_FAVICON.to_string(),
            layout: LayoutMode::default(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl FavoritesConfig {
    /// Builds a config from launch parameters. Each recognized field is read on its own; a field
    /// that does not parse is logged and keeps its default, so one bad value never discards the
    /// others.
    pub fn from_launch_params(params: &Value) -> Self {
        let mut config = Self::default();
        match params {
            Value::Null => return config,
            Value::Object(fields) => {
                read_field(fields, "storage_key", &mut config.storage_key);
                read_field(fields, "favicon_endpoint", &mut config.favicon_endpoint);
                read_field(fields, "fallback_favicon", &mut config.fallback_favicon);
                read_field(fields, "layout", &mut config.layout);
                read_field(fields, "toast_duration_ms", &mut config.toast_duration_ms);
            }
            other => {
                logging::warn!("favorites launch params ignored: expected an object, got {other}");
            }
        }
        config.normalized()
    }

    fn normalized(mut self) -> Self {
        if self.storage_key.trim().is_empty() {
            self.storage_key = DEFAULT_STORAGE_KEY.to_string();
        }
        if self.favicon_endpoint.trim().is_empty() {
            self.favicon_endpoint = DEFAULT_FAVICON_ENDPOINT.to_string();
        }
        self
    }
}

fn read_field<T: DeserializeOwned>(fields: &Map<String, Value>, name: &str, slot: &mut T) {
    let Some(raw) = fields.get(name) else {
        return;
    };
    match T::deserialize(raw) {
        Ok(value) => *slot = value,
        Err(err) => logging::warn!("favorites launch param `{name}` ignored: {err}"),
    }
}
