//! Persisted favorite entry model and badge color palette.

use serde::{Deserialize, Serialize};

/// Badge color used when an entry does not carry one.
pub const DEFAULT_ICON_COLOR: &str = "#1890ff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Per-entry icon presentation.
pub enum IconStyle {
    /// Remote favicon (or the bundled asset when one is set).
    #[default]
    Api,
    /// Colored letter badge.
    Text,
    /// Image at the large size.
    Large,
    /// Image at the small size.
    Small,
    /// Image at the card size.
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One bookmarked name/URL pair with display metadata.
///
/// Entries are never edited in place; the store only appends and removes them.
pub struct FavoriteEntry {
    /// Display label.
    pub name: String,
    /// Absolute URL; unique within a store.
    pub url: String,
    /// Path of a bundled image asset, relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon presentation; absent means [`IconStyle::Api`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<IconStyle>,
    /// Badge color for [`IconStyle::Text`]; absent means [`DEFAULT_ICON_COLOR`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

impl FavoriteEntry {
    /// Creates an entry with the default presentation (remote icon, default color).
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: None,
            icon_style: Some(IconStyle::Api),
            icon_color: Some(DEFAULT_ICON_COLOR.to_string()),
        }
    }

    /// Sets the bundled icon asset.
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon.filter(|path| !path.trim().is_empty());
        self
    }

    /// Sets the icon presentation and badge color.
    pub fn with_style(mut self, style: IconStyle, color: impl Into<String>) -> Self {
        self.icon_style = Some(style);
        self.icon_color = Some(color.into());
        self
    }

    /// Returns the icon style with the default applied.
    pub fn effective_icon_style(&self) -> IconStyle {
        self.icon_style.unwrap_or_default()
    }

    /// Returns the badge color with the default applied.
    pub fn effective_icon_color(&self) -> &str {
        self.icon_color.as_deref().unwrap_or(DEFAULT_ICON_COLOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named badge color offered by the add form.
pub struct PresetColor {
    /// Human-readable color name.
    pub name: &'static str,
    /// `#rrggbb` value.
    pub value: &'static str,
}

/// Preset badge colors, in display order.
pub const PRESET_COLORS: [PresetColor; 7] = [
    PresetColor { name: "Blue", value: "#1890ff" },
    PresetColor { name: "Green", value: "#52c41a" },
    PresetColor { name: "Red", value: "#f5222d" },
    PresetColor { name: "Orange", value: "#fa8c16" },
    PresetColor { name: "Purple", value: "#722ed1" },
    PresetColor { name: "Cyan", value: "#13c2c2" },
    PresetColor { name: "Pink", value: "#eb2f96" },
];

/// Returns whether `raw` is a `#rgb` or `#rrggbb` hex color.
pub fn is_hex_color(raw: &str) -> bool {
    let Some(digits) = raw.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
