//! Pure mapping from entries to what a tile shows.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    config::FavoritesConfig,
    model::{is_hex_color, FavoriteEntry, IconStyle, DEFAULT_ICON_COLOR},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Caller-selected layout applied uniformly to every tile.
pub enum LayoutMode {
    /// Roomy row tiles.
    Large,
    /// Compact row tiles.
    Small,
    /// Stacked card tiles.
    #[default]
    Card,
}

impl LayoutMode {
    /// Stable token for DOM attributes and config.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Small => "small",
            Self::Card => "card",
        }
    }

    /// Parses a config/query token.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "large" => Some(Self::Large),
            "small" => Some(Self::Small),
            "card" => Some(Self::Card),
            _ => None,
        }
    }

    /// Direction the icon and label are laid out in.
    pub const fn orientation(self) -> TileOrientation {
        match self {
            Self::Card => TileOrientation::Vertical,
            Self::Large | Self::Small => TileOrientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tile content direction.
pub enum TileOrientation {
    /// Icon above label.
    Vertical,
    /// Icon beside label.
    Horizontal,
}

impl TileOrientation {
    /// Stable token for `data-orientation`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendered icon box size.
pub enum IconDisplaySize {
    /// 24px box.
    Small,
    /// 32px box.
    Medium,
    /// 48px box.
    Large,
}

impl IconDisplaySize {
    /// Icon box size for an entry style.
    pub const fn for_style(style: IconStyle) -> Self {
        match style {
            IconStyle::Large => Self::Large,
            IconStyle::Small => Self::Small,
            IconStyle::Api | IconStyle::Text | IconStyle::Card => Self::Medium,
        }
    }

    /// Edge length in CSS pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Small => 24,
            Self::Medium => 32,
            Self::Large => 48,
        }
    }

    /// Responsive `sizes` hint for bundled assets.
    pub const fn sizes_hint(self) -> &'static str {
        match self {
            Self::Small => "32px",
            Self::Medium => "48px",
            Self::Large => "64px",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Colored circular letter badge.
pub struct TextBadge {
    /// Uppercased first character of the label.
    pub initial: String,
    /// CSS background color.
    pub color: String,
    /// Badge box size.
    pub size: IconDisplaySize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a tile's icon slot renders.
pub enum IconVisual {
    /// Letter badge.
    Badge(TextBadge),
    /// Image bundled with the site.
    LocalAsset {
        /// Image URL.
        src: String,
        /// Alt text.
        alt: String,
        /// Image box size.
        size: IconDisplaySize,
    },
    /// Best-effort remote favicon with the badge to show if it fails to load.
    RemoteFavicon {
        /// Image URL.
        src: String,
        /// Alt text.
        alt: String,
        /// Image box size.
        size: IconDisplaySize,
        /// Badge shown after a load failure.
        fallback: TextBadge,
    },
}

impl IconVisual {
    /// Applies the remote-image load state; only a failed remote favicon changes.
    pub fn resolve(self, image_failed: bool) -> Self {
        match self {
            Self::RemoteFavicon { fallback, .. } if image_failed => Self::Badge(fallback),
            other => other,
        }
    }
}

/// Uppercased first visible character of `label`, if any.
pub fn badge_initial(label: &str) -> Option<String> {
    label
        .trim_start()
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
}

/// Returns `color` when it is a hex color, else the default; the value ends up in inline CSS.
pub fn badge_color(color: &str) -> &str {
    if is_hex_color(color) {
        color
    } else {
        DEFAULT_ICON_COLOR
    }
}

/// Remote favicon URL for `url`, keyed by hostname; the fallback asset when there is none.
pub fn favicon_url(config: &FavoritesConfig, url: &str) -> String {
    match Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
    {
        Some(host) => format!("{}{host}", config.favicon_endpoint),
        None => config.fallback_favicon.clone(),
    }
}

/// Link target for a tile; only `http` and `https` URLs are followed.
pub fn tile_href(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .filter(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .map(|_| url.to_string())
}

/// Maps an entry to its icon visual.
pub fn icon_visual(entry: &FavoriteEntry, config: &FavoritesConfig) -> IconVisual {
    let style = entry.effective_icon_style();
    let size = IconDisplaySize::for_style(style);
    let badge = TextBadge {
        initial: badge_initial(&entry.name).unwrap_or_else(|| "?".to_string()),
        color: badge_color(entry.effective_icon_color()).to_string(),
        size,
    };

    if style == IconStyle::Text {
        return IconVisual::Badge(badge);
    }
    match entry.icon.as_deref() {
        Some(icon) => IconVisual::LocalAsset {
            src: format!("/{}", icon.trim_start_matches('/')),
            alt: entry.name.clone(),
            size,
        },
        None => IconVisual::RemoteFavicon {
            src: favicon_url(config, &entry.url),
            alt: entry.name.clone(),
            size,
            fallback: badge,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> FavoritesConfig {
        FavoritesConfig::default()
    }

    #[test]
    fn text_style_renders_uppercased_badge() {
        let entry = FavoriteEntry::new("docs", "https://docs.example.com")
            .with_style(IconStyle::Text, "#eb2f96");

        assert_eq!(
            icon_visual(&entry, &config()),
            IconVisual::Badge(TextBadge {
                initial: "D".to_string(),
                color: "#eb2f96".to_string(),
                size: IconDisplaySize::Medium,
            })
        );
    }

    #[test]
    fn non_hex_badge_color_is_replaced() {
        let entry = FavoriteEntry::new("x", "https://x.example")
            .with_style(IconStyle::Text, "red; background-image: url(evil)");

        let IconVisual::Badge(badge) = icon_visual(&entry, &config()) else {
            panic!("text style renders a badge");
        };
        assert_eq!(badge.color, DEFAULT_ICON_COLOR);
    }

    #[test]
    fn local_asset_wins_over_remote_favicon() {
        let entry = FavoriteEntry::new("Docs", "https://docs.example.com")
            .with_icon(Some("icons/docs.png".to_string()))
            .with_style(IconStyle::Large, "#1890ff");

        assert_eq!(
            icon_visual(&entry, &config()),
            IconVisual::LocalAsset {
                src: "/icons/docs.png".to_string(),
                alt: "Docs".to_string(),
                size: IconDisplaySize::Large,
            }
        );
    }

    #[test]
    fn remote_favicon_uses_hostname_only_and_falls_back_to_badge() {
        let entry = FavoriteEntry::new("example", "https://www.example.com:8443/a/b?q=1");

        let visual = icon_visual(&entry, &config());

        let IconVisual::RemoteFavicon { src, .. } = &visual else {
            panic!("expected remote favicon, got {visual:?}");
        };
        assert_eq!(src, "https://api.qqsuu.cn/api/dm-get?url=www.example.com");
        assert_eq!(visual.clone().resolve(false), visual);
        assert_eq!(
            visual.resolve(true),
            IconVisual::Badge(TextBadge {
                initial: "E".to_string(),
                color: "#1890ff".to_string(),
                size: IconDisplaySize::Medium,
            })
        );
    }

    #[test]
    fn hostless_url_uses_fallback_asset() {
        assert_eq!(
            favicon_url(&config(), "mailto:someone@example.com"),
            "/default-favicon.png"
        );
        assert_eq!(favicon_url(&config(), "garbage"), "/default-favicon.png");
    }

    #[test]
    fn only_web_schemes_become_tile_links() {
        assert_eq!(
            tile_href("https://docs.example.com/a?b=1"),
            Some("https://docs.example.com/a?b=1".to_string())
        );
        assert_eq!(
            tile_href("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(tile_href("javascript:alert(1)"), None);
        assert_eq!(tile_href("data:text/html,hi"), None);
        assert_eq!(tile_href("not a url"), None);
    }

    #[test]
    fn icon_sizes_follow_style() {
        assert_eq!(IconDisplaySize::for_style(IconStyle::Large).px(), 48);
        assert_eq!(IconDisplaySize::for_style(IconStyle::Small).px(), 24);
        assert_eq!(IconDisplaySize::for_style(IconStyle::Card).px(), 32);
        assert_eq!(IconDisplaySize::Large.sizes_hint(), "64px");
    }

    #[test]
    fn layout_mode_drives_orientation_only() {
        assert_eq!(LayoutMode::Card.orientation(), TileOrientation::Vertical);
        assert_eq!(LayoutMode::Small.orientation(), TileOrientation::Horizontal);
        assert_eq!(LayoutMode::parse(" Large "), Some(LayoutMode::Large));
        assert_eq!(LayoutMode::parse("grid"), None);
    }

    #[test]
    fn badge_initial_handles_multibyte_and_blank() {
        assert_eq!(badge_initial("ärzte"), Some("Ä".to_string()));
        assert_eq!(badge_initial("ß"), Some("SS".to_string()));
        assert_eq!(badge_initial("   "), None);
    }
}
