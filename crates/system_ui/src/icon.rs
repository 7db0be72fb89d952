//! Inline SVG icon set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to primitives and apps.
pub enum IconName {
    /// Add action.
    Plus,
    /// Destructive remove action.
    Trash,
    /// Selected marker.
    Check,
    /// Dismiss action.
    Close,
}

impl IconName {
    /// Returns the stable token written to `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Trash => "trash",
            Self::Check => "check",
            Self::Close => "close",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Plus => "M12 5v14M5 12h14",
            Self::Trash => "M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6M10 11v6M14 11v6",
            Self::Check => "M5 12l5 5L20 7",
            Self::Close => "M6 6l12 12M18 6L6 18",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
}

impl IconSize {
    const fn px(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
        }
    }
}

#[component]
/// Decorative inline icon.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-icon=icon.token()
        >
            <path d=icon.path() />
        </svg>
    }
}
