//! Add-favorite dialog state machine.
//!
//! `Idle` (closed) -> `Editing` (open) -> `Validating` on submit, which lands either back in
//! `Editing` with exactly one error or in `Idle` with the entry stored and the draft reset.

use crate::{
    model::{is_hex_color, FavoriteEntry, IconStyle, DEFAULT_ICON_COLOR},
    presentation::badge_initial,
    store::FavoritesStore,
    url_field::{UrlField, UrlScheme},
    validation::ValidationError,
};

/// Badge letter previewed while the name field is still empty.
const PREVIEW_PLACEHOLDER_INITIAL: &str = "A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Dialog lifecycle phase.
pub enum DialogPhase {
    /// Dialog closed.
    #[default]
    Idle,
    /// Dialog open and fields editable.
    Editing,
    /// Submit in progress.
    Validating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Draft and dialog state for adding one favorite.
pub struct AddFavoriteForm {
    phase: DialogPhase,
    name: String,
    url: UrlField,
    icon_style: IconStyle,
    icon_color: String,
    error: Option<ValidationError>,
}

impl Default for AddFavoriteForm {
    fn default() -> Self {
        Self {
            phase: DialogPhase::Idle,
            name: String::new(),
            url: UrlField::default(),
            icon_style: IconStyle::Api,
            icon_color: DEFAULT_ICON_COLOR.to_string(),
            error: None,
        }
    }
}

impl AddFavoriteForm {
    /// Opens the dialog, keeping any draft left from a previous close.
    pub fn open(&mut self) {
        self.phase = DialogPhase::Editing;
    }

    /// Closes the dialog without submitting; the draft survives, the error and suggestions don't.
    pub fn close(&mut self) {
        self.phase = DialogPhase::Idle;
        self.error = None;
        self.url.dismiss();
    }

    /// Current phase.
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Returns whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Idle
    }

    /// Replaces the draft name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Draft name as typed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies a change of the URL input.
    pub fn input_url(&mut self, value: impl Into<String>) {
        self.url.input(value);
    }

    /// Applies a scheme completion to the URL input.
    pub fn select_scheme(&mut self, scheme: UrlScheme) {
        self.url.select(scheme);
    }

    /// Hides URL suggestions (pointer pressed outside the URL input).
    pub fn dismiss_suggestions(&mut self) {
        self.url.dismiss();
    }

    /// URL input state.
    pub fn url_field(&self) -> &UrlField {
        &self.url
    }

    /// Chooses how the new entry's icon is presented.
    pub fn set_icon_style(&mut self, style: IconStyle) {
        self.icon_style = style;
    }

    /// Draft icon style.
    pub fn icon_style(&self) -> IconStyle {
        self.icon_style
    }

    /// Sets the badge color; non-hex values are ignored and `false` is returned.
    pub fn set_icon_color(&mut self, color: &str) -> bool {
        if !is_hex_color(color) {
            return false;
        }
        self.icon_color = color.to_ascii_lowercase();
        true
    }

    /// Draft badge color.
    pub fn icon_color(&self) -> &str {
        &self.icon_color
    }

    /// Error from the last failed submit.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Letter shown in the live badge preview.
    pub fn preview_initial(&self) -> String {
        badge_initial(&self.name).unwrap_or_else(|| PREVIEW_PLACEHOLDER_INITIAL.to_string())
    }

    /// Entry a submit would try to store.
    pub fn draft_entry(&self) -> FavoriteEntry {
        FavoriteEntry::new(self.name.clone(), self.url.committed())
            .with_style(self.icon_style, self.icon_color.clone())
    }

    /// Validates the draft against `store` and commits it.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule; the dialog stays open with that error shown.
    pub fn submit(&mut self, store: &mut FavoritesStore) -> Result<FavoriteEntry, ValidationError> {
        self.phase = DialogPhase::Validating;
        let entry = self.draft_entry();
        match store.add(entry.clone()) {
            Ok(()) => {
                *self = Self::default();
                Ok(entry)
            }
            Err(err) => {
                self.phase = DialogPhase::Editing;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
