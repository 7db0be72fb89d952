//! URL input with scheme completion.
//!
//! The field keeps two values: what the user sees (`input`) and what a submit would use
//! (`committed`). A bare host like `example.com` is shown but not committed until a scheme is
//! picked from the suggestions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Schemes offered as completions, in display order.
pub enum UrlScheme {
    /// `https://`
    Https,
    /// `http://`
    Http,
}

impl UrlScheme {
    /// Every offered scheme, in display order.
    pub const ALL: [UrlScheme; 2] = [UrlScheme::Https, UrlScheme::Http];

    /// Returns the literal prefix including `://`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Https => "https://",
            Self::Http => "http://",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A completion shown under the URL input.
pub struct UrlSuggestion {
    /// Scheme that selecting this suggestion would apply.
    pub scheme: UrlScheme,
    /// Full URL the field would hold after selection.
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// State of the URL input and its suggestion list.
pub struct UrlField {
    input: String,
    committed: String,
    suggestions_open: bool,
}

impl UrlField {
    /// Applies a keystroke-level change of the input value.
    pub fn input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        if self.input.is_empty() {
            self.suggestions_open = false;
            self.committed.clear();
        } else if has_known_scheme(&self.input) {
            self.suggestions_open = false;
            self.committed = self.input.clone();
        } else {
            self.suggestions_open = true;
            self.committed.clear();
        }
    }

    /// Completions for the current input; empty while the list is hidden.
    pub fn suggestions(&self) -> Vec<UrlSuggestion> {
        if !self.suggestions_open {
            return Vec::new();
        }
        UrlScheme::ALL
            .into_iter()
            .map(|scheme| UrlSuggestion {
                scheme,
                url: format!("{}{}", scheme.prefix(), self.input),
            })
            .collect()
    }

    /// Prefixes the input with `scheme`, commits it, and hides the suggestions.
    pub fn select(&mut self, scheme: UrlScheme) {
        let url = format!("{}{}", scheme.prefix(), self.input);
        self.input = url.clone();
        self.committed = url;
        self.suggestions_open = false;
    }

    /// Hides the suggestions without touching the input (click outside the field).
    pub fn dismiss(&mut self) {
        self.suggestions_open = false;
    }

    /// Value displayed in the input.
    pub fn value(&self) -> &str {
        &self.input
    }

    /// URL a submit would use; empty until a scheme is present.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Returns whether the suggestion list is visible.
    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }
}

fn has_known_scheme(value: &str) -> bool {
    UrlScheme::ALL
        .iter()
        .any(|scheme| value.starts_with(scheme.prefix()))
}
