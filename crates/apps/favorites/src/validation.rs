//! Add-time validation shared by the form and external add requests.

use thiserror::Error;
use url::Url;

use crate::model::FavoriteEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an entry is rejected; `Display` is the user-facing message.
pub enum ValidationError {
    /// The name is empty or whitespace.
    #[error("Please enter a name")]
    BlankName,
    /// The URL is empty or whitespace.
    #[error("Please enter a URL")]
    BlankUrl,
    /// The URL does not parse as an absolute URL.
    #[error("Please enter a valid URL")]
    InvalidUrl,
    /// Another entry already uses exactly this URL.
    #[error("This site is already in your favorites")]
    DuplicateUrl,
}

/// Returns whether `raw` parses as an absolute URL.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Checks `candidate` against `existing`; the first failing rule wins.
///
/// Order: name present, URL present, URL parses, URL not already stored. Duplicate detection is
/// exact string equality.
pub fn validate_entry<'a>(
    candidate: &FavoriteEntry,
    existing: impl IntoIterator<Item = &'a FavoriteEntry>,
) -> Result<(), ValidationError> {
    if candidate.name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    if candidate.url.trim().is_empty() {
        return Err(ValidationError::BlankUrl);
    }
    if !is_valid_url(&candidate.url) {
        return Err(ValidationError::InvalidUrl);
    }
    if existing
        .into_iter()
        .any(|entry| entry.url == candidate.url)
    {
        return Err(ValidationError::DuplicateUrl);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(name: &str, url: &str) -> FavoriteEntry {
        FavoriteEntry::new(name, url)
    }

    #[test]
    fn first_failing_rule_wins() {
        let stored = vec![entry("Example", "https://example.com")];

        assert_eq!(
            validate_entry(&entry("  ", ""), &stored),
            Err(ValidationError::BlankName)
        );
        assert_eq!(
            validate_entry(&entry("Docs", " "), &stored),
            Err(ValidationError::BlankUrl)
        );
        assert_eq!(
            validate_entry(&entry("Docs", "not-a-url"), &stored),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_entry(&entry("Again", "https://example.com"), &stored),
            Err(ValidationError::DuplicateUrl)
        );
        assert_eq!(
            validate_entry(&entry("Docs", "https://docs.example.com"), &stored),
            Ok(())
        );
    }

    #[test]
    fn duplicate_check_is_exact_match() {
        let stored = vec![entry("Example", "https://example.com")];

        assert_eq!(
            validate_entry(&entry("Slash", "https://example.com/"), &stored),
            Ok(())
        );
        assert_eq!(
            validate_entry(&entry("Case", "https://EXAMPLE.com"), &stored),
            Ok(())
        );
    }

    #[test]
    fn url_syntax_accepts_any_absolute_scheme() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://localhost:8080/path?q=1"));
        assert!(is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::BlankName.to_string(), "Please enter a name");
        assert_eq!(
            ValidationError::DuplicateUrl.to_string(),
            "This site is already in your favorites"
        );
    }
}
