//! Website entry validation and display cleaning.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;
use validator::ValidationError;

static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());
static WWW_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^www\.").unwrap());
static TRAILING_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/$").unwrap());

/// Label shown in place of an empty website.
pub const FALLBACK_SITE_LABEL: &str = "your site";

/// Errors that can occur while validating a website entry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("Enter your website to continue")]
    Empty,

    #[error("Invalid website: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS websites are supported")]
    UnsupportedProtocol,

    #[error("Website must include a host name")]
    MissingHost,
}

/// Validates a website entry and returns it trimmed.
///
/// Bare host names are accepted and checked as if prefixed with `https://`.
///
/// # Errors
///
/// Returns [`SiteError::Empty`] for blank input, [`SiteError::InvalidFormat`]
/// when the value does not parse as a URL, [`SiteError::UnsupportedProtocol`]
/// for non-HTTP(S) schemes and [`SiteError::MissingHost`] when there is no host.
pub fn parse_site(input: &str) -> Result<String, SiteError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SiteError::Empty);
    }

    let candidate = if trimmed.contains("://") {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{trimmed}"))
    };

    let url = Url::parse(&candidate).map_err(|e| SiteError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(SiteError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(SiteError::MissingHost),
    }
}

/// `validator` adapter for [`parse_site`].
pub fn validate_site(value: &str) -> Result<(), ValidationError> {
    parse_site(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new("website").with_message(Cow::Owned(e.to_string())))
}

/// Strips the scheme, a leading `www.` and one trailing slash for display.
///
/// Returns [`FALLBACK_SITE_LABEL`] when nothing is left.
pub fn clean_site(input: &str) -> String {
    let without_scheme = SCHEME_PREFIX.replace(input.trim(), "");
    let without_www = WWW_PREFIX.replace(&without_scheme, "");
    let cleaned = TRAILING_SLASH.replace(&without_www, "");

    if cleaned.is_empty() {
        FALLBACK_SITE_LABEL.to_string()
    } else {
        cleaned.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_site_strips_scheme_and_www() {
        assert_eq!(clean_site("https://www.airops.com/"), "airops.com");
        assert_eq!(clean_site("http://example.com"), "example.com");
        assert_eq!(clean_site("www.example.com"), "example.com");
    }

    #[test]
    fn test_clean_site_keeps_path() {
        assert_eq!(clean_site("https://example.com/pricing/"), "example.com/pricing");
    }

    #[test]
    fn test_clean_site_removes_only_one_trailing_slash() {
        assert_eq!(clean_site("example.com//"), "example.com/");
    }

    #[test]
    fn test_clean_site_empty_falls_back() {
        assert_eq!(clean_site(""), FALLBACK_SITE_LABEL);
        assert_eq!(clean_site("   "), FALLBACK_SITE_LABEL);
        assert_eq!(clean_site("https://"), FALLBACK_SITE_LABEL);
    }

    #[test]
    fn test_parse_site_accepts_bare_host() {
        assert_eq!(parse_site("  airops.com ").unwrap(), "airops.com");
        assert_eq!(
            parse_site("https://www.example.com/path").unwrap(),
            "https://www.example.com/path"
        );
    }

    #[test]
    fn test_parse_site_rejects_blank() {
        assert_eq!(parse_site(""), Err(SiteError::Empty));
        assert_eq!(parse_site(" \t "), Err(SiteError::Empty));
    }

    #[test]
    fn test_parse_site_rejects_other_protocols() {
        assert_eq!(
            parse_site("ftp://example.com"),
            Err(SiteError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_parse_site_rejects_garbage() {
        assert!(matches!(
            parse_site("exa mple.com"),
            Err(SiteError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_site_message() {
        let err = validate_site("").unwrap_err();
        assert_eq!(err.code, "website");
        assert_eq!(
            err.message.as_deref(),
            Some("Enter your website to continue")
        );
    }
}
