//! Target URL validation.
//!
//! Links store the URL exactly as submitted (trimmed). Validation only checks
//! that it parses as an absolute URL with a host and a scheme browsers follow.

use url::Url;

/// Schemes accepted as link targets.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("url is a required field")]
    Missing,

    #[error("url must be a valid URL: {0}")]
    InvalidFormat(String),

    #[error("url scheme '{0}' is not allowed")]
    UnsupportedScheme(String),

    #[error("url must include a host")]
    MissingHost,
}

/// Validates a submitted URL and returns its trimmed form.
///
/// # Rules
///
/// 1. Absent or blank input is rejected
/// 2. The trimmed value must parse as an absolute URL
/// 3. Only `http`, `https` and `ftp` are allowed, which rules out
///    `javascript:`, `data:` and `file:` targets
/// 4. A non-empty host is required
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     validate_url(Some("  https://example.com/page ")).unwrap(),
///     "https://example.com/page"
/// );
/// assert!(validate_url(Some("example.com")).is_err());
/// ```
pub fn validate_url(input: Option<&str>) -> Result<String, UrlValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let parsed =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(
            parsed.scheme().to_string(),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed.to_string())
}
