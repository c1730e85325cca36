//! Slug value type: the short, URL-path-safe identifier of a link.

use rand::Rng;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Length of system-generated slugs.
pub const GENERATED_SLUG_LENGTH: usize = 6;

/// Alphabet for generated slugs.
///
/// Lowercase only, since slugs are stored lowercased.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz_-";

/// One or more ASCII word characters or hyphens.
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug pattern is valid"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,

    #[error("slug '{0}' may only contain letters, digits, underscores and hyphens")]
    InvalidCharacters(String),
}

/// A normalized slug: trimmed, lowercased and matching `^[A-Za-z0-9_-]+$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Normalizes and validates a user-supplied slug.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::Empty`] for blank input and
    /// [`SlugError::InvalidCharacters`] when the normalized value contains
    /// anything outside `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(SlugError::Empty);
        }

        if !SLUG_PATTERN.is_match(&normalized) {
            return Err(SlugError::InvalidCharacters(normalized));
        }

        Ok(Self(normalized))
    }

    /// Generates a random slug using the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates a random slug of [`GENERATED_SLUG_LENGTH`] characters.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let slug = (0..GENERATED_SLUG_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
