//! Link entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};

use super::slug::Slug;

/// A persisted link record.
///
/// Created once on a successful write, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, slug: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: Slug,
    pub url: String,
}

impl NewLink {
    pub fn new(slug: Slug, url: impl Into<String>) -> Self {
        Self {
            slug,
            url: url.into(),
        }
    }
}
