//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Gateway to the external store holding link records.
///
/// The store is the sole owner of persisted records and the authoritative
/// guard of slug uniqueness: implementations must reject an insert whose slug
/// already exists, whatever pre-checks the caller performed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Returns whether a link with this slug exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    async fn exists(&self, slug: &str) -> Result<bool, AppError>;

    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Store`] on store errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;
}
