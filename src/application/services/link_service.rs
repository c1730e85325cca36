//! Link creation and lookup service.

use std::sync::Arc;

use crate::application::services::slug_resolver::{is_blank, resolve_slug};
use crate::domain::entities::{Link, NewLink, Slug};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Upper bound for [`LinkService::with_generation_attempts`].
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and resolving links.
///
/// Owns the write-path ordering: the URL is validated first, then the slug is
/// resolved (with a single existence pre-check for requested slugs), then the
/// record is inserted. The repository's unique constraint remains the final
/// word on slug uniqueness.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generation_attempts: usize,
}

impl LinkService {
    /// Creates a link service that inserts generated slugs exactly once.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            repository,
            generation_attempts: 1,
        }
    }

    /// Sets how many times a generated slug may be re-rolled after colliding
    /// with an existing record. Clamped to `1..=MAX_GENERATION_ATTEMPTS`.
    pub fn with_generation_attempts(mut self, attempts: usize) -> Self {
        self.generation_attempts = attempts.clamp(1, MAX_GENERATION_ATTEMPTS);
        self
    }

    /// Creates a link for `url`, under `requested_slug` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the requested slug is
    /// malformed. Neither case touches the store.
    ///
    /// Returns [`AppError::Conflict`] if the requested slug is taken, or if a
    /// generated slug collided on every allowed attempt.
    ///
    /// Returns [`AppError::Store`] on store errors.
    pub async fn create_link(
        &self,
        requested_slug: Option<&str>,
        url: Option<&str>,
    ) -> Result<Link, AppError> {
        let url = validate_url(url)?;

        let repository = Arc::clone(&self.repository);
        let slug = resolve_slug(requested_slug, move |candidate| async move {
            repository.exists(candidate.as_str()).await
        })
        .await?;

        if is_blank(requested_slug) {
            self.insert_generated(slug, url).await
        } else {
            self.repository.insert(NewLink::new(slug, url)).await
        }
    }

    /// Looks up a link by slug. Slugs are stored lowercase, so the lookup is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store errors.
    pub async fn find_link(&self, slug: &str) -> Result<Option<Link>, AppError> {
        self.repository.find_by_slug(&slug.to_lowercase()).await
    }

    /// Inserts a link under a generated slug, re-rolling on conflict while
    /// attempts remain.
    async fn insert_generated(&self, mut slug: Slug, url: String) -> Result<Link, AppError> {
        let mut attempt = 1;

        loop {
            match self
                .repository
                .insert(NewLink::new(slug.clone(), url.clone()))
                .await
            {
                Err(AppError::Conflict(_)) if attempt < self.generation_attempts => {
                    tracing::warn!(%slug, attempt, "Generated slug collided, regenerating");
                    slug = Slug::generate();
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
