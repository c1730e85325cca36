//! Process-local link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, SLUG_IN_USE};

/// In-memory implementation of [`LinkRepository`].
///
/// The check-and-insert happens under a single write lock, mirroring the
/// unique index of the PostgreSQL schema. Records are lost on restart.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(slug).cloned())
    }

    async fn exists(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.links.read().await.contains_key(slug))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(new_link.slug.as_str()) {
            return Err(AppError::conflict(SLUG_IN_USE));
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_link.slug.into_inner(),
            new_link.url,
            Utc::now(),
        );
        links.insert(link.slug.clone(), link.clone());

        Ok(link)
    }
}
