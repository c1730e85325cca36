#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::routes::app_router;
use link_shortener::state::AppState;

pub const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// A server over the full router backed by a fresh in-memory store.
pub fn test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::from_repository(repo.clone());

    let server = TestServer::new(app_router(state, PUBLIC_DIR)).unwrap();

    (server, repo)
}

/// A store whose every call fails, as when the database is unreachable.
pub struct UnavailableLinkRepository;

#[async_trait]
impl LinkRepository for UnavailableLinkRepository {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn exists(&self, _slug: &str) -> Result<bool, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn insert(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::store("connection refused"))
    }
}

pub fn unavailable_server() -> TestServer {
    let state = AppState::from_repository(Arc::new(UnavailableLinkRepository));
    TestServer::new(app_router(state, PUBLIC_DIR)).unwrap()
}
