//! Shared application context passed to every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Application state injected into handlers via axum's `State` extractor.
///
/// Holds the only shared resource of the service: the link store, reached
/// through [`LinkService`]. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: LinkService) -> Self {
        Self {
            link_service: Arc::new(link_service),
        }
    }

    /// State backed by `repository` with default service settings.
    pub fn from_repository(repository: Arc<dyn LinkRepository>) -> Self {
        Self::new(LinkService::new(repository))
    }
}
