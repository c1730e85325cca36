//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Create a link
//! - static files    - Anything present in the public directory (`GET /` serves `index.html`)
//! - `GET  /{slug}`  - Redirect to the stored URL (one trailing slash allowed)
//! - anything else   - 404 with the not-found page
//!
//! Static files take precedence over slugs: a request is first looked up in
//! the public directory and only falls through to slug routing when no file
//! matches.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - `nosniff`, frame and referrer policies

use crate::api::handlers::{create_link_handler, not_found_handler, redirect_handler};
use crate::api::middleware::{security_headers, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use std::path::Path;
use tower_http::services::ServeDir;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served as static files ahead of slug routing
pub fn app_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let slug_router = Router::new()
        .route(
            "/{slug}",
            get(redirect_handler).fallback(not_found_handler),
        )
        .route(
            "/{slug}/",
            get(redirect_handler).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .with_state(state.clone());

    let static_files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(slug_router);

    Router::new()
        .route(
            "/",
            post(create_link_handler)
                .get_service(static_files.clone())
                .fallback(not_found_handler),
        )
        .fallback_service(static_files)
        .with_state(state)
        .layer(middleware::from_fn(security_headers::layer))
        .layer(tracing::layer())
}
