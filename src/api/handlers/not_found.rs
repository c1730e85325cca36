//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Renders `templates/404.html`.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
struct NotFoundTemplate {}

/// The not-found page with a 404 status.
pub fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
}

/// Fallback for every path and method nothing else serves.
pub async fn not_found_handler() -> Response {
    not_found_page()
}
