//! Handler for link creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a link, generating a slug when none is requested.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "slug": "optional-slug" }
/// ```
///
/// # Response
///
/// ```json
/// { "_id": 1, "slug": "x7k2_q", "url": "https://example.com/page" }
/// ```
///
/// # Errors
///
/// Every failure is rendered as `{ "message": "..." }`:
/// - 400 for a malformed slug, URL or JSON body
/// - 409 when the slug is already in use
/// - 415 when the body is not declared as JSON
/// - 500 on store errors
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;

    let link = state
        .link_service
        .create_link(payload.slug.as_deref(), payload.url.as_deref())
        .await?;

    tracing::info!(slug = %link.slug, id = link.id, "Link created");

    Ok(Json(link.into()))
}
