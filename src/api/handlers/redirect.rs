//! Handler for slug redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};
use url::Url;

use crate::api::handlers::not_found::not_found_page;
use crate::state::AppState;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL
/// - **404 Not Found** with the not-found page when the slug is unknown, the
///   path cannot be decoded, or the store lookup fails
///
/// Store failures are logged but deliberately indistinguishable from a
/// missing slug for the caller.
pub async fn redirect_handler(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> Response {
    let Ok(Path(slug)) = slug else {
        return not_found_page();
    };

    match state.link_service.find_link(&slug).await {
        Ok(Some(link)) => match location_header(&link.url) {
            Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            None => {
                warn!(%slug, url = %link.url, "Stored URL cannot be used as a Location header");
                not_found_page()
            }
        },
        Ok(None) => {
            debug!(%slug, "Slug not found");
            not_found_page()
        }
        Err(e) => {
            error!(%slug, error = ?e, "Slug lookup failed");
            not_found_page()
        }
    }
}

/// Builds the `Location` value for a stored URL.
///
/// URLs are stored as submitted. ASCII URLs are sent verbatim; anything else
/// goes out as the percent-encoded (and punycode-hosted) serialization, since
/// clients read raw header bytes as Latin-1.
fn location_header(url: &str) -> Option<HeaderValue> {
    if url.is_ascii() {
        return HeaderValue::from_str(url).ok();
    }

    let parsed = Url::parse(url).ok()?;
    HeaderValue::from_str(parsed.as_str()).ok()
}
