//! Slug resolution for newly created links.

use std::future::Future;

use crate::domain::entities::Slug;
use crate::error::{AppError, SLUG_IN_USE};

/// Returns true when no slug was requested.
pub fn is_blank(requested: Option<&str>) -> bool {
    requested.is_none_or(|s| s.trim().is_empty())
}

/// Produces the slug a new link will be stored under.
///
/// - Absent or blank `requested`: a random [`Slug`] is generated and returned
///   without consulting `exists`.
/// - Otherwise the value is trimmed, lowercased and validated, then `exists`
///   is consulted once. A taken slug is a terminal conflict.
///
/// Never persists anything; the caller inserts the returned slug.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a malformed slug, [`AppError::Conflict`]
/// when `exists` reports the slug as taken, and whatever `exists` itself
/// returns on failure.
pub async fn resolve_slug<F, Fut>(requested: Option<&str>, exists: F) -> Result<Slug, AppError>
where
    F: FnOnce(Slug) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    let raw = match requested {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Slug::generate()),
    };

    let slug = Slug::parse(raw)?;

    if exists(slug.clone()).await? {
        return Err(AppError::conflict(SLUG_IN_USE));
    }

    Ok(slug)
}
