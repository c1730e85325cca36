//! DTOs for link creation.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a link.
///
/// Both fields are optional at the wire level so that a missing `url` is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    /// Requested slug; generated when absent or blank.
    #[serde(default)]
    pub slug: Option<String>,

    /// Target URL; must be an absolute URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// The created link as returned to clients.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub slug: String,
    pub url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            url: link.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_response_uses_underscore_id() {
        let link = Link::new(
            42,
            "abc123".to_string(),
            "https://example.com/page".to_string(),
            Utc::now(),
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(
            value,
            json!({ "_id": 42, "slug": "abc123", "url": "https://example.com/page" })
        );
    }

    #[test]
    fn test_request_fields_are_optional() {
        let req: CreateLinkRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.slug.is_none());
        assert!(req.url.is_none());

        let req: CreateLinkRequest =
            serde_json::from_value(json!({ "slug": null, "url": "https://a.com" })).unwrap();
        assert!(req.slug.is_none());
        assert_eq!(req.url.as_deref(), Some("https://a.com"));
    }
}
