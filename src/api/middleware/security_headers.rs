//! Security response headers applied to every response.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, header},
    middleware::Next,
    response::Response,
};

const X_DOWNLOAD_OPTIONS: HeaderName = HeaderName::from_static("x-download-options");
const X_PERMITTED_CROSS_DOMAIN_POLICIES: HeaderName =
    HeaderName::from_static("x-permitted-cross-domain-policies");
const X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");

/// Headers set on every response, overriding any value set by a handler.
const SECURITY_HEADERS: [(HeaderName, &str); 7] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "no-referrer"),
    (header::X_DNS_PREFETCH_CONTROL, "off"),
    (
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=15552000; includeSubDomains",
    ),
    (X_DOWNLOAD_OPTIONS, "noopen"),
    (X_PERMITTED_CROSS_DOMAIN_POLICIES, "none"),
];

/// Adds the security headers and strips `X-Powered-By`.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", post(create_link_handler))
///     .layer(middleware::from_fn(security_headers::layer));
/// ```
pub async fn layer(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    headers.remove(X_POWERED_BY);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    async fn powered() -> ([(HeaderName, &'static str); 2], &'static str) {
        (
            [
                (X_POWERED_BY, "Express"),
                (header::X_FRAME_OPTIONS, "ALLOWALL"),
            ],
            "ok",
        )
    }

    #[tokio::test]
    async fn test_headers_are_set_and_overridden() {
        let app = Router::new()
            .route("/", get(powered))
            .layer(middleware::from_fn(layer));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
        assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
        assert!(headers.get(X_POWERED_BY).is_none());
    }
}
