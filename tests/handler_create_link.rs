mod common;

use axum::http::StatusCode;
use regex::Regex;
use serde_json::{Value, json};

fn generated_slug_pattern() -> Regex {
    Regex::new(r"^[A-Za-z0-9_-]{6}$").unwrap()
}

#[tokio::test]
async fn test_create_with_generated_slug_then_redirect() {
    let (server, repo) = common::test_server();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let slug = json["slug"].as_str().unwrap();
    assert!(generated_slug_pattern().is_match(slug), "slug: {}", slug);
    assert_eq!(json["url"], "https://example.com/page");
    assert!(json["_id"].is_number());
    assert_eq!(repo.len().await, 1);

    let redirect = server.get(&format!("/{}", slug)).await;
    assert_eq!(redirect.status_code(), StatusCode::FOUND);
    assert_eq!(
        redirect.headers()["location"],
        "https://example.com/page"
    );
}

#[tokio::test]
async fn test_blank_slug_is_generated() {
    let (server, _repo) = common::test_server();

    let response = server
        .post("/")
        .json(&json!({ "slug": "   ", "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(generated_slug_pattern().is_match(json["slug"].as_str().unwrap()));
}

#[tokio::test]
async fn test_create_with_explicit_slug_is_normalized() {
    let (server, _repo) = common::test_server();

    let response = server
        .post("/")
        .json(&json!({ "slug": "  Launch-Day ", "url": "  https://example.com/launch  " }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["slug"], "launch-day");
    assert_eq!(json["url"], "https://example.com/launch");
}

#[tokio::test]
async fn test_duplicate_slug_in_any_case_conflicts() {
    let (server, repo) = common::test_server();

    server
        .post("/")
        .json(&json!({ "slug": "docs", "url": "https://first.example.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/")
        .json(&json!({ "slug": "DOCS", "url": "https://second.example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>(), json!({ "message": "Slug in use." }));
    assert_eq!(repo.len().await, 1);

    let redirect = server.get("/docs").await;
    assert_eq!(
        redirect.headers()["location"],
        "https://first.example.com"
    );
}

#[tokio::test]
async fn test_invalid_slug_is_rejected() {
    let (server, repo) = common::test_server();

    for slug in ["has space", "slash/slug", "dot.slug", "emoji😀", "q?x=1"] {
        let response = server
            .post("/")
            .json(&json!({ "slug": slug, "url": "https://example.com" }))
            .await;

        response.assert_status_bad_request();
        assert!(response.json::<Value>()["message"].is_string());
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let (server, repo) = common::test_server();

    let response = server.post("/").json(&json!({ "slug": "nourl" })).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "url is a required field" })
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_non_url_is_rejected() {
    let (server, repo) = common::test_server();

    for url in ["not a url", "example.com/page", "javascript:alert(1)", ""] {
        let response = server.post("/").json(&json!({ "url": url })).await;
        response.assert_status_bad_request();
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (server, repo) = common::test_server();

    let response = server
        .post("/")
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(
        !response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .is_empty()
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let (server, _repo) = common::test_server();

    let response = server.post("/").text("url=https://example.com").await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let server = common::unavailable_server();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "message": "Store error" }));
}

#[tokio::test]
async fn test_validation_precedes_store_access() {
    // The store is down, yet malformed input is still reported as such.
    let server = common::unavailable_server();

    let response = server.post("/").json(&json!({ "url": "nope" })).await;
    response.assert_status_bad_request();

    let response = server
        .post("/")
        .json(&json!({ "slug": "bad slug", "url": "https://example.com" }))
        .await;
    response.assert_status_bad_request();
}
