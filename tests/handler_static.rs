mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_index_page_is_served() {
    let (server, _repo) = common::test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[tokio::test]
async fn test_assets_are_served() {
    let (server, _repo) = common::test_server();

    let css = server.get("/styles.css").await;
    css.assert_status_ok();
    assert!(
        css.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );

    server.get("/app.js").await.assert_status_ok();
}

#[tokio::test]
async fn test_static_files_take_precedence_over_slugs() {
    let (server, _repo) = common::test_server();

    // A slug cannot contain a dot, but the asset name without its extension
    // can be claimed and must not shadow the file.
    server
        .post("/")
        .json(&json!({ "slug": "styles", "url": "https://example.com" }))
        .await
        .assert_status_ok();

    server.get("/styles.css").await.assert_status_ok();
    assert_eq!(server.get("/styles").await.status_code(), StatusCode::FOUND);
}
