mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
async fn test_save_generates_alias() {
    let pool = common::test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert!(body.get("error").is_none());

    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(common::count_records(&pool).await, 1);
}

#[tokio::test]
async fn test_save_custom_alias() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "shop" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "shop" }));
}

#[tokio::test]
async fn test_save_empty_alias_generates_one() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["alias"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_save_alias_collision() {
    let pool = common::test_pool().await;
    common::insert_record(&pool, "shop", "https://example.com").await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://other.com", "alias": "shop" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "url already exists" }));
    assert_eq!(common::count_records(&pool).await, 1);
}

#[tokio::test]
async fn test_save_missing_url() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server.post("/url").json(&json!({ "alias": "shop" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "status": "Error",
        "error": "field url is a required field"
    }));
}

#[tokio::test]
async fn test_save_invalid_url() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "status": "Error",
        "error": "field url is not a valid URL"
    }));
}

#[tokio::test]
async fn test_save_invalid_alias() {
    let pool = common::test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "my-link" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "status": "Error",
        "error": "field alias is not valid"
    }));
    assert_eq!(common::count_records(&pool).await, 0);
}

#[tokio::test]
async fn test_save_reports_every_invalid_field() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .json(&json!({ "alias": "a b" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "field alias is not valid, field url is a required field"
    );
}

#[tokio::test]
async fn test_save_reserved_alias() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "health" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "Error");
}

#[tokio::test]
async fn test_save_empty_body() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server.post("/url").text("").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "status": "Error", "error": "empty request" }));
}

#[tokio::test]
async fn test_save_malformed_body() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server.post("/url").text("{\"url\":").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "status": "Error",
        "error": "failed to decode request"
    }));
}

#[tokio::test]
async fn test_save_sets_request_id() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_save_keeps_client_request_id() {
    let server = common::create_test_server(common::test_pool().await);

    let response = server
        .post("/url")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.header("x-request-id"), "req-42");
}

#[tokio::test]
async fn test_save_storage_failure() {
    let pool = common::test_pool().await;
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "status": "Error", "error": "failed to add url" }));
}

#[tokio::test]
async fn test_save_accepts_trailing_slash() {
    use alias_shortener::routes::app_router;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    let state = common::create_test_state(common::test_pool().await);
    let app = app_router(state, Duration::from_secs(4));

    let request = Request::builder()
        .method("POST")
        .uri("/url/")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"url":"https://example.com","alias":"slash"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_save_rejects_url_with_line_break() {
    let pool = common::test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a\nb", "alias": "ctrl" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "status": "Error",
        "error": "field url is not a valid URL"
    }));
    assert_eq!(common::count_records(&pool).await, 0);

    server.get("/ctrl").await.assert_status_not_found();
}
