//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn register_returns_created_with_user_id() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/users", json!({ "display_name": "alice" }))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert!(body["user_id"].as_str().is_some());
    assert_eq!(body["display_name"], "alice");
}

#[tokio::test]
async fn register_rejects_duplicate_display_name() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app
        .post_json("/api/v1/users", json!({ "display_name": "alice" }))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("alice"));
}

#[tokio::test]
async fn register_validates_display_name_length() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/users", json!({ "display_name": "a" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_user_returns_the_registered_profile() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let response = app.get(&format!("/api/v1/users/{alice}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user_id"], alice);
    assert_eq!(body["display_name"], "alice");
    assert!(body["created_at"].as_str().is_some());
}

#[tokio::test]
async fn get_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/4242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_rooms_lists_memberships_in_join_order() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "zebra").await;
    app.join(&alice, "alpha").await;

    let response = app.get(&format!("/api/v1/users/{alice}/rooms")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["rooms"], json!(["zebra", "alpha"]));
}

#[tokio::test]
async fn user_rooms_for_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/12345/rooms").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_rooms_with_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/not-a-number/rooms").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
