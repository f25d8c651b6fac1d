//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn broadcast_returns_the_delivered_message() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;

    let response = app
        .post_json(
            "/api/v1/rooms/general/messages",
            json!({ "user_id": alice, "content": "hello" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["content"], "hello");
    assert_eq!(body["sender_name"], "alice");
    assert_eq!(body["room"], "general");
    assert!(body["id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn broadcast_to_unknown_room_is_not_found() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let response = app
        .post_json(
            "/api/v1/rooms/nowhere/messages",
            json!({ "user_id": alice, "content": "hello" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn broadcast_from_unknown_user_is_not_found() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;

    let response = app
        .post_json(
            "/api/v1/rooms/general/messages",
            json!({ "user_id": "424242", "content": "hello" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn broadcast_validates_content_length() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;

    let response = app
        .post_json(
            "/api/v1/rooms/general/messages",
            json!({ "user_id": alice, "content": "" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn private_message_round_trip() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .post_json(
            "/api/v1/messages/private",
            json!({ "from_user_id": alice, "to_user_id": bob, "content": "hey" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["content"], "hey");
    assert_eq!(body["sender_id"], alice);
    assert!(body.get("room").is_none() || body["room"].is_null());
}

#[tokio::test]
async fn private_message_names_the_missing_side() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let response = app
        .post_json(
            "/api/v1/messages/private",
            json!({ "from_user_id": alice, "to_user_id": "31337", "content": "hey" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("31337"));
}
