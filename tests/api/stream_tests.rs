//! SSE Stream Endpoint Tests
//!
//! The router is driven with `oneshot`; the returned response body is the
//! live SSE stream, read frame by frame with a timeout.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{read_sse_until as read_until, TestApp};

#[tokio::test]
async fn user_stream_starts_with_history_snapshot() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;
    app.post_json(
        "/api/v1/rooms/general/messages",
        json!({ "user_id": alice, "content": "before attach" }),
    )
    .await;

    let response = app
        .get(&format!("/api/v1/users/{alice}/messages/stream"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/event-stream"
    );
    let body = read_until(response, "event: room-messages-user").await;
    assert!(body.contains("before attach"));
}

#[tokio::test]
async fn user_stream_emits_live_messages_after_snapshot() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    app.join(&alice, "general").await;
    app.join(&bob, "general").await;

    let response = app
        .get(&format!("/api/v1/users/{bob}/messages/stream"))
        .await;

    // Publish after the stream is attached
    app.post_json(
        "/api/v1/rooms/general/messages",
        json!({ "user_id": alice, "content": "live one" }),
    )
    .await;

    let body = read_until(response, "event: new-room-message").await;
    assert!(body.contains("event: room-messages-user"), "snapshot must come first");
    assert!(body.contains("live one"));
}

#[tokio::test]
async fn private_stream_emits_direct_messages() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .get(&format!("/api/v1/users/{bob}/private/stream"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    app.post_json(
        "/api/v1/messages/private",
        json!({ "from_user_id": alice, "to_user_id": bob, "content": "psst" }),
    )
    .await;

    let body = read_until(response, "event: private-message").await;
    assert!(body.contains("psst"));
}

#[tokio::test]
async fn room_stream_sends_snapshots_then_membership_updates() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;
    app.post_json(
        "/api/v1/rooms/general/messages",
        json!({ "user_id": alice, "content": "history" }),
    )
    .await;

    let response = app
        .get(&format!("/api/v1/rooms/general/stream?user_id={alice}"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let bob = app.register("bob").await;
    app.join(&bob, "general").await;

    let body = read_until(response, "event: new-user").await;
    assert!(body.contains("event: all-messages"));
    assert!(body.contains("history"));
    assert!(body.contains("event: all-users"));
    assert!(body.contains(&bob));
}

#[tokio::test]
async fn stream_for_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/777/messages/stream").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_stream_for_unknown_room_is_not_found() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let response = app
        .get(&format!("/api/v1/rooms/nowhere/stream?user_id={alice}"))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
