//! End-to-End Scenario Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{response_json, TestApp};

/// register "alice" -> u1; register "alice" again -> conflict; alice joins
/// "general" (room created, members=[u1]); register "bob" -> u2; bob joins
/// "general" (members=[u1,u2]); alice broadcasts "hello" (both replay logs
/// contain it, room log has 1 entry); alice sends bob "hey" privately.
#[tokio::test]
async fn full_chat_scenario() {
    let app = TestApp::new();

    let u1 = app.register("alice").await;
    let duplicate = app
        .post_json("/api/v1/users", json!({ "display_name": "alice" }))
        .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let joined = app.join(&u1, "general").await;
    assert_eq!(joined["members"], json!([u1]));

    let u2 = app.register("bob").await;
    let joined = app.join(&u2, "general").await;
    assert_eq!(joined["members"], json!([u1, u2]));

    let broadcast = app
        .post_json(
            "/api/v1/rooms/general/messages",
            json!({ "user_id": u1, "content": "hello" }),
        )
        .await;
    assert_eq!(broadcast.status(), StatusCode::CREATED);

    // Both members see "hello" in their replay snapshot
    for user in [&u1, &u2] {
        let stream = app
            .get(&format!("/api/v1/users/{user}/messages/stream"))
            .await;
        let text = crate::common::read_sse_until(stream, "hello").await;
        assert!(text.contains("event: room-messages-user"));
    }

    let private = app
        .post_json(
            "/api/v1/messages/private",
            json!({ "from_user_id": u1, "to_user_id": u2, "content": "hey" }),
        )
        .await;
    assert_eq!(private.status(), StatusCode::CREATED);
    let body = response_json(private).await;
    assert_eq!(body["content"], "hey");
}

#[tokio::test]
async fn health_reports_directory_counters() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 1);
    assert_eq!(body["rooms"], 1);
}
