//! Room API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn join_creates_room_with_sole_member() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let body = app.join(&alice, "general").await;

    assert_eq!(body["room"], "general");
    assert_eq!(body["members"], json!([alice]));
}

#[tokio::test]
async fn second_member_is_appended() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    app.join(&alice, "general").await;

    let body = app.join(&bob, "general").await;

    assert_eq!(body["members"], json!([alice, bob]));
}

#[tokio::test]
async fn rejoining_is_a_conflict() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;

    let response = app
        .post_json(
            "/api/v1/rooms/general/members",
            json!({ "user_id": alice }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn join_with_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/rooms/general/members",
            json!({ "user_id": "9999" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_rooms_contains_created_rooms() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    app.join(&alice, "general").await;
    app.join(&alice, "random").await;

    let response = app.get("/api/v1/rooms").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let mut rooms: Vec<String> = body["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    rooms.sort();
    assert_eq!(rooms, vec!["general", "random"]);
}

#[tokio::test]
async fn list_rooms_is_empty_initially() {
    let app = TestApp::new();

    let body = response_json(app.get("/api/v1/rooms").await).await;

    assert_eq!(body["rooms"], json!([]));
}
