//! SSE Stream Handlers
//!
//! Each handler attaches a stream multiplexer to the connection and
//! renders its events as Server-Sent Events. Dropping the response (client
//! disconnect) drops the multiplexer stream and with it every channel
//! subscription it holds.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, KeepAlive, KeepAliveStream, Sse},
};
use futures::stream::BoxStream;
use futures::StreamExt;
use serde::Deserialize;

use crate::application::services::{EventStream, StreamEvent};
use crate::shared::error::AppError;
use crate::shared::validation::validate_room_name;
use crate::startup::AppState;

use super::parse_user_id;

type SseResponse = Sse<KeepAliveStream<BoxStream<'static, Result<Event, Infallible>>>>;

/// Query parameters for the room content stream
#[derive(Debug, Deserialize)]
pub struct RoomStreamQuery {
    pub user_id: String,
}

/// Stream every broadcast message delivered to a user: full history first,
/// then live updates
pub async fn user_messages(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<SseResponse, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let events = state.multiplexer.user_messages(user_id)?;
    Ok(sse_response(events, &state))
}

/// Stream a user's direct messages
pub async fn private_messages(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<SseResponse, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let events = state.multiplexer.private_messages(user_id)?;
    Ok(sse_response(events, &state))
}

/// Stream a room's contents: message log and member list snapshots, then
/// live message and membership events
pub async fn room_content(
    State(state): State<AppState>,
    Path(room): Path<String>,
    Query(query): Query<RoomStreamQuery>,
) -> Result<SseResponse, AppError> {
    validate_room_name(&room)?;
    let user_id = parse_user_id(&query.user_id)?;
    let events = state.multiplexer.room_content(user_id, &room)?;
    Ok(sse_response(events, &state))
}

/// Wrap an event stream as an SSE response with keep-alive comments.
fn sse_response(events: EventStream, state: &AppState) -> SseResponse {
    let stream = events
        .filter_map(|event| futures::future::ready(to_sse_event(event).map(Ok)))
        .boxed();

    Sse::new(stream).keep_alive(
        KeepAlive::new().interval(Duration::from_secs(state.settings.stream.keep_alive_secs)),
    )
}

/// Render one event. A payload that fails to serialize is logged and
/// skipped; it must not terminate an otherwise healthy connection.
fn to_sse_event(event: StreamEvent) -> Option<Event> {
    let name = event.event_name();
    match Event::default().event(name).json_data(&event) {
        Ok(rendered) => Some(rendered),
        Err(err) => {
            tracing::warn!(event = name, error = %err, "failed to serialize stream event; skipping");
            None
        }
    }
}
