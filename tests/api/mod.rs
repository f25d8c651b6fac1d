//! REST API and SSE endpoint tests

mod message_tests;
mod room_tests;
mod scenario_tests;
mod stream_tests;
mod user_tests;
