//! Presentation Layer
//!
//! HTTP routes, request handlers and SSE stream endpoints.

pub mod http;
pub mod middleware;
