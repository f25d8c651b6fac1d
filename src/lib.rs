//! # Chat Relay Library
//!
//! This crate provides an in-memory, single-process chat backend with:
//! - RESTful HTTP API endpoints
//! - Server-Sent Events (SSE) streams for real-time delivery
//! - Room broadcast and direct (private) messaging
//! - Bounded per-user mailboxes with drop-oldest overflow semantics
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities (users, rooms, messages, mailboxes)
//! - **Application Layer**: Directory, fan-out publisher, stream multiplexer
//! - **Presentation Layer**: HTTP handlers and SSE stream endpoints
//!
//! All mutable state is memory-resident and guarded by a single directory
//! lock; there is no persistence layer by design.
//!
//! ## Module Structure
//!
//! ```text
//! chat_relay/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities
//! +-- application/   Directory, publisher, multiplexer, DTOs
//! +-- presentation/  HTTP routes and SSE handlers
//! +-- shared/        Common utilities (errors, snowflake IDs)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core entities
pub mod domain;

// Application layer - Directory, fan-out and fan-in services
pub mod application;

// Presentation layer - HTTP and SSE handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
