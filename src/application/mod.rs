//! Application Layer
//!
//! Contains the directory, fan-out publisher and stream multiplexer
//! services plus data transfer objects (DTOs). This layer orchestrates the
//! flow of data between the presentation and domain layers.

pub mod dto;
pub mod services;
