//! Vocagate HTTP API server.
//!
//! One business route (`POST /speech-to-text`) plus a health endpoint.

pub mod health_api;
pub mod server;
pub mod speech_api;

pub use server::{build_router, start_server, GatewayState};
