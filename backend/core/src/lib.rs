//! Core types for the vocagate speech gateway.
//!
//! Holds the error taxonomy shared across crates and the transcript types
//! exchanged between the recognition client and the HTTP surface.

pub mod error;
pub mod types;

pub use error::GatewayError;
pub use types::{join_transcripts, RecognizedSegment};
