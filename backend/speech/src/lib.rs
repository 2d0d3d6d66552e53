//! Speech recognition client for vocagate.
//!
//! Wraps the Google Cloud Speech-to-Text v1 REST API
//! (`POST /v1/speech:recognize`) behind the [`Recognizer`] trait so the
//! HTTP surface can be tested against a fake.

pub mod api;
pub mod google;

use async_trait::async_trait;
use bytes::Bytes;

use vocagate_core::{GatewayError, RecognizedSegment};

pub use api::{
    build_recognize_request, RecognitionAudio, RecognitionConfig, RecognizeRequest,
    RecognizeResponse, SpeechRecognitionAlternative, SpeechRecognitionResult, WEBM_OPUS_ENCODING,
};
pub use google::{GoogleAuthMode, GoogleSpeechClient};

/// One synchronous recognition round trip. No retries; the caller sees
/// exactly one outcome per invocation.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(
        &self,
        audio: Bytes,
        language_code: &str,
    ) -> Result<Vec<RecognizedSegment>, GatewayError>;
}
