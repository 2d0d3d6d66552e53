//! Wire schema for the Google Cloud Speech-to-Text v1 `speech:recognize`
//! endpoint. Field names are camelCase on the wire.

use base64::Engine;
use serde::{Deserialize, Serialize};

use vocagate_core::RecognizedSegment;

/// The one audio encoding this gateway accepts; uploads are WEBM/Opus clips.
pub const WEBM_OPUS_ENCODING: &str = "WEBM_OPUS";

/// Recognition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// Encoding of the audio data.
    pub encoding: String,
    /// BCP-47 language code (e.g. "en-US"), passed through unvalidated.
    pub language_code: String,
}

/// Audio content for the recognition request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionAudio {
    /// Base64-encoded audio data.
    pub content: String,
}

/// Full request body for `speech:recognize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

/// A single alternative transcription.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
}

/// A single recognition result within the API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionResult {
    /// Alternative transcriptions, ordered by confidence.
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

/// Full response from `speech:recognize`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

/// Error detail from the recognition API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error envelope from the recognition API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Build the recognition request for one uploaded clip: fixed WEBM/Opus
/// encoding, caller's language code, audio embedded as base64 content.
pub fn build_recognize_request(audio: &[u8], language_code: &str) -> RecognizeRequest {
    RecognizeRequest {
        config: RecognitionConfig {
            encoding: WEBM_OPUS_ENCODING.to_string(),
            language_code: language_code.to_string(),
        },
        audio: RecognitionAudio {
            content: base64::engine::general_purpose::STANDARD.encode(audio),
        },
    }
}

impl From<SpeechRecognitionResult> for RecognizedSegment {
    fn from(result: SpeechRecognitionResult) -> Self {
        RecognizedSegment::new(
            result
                .alternatives
                .into_iter()
                .map(|alt| alt.transcript)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocagate_core::join_transcripts;

    #[test]
    fn request_carries_language_code_and_base64_audio() {
        let req = build_recognize_request(b"fake opus bytes", "en-US");
        assert_eq!(req.config.language_code, "en-US");
        assert_eq!(req.config.encoding, "WEBM_OPUS");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&req.audio.content)
            .unwrap();
        assert_eq!(decoded, b"fake opus bytes");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = build_recognize_request(b"abc", "uk-UA");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["config"]["languageCode"], "uk-UA");
        assert_eq!(json["config"]["encoding"], "WEBM_OPUS");
        assert!(json["audio"]["content"].is_string());
    }

    #[test]
    fn response_deserializes_and_joins() {
        let body = r#"{
            "results": [
                {"alternatives": [{"transcript": "hello", "confidence": 0.92}]},
                {"alternatives": [{"transcript": "world"}]}
            ]
        }"#;
        let resp: RecognizeResponse = serde_json::from_str(body).unwrap();
        let segments: Vec<_> = resp.results.into_iter().map(Into::into).collect();
        assert_eq!(join_transcripts(&segments).as_deref(), Some("hello\nworld"));
    }

    #[test]
    fn response_tolerates_missing_results() {
        let resp: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn error_envelope_deserializes() {
        let body = r#"{"error": {"code": 400, "message": "Invalid recognition config", "status": "INVALID_ARGUMENT"}}"#;
        let err: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(err.error.code, Some(400));
        assert_eq!(err.error.status.as_deref(), Some("INVALID_ARGUMENT"));
    }
}
