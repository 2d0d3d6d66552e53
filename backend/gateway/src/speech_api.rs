//! Speech-to-text endpoint.
//!
//! Accepts a multipart form with an `audio` file field (WEBM/Opus clip)
//! and a `language` text field, forwards the clip to the recognition
//! service, and returns the joined transcript. All failures surface as a
//! generic JSON error body; diagnostic detail goes to the log only.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;
use tracing::{error, info};

use vocagate_core::{join_transcripts, GatewayError};
use vocagate_speech::Recognizer;

use crate::server::GatewayState;

/// Handler for `POST /speech-to-text`.
pub async fn speech_to_text(
    State(state): State<GatewayState>,
    multipart: Multipart,
) -> Response {
    let (audio, language) = match read_form(multipart).await {
        Ok(parts) => parts,
        Err(err) => return error_response(err),
    };

    info!(language = %language, "Handling speech-to-text request");

    match transcribe(state.recognizer.as_ref(), audio, &language).await {
        Ok(transcription) => Json(json!({ "transcription": transcription })).into_response(),
        Err(err) => error_response(err),
    }
}

/// Pull the `audio` and `language` fields out of the multipart form.
/// Unknown fields are ignored; a missing language is forwarded as-is and
/// left to the recognition service's own validation.
async fn read_form(mut multipart: Multipart) -> Result<(Option<Bytes>, String), GatewayError> {
    let mut audio: Option<Bytes> = None;
    let mut language = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::Other(anyhow::anyhow!("malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("audio") => {
                audio = Some(field.bytes().await.map_err(|e| {
                    GatewayError::Other(anyhow::anyhow!("failed to read audio field: {e}"))
                })?);
            }
            Some("language") => {
                language = field.text().await.map_err(|e| {
                    GatewayError::Other(anyhow::anyhow!("failed to read language field: {e}"))
                })?;
            }
            _ => {}
        }
    }

    Ok((audio, language))
}

/// Core of the endpoint: one recognition round trip, first alternatives
/// joined by newlines. No audio means no outbound call at all.
async fn transcribe(
    recognizer: &dyn Recognizer,
    audio: Option<Bytes>,
    language: &str,
) -> Result<String, GatewayError> {
    let audio = audio
        .filter(|bytes| !bytes.is_empty())
        .ok_or(GatewayError::MissingAudio)?;

    let segments = recognizer.recognize(audio, language).await?;

    join_transcripts(&segments).ok_or(GatewayError::EmptyTranscript)
}

/// Map an error to its HTTP response. Client errors keep their message;
/// everything else gets a generic body so internal detail never leaks.
fn error_response(err: GatewayError) -> Response {
    let (status, message) = if err.is_client_error() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to process speech to text".to_string(),
        )
    };

    error!(error = %err, "Speech-to-text request failed");
    (status, Json(json!({ "error": message }))).into_response()
}
