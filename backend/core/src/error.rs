use thiserror::Error;

/// Top-level error type for the vocagate service.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("Audio file is required")]
    MissingAudio,

    #[error("No transcription available")]
    EmptyTranscript,

    #[error("recognition service error: {0}")]
    Recognition(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    /// Whether this failure is attributable to the caller's request.
    /// Drives the 400-vs-500 split at the HTTP boundary.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingAudio | Self::EmptyTranscript)
    }
}
