//! Google Cloud Speech-to-Text REST client.
//!
//! One client instance is built from the decoded credentials at startup and
//! shared for the process lifetime. Each call is a single blocking round
//! trip with the reqwest defaults; there is deliberately no retry and no
//! timeout override.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, warn};

use vocagate_config::GoogleCredentials;
use vocagate_core::{GatewayError, RecognizedSegment};

use crate::api::{build_recognize_request, ApiErrorResponse, RecognizeResponse};
use crate::Recognizer;

/// Authentication mode for the recognition API.
#[derive(Debug, Clone)]
pub enum GoogleAuthMode {
    /// API key passed as a query parameter.
    ApiKey(String),
    /// OAuth2 token passed in the Authorization header.
    BearerToken(String),
}

/// Batch speech recognition over the Google Speech v1 REST API.
pub struct GoogleSpeechClient {
    client: Client,
    auth: GoogleAuthMode,
    base_url: String,
}

impl GoogleSpeechClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://speech.googleapis.com";

    /// Build a client from a decoded credential document.
    ///
    /// `api_key` wins when the document carries both auth fields.
    pub fn from_credentials(creds: &GoogleCredentials) -> Result<Self, GatewayError> {
        let auth = if let Some(key) = &creds.api_key {
            GoogleAuthMode::ApiKey(key.clone())
        } else if let Some(token) = &creds.access_token {
            GoogleAuthMode::BearerToken(token.clone())
        } else {
            return Err(GatewayError::Config(
                "credential document has no usable auth material".to_string(),
            ));
        };

        Ok(Self {
            client: Client::new(),
            auth,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API host (tests, private endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Recognizer for GoogleSpeechClient {
    async fn recognize(
        &self,
        audio: Bytes,
        language_code: &str,
    ) -> Result<Vec<RecognizedSegment>, GatewayError> {
        let request = build_recognize_request(&audio, language_code);
        let url = format!("{}/v1/speech:recognize", self.base_url);

        debug!(
            language = language_code,
            audio_bytes = audio.len(),
            "Sending recognition request"
        );

        let builder = match &self.auth {
            GoogleAuthMode::ApiKey(key) => {
                self.client.post(&url).query(&[("key", key)]).json(&request)
            }
            GoogleAuthMode::BearerToken(token) => {
                self.client.post(&url).bearer_auth(token).json(&request)
            }
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| GatewayError::Recognition(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            // The API wraps failures in an error envelope; fall back to the
            // raw body when it does not parse.
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or(body);
            warn!(status = %status, "Recognition API returned an error");
            return Err(GatewayError::Recognition(format!(
                "recognition API error {status}: {detail}"
            )));
        }

        let parsed: RecognizeResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Recognition(format!("malformed API response: {e}")))?;

        debug!(results = parsed.results.len(), "Recognition complete");
        Ok(parsed.results.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(api_key: Option<&str>, access_token: Option<&str>) -> GoogleCredentials {
        let doc = serde_json::json!({
            "project_id": "test",
            "api_key": api_key,
            "access_token": access_token,
        });
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn builds_api_key_client() {
        let client = GoogleSpeechClient::from_credentials(&creds(Some("k"), None)).unwrap();
        assert!(matches!(client.auth, GoogleAuthMode::ApiKey(ref k) if k == "k"));
        assert_eq!(client.base_url, GoogleSpeechClient::DEFAULT_BASE_URL);
    }

    #[test]
    fn builds_bearer_client() {
        let client = GoogleSpeechClient::from_credentials(&creds(None, Some("tok"))).unwrap();
        assert!(matches!(client.auth, GoogleAuthMode::BearerToken(ref t) if t == "tok"));
    }

    #[test]
    fn api_key_wins_over_token() {
        let client = GoogleSpeechClient::from_credentials(&creds(Some("k"), Some("tok"))).unwrap();
        assert!(matches!(client.auth, GoogleAuthMode::ApiKey(_)));
    }

    #[test]
    fn rejects_credentials_without_auth_material() {
        assert!(GoogleSpeechClient::from_credentials(&creds(None, None)).is_err());
    }

    #[test]
    fn base_url_override() {
        let client = GoogleSpeechClient::from_credentials(&creds(Some("k"), None))
            .unwrap()
            .with_base_url("http://127.0.0.1:9090");
        assert_eq!(client.base_url, "http://127.0.0.1:9090");
    }
}
