//! Recognition-service credential decoding.
//!
//! The credential document arrives as one base64-encoded JSON blob in the
//! environment. It is decoded once at startup and held in memory for the
//! process lifetime; nothing is written to disk.

use base64::Engine;
use serde::Deserialize;

use vocagate_core::GatewayError;

/// Parsed recognition service credential document.
///
/// The document must carry either `api_key` (forwarded as a query
/// parameter) or `access_token` (forwarded as a bearer header).
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleCredentials {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl GoogleCredentials {
    /// Decode a base64 blob to UTF-8 JSON and parse it.
    pub fn from_base64(blob: &str) -> Result<Self, GatewayError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(blob.trim())
            .map_err(|e| GatewayError::Config(format!("credentials are not valid base64: {e}")))?;
        let json = String::from_utf8(bytes)
            .map_err(|e| GatewayError::Config(format!("credentials are not valid UTF-8: {e}")))?;
        let creds: Self = serde_json::from_str(&json)
            .map_err(|e| GatewayError::Config(format!("credentials are not valid JSON: {e}")))?;

        if creds.api_key.is_none() && creds.access_token.is_none() {
            return Err(GatewayError::Config(
                "credential document has neither api_key nor access_token".to_string(),
            ));
        }
        Ok(creds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(doc: &str) -> String {
        base64::engine::general_purpose::STANDARD.encode(doc)
    }

    #[test]
    fn parses_api_key_document() {
        let creds =
            GoogleCredentials::from_base64(&encode(r#"{"project_id":"p1","api_key":"abc"}"#))
                .unwrap();
        assert_eq!(creds.project_id.as_deref(), Some("p1"));
        assert_eq!(creds.api_key.as_deref(), Some("abc"));
        assert!(creds.access_token.is_none());
    }

    #[test]
    fn parses_access_token_document() {
        let creds =
            GoogleCredentials::from_base64(&encode(r#"{"access_token":"ya29.token"}"#)).unwrap();
        assert_eq!(creds.access_token.as_deref(), Some("ya29.token"));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = GoogleCredentials::from_base64("%%not-base64%%").unwrap_err();
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn rejects_non_json_payload() {
        let err = GoogleCredentials::from_base64(&encode("plain text")).unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn rejects_document_without_any_auth_material() {
        let err = GoogleCredentials::from_base64(&encode(r#"{"project_id":"p1"}"#)).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let blob = format!("  {}\n", encode(r#"{"api_key":"abc"}"#));
        assert!(GoogleCredentials::from_base64(&blob).is_ok());
    }
}
