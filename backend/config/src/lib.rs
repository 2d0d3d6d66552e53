//! Environment-driven configuration for the vocagate speech gateway.
//!
//! All settings come from environment variables with sensible defaults;
//! the one hard requirement is `GOOGLE_CREDENTIALS_BASE64`, which must
//! decode to a usable credential document before the server may start.

pub mod credentials;

pub use credentials::GoogleCredentials;

/// Environment variable holding the base64-encoded credential JSON.
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_CREDENTIALS_BASE64";

/// Vocagate runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Base64-encoded recognition service credential JSON
    pub credentials_base64: Option<String>,
    /// Override for the recognition API base URL (used in tests)
    pub recognition_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            credentials_base64: None,
            recognition_base_url: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("VOCAGATE_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("VOCAGATE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string()),
            credentials_base64: std::env::var(CREDENTIALS_ENV_VAR).ok(),
            recognition_base_url: std::env::var("VOCAGATE_RECOGNITION_URL").ok(),
        }
    }

    /// Decode and parse the credential blob.
    ///
    /// A missing or malformed blob is a fatal configuration error; the
    /// process must refuse to start rather than fail on first request.
    pub fn load_credentials(&self) -> Result<GoogleCredentials, vocagate_core::GatewayError> {
        let blob = self.credentials_base64.as_deref().ok_or_else(|| {
            vocagate_core::GatewayError::Config(format!(
                "{CREDENTIALS_ENV_VAR} is missing from the environment"
            ))
        })?;
        GoogleCredentials::from_base64(blob)
    }
}
