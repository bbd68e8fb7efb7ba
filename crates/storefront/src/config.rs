//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ECOFLEET_HOST` - Bind address (default: 127.0.0.1)
//! - `ECOFLEET_PORT` - Listen port (default: 3000)
//! - `ECOFLEET_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`)
//! - `ECOSCORE_API_URL` - Chat-completions endpoint for the eco-score
//!   classifier (default: Groq's OpenAI-compatible endpoint)
//! - `ECOSCORE_API_KEY` - API key for the classifier; without it every
//!   classification uses the static fallback
//! - `ECOSCORE_MODEL` - Model name (default: llama3-8b-8192)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Eco-score classifier configuration
    pub ecoscore: EcoScoreConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Eco-score classification collaborator configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct EcoScoreConfig {
    /// Chat-completions endpoint URL
    pub api_url: String,
    /// API key; `None` disables remote classification entirely
    pub api_key: Option<SecretString>,
    /// Model name sent with each request
    pub model: String,
}

impl std::fmt::Debug for EcoScoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcoScoreConfig")
            .field("api_url", &self.api_url)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .finish()
    }
}

/// Default classifier endpoint (Groq's OpenAI-compatible API).
const DEFAULT_ECOSCORE_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default classifier model.
const DEFAULT_ECOSCORE_MODEL: &str = "llama3-8b-8192";

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ECOFLEET_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ECOFLEET_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ECOFLEET_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ECOFLEET_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ECOFLEET_BASE_URL", "http://localhost:3000");

        let ecoscore = EcoScoreConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            ecoscore,
            sentry_dsn,
        })
    }

    /// A configuration suitable for tests: loopback bind, no classifier
    /// key (so no network call is ever attempted), no Sentry.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            ecoscore: EcoScoreConfig {
                api_url: DEFAULT_ECOSCORE_API_URL.to_string(),
                api_key: None,
                model: DEFAULT_ECOSCORE_MODEL.to_string(),
            },
            sentry_dsn: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl EcoScoreConfig {
    fn from_env() -> Self {
        Self {
            api_url: get_env_or_default("ECOSCORE_API_URL", DEFAULT_ECOSCORE_API_URL),
            api_key: get_optional_env("ECOSCORE_API_KEY").map(SecretString::from),
            model: get_env_or_default("ECOSCORE_MODEL", DEFAULT_ECOSCORE_MODEL),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
