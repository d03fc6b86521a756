//! Service configuration for the outbound clients.
//!
//! Provides centralized configuration for the MagicSlides, transcript and
//! slide-details endpoints, the default access credential and the request
//! timeout. Configuration is loaded once at startup from environment
//! variables, with the production endpoints as defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Service configuration for all outbound services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// MagicSlides API (account lookup and presentation generation).
    pub magicslides: ServiceEndpoint,

    /// YouTube transcript service.
    pub transcripts: ServiceEndpoint,

    /// Slide-details enrichment service.
    pub slide_details: ServiceEndpoint,

    /// Upgrade link shown when a plan is not entitled.
    pub pricing_url: String,

    /// Access ID used when a tool call does not supply one.
    #[serde(skip_serializing)]
    pub default_access_id: Option<String>,

    /// Request timeout in seconds, applied to every outbound call.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    /// Returns the production endpoints with no default credential.
    fn default() -> Self {
        Self {
            magicslides: ServiceEndpoint::new("https://www.magicslides.app"),
            transcripts: ServiceEndpoint::new("https://youtube-transcripts-main.onrender.com"),
            slide_details: ServiceEndpoint::new(
                "https://video-and-audio-description-qh4z.onrender.com",
            ),
            pricing_url: "https://www.magicslides.app/pricing".to_string(),
            default_access_id: None,
            timeout_secs: 60,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAGICSLIDES_ACCESS_ID`: Default access ID for tool calls
    /// - `MAGICSLIDES_API_URL`: MagicSlides API URL (default: https://www.magicslides.app)
    /// - `MAGICSLIDES_PRICING_URL`: Upgrade link (default: https://www.magicslides.app/pricing)
    /// - `YOUTUBE_TRANSCRIPT_API_URL`: Transcript service URL
    /// - `SLIDE_DETAILS_API_URL`: Slide-details enrichment service URL
    /// - `MAGICSLIDES_TIMEOUT_SECS`: Request timeout in seconds (default: 60)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            magicslides: env_endpoint("MAGICSLIDES_API_URL", default.magicslides),
            transcripts: env_endpoint("YOUTUBE_TRANSCRIPT_API_URL", default.transcripts),
            slide_details: env_endpoint("SLIDE_DETAILS_API_URL", default.slide_details),
            pricing_url: std::env::var("MAGICSLIDES_PRICING_URL").unwrap_or(default.pricing_url),
            default_access_id: std::env::var("MAGICSLIDES_ACCESS_ID")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            timeout_secs: std::env::var("MAGICSLIDES_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the shared HTTP client with the configured timeout.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        Ok(reqwest::Client::builder().timeout(self.timeout()).build()?)
    }

    /// Validate endpoint URLs and the timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, endpoint) in [
            ("MAGICSLIDES_API_URL", &self.magicslides),
            ("YOUTUBE_TRANSCRIPT_API_URL", &self.transcripts),
            ("SLIDE_DETAILS_API_URL", &self.slide_details),
        ] {
            if !endpoint.is_http() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected an http(s) URL, got '{}'", endpoint.base_url),
                });
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAGICSLIDES_TIMEOUT_SECS".to_string(),
                message: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn env_endpoint(key: &str, default: ServiceEndpoint) -> ServiceEndpoint {
    std::env::var(key).map(ServiceEndpoint::new).unwrap_or(default)
}

/// Configuration for a single service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Base URL for the service (e.g., "https://www.magicslides.app").
    pub base_url: String,
}

impl ServiceEndpoint {
    /// Create an endpoint from a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn is_http(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.pricing_url, "https://www.magicslides.app/pricing");
        assert!(config.default_access_id.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_service_endpoint_url() {
        let endpoint = ServiceEndpoint::new("https://www.magicslides.app");

        assert_eq!(
            endpoint.url("/api/generate-editable-mcp"),
            "https://www.magicslides.app/api/generate-editable-mcp"
        );
        assert_eq!(
            endpoint.url("api/generate-editable-mcp"),
            "https://www.magicslides.app/api/generate-editable-mcp"
        );
    }

    #[test]
    fn test_service_endpoint_url_trailing_slash() {
        let endpoint = ServiceEndpoint::new("https://www.magicslides.app/");

        assert_eq!(
            endpoint.url("/pricing"),
            "https://www.magicslides.app/pricing"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ServiceConfig::default();
        config.transcripts = ServiceEndpoint::new("ftp://transcripts.local");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "YOUTUBE_TRANSCRIPT_API_URL"
        ));

        let mut config = ServiceConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_access_id_not_serialized() {
        let config = ServiceConfig {
            default_access_id: Some("secret".to_string()),
            ..ServiceConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
