//! Configuration structures for Edgegap clients.
//!
//! The configuration describes where the API lives and how long a request
//! may take. The API token is not part of it; it is handed to the client
//! builder directly.

use crate::types::{ApiVersion, EDGEGAP_BASE_URL};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for an Edgegap client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct EdgegapConfig {
    /// API base URL, without the version prefix
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version appended to the base URL
    #[serde(default)]
    pub api_version: ApiVersion,

    /// Request timeout in seconds; the transport default applies when unset
    #[validate(range(min = 1, max = 300))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Optional User-Agent override
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    EDGEGAP_BASE_URL.to_string()
}

impl EdgegapConfig {
    /// Create a configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the API version.
    #[must_use]
    pub const fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing every invalid field.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Parse the base URL and append the version prefix.
    ///
    /// `https://api.edgegap.com` becomes `https://api.edgegap.com/v1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot carry a path.
    pub fn versioned_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| {
                Error::ConfigError(format!("Base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(self.api_version.as_str());

        Ok(url)
    }
}

impl Default for EdgegapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: ApiVersion::default(),
            request_timeout_secs: None,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = EdgegapConfig::new("https://api.example.com").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_version, ApiVersion::V1);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_config_invalid_url() {
        let result = EdgegapConfig::new("not a url");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_config_default_points_at_public_api() {
        let config = EdgegapConfig::default();
        assert_eq!(config.base_url, EDGEGAP_BASE_URL);
        assert_eq!(
            config.versioned_url().unwrap().as_str(),
            "https://api.edgegap.com/v1"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = EdgegapConfig::new("https://api.example.com")
            .unwrap()
            .with_timeout(45)
            .with_user_agent("my-game-server/1.0");

        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.user_agent.as_deref(), Some("my-game-server/1.0"));
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_timeout_out_of_range() {
        let config = EdgegapConfig::default().with_timeout(0);
        assert!(matches!(config.check(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_versioned_url_keeps_existing_path() {
        let config = EdgegapConfig::new("http://127.0.0.1:8080/proxy/").unwrap();
        assert_eq!(
            config.versioned_url().unwrap().as_str(),
            "http://127.0.0.1:8080/proxy/v1"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = EdgegapConfig::new("https://api.example.com")
            .unwrap()
            .with_timeout(10);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"api_version\":\"v1\""));
        assert!(!json.contains("user_agent"));

        let parsed: EdgegapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let parsed: EdgegapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, EdgegapConfig::default());
    }
}
