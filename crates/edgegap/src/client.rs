//! Asynchronous Edgegap client implementation.

use crate::Result;
use edgegap_core::client::{ClientConfig, ServiceClient, ServiceClientBuilder};
use edgegap_core::config::EdgegapConfig;
use edgegap_core::types::ApiVersion;
use edgegap_core::{ApiResponse, Error};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("edgegap-rust/", env!("CARGO_PKG_VERSION"));

/// Builder for [`EdgegapClient`].
#[derive(Debug)]
pub struct EdgegapClientBuilder {
    config: EdgegapConfig,
    http_config: ClientConfig,
    token: SecretString,
}

impl EdgegapClientBuilder {
    /// Create a builder targeting the public Edgegap API.
    ///
    /// The token is sent verbatim as the `Authorization` header value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_config(EdgegapConfig::default(), token)
    }

    /// Create a builder from an existing configuration.
    #[must_use]
    pub fn from_config(config: EdgegapConfig, token: impl Into<String>) -> Self {
        Self {
            config,
            http_config: ClientConfig::new(),
            token: SecretString::from(token.into()),
        }
    }

    /// Point the client at another base URL (without version prefix).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Override the API version.
    #[must_use]
    pub const fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.config.api_version = version;
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the token is not a
    /// valid header value, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<EdgegapClient> {
        self.config.check()?;
        let base_url = self.config.versioned_url()?;

        let mut http_config = self.http_config;
        if let Some(timeout) = self.config.timeout() {
            http_config = http_config.with_timeout(timeout);
        }

        let mut authorization = HeaderValue::from_str(self.token.expose_secret())
            .map_err(|_| Error::ConfigError("API token is not a valid header value".into()))?;
        authorization.set_sensitive(true);

        let user_agent = self
            .config
            .user_agent
            .clone()
            .unwrap_or_else(|| USER_AGENT.to_string());

        debug!(base_url = %base_url, "building Edgegap client");

        let inner = ServiceClientBuilder::new(base_url)
            .with_http_config(http_config)
            .with_user_agent(user_agent)
            .with_header(AUTHORIZATION, authorization)
            .build()?;

        Ok(EdgegapClient { inner })
    }
}

/// Asynchronous Edgegap API client.
///
/// Cheap to clone; clones share one connection pool and may be used from
/// several tasks at once.
#[derive(Debug, Clone)]
pub struct EdgegapClient {
    inner: ServiceClient,
}

impl EdgegapClient {
    /// Construct a client for the public API with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        EdgegapClientBuilder::new(token).build()
    }

    /// Start a builder with the given token.
    #[must_use]
    pub fn builder(token: impl Into<String>) -> EdgegapClientBuilder {
        EdgegapClientBuilder::new(token)
    }

    /// Return the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    pub(crate) async fn get_json<R>(
        &self,
        segments: &[&str],
        params: &[(&'static str, String)],
    ) -> Result<ApiResponse<R>>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::GET, segments, None, params)
            .await
    }

    pub(crate) async fn send_empty<R>(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<ApiResponse<R>>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(method, segments, None, &[]).await
    }

    pub(crate) async fn send_json<B, R>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        params: &[(&'static str, String)],
    ) -> Result<ApiResponse<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.inner
            .execute(method, segments, params, |request| match body {
                Some(payload) => request.json(payload),
                None => request,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn builder_defaults_to_public_api() {
        let client = EdgegapClient::new("token abc").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.edgegap.com/v1");
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = EdgegapClient::builder("token abc")
            .with_base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn builder_rejects_token_with_newline() {
        let err = EdgegapClient::builder("token\nabc").build().unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn builder_debug_redacts_token() {
        let builder = EdgegapClient::builder("token super-secret");
        assert!(!format!("{builder:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn requests_carry_default_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/ip"))
            .and(header("authorization", "token abc"))
            .and(header("content-type", "application/json"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"public_ip": "1.2.3.4"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = EdgegapClient::builder("token abc")
            .with_base_url(server.uri())
            .build()
            .unwrap();
        let response = client
            .get_json::<serde_json::Value>(&["ip"], &[])
            .await
            .unwrap();
        assert_eq!(response.data()["public_ip"], "1.2.3.4");
    }
}
