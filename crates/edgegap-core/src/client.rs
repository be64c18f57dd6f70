//! HTTP client configuration and the request executor.
//!
//! [`ServiceClient`] performs exactly one HTTP call per invocation and turns
//! the outcome into either an [`ApiResponse`] or an [`Error`]. There is no
//! retry and no backoff: a failed call is reported as-is.

use crate::response::{ApiResponse, ErrorBody, RawResponse};
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

// Connection pool settings

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Highest status code still treated as success.
pub const SUCCESS_STATUS_CEILING: u16 = 300;

/// MIME type used for every request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client configuration.
///
/// Timeouts are unset by default so the transport defaults apply.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overall request timeout
    pub timeout: Option<Duration>,

    /// Connection establishment timeout
    pub connect_timeout: Option<Duration>,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ServiceClient`].
#[derive(Debug, Clone)]
pub struct ServiceClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    user_agent: Option<String>,
    headers: HeaderMap,
}

impl ServiceClientBuilder {
    /// Create a builder for an already versioned base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Self {
            base_url,
            http_config: ClientConfig::new(),
            user_agent: None,
            headers,
        }
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Set the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<ServiceClient> {
        let mut builder = ClientBuilder::new()
            .default_headers(self.headers)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host);

        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(timeout) = self.http_config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.http_config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(ServiceClient {
            http,
            base_url: self.base_url,
        })
    }
}

/// Request executor shared by every resource binding.
///
/// Immutable after construction; clones share the connection pool and can
/// issue requests concurrently.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: Url,
}

impl ServiceClient {
    /// Return the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments and query pairs against the base URL.
    ///
    /// Segments and values are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn build_url(&self, segments: &[&str], params: &[(&'static str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!("Base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Issue one request and decode the outcome.
    ///
    /// `prepare` receives a request that already carries the URL, the query
    /// string and the default headers; it may attach a body. A status code
    /// above [`SUCCESS_STATUS_CEILING`] is reported as [`Error::Api`] with the
    /// message of the decoded error body.
    ///
    /// # Errors
    ///
    /// Returns a transport error when no status code was obtained, an
    /// [`Error::Api`] when the status signals failure, and
    /// [`Error::DecodeError`] when a successful body does not match `T`.
    pub async fn execute<T, F>(
        &self,
        method: Method,
        segments: &[&str],
        params: &[(&'static str, String)],
        prepare: F,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.build_url(segments, params)?;
        let path = url.path().to_string();

        debug!(%method, path = %path, "Edgegap request");

        let request = prepare(self.http.request(method.clone(), url));
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let error = Error::from(err);
                warn!(%method, path = %path, error = %error, "Edgegap request failed");
                return Err(error);
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|err| {
            let error = Error::HttpError(format!("Failed to read response body: {err}"));
            warn!(
                %method,
                path = %path,
                status = status.as_u16(),
                error = %error,
                "Edgegap response body unreadable"
            );
            error
        })?;
        let raw = RawResponse::new(status, headers, body);

        if status.as_u16() > SUCCESS_STATUS_CEILING {
            let message = ErrorBody::message_from(&raw);
            warn!(
                %method,
                path = %path,
                status = status.as_u16(),
                message = %message,
                "Edgegap API error"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                message,
                response: Box::new(raw),
            });
        }

        let data = deserialize_body(&path, &raw)?;
        info!(%method, path = %path, status = status.as_u16(), "Edgegap request completed");

        Ok(ApiResponse::new(data, raw))
    }
}

fn deserialize_body<T>(path: &str, raw: &RawResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    if raw.status() == StatusCode::NO_CONTENT || raw.body().is_empty() {
        serde_json::from_value(serde_json::Value::Null).map_err(|err| {
            Error::DecodeError(format!("Failed to parse empty response for `{path}`: {err}"))
        })
    } else {
        serde_json::from_slice(raw.body()).map_err(|err| {
            Error::DecodeError(format!("Failed to parse response for `{path}`: {err}"))
        })
    }
}
