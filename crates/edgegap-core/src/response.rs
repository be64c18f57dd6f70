//! Response envelope and shared response DTOs.
//!
//! A successful call yields an [`ApiResponse`] holding the decoded payload
//! together with a [`RawResponse`] snapshot. Failures are reported through
//! [`crate::Error`], so a payload is present exactly when no error is.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Snapshot of a transport response.
///
/// The body has already been read, so the snapshot can be kept, cloned and
/// compared after the payload has been decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// Create a snapshot from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Successful outcome of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    data: T,
    raw: RawResponse,
}

impl<T> ApiResponse<T> {
    /// Pair a decoded payload with the response it came from.
    #[must_use]
    pub const fn new(data: T, raw: RawResponse) -> Self {
        Self { data, raw }
    }

    /// Borrow the decoded payload.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Take ownership of the decoded payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Borrow the raw response snapshot.
    #[must_use]
    pub const fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.raw.status
    }

    /// Split into payload and raw response.
    #[must_use]
    pub fn into_parts(self) -> (T, RawResponse) {
        (self.data, self.raw)
    }

    /// Transform the payload, keeping the raw response.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            raw: self.raw,
        }
    }
}

/// Error body returned by the API on any failure status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    /// Extract the error message from a failed response.
    ///
    /// An error object's `message` is returned as is, even when empty.
    /// Otherwise falls back to the trimmed body text, and to the status
    /// reason phrase when the body is empty.
    #[must_use]
    pub fn message_from(raw: &RawResponse) -> String {
        if let Ok(body) = serde_json::from_slice::<Self>(raw.body()) {
            return body.message;
        }

        let text = raw.text();
        let text = text.trim();
        if text.is_empty() {
            raw.status()
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            text.to_string()
        }
    }
}

/// Pagination block attached to paginated list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-based)
    #[serde(default)]
    pub number: u32,
    /// Next page number, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_number: Option<u32>,
    /// Previous page number, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page_number: Option<u32>,
    /// Page count information
    #[serde(default)]
    pub paginator: Paginator,
    /// Whether a next page exists
    #[serde(default)]
    pub has_next: bool,
    /// Whether a previous page exists
    #[serde(default)]
    pub has_previous: bool,
}

/// Page count information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paginator {
    /// Total number of pages
    #[serde(default)]
    pub num_pages: u32,
}

/// Paginated list body: `{ count, data, success, pagination }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    /// Total number of items
    #[serde(default)]
    pub count: u32,
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Whether the API considers the listing successful
    #[serde(default)]
    pub success: bool,
    /// Pagination details
    #[serde(default)]
    pub pagination: Pagination,
}
