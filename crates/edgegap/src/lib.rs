//! Edgegap API client and data models.
//!
//! Provides typed request/response models and an asynchronous client for the
//! Edgegap edge deployment API: applications, deployments, fleets, sessions,
//! matchmakers, telemetry, metrics, locations and IP lookup.
//!
//! Every operation issues exactly one HTTP request and returns
//! [`Result<ApiResponse<T>>`](ApiResponse): the decoded payload together with
//! the raw response on success, or an [`Error`] describing either a transport
//! failure or the API's error message.
//!
//! ```no_run
//! # async fn run() -> edgegap::Result<()> {
//! let client = edgegap::EdgegapClient::new("token 1234-abcd")?;
//! let app = client.get_application("my-game").await?;
//! println!("{} active: {}", app.data().name, app.data().is_active);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod api;
pub mod client;
pub mod models;

pub use client::{EdgegapClient, EdgegapClientBuilder};
pub use edgegap_core::config::EdgegapConfig;
pub use edgegap_core::query::PaginationParams;
pub use edgegap_core::response::{PaginatedResponse, Pagination, RawResponse};
pub use edgegap_core::{ApiResponse, Error};

/// Convenient result alias that reuses the shared Edgegap error type.
pub type Result<T> = edgegap_core::Result<T>;
