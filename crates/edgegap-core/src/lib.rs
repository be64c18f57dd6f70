//! # edgegap-core
//!
//! Core types and utilities for working with the Edgegap API.
//!
//! This crate provides the error type, configuration, the request executor and
//! the response envelope shared by every Edgegap resource binding.
//!
//! ## Modules
//!
//! - [`error`] - Error type and transport/API failure classification
//! - [`config`] - Serializable, validated client configuration
//! - [`client`] - HTTP transport settings and the request executor
//! - [`response`] - Result envelope, raw response snapshot and pagination DTOs
//! - [`query`] - Query parameter builder and pagination helper
//! - [`types`] - API version, base URL and DTOs shared across resources

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use response::ApiResponse;
