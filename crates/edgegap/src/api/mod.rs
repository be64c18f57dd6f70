//! Resource bindings: one `impl EdgegapClient` block per API resource.
//!
//! Every operation sends exactly one request; path parameters are
//! percent-encoded as single segments.

mod applications;
mod deployments;
mod fleets;
mod ip;
mod locations;
mod matchmaker;
mod metrics;
mod sessions;
mod telemetry;
