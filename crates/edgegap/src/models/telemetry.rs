//! Active deployment telemetry models.

use serde::{Deserialize, Serialize};

/// Request for scoring active deployments against user IPs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryCreate {
    /// Deployment request identifiers to score.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployments: Vec<String>,
    /// User IPs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ips: Vec<String>,
    /// URL receiving the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Handle for fetching telemetry results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryCreateResponse {
    /// Key passed to [`get_telemetry`](crate::EdgegapClient::get_telemetry).
    pub retrieval_key: String,
    /// Key expiration time.
    #[serde(default)]
    pub expire: String,
}

/// Telemetry result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Telemetry {
    /// Retrieval key.
    #[serde(default)]
    pub retrieval_key: String,
    /// Deployment request identifiers, best first.
    #[serde(default)]
    pub scores: Vec<String>,
    /// Some deployments had not reported yet.
    #[serde(default)]
    pub partial_result: bool,
}
