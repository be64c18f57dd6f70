//! Deployment models.

use std::collections::HashMap;

use edgegap_core::types::{Coordinates, EnvVariable, Filter, GeoIp, SortStrategy};
use serde::{Deserialize, Serialize};

/// Container log storage override for a single deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerLogStorage {
    /// Override the version's container log storage setting.
    #[serde(default)]
    pub enabled: bool,
    /// Name of the endpoint storage receiving the logs.
    ///
    /// Falls back to the version's endpoint storage when unset.
    #[serde(
        default,
        alias = "enpoint_storage",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint_storage: Option<String>,
}

/// Payload for creating a deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeploymentCreate {
    /// Application to deploy.
    pub app_name: String,
    /// Version to deploy; the latest version when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    /// Look the application up among public applications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public_app: Option<bool>,
    /// End-user IPs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_list: Vec<String>,
    /// End-user IPs with their location.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo_ip_list: Vec<GeoIp>,
    /// Telemetry profiles to use.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telemetry_profile_uuid_list: Vec<String>,
    /// Deployment level environment variables.
    #[serde(default, rename = "env_vars", skip_serializing_if = "Vec::is_empty")]
    pub env_variables: Vec<EnvVariable>,
    /// Use geolocation only and skip telemetry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_telemetry: Option<bool>,
    /// Deploy close to these coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    /// URL receiving the deployment status through POST.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Deployment tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Location filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Algorithm selecting the edge location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ap_sort_strategy: Option<SortStrategy>,
    /// Container command override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Container arguments override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    /// Container log storage override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_log_storage: Option<ContainerLogStorage>,
}

impl DeploymentCreate {
    /// Deploy the latest version of an application for the given users.
    #[must_use]
    pub fn new(app_name: impl Into<String>, ip_list: Vec<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ip_list,
            ..Self::default()
        }
    }

    /// Pin the version to deploy.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version_name = Some(version.into());
        self
    }
}

/// Response to a deployment request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentCreateResponse {
    /// Identifier of the deployment request.
    pub request_id: String,
    /// DNS name to reach the instance.
    #[serde(default)]
    pub request_dns: String,
    /// Requested application.
    #[serde(default)]
    pub request_app: String,
    /// Requested version.
    #[serde(default)]
    pub request_version: String,
    /// Number of users in the request.
    #[serde(default)]
    pub request_user_count: u32,
    /// City of the chosen location.
    #[serde(default)]
    pub city: String,
    /// Country of the chosen location.
    #[serde(default)]
    pub country: String,
    /// Continent of the chosen location.
    #[serde(default)]
    pub continent: String,
    /// Administrative division of the chosen location.
    #[serde(default)]
    pub administrative_division: String,
    /// Deployment tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Container log storage in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_log_storage: Option<ContainerLogStorage>,
}

/// Location a deployment runs in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeploymentLocation {
    /// City.
    #[serde(default)]
    pub city: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Continent.
    #[serde(default)]
    pub continent: String,
    /// Administrative division.
    #[serde(default)]
    pub administrative_division: String,
    /// Time zone name.
    #[serde(default)]
    pub timezone: String,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
}

/// Mapping of a container port to its public port.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortMapping {
    /// Public port.
    #[serde(default)]
    pub external: u16,
    /// Container port.
    #[serde(default)]
    pub internal: u16,
    /// Protocol as reported by the API.
    #[serde(default)]
    pub protocol: String,
    /// Port name.
    #[serde(default)]
    pub name: String,
    /// Whether a TLS upgrading sidecar is in front of the port.
    #[serde(default)]
    pub tls_upgrade: bool,
    /// Connection link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Proxy port, when proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<u16>,
}

/// Current status of a deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeploymentStatus {
    /// Identifier of the deployment request.
    pub request_id: String,
    /// Fully qualified domain name of the deployment.
    #[serde(default)]
    pub fqdn: String,
    /// Application name.
    #[serde(default)]
    pub app_name: String,
    /// Version name.
    #[serde(default)]
    pub app_version: String,
    /// Current lifecycle status (`Status.READY`, `Status.TERMINATED`, ...).
    #[serde(default)]
    pub current_status: String,
    /// Whether the deployment is running.
    #[serde(default)]
    pub running: bool,
    /// Whether ACL protection is active.
    #[serde(default)]
    pub whitelisting_active: bool,
    /// Start time.
    #[serde(default)]
    pub start_time: String,
    /// Scheduled removal time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_time: Option<String>,
    /// Seconds since start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
    /// Previous status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    /// Whether the deployment is in error.
    #[serde(default)]
    pub error: bool,
    /// Error detail, when in error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    /// Public IP.
    #[serde(default)]
    pub public_ip: String,
    /// Sessions linked to the deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<serde_json::Value>>,
    /// Location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<DeploymentLocation>,
    /// Port mappings keyed by port name.
    #[serde(default)]
    pub ports: HashMap<String, PortMapping>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Socket capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets: Option<String>,
    /// Sockets in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets_usage: Option<String>,
    /// Container command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Container arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

/// Response to a stop request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeploymentStopResponse {
    /// Message from the API.
    #[serde(default)]
    pub message: String,
    /// Deployment as it was when stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_summary: Option<DeploymentStatus>,
}

/// Deployment entry of a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeploymentSummary {
    /// Identifier of the deployment request.
    pub request_id: String,
    /// Fully qualified domain name.
    #[serde(default)]
    pub fqdn: String,
    /// Start time.
    #[serde(default)]
    pub start_time: String,
    /// Whether the deployment is ready.
    #[serde(default)]
    pub ready: bool,
    /// Public IP.
    #[serde(default)]
    pub public_ip: String,
    /// Port mappings keyed by port name.
    #[serde(default)]
    pub ports: HashMap<String, PortMapping>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Socket capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets: Option<String>,
    /// Sockets in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets_usage: Option<String>,
}

/// Body of a query for deployments able to host a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailableDeploymentsQuery {
    /// Application name.
    pub app_name: String,
    /// Version name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    /// Location filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// Body of a bulk stop request: deployments matching every filter stop.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkStopPayload {
    /// Deployment filters.
    pub filters: Vec<BulkStopFilter>,
}

/// Filter applied to deployments in a bulk stop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkStopFilter {
    /// Field to match (`tags`, `request_id`, ...).
    pub field: String,
    /// Values to compare against.
    pub values: Vec<String>,
    /// Combination mode.
    pub filter_type: edgegap_core::types::FilterType,
}

/// Deployment reference returned by a bulk stop.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkStopItem {
    /// Identifier of the deployment request.
    pub request_id: String,
    /// Fully qualified domain name.
    #[serde(default)]
    pub fqdn: String,
}

/// Outcome of a bulk stop, as reported by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkStopResponse {
    /// Deployments scheduled for termination.
    #[serde(default)]
    pub processable: Vec<BulkStopItem>,
    /// Deployments that could not be stopped.
    #[serde(default)]
    pub unprocessable: Vec<BulkStopItem>,
}

/// Exit information of a crashed container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrashData {
    /// Container exit code.
    #[serde(default)]
    pub exit_code: i32,
    /// Exit message.
    #[serde(default)]
    pub message: String,
    /// Number of restarts.
    #[serde(default)]
    pub restart_count: u32,
}

/// Container logs of a deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerLogs {
    /// Log text.
    #[serde(default)]
    pub logs: String,
    /// Encoding of `logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Logs of the previous, crashed container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crash_logs: Option<String>,
    /// Crash information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crash_data: Option<CrashData>,
    /// Link to the stored logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_link: Option<String>,
}
