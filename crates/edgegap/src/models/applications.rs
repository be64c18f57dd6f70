//! Application, application version and ACL models.

use edgegap_core::types::EnvVariable;
use serde::{Deserialize, Serialize};

/// Payload for creating or updating an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationCreate {
    /// Application name.
    pub name: String,
    /// Whether the application can be deployed.
    pub is_active: bool,
    /// Install the telemetry agent on the versions of this application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_telemetry_agent_active: Option<bool>,
    /// Base64 encoded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ApplicationCreate {
    /// Create an active application payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            is_telemetry_agent_active: None,
            image: None,
        }
    }
}

/// Application as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Application {
    /// Application name.
    pub name: String,
    /// Whether the application can be deployed.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the telemetry agent is installed on its versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_telemetry_agent_active: Option<bool>,
    /// Base64 encoded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Applications owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationList {
    /// Applications.
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Kind of session an application version accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// No session handling; `session_config` is ignored.
    Default,
    /// Seat based sessions.
    Seat,
    /// Match based sessions.
    Match,
}

/// Session settings of an application version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationVersionSession {
    /// Kind of session to create.
    pub kind: SessionKind,
    /// Game slots on each deployment of this version.
    pub sockets: u32,
    /// Deploy automatically when no open sockets remain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autodeploy: Option<bool>,
    /// Minutes a deployment may stay without session before termination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_ttl: Option<u32>,
    /// Minutes session data is kept after its deployment terminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_max_duration: Option<u32>,
}

/// Transport protocol of an exposed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// TCP
    #[serde(rename = "TCP")]
    Tcp,
    /// UDP
    #[serde(rename = "UDP")]
    Udp,
    /// TCP and UDP on the same port
    #[serde(rename = "TCP/UDP")]
    TcpUdp,
    /// HTTP
    #[serde(rename = "HTTP")]
    Http,
    /// HTTPS
    #[serde(rename = "HTTPS")]
    Https,
    /// WebSocket
    #[serde(rename = "WS")]
    Ws,
    /// Secure WebSocket
    #[serde(rename = "WSS")]
    Wss,
}

/// Port exposed by an application version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationPort {
    /// Port number; 0 requests one-to-one port mapping.
    pub port: u16,
    /// Protocol.
    pub protocol: Protocol,
    /// Verify the port during deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_check: Option<bool>,
    /// Inject a TLS upgrading sidecar (HTTP and WS only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_upgrade: Option<bool>,
    /// Port name; mandatory with port 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ApplicationPort {
    /// Create a port without checks or TLS upgrade.
    #[must_use]
    pub fn new(port: u16, protocol: Protocol) -> Self {
        Self {
            port,
            protocol,
            to_check: None,
            tls_upgrade: None,
            name: None,
        }
    }
}

/// Latency thresholds used when choosing locations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationProbe {
    /// Optimal latency in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_ping: Option<u32>,
    /// Latency above which a location is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_ping: Option<u32>,
}

/// Build type of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    /// Production build.
    Production,
    /// Development build.
    Development,
}

/// Application version: everything needed to create a deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationVersion {
    /// Version name.
    pub name: String,
    /// Whether the version is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Registry hosting the image (`harbor.edgegap.com`, `docker.io`).
    #[serde(default)]
    pub docker_repository: String,
    /// Image name (`edgegap/demo`).
    #[serde(default)]
    pub docker_image: String,
    /// Image tag.
    #[serde(default)]
    pub docker_tag: String,
    /// Registry username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_username: Option<String>,
    /// Registry password or token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_token: Option<String>,
    /// vCPU units (1024 = 1 vCPU).
    #[serde(default)]
    pub req_cpu: u32,
    /// Memory in MB (1024 = 1 GB).
    #[serde(default)]
    pub req_memory: u32,
    /// GPU units (1024 = 1 GPU).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_video: Option<u32>,
    /// Maximum game duration in minutes; 0 means forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
    /// Inject ASA variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_telemetry: Option<bool>,
    /// ACL protection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelisting_active: Option<bool>,
    /// Cache the image on every edge site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_cache: Option<bool>,
    /// Start hour of the preferred caching window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_min_hour: Option<u32>,
    /// End hour of the preferred caching window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_max_hour: Option<u32>,
    /// Seconds after which a deployment is considered failed and retried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_deploy: Option<u32>,
    /// Session settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_config: Option<ApplicationVersionSession>,
    /// Exposed ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<ApplicationPort>>,
    /// Latency probe thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<ApplicationProbe>,
    /// Environment variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvVariable>>,
    /// Check the image coordinates on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_image: Option<bool>,
    /// Grace period after SIGTERM, in seconds.
    #[serde(
        default,
        rename = "termination_grace_period_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub termination_grace_period: Option<u32>,
    /// Endpoint storage to link for container logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_storage: Option<String>,
    /// Entrypoint override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments passed to the command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    /// Build type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_type: Option<BuildType>,
}

impl ApplicationVersion {
    /// Create a version from its image coordinates and resource request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        docker_repository: impl Into<String>,
        docker_image: impl Into<String>,
        docker_tag: impl Into<String>,
        req_cpu: u32,
        req_memory: u32,
    ) -> Self {
        Self {
            name: name.into(),
            docker_repository: docker_repository.into(),
            docker_image: docker_image.into(),
            docker_tag: docker_tag.into(),
            req_cpu,
            req_memory,
            ..Self::default()
        }
    }
}

/// Partial update of an application version. Unset fields are not sent and
/// keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationVersionUpdate {
    /// New version name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the version is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Registry hosting the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_repository: Option<String>,
    /// Image name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    /// Image tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_tag: Option<String>,
    /// Registry username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_username: Option<String>,
    /// Registry password or token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_token: Option<String>,
    /// vCPU units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_cpu: Option<u32>,
    /// Memory in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_memory: Option<u32>,
    /// GPU units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_video: Option<u32>,
    /// Maximum game duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
    /// Inject ASA variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_telemetry: Option<bool>,
    /// ACL protection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelisting_active: Option<bool>,
    /// Cache the image on every edge site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_cache: Option<bool>,
    /// Start hour of the caching window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_min_hour: Option<u32>,
    /// End hour of the caching window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_max_hour: Option<u32>,
    /// Seconds before a deployment is retried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_deploy: Option<u32>,
    /// Session settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_config: Option<ApplicationVersionSession>,
    /// Exposed ports; replaces the current list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<ApplicationPort>>,
    /// Latency probe thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<ApplicationProbe>,
    /// Environment variables; replaces the current list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvVariable>>,
    /// Check the image coordinates on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_image: Option<bool>,
    /// Grace period after SIGTERM, in seconds.
    #[serde(
        default,
        rename = "termination_grace_period_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub termination_grace_period: Option<u32>,
    /// Endpoint storage to link for container logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_storage: Option<String>,
    /// Entrypoint override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments passed to the command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    /// Build type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_type: Option<BuildType>,
}

/// Response to version creation and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationVersionCreateResponse {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Resulting version.
    pub version: ApplicationVersion,
}

/// Versions of one application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationVersionList {
    /// Versions.
    #[serde(default)]
    pub versions: Vec<ApplicationVersion>,
    /// Total number of versions.
    #[serde(default)]
    pub total_count: u32,
}

/// Access control entry allowing a CIDR to reach deployments of a version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationAcl {
    /// Entry identifier, assigned by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Allowed CIDR.
    pub cidr: String,
    /// Free-form label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the rule is applied at runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ApplicationAcl {
    /// Create an entry for the given CIDR.
    #[must_use]
    pub fn new(cidr: impl Into<String>) -> Self {
        Self {
            id: None,
            cidr: cidr.into(),
            label: None,
            is_active: None,
        }
    }
}

/// Response to ACL entry creation and deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationAclCreateResponse {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Affected entry.
    pub whitelist_entry: ApplicationAcl,
}

/// ACL entries of a version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationAclEntries {
    /// Entries.
    #[serde(default)]
    pub whitelist_entries: Vec<ApplicationAcl>,
}
