//! Session models.

use edgegap_core::types::{Coordinates, Filter, GeoIp};
use serde::{Deserialize, Serialize};

use super::deployments::DeploymentStatus;

/// Selector used to pick and tag deployments for a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selector {
    /// Tag to match.
    pub tag: String,
    /// Only filter on the tag, without injecting `env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_only: Option<bool>,
    /// Variables injected into the linked deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Payload for creating a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionCreate {
    /// Application name.
    pub app: String,
    /// Version name.
    #[serde(default, rename = "version_name", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// End-user IPs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_list: Vec<String>,
    /// End-user IPs with their location.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo_ip_list: Vec<GeoIp>,
    /// Link the session to this deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_request_id: Option<String>,
    /// Place the session close to these coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    /// City constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Continent constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    /// Administrative division constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_division: Option<String>,
    /// Region constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Deployment selectors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<Selector>,
    /// URL receiving the session on link, error or unprocessable state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Location filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Use geolocation only and skip telemetry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_telemetry: Option<bool>,
}

impl SessionCreate {
    /// Create a session for users of an application.
    #[must_use]
    pub fn new(app: impl Into<String>, ip_list: Vec<String>) -> Self {
        Self {
            app: app.into(),
            ip_list,
            ..Self::default()
        }
    }
}

/// Response to session creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionCreateResponse {
    /// Session identifier.
    pub session_id: String,
    /// Custom identifier, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Application name.
    #[serde(default)]
    pub app: String,
    /// Version name.
    #[serde(default)]
    pub version: String,
    /// Linked deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_request_id: Option<String>,
    /// Selectors in effect.
    #[serde(default)]
    pub selectors: Vec<Selector>,
    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// User of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    /// User IP.
    pub ip: String,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
}

/// Session as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Session identifier.
    #[serde(rename = "session_id")]
    pub id: String,
    /// Custom identifier, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: String,
    /// Linked to a ready deployment.
    #[serde(default)]
    pub ready: bool,
    /// Linked to a deployment.
    #[serde(default)]
    pub linked: bool,
    /// Session kind.
    #[serde(default)]
    pub kind: String,
    /// Number of users.
    #[serde(default)]
    pub user_count: u32,
    /// Application version identifier.
    #[serde(default)]
    pub app_version: u64,
    /// Creation time.
    #[serde(default)]
    pub create_time: String,
    /// Elapsed seconds.
    #[serde(default)]
    pub elapsed: u64,
    /// Error detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Users.
    #[serde(default)]
    pub session_users: Vec<SessionUser>,
    /// User IPs.
    #[serde(default)]
    pub session_ips: Vec<SessionUser>,
    /// Linked deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentStatus>,
    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Response to session deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionDeleteResponse {
    /// Message from the API.
    #[serde(default)]
    pub message: String,
    /// Session identifier.
    #[serde(default)]
    pub session_id: String,
    /// Custom identifier, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

/// Reference to a session in a bulk request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRef {
    /// Session identifier.
    pub session_id: String,
}

/// Body of a bulk session deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionBulkDelete {
    /// Sessions to delete.
    pub sessions: Vec<SessionRef>,
}

impl SessionBulkDelete {
    /// Delete the sessions with the given identifiers.
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sessions: ids
                .into_iter()
                .map(|id| SessionRef {
                    session_id: id.into(),
                })
                .collect(),
        }
    }
}

/// Outcome of a bulk session deletion, as reported by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionBulkDeleteResponse {
    /// Deleted sessions.
    #[serde(default)]
    pub success: Vec<SessionDeleteResponse>,
    /// Sessions that could not be deleted.
    #[serde(default)]
    pub failed: Vec<SessionDeleteResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_renames_version() {
        let mut payload = SessionCreate::new("my-game", vec!["1.2.3.4".into()]);
        payload.version = Some("1.0".into());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"app": "my-game", "version_name": "1.0", "ip_list": ["1.2.3.4"]})
        );
    }

    #[test]
    fn session_without_deployment() {
        let session: Session = serde_json::from_value(json!({
            "session_id": "4a3d1c2b-seat",
            "status": "Status.WAITING",
            "ready": false,
            "linked": false,
            "kind": "Seat",
            "user_count": 2,
            "session_users": [{"ip": "1.2.3.4", "latitude": 45.5, "longitude": -73.5}]
        }))
        .unwrap();
        assert_eq!(session.id, "4a3d1c2b-seat");
        assert!(session.deployment.is_none());
        assert_eq!(session.session_users.len(), 1);
    }

    #[test]
    fn bulk_delete_from_ids() {
        let body = SessionBulkDelete::from_ids(["a", "b"]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"sessions": [{"session_id": "a"}, {"session_id": "b"}]})
        );
    }
}
