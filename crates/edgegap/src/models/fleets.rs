//! Fleet models.

use edgegap_core::response::Pagination;
use serde::{Deserialize, Serialize};

/// Payload for creating or updating a fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetCreate {
    /// Fleet name.
    pub name: String,
    /// Whether the fleet is enabled.
    #[serde(default)]
    pub enabled: bool,
}

impl FleetCreate {
    /// Create a disabled fleet payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: false,
        }
    }
}

/// Fleet as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fleet {
    /// Fleet name.
    pub name: String,
    /// Whether the fleet is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Creation time (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Last update time (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Link between a fleet and an application version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetApplication {
    /// Fleet name.
    pub name: String,
    /// Linked application.
    #[serde(default, rename = "app")]
    pub app_name: String,
    /// Linked version.
    #[serde(default)]
    pub app_version: String,
    /// Whether the link is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Creation time (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Last update time (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Page of fleets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetList {
    /// Fleets.
    #[serde(default)]
    pub fleets: Vec<Fleet>,
    /// Pagination details.
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fleet_application_reads_app_key() {
        let link: FleetApplication = serde_json::from_value(json!({
            "name": "eu-fleet",
            "app": "my-game",
            "app_version": "1.0",
            "enabled": true
        }))
        .unwrap();
        assert_eq!(link.app_name, "my-game");
        assert!(link.enabled);
    }

    #[test]
    fn fleet_list_defaults_pagination() {
        let list: FleetList =
            serde_json::from_value(json!({"fleets": [{"name": "eu-fleet"}]})).unwrap();
        assert_eq!(list.fleets.len(), 1);
        assert_eq!(list.pagination.number, 0);
    }
}
