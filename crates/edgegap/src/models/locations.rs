//! Location and beacon models.

use edgegap_core::query::QueryParams;
use serde::{Deserialize, Serialize};

/// Deployment location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationInfo {
    /// City.
    #[serde(default)]
    pub city: String,
    /// Continent.
    #[serde(default)]
    pub continent: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Time zone name.
    #[serde(default)]
    pub timezone: String,
    /// Administrative division.
    #[serde(default)]
    pub administrative_division: String,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
    /// Location type.
    #[serde(default, rename = "type")]
    pub location_type: String,
    /// Location tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Locations available to deploy on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationList {
    /// Locations.
    #[serde(default)]
    pub locations: Vec<LocationInfo>,
    /// Extra messages about the query.
    #[serde(default)]
    pub message: Vec<String>,
}

/// Ping target of a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationBeacon {
    /// Beacon host IP.
    #[serde(default)]
    pub host: String,
    /// Beacon domain name.
    #[serde(default)]
    pub fqdn: String,
    /// UDP ping port.
    #[serde(default)]
    pub udp_port: u16,
    /// TCP ping port.
    #[serde(default)]
    pub tcp_port: u16,
    /// Location the beacon belongs to.
    #[serde(default)]
    pub location: LocationInfo,
}

/// Active beacons; beacons cannot be deployed on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationBeaconList {
    /// Beacons.
    #[serde(default)]
    pub locations: Vec<LocationBeacon>,
    /// Number of active beacons.
    #[serde(default)]
    pub count: u32,
}

/// Filters for [`list_locations`](crate::EdgegapClient::list_locations).
///
/// Empty fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilters {
    /// Keep locations with capacity for this application.
    pub app: String,
    /// Keep locations with capacity for this version.
    pub version: String,
    /// Location type.
    pub location_type: String,
    /// Include tags in the response.
    pub tags: Option<bool>,
}

impl LocationFilters {
    /// Filter on capacity for an application.
    #[must_use]
    pub fn for_app(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            ..Self::default()
        }
    }

    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_non_empty("app", &self.app);
        params.push_non_empty("version", &self.version);
        params.push_non_empty("type", &self.location_type);
        params.push_opt("tags", self.tags);
        params.into_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_skip_empty_fields() {
        let filters = LocationFilters::for_app("myapp");
        assert_eq!(filters.to_pairs(), vec![("app", "myapp".to_string())]);
    }

    #[test]
    fn filters_render_all_fields() {
        let filters = LocationFilters {
            app: "myapp".into(),
            version: "1.0".into(),
            location_type: "Edge".into(),
            tags: Some(true),
        };
        assert_eq!(
            filters.to_pairs(),
            vec![
                ("app", "myapp".to_string()),
                ("version", "1.0".to_string()),
                ("type", "Edge".to_string()),
                ("tags", "true".to_string()),
            ]
        );
    }

    #[test]
    fn default_filters_are_empty() {
        assert!(LocationFilters::default().to_pairs().is_empty());
    }
}
