//! Core Edgegap domain types.
//!
//! API versioning plus the small DTOs that several resources embed in their
//! request bodies (location filters, coordinates, environment variables).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Public Edgegap API endpoint.
pub const EDGEGAP_BASE_URL: &str = "https://api.edgegap.com";

/// Supported API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApiVersion {
    /// Version 1, served under `/v1`
    #[default]
    #[serde(rename = "v1")]
    V1,
}

impl ApiVersion {
    /// Path prefix for this version.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            _ => Err(Error::ConfigError(format!("Unknown API version: {s}"))),
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location field a [`Filter`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// City name
    City,
    /// Country name
    Country,
    /// Continent name
    Continent,
    /// Region name
    Region,
    /// Administrative division
    AdministrativeDivision,
    /// Location tags
    LocationTags,
}

/// How a [`Filter`] combines its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Match any value
    Any,
    /// Match all values
    All,
    /// Exclude the values
    Not,
}

/// Algorithm used to pick an edge location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Plain latency ordering
    Basic,
    /// Weighted ordering
    Weighted,
}

/// Location filter applied when choosing where to deploy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filter {
    /// Field to filter on
    pub field: FilterField,
    /// Values to compare against
    pub values: Vec<String>,
    /// Combination mode
    pub filter_type: FilterType,
}

impl Filter {
    /// Create a filter.
    #[must_use]
    pub fn new(field: FilterField, filter_type: FilterType, values: Vec<String>) -> Self {
        Self {
            field,
            values,
            filter_type,
        }
    }
}

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub longitude: f64,
}

/// An end-user IP with its known location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoIp {
    /// IP address
    pub ip: String,
    /// Latitude in decimal degrees
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub longitude: f64,
}

/// Environment variable injected into a container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvVariable {
    /// Variable name
    pub key: String,
    /// Variable value
    pub value: String,
    /// Encrypt the value during deployment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

impl EnvVariable {
    /// Create a visible environment variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            is_hidden: None,
        }
    }

    /// Create an environment variable whose value is encrypted.
    #[must_use]
    pub fn hidden(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            is_hidden: Some(true),
            ..Self::new(key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_version_from_str() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("V1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert!("v9".parse::<ApiVersion>().is_err());
        assert_eq!(ApiVersion::V1.to_string(), "v1");
    }

    #[test]
    fn test_filter_serialization() {
        let filter = Filter::new(
            FilterField::AdministrativeDivision,
            FilterType::Not,
            vec!["Quebec".to_string()],
        );

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "field": "administrative_division",
                "values": ["Quebec"],
                "filter_type": "not"
            })
        );
    }

    #[test]
    fn test_env_variable_hidden_flag() {
        let visible = serde_json::to_value(EnvVariable::new("PORT", "7777")).unwrap();
        assert_eq!(visible, json!({"key": "PORT", "value": "7777"}));

        let hidden = serde_json::to_value(EnvVariable::hidden("TOKEN", "s3cr3t")).unwrap();
        assert_eq!(hidden["is_hidden"], json!(true));
    }

    #[test]
    fn test_sort_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&SortStrategy::Weighted).unwrap(),
            "\"weighted\""
        );
    }
}
