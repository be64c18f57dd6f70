//! Advanced matchmaker models: components, their environment, matchmakers,
//! releases and release configurations.

use serde::{Deserialize, Serialize};

/// Credentials for pulling a component image from a private registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryCredentials {
    /// Registry username.
    #[serde(default)]
    pub username: String,
    /// Registry token.
    #[serde(default)]
    pub token: String,
}

/// Payload for creating or updating a matchmaker component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerComponentCreate {
    /// Unique component name.
    pub name: String,
    /// Container repository hosting the image.
    pub repository: String,
    /// Container image.
    pub image: String,
    /// Image tag.
    pub tag: String,
    /// Private registry credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<RegistryCredentials>,
}

impl MatchmakerComponentCreate {
    /// Create a component from its image coordinates.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        repository: impl Into<String>,
        image: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            image: image.into(),
            tag: tag.into(),
            credentials: None,
        }
    }
}

/// Matchmaker component as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerComponent {
    /// Component name.
    pub name: String,
    /// Container repository.
    #[serde(default)]
    pub repository: String,
    /// Container image.
    #[serde(default)]
    pub image: String,
    /// Image tag.
    #[serde(default)]
    pub tag: String,
    /// Private registry credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<RegistryCredentials>,
    /// Creation time.
    #[serde(default)]
    pub created_at: String,
    /// Last update time.
    #[serde(default)]
    pub updated_at: String,
}

/// Components owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerComponentList {
    /// Number of components.
    #[serde(default)]
    pub count: u32,
    /// Components.
    #[serde(default)]
    pub data: Vec<MatchmakerComponent>,
}

/// Environment variable of a component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerEnv {
    /// Variable name.
    pub key: String,
    /// Variable value.
    pub value: String,
}

impl MatchmakerEnv {
    /// Create a component variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Stored environment variable of a component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerEnvEntry {
    /// Variable name.
    pub key: String,
    /// Variable value.
    #[serde(default)]
    pub value: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: String,
    /// Last update time.
    #[serde(default)]
    pub updated_at: String,
}

/// Environment variables of a component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerEnvList {
    /// Number of variables.
    #[serde(default)]
    pub count: u32,
    /// Variables.
    #[serde(default)]
    pub data: Vec<MatchmakerEnvEntry>,
}

/// Matchmaker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Matchmaker {
    /// Matchmaker name.
    pub name: String,
    /// Matchmaker URL.
    #[serde(default)]
    pub url: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: String,
    /// Last update time.
    #[serde(default)]
    pub updated_at: String,
}

/// Matchmakers owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerList {
    /// Number of matchmakers.
    #[serde(default)]
    pub count: u32,
    /// Matchmakers.
    #[serde(default)]
    pub data: Vec<Matchmaker>,
}

/// Body naming a matchmaker, used for creation and renaming.
#[derive(Debug, Serialize)]
pub(crate) struct MatchmakerName<'a> {
    pub(crate) name: &'a str,
}

/// Payload for creating or updating a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerReleaseCreate {
    /// Unique release version.
    pub version: String,
    /// Component used as the Open Match frontend.
    pub frontend_component_name: String,
    /// Component used as the Open Match director.
    pub director_component_name: String,
    /// Component used as the Open Match match function.
    pub match_function_component_name: String,
}

/// Matchmaker release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerRelease {
    /// Application deployed by the matchmaker.
    #[serde(default)]
    pub app_name: String,
    /// Release version.
    #[serde(default)]
    pub version: String,
    /// Application version deployed by the matchmaker.
    #[serde(default)]
    pub version_name: String,
    /// Frontend component.
    #[serde(default)]
    pub frontend_component_name: String,
    /// Director component.
    #[serde(default)]
    pub director_component_name: String,
    /// Match function component.
    #[serde(default)]
    pub match_function_component_name: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: String,
    /// Last update time.
    #[serde(default)]
    pub updated_at: String,
}

/// Releases of a matchmaker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerReleaseList {
    /// Number of releases.
    #[serde(default)]
    pub count: u32,
    /// Releases.
    #[serde(default)]
    pub data: Vec<MatchmakerRelease>,
}

/// Payload for creating or updating a managed release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerManagedReleaseCreate {
    /// Unique release version.
    pub version: String,
    /// Release configuration to use.
    pub release_config_name: String,
}

/// Release whose components are managed by Edgegap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerManagedRelease {
    /// Application deployed by the matchmaker.
    #[serde(default)]
    pub app_name: String,
    /// Application version deployed by the matchmaker.
    #[serde(default)]
    pub version_name: String,
    /// Release version.
    #[serde(default)]
    pub version: String,
    /// Release configuration in use.
    #[serde(default)]
    pub release_config_name: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: String,
    /// Last update time.
    #[serde(default)]
    pub updated_at: String,
}

/// Release configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerReleaseConfig {
    /// Unique configuration name.
    pub name: String,
    /// Configuration document, as a string.
    #[serde(default)]
    pub configuration: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl MatchmakerReleaseConfig {
    /// Create a configuration payload.
    #[must_use]
    pub fn new(name: impl Into<String>, configuration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configuration: configuration.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Release configurations owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchmakerReleaseConfigList {
    /// Number of configurations.
    #[serde(default)]
    pub count: u32,
    /// Configurations.
    #[serde(default)]
    pub data: Vec<MatchmakerReleaseConfig>,
}
