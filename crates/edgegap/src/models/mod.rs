//! Request and response models, one module per API resource.

pub mod applications;
pub mod deployments;
pub mod fleets;
pub mod ip;
pub mod locations;
pub mod matchmaker;
pub mod metrics;
pub mod sessions;
pub mod telemetry;

pub use edgegap_core::types::{
    Coordinates, EnvVariable, Filter, FilterField, FilterType, GeoIp, SortStrategy,
};
