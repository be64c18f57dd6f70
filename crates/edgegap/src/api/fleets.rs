use edgegap_core::query::PaginationParams;
use reqwest::Method;
use serde_json::Value;

use crate::client::EdgegapClient;
use crate::models::fleets::{Fleet, FleetApplication, FleetCreate, FleetList};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Create a fleet.
    pub async fn create_fleet(&self, fleet: &FleetCreate) -> Result<ApiResponse<Fleet>> {
        self.send_json(Method::POST, &["fleet"], Some(fleet), &[])
            .await
    }

    /// Fetch a fleet.
    pub async fn get_fleet(&self, name: &str) -> Result<ApiResponse<Fleet>> {
        self.get_json(&["fleet", name], &[]).await
    }

    /// Update a fleet.
    pub async fn update_fleet(
        &self,
        name: &str,
        fleet: &FleetCreate,
    ) -> Result<ApiResponse<Fleet>> {
        self.send_json(Method::PATCH, &["fleet", name], Some(fleet), &[])
            .await
    }

    /// Delete a fleet.
    pub async fn delete_fleet(&self, name: &str) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &["fleet", name]).await
    }

    /// List fleets; the API picks the page when `pagination` is `None`.
    pub async fn list_fleets(
        &self,
        pagination: Option<PaginationParams>,
    ) -> Result<ApiResponse<FleetList>> {
        let params = pagination
            .map(|pagination| pagination.to_pairs())
            .unwrap_or_default();
        self.get_json(&["fleets"], &params).await
    }

    /// Link an application version to a fleet.
    pub async fn link_fleet_application(
        &self,
        fleet: &str,
        app: &str,
        version: &str,
    ) -> Result<ApiResponse<FleetApplication>> {
        self.send_empty(Method::PUT, &["fleet", fleet, "app", app, "version", version])
            .await
    }

    /// Unlink an application version from a fleet.
    pub async fn unlink_fleet_application(
        &self,
        fleet: &str,
        app: &str,
        version: &str,
    ) -> Result<ApiResponse<Value>> {
        self.send_empty(
            Method::DELETE,
            &["fleet", fleet, "app", app, "version", version],
        )
        .await
    }
}
