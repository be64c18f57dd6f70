use edgegap_core::query::PaginationParams;
use edgegap_core::response::PaginatedResponse;
use reqwest::Method;

use crate::client::EdgegapClient;
use crate::models::deployments::{
    AvailableDeploymentsQuery, BulkStopPayload, BulkStopResponse, ContainerLogs, DeploymentCreate,
    DeploymentCreateResponse, DeploymentStatus, DeploymentStopResponse, DeploymentSummary,
};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Request a deployment of an application version.
    ///
    /// The deployment starts asynchronously; poll
    /// [`get_deployment_status`](Self::get_deployment_status) or use a webhook.
    pub async fn create_deployment(
        &self,
        deployment: &DeploymentCreate,
    ) -> Result<ApiResponse<DeploymentCreateResponse>> {
        self.send_json(Method::POST, &["deploy"], Some(deployment), &[])
            .await
    }

    /// Fetch the current status of a deployment.
    pub async fn get_deployment_status(
        &self,
        request_id: &str,
    ) -> Result<ApiResponse<DeploymentStatus>> {
        self.get_json(&["status", request_id], &[]).await
    }

    /// Stop a deployment.
    pub async fn stop_deployment(
        &self,
        request_id: &str,
    ) -> Result<ApiResponse<DeploymentStopResponse>> {
        self.send_empty(Method::DELETE, &["stop", request_id]).await
    }

    /// List running deployments, one page at a time.
    pub async fn list_deployments(
        &self,
        pagination: PaginationParams,
    ) -> Result<ApiResponse<PaginatedResponse<DeploymentSummary>>> {
        self.get_json(&["deployments"], &pagination.to_pairs()).await
    }

    /// List deployments able to host a session.
    pub async fn list_available_deployments(
        &self,
        query: &AvailableDeploymentsQuery,
    ) -> Result<ApiResponse<PaginatedResponse<DeploymentSummary>>> {
        self.send_json(Method::POST, &["deployments:available"], Some(query), &[])
            .await
    }

    /// Stop every deployment matching the payload filters.
    pub async fn bulk_stop_deployments(
        &self,
        payload: &BulkStopPayload,
    ) -> Result<ApiResponse<BulkStopResponse>> {
        self.send_json(Method::POST, &["deployments:bulk-stop"], Some(payload), &[])
            .await
    }

    /// Fetch the container logs of a deployment.
    pub async fn get_container_logs(&self, request_id: &str) -> Result<ApiResponse<ContainerLogs>> {
        self.get_json(&["deploy", request_id, "container-logs"], &[])
            .await
    }
}
