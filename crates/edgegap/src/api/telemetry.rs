use reqwest::Method;

use crate::client::EdgegapClient;
use crate::models::telemetry::{Telemetry, TelemetryCreate, TelemetryCreateResponse};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Ask for the best active deployments for a set of user IPs.
    ///
    /// Results are fetched with [`get_telemetry`](Self::get_telemetry) or
    /// delivered to the webhook.
    pub async fn create_telemetry(
        &self,
        request: &TelemetryCreate,
    ) -> Result<ApiResponse<TelemetryCreateResponse>> {
        self.send_json(
            Method::POST,
            &["telemetry", "active-deployments"],
            Some(request),
            &[],
        )
        .await
    }

    /// Fetch telemetry results, best deployment first.
    pub async fn get_telemetry(&self, retrieval_key: &str) -> Result<ApiResponse<Telemetry>> {
        self.get_json(&["telemetry", "active-deployments", retrieval_key], &[])
            .await
    }
}
