use crate::client::EdgegapClient;
use crate::models::metrics::{Metrics, MetricsFilter};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Fetch CPU, memory, network and disk metrics of a deployment.
    pub async fn get_deployment_metrics(
        &self,
        request_id: &str,
        filter: &MetricsFilter,
    ) -> Result<ApiResponse<Metrics>> {
        self.get_json(&["metrics", "deployment", request_id], &filter.to_pairs())
            .await
    }
}
