use edgegap_core::query::PaginationParams;
use edgegap_core::response::PaginatedResponse;
use reqwest::Method;

use crate::client::EdgegapClient;
use crate::models::sessions::{
    Session, SessionBulkDelete, SessionBulkDeleteResponse, SessionCreate, SessionCreateResponse,
    SessionDeleteResponse,
};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Create a session; it links to a deployment once one is available.
    pub async fn create_session(
        &self,
        session: &SessionCreate,
    ) -> Result<ApiResponse<SessionCreateResponse>> {
        self.send_json(Method::POST, &["session"], Some(session), &[])
            .await
    }

    /// Fetch a session.
    pub async fn get_session(&self, id: &str) -> Result<ApiResponse<Session>> {
        self.get_json(&["session", id], &[]).await
    }

    /// Delete a session. Its deployment keeps running.
    pub async fn delete_session(&self, id: &str) -> Result<ApiResponse<SessionDeleteResponse>> {
        self.send_empty(Method::DELETE, &["session", id]).await
    }

    /// List sessions, one page at a time.
    pub async fn list_sessions(
        &self,
        pagination: PaginationParams,
    ) -> Result<ApiResponse<PaginatedResponse<Session>>> {
        self.get_json(&["sessions"], &pagination.to_pairs()).await
    }

    /// Delete several sessions in one request.
    pub async fn bulk_delete_sessions(
        &self,
        sessions: &SessionBulkDelete,
    ) -> Result<ApiResponse<SessionBulkDeleteResponse>> {
        self.send_json(Method::DELETE, &["sessions:bulk-delete"], Some(sessions), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client_for;
    use crate::models::sessions::{SessionBulkDelete, SessionCreate};
    use crate::PaginationParams;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_session_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/session"))
            .and(body_json(json!({"app": "my-game", "ip_list": ["1.2.3.4"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "session_id": "s-1",
                "app": "my-game",
                "version": "1.0"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .create_session(&SessionCreate::new("my-game", vec!["1.2.3.4".into()]))
            .await
            .unwrap();
        assert_eq!(response.data().session_id, "s-1");
    }

    #[tokio::test]
    async fn get_session_with_deployment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/session/s-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "session_id": "s-1",
                "status": "Status.LINKED",
                "ready": true,
                "linked": true,
                "kind": "Seat",
                "user_count": 1,
                "deployment": {"request_id": "abc", "running": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).get_session("s-1").await.unwrap();
        let session = response.data();
        assert!(session.linked);
        assert_eq!(session.deployment.as_ref().unwrap().request_id, "abc");
    }

    #[tokio::test]
    async fn list_sessions_sends_pagination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/sessions"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 0,
                "data": [],
                "success": true,
                "pagination": {"number": 1, "paginator": {"num_pages": 1}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .list_sessions(PaginationParams::default())
            .await
            .unwrap();
        assert!(response.data().data.is_empty());
        assert!(response.data().success);
    }

    #[tokio::test]
    async fn bulk_delete_sends_body_with_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/sessions:bulk-delete"))
            .and(body_json(json!({"sessions": [{"session_id": "s-1"}, {"session_id": "s-2"}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": [{"message": "deleted", "session_id": "s-1"}],
                "failed": [{"message": "not found", "session_id": "s-2"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .bulk_delete_sessions(&SessionBulkDelete::from_ids(["s-1", "s-2"]))
            .await
            .unwrap();
        assert_eq!(response.data().success[0].session_id, "s-1");
        assert_eq!(response.data().failed[0].message, "not found");
    }
}
