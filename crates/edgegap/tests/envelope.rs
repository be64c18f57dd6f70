//! Result envelope contract exercised against a mock Edgegap API.

use edgegap::models::applications::ApplicationCreate;
use edgegap::models::locations::LocationFilters;
use edgegap::{EdgegapClient, Error, PaginationParams};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EdgegapClient {
    EdgegapClient::builder("token 0000-test")
        .with_base_url(server.uri())
        .build()
        .expect("client")
}

#[tokio::test]
async fn success_carries_decoded_body_and_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/app/arena"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-1")
                .set_body_json(json!({"name": "arena", "is_active": true})),
        )
        .mount(&server)
        .await;

    let response = client_for(&server).get_application("arena").await.unwrap();

    assert_eq!(response.data().name, "arena");
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.raw().headers()["x-request-id"], "req-1");
    let body: serde_json::Value = serde_json::from_slice(response.raw().body()).unwrap();
    assert_eq!(body["name"], "arena");
}

#[tokio::test]
async fn status_300_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ip"))
        .respond_with(ResponseTemplate::new(300).set_body_json(json!({"public_ip": "1.2.3.4"})))
        .mount(&server)
        .await;

    let response = client_for(&server).get_public_ip().await.unwrap();
    assert_eq!(response.data().ip, "1.2.3.4");
}

#[tokio::test]
async fn failure_status_carries_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/app/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Application not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_application("missing")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Application not found");
    assert_eq!(err.error_code(), "API_ERROR");
    assert!(err.is_api());
    let raw = err.raw_response().expect("raw response on API errors");
    assert_eq!(raw.status().as_u16(), 404);
}

#[tokio::test]
async fn failure_with_empty_json_message_keeps_it_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/app"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": ""})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_application(&ApplicationCreate::new("arena"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "");
    assert_eq!(err.status(), Some(400));
    let raw = err.raw_response().expect("raw response on API errors");
    assert_eq!(raw.text(), r#"{"message":""}"#);
}

#[tokio::test]
async fn failure_without_json_body_uses_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway\n"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_applications().await.unwrap_err();
    assert_eq!(err.to_string(), "bad gateway");
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn transport_failure_has_no_raw_response() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = EdgegapClient::builder("token 0000-test")
        .with_base_url(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();
    let err = client.get_public_ip().await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_api());
    assert!(err.raw_response().is_none());
    assert!(err.status().is_none());
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_public_ip().await.unwrap_err();
    assert!(matches!(err, Error::DecodeError(_)));
}

#[tokio::test]
async fn repeated_get_returns_equal_independent_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/app/arena"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "arena", "is_active": false})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.get_application("arena").await.unwrap().into_data();
    let mut second = client.get_application("arena").await.unwrap().into_data();

    assert_eq!(first, second);
    second.name.push_str("-changed");
    assert_eq!(first.name, "arena");
}

#[tokio::test]
async fn version_path_and_location_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/app/myapp/version/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "1.0"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/locations"))
        .and(query_param("app", "myapp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locations": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_application_version("myapp", "1.0").await.unwrap();
    client
        .list_locations(&LocationFilters::for_app("myapp"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let locations = requests
        .iter()
        .find(|request| request.url.path() == "/v1/locations")
        .expect("locations request");
    assert_eq!(locations.url.query(), Some("app=myapp"));
}

#[tokio::test]
async fn pagination_query_string() {
    assert_eq!(PaginationParams::new(2, 10).query_string(), "?page=2&limit=10");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "data": [],
            "success": true,
            "pagination": {}
        })))
        .mount(&server)
        .await;

    client_for(&server)
        .list_sessions(PaginationParams::new(2, 10))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=2&limit=10"));
}

#[tokio::test]
async fn path_segments_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/app/my%20game"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "my game"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).get_application("my game").await.unwrap();
    assert_eq!(response.data().name, "my game");
}
