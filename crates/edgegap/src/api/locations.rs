use crate::client::EdgegapClient;
use crate::models::locations::{LocationBeaconList, LocationFilters, LocationList};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// List the locations available to deploy on.
    ///
    /// With an application and version set, locations without capacity for
    /// that version are left out.
    pub async fn list_locations(
        &self,
        filters: &LocationFilters,
    ) -> Result<ApiResponse<LocationList>> {
        self.get_json(&["locations"], &filters.to_pairs()).await
    }

    /// List the active location beacons.
    pub async fn list_location_beacons(&self) -> Result<ApiResponse<LocationBeaconList>> {
        self.get_json(&["locations", "beacons"], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client_for;
    use crate::models::locations::LocationFilters;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_locations_sends_only_set_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/locations"))
            .and(query_param("app", "myapp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "locations": [{
                    "city": "Montreal",
                    "country": "Canada",
                    "continent": "North America",
                    "administrative_division": "Quebec",
                    "timezone": "America/Toronto",
                    "latitude": 45.5,
                    "longitude": -73.56,
                    "type": "Edge",
                    "tags": []
                }],
                "message": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .list_locations(&LocationFilters::for_app("myapp"))
            .await
            .unwrap();
        assert_eq!(response.data().locations[0].location_type, "Edge");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("app=myapp"));
    }

    #[tokio::test]
    async fn list_beacons() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/locations/beacons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "locations": [{
                    "host": "172.104.1.1",
                    "fqdn": "beacon-1.edgegap.net",
                    "udp_port": 9000,
                    "tcp_port": 9001,
                    "location": {"city": "Tokyo", "country": "Japan"}
                }],
                "count": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).list_location_beacons().await.unwrap();
        assert_eq!(response.data().count, 1);
        assert_eq!(response.data().locations[0].udp_port, 9000);
    }
}
