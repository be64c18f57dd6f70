use reqwest::Method;
use serde_json::Value;

use crate::client::EdgegapClient;
use crate::models::matchmaker::{
    Matchmaker, MatchmakerComponent, MatchmakerComponentCreate, MatchmakerComponentList,
    MatchmakerEnv, MatchmakerEnvEntry, MatchmakerEnvList, MatchmakerList, MatchmakerManagedRelease,
    MatchmakerManagedReleaseCreate, MatchmakerName, MatchmakerRelease, MatchmakerReleaseConfig,
    MatchmakerReleaseConfigList, MatchmakerReleaseCreate, MatchmakerReleaseList,
};
use crate::{ApiResponse, Result};

const AOM: &str = "aom";

// Components.
impl EdgegapClient {
    /// Create a matchmaker component.
    pub async fn create_matchmaker_component(
        &self,
        component: &MatchmakerComponentCreate,
    ) -> Result<ApiResponse<MatchmakerComponent>> {
        self.send_json(Method::POST, &[AOM, "component"], Some(component), &[])
            .await
    }

    /// Update a matchmaker component.
    pub async fn update_matchmaker_component(
        &self,
        name: &str,
        component: &MatchmakerComponentCreate,
    ) -> Result<ApiResponse<MatchmakerComponent>> {
        self.send_json(Method::PATCH, &[AOM, "component", name], Some(component), &[])
            .await
    }

    /// Delete a matchmaker component.
    pub async fn delete_matchmaker_component(&self, name: &str) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &[AOM, "component", name])
            .await
    }

    /// Fetch a matchmaker component.
    pub async fn get_matchmaker_component(
        &self,
        name: &str,
    ) -> Result<ApiResponse<MatchmakerComponent>> {
        self.get_json(&[AOM, "component", name], &[]).await
    }

    /// List the caller's matchmaker components.
    pub async fn list_matchmaker_components(&self) -> Result<ApiResponse<MatchmakerComponentList>> {
        self.get_json(&[AOM, "components"], &[]).await
    }

    /// Add an environment variable to a component.
    pub async fn add_matchmaker_component_env(
        &self,
        component: &str,
        env: &MatchmakerEnv,
    ) -> Result<ApiResponse<MatchmakerEnvEntry>> {
        self.send_json(Method::POST, &[AOM, "component", component, "env"], Some(env), &[])
            .await
    }

    /// Update an environment variable of a component, addressed by `env.key`.
    pub async fn update_matchmaker_component_env(
        &self,
        component: &str,
        env: &MatchmakerEnv,
    ) -> Result<ApiResponse<MatchmakerEnvEntry>> {
        self.send_json(
            Method::PATCH,
            &[AOM, "component", component, "env", env.key.as_str()],
            Some(env),
            &[],
        )
        .await
    }

    /// Remove an environment variable from a component.
    pub async fn delete_matchmaker_component_env(
        &self,
        component: &str,
        key: &str,
    ) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &[AOM, "component", component, "env", key])
            .await
    }

    /// Fetch an environment variable of a component.
    pub async fn get_matchmaker_component_env(
        &self,
        component: &str,
        key: &str,
    ) -> Result<ApiResponse<MatchmakerEnvEntry>> {
        self.get_json(&[AOM, "component", component, "env", key], &[])
            .await
    }

    /// List the environment variables of a component.
    pub async fn list_matchmaker_component_envs(
        &self,
        component: &str,
    ) -> Result<ApiResponse<MatchmakerEnvList>> {
        self.get_json(&[AOM, "component", component, "envs"], &[])
            .await
    }
}

// Matchmakers.
impl EdgegapClient {
    /// Create a matchmaker.
    pub async fn create_matchmaker(&self, name: &str) -> Result<ApiResponse<Matchmaker>> {
        let body = MatchmakerName { name };
        self.send_json(Method::POST, &[AOM, "matchmaker"], Some(&body), &[])
            .await
    }

    /// Rename a matchmaker.
    pub async fn update_matchmaker(
        &self,
        name: &str,
        new_name: &str,
    ) -> Result<ApiResponse<Matchmaker>> {
        let body = MatchmakerName { name: new_name };
        self.send_json(Method::PATCH, &[AOM, "matchmaker", name], Some(&body), &[])
            .await
    }

    /// Delete a matchmaker.
    pub async fn delete_matchmaker(&self, name: &str) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &[AOM, "matchmaker", name])
            .await
    }

    /// Fetch a matchmaker.
    pub async fn get_matchmaker(&self, name: &str) -> Result<ApiResponse<Matchmaker>> {
        self.get_json(&[AOM, "matchmaker", name], &[]).await
    }

    /// List the caller's matchmakers.
    pub async fn list_matchmakers(&self) -> Result<ApiResponse<MatchmakerList>> {
        self.get_json(&[AOM, "matchmakers"], &[]).await
    }
}

// Releases.
impl EdgegapClient {
    /// Create a release of a matchmaker.
    pub async fn create_matchmaker_release(
        &self,
        matchmaker: &str,
        release: &MatchmakerReleaseCreate,
    ) -> Result<ApiResponse<MatchmakerRelease>> {
        self.send_json(
            Method::POST,
            &[AOM, "matchmaker", matchmaker, "release"],
            Some(release),
            &[],
        )
        .await
    }

    /// Update a release, identified by `release.version`.
    pub async fn update_matchmaker_release(
        &self,
        matchmaker: &str,
        release: &MatchmakerReleaseCreate,
    ) -> Result<ApiResponse<MatchmakerRelease>> {
        self.send_json(
            Method::PATCH,
            &[AOM, "matchmaker", matchmaker, "release"],
            Some(release),
            &[],
        )
        .await
    }

    /// Delete a release.
    pub async fn delete_matchmaker_release(
        &self,
        matchmaker: &str,
        version: &str,
    ) -> Result<ApiResponse<Value>> {
        self.send_empty(
            Method::DELETE,
            &[AOM, "matchmaker", matchmaker, "release", version],
        )
        .await
    }

    /// Fetch a release.
    pub async fn get_matchmaker_release(
        &self,
        matchmaker: &str,
        version: &str,
    ) -> Result<ApiResponse<MatchmakerRelease>> {
        self.get_json(&[AOM, "matchmaker", matchmaker, "release", version], &[])
            .await
    }

    /// List the releases of a matchmaker.
    pub async fn list_matchmaker_releases(
        &self,
        matchmaker: &str,
    ) -> Result<ApiResponse<MatchmakerReleaseList>> {
        self.get_json(&[AOM, "matchmaker", matchmaker, "release"], &[])
            .await
    }

    /// Create a managed release.
    pub async fn create_matchmaker_managed_release(
        &self,
        matchmaker: &str,
        release: &MatchmakerManagedReleaseCreate,
    ) -> Result<ApiResponse<MatchmakerManagedRelease>> {
        self.send_json(
            Method::POST,
            &[AOM, "matchmaker", matchmaker, "release", "managed"],
            Some(release),
            &[],
        )
        .await
    }

    /// Update a managed release.
    pub async fn update_matchmaker_managed_release(
        &self,
        matchmaker: &str,
        version: &str,
        release: &MatchmakerManagedReleaseCreate,
    ) -> Result<ApiResponse<MatchmakerManagedRelease>> {
        self.send_json(
            Method::PATCH,
            &[AOM, "matchmaker", matchmaker, "release", "managed", version],
            Some(release),
            &[],
        )
        .await
    }

    /// Delete a managed release.
    pub async fn delete_matchmaker_managed_release(
        &self,
        matchmaker: &str,
        version: &str,
    ) -> Result<ApiResponse<Value>> {
        self.send_empty(
            Method::DELETE,
            &[AOM, "matchmaker", matchmaker, "release", "managed", version],
        )
        .await
    }

    /// Fetch a managed release.
    pub async fn get_matchmaker_managed_release(
        &self,
        matchmaker: &str,
        version: &str,
    ) -> Result<ApiResponse<MatchmakerManagedRelease>> {
        self.get_json(
            &[AOM, "matchmaker", matchmaker, "release", "managed", version],
            &[],
        )
        .await
    }
}

// Release configurations.
impl EdgegapClient {
    /// Create a release configuration.
    pub async fn create_release_config(
        &self,
        config: &MatchmakerReleaseConfig,
    ) -> Result<ApiResponse<MatchmakerReleaseConfig>> {
        self.send_json(Method::POST, &[AOM, "release", "config"], Some(config), &[])
            .await
    }

    /// Update a release configuration.
    pub async fn update_release_config(
        &self,
        name: &str,
        config: &MatchmakerReleaseConfig,
    ) -> Result<ApiResponse<MatchmakerReleaseConfig>> {
        self.send_json(
            Method::PATCH,
            &[AOM, "release", "config", name],
            Some(config),
            &[],
        )
        .await
    }

    /// Delete a release configuration.
    pub async fn delete_release_config(&self, name: &str) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &[AOM, "release", "config", name])
            .await
    }

    /// Fetch a release configuration.
    pub async fn get_release_config(
        &self,
        name: &str,
    ) -> Result<ApiResponse<MatchmakerReleaseConfig>> {
        self.get_json(&[AOM, "release", "config", name], &[]).await
    }

    /// List the caller's release configurations.
    pub async fn list_release_configs(&self) -> Result<ApiResponse<MatchmakerReleaseConfigList>> {
        self.get_json(&[AOM, "release", "config"], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client_for;
    use crate::models::matchmaker::{
        MatchmakerEnv, MatchmakerManagedReleaseCreate, MatchmakerReleaseConfig,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_matchmaker_sends_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/aom/matchmaker"))
            .and(body_json(json!({"name": "ranked"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "ranked",
                "url": "https://ranked.mm.edgegap.net"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).create_matchmaker("ranked").await.unwrap();
        assert_eq!(response.data().url, "https://ranked.mm.edgegap.net");
    }

    #[tokio::test]
    async fn rename_matchmaker_sends_new_name() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v1/aom/matchmaker/ranked"))
            .and(body_json(json!({"name": "casual"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "casual"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .update_matchmaker("ranked", "casual")
            .await
            .unwrap();
        assert_eq!(response.data().name, "casual");
    }

    #[tokio::test]
    async fn update_component_env_addresses_key() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v1/aom/component/director/env/MAX_PLAYERS"))
            .and(body_json(json!({"key": "MAX_PLAYERS", "value": "16"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"key": "MAX_PLAYERS", "value": "16"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .update_matchmaker_component_env("director", &MatchmakerEnv::new("MAX_PLAYERS", "16"))
            .await
            .unwrap();
        assert_eq!(response.data().value, "16");
    }

    #[tokio::test]
    async fn managed_release_paths() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v1/aom/matchmaker/ranked/release/managed/v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "version": "v2",
                "release_config_name": "ranked-config"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/aom/matchmaker/ranked/release/managed/v2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let release = MatchmakerManagedReleaseCreate {
            version: "v2".into(),
            release_config_name: "ranked-config".into(),
        };
        let updated = client
            .update_matchmaker_managed_release("ranked", "v2", &release)
            .await
            .unwrap();
        assert_eq!(updated.data().release_config_name, "ranked-config");

        let deleted = client
            .delete_matchmaker_managed_release("ranked", "v2")
            .await
            .unwrap();
        assert!(deleted.data().is_null());
    }

    #[tokio::test]
    async fn release_config_create_and_update() {
        let server = MockServer::start().await;
        let config = MatchmakerReleaseConfig::new("ranked-config", "{}");
        Mock::given(method("POST"))
            .and(path("/v1/aom/release/config"))
            .and(body_json(json!({"name": "ranked-config", "configuration": "{}"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"name": "ranked-config", "configuration": "{}"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/v1/aom/release/config/ranked-config"))
            .and(body_json(json!({"name": "ranked-config", "configuration": "{}"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "ranked-config", "configuration": "{}"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.create_release_config(&config).await.unwrap();
        let updated = client
            .update_release_config("ranked-config", &config)
            .await
            .unwrap();
        assert_eq!(updated.data().name, "ranked-config");
    }

    #[tokio::test]
    async fn list_components() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/aom/components"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "data": [{"name": "director", "repository": "docker.io", "image": "d", "tag": "1"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .list_matchmaker_components()
            .await
            .unwrap();
        assert_eq!(response.data().data[0].name, "director");
    }
}
