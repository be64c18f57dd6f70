use reqwest::Method;
use serde_json::Value;

use crate::client::EdgegapClient;
use crate::models::applications::{
    Application, ApplicationAcl, ApplicationAclCreateResponse, ApplicationAclEntries,
    ApplicationCreate, ApplicationList, ApplicationVersion, ApplicationVersionCreateResponse,
    ApplicationVersionList, ApplicationVersionUpdate,
};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Create an application. Versions are added separately.
    pub async fn create_application(
        &self,
        application: &ApplicationCreate,
    ) -> Result<ApiResponse<Application>> {
        self.send_json(Method::POST, &["app"], Some(application), &[])
            .await
    }

    /// Update an application.
    pub async fn update_application(
        &self,
        name: &str,
        application: &ApplicationCreate,
    ) -> Result<ApiResponse<Application>> {
        self.send_json(Method::PATCH, &["app", name], Some(application), &[])
            .await
    }

    /// Delete an application and all of its versions.
    pub async fn delete_application(&self, name: &str) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &["app", name]).await
    }

    /// Fetch an application.
    pub async fn get_application(&self, name: &str) -> Result<ApiResponse<Application>> {
        self.get_json(&["app", name], &[]).await
    }

    /// List the caller's applications.
    pub async fn list_applications(&self) -> Result<ApiResponse<ApplicationList>> {
        self.get_json(&["apps"], &[]).await
    }

    /// Create a version of an application.
    pub async fn create_application_version(
        &self,
        app: &str,
        version: &ApplicationVersion,
    ) -> Result<ApiResponse<ApplicationVersionCreateResponse>> {
        self.send_json(Method::POST, &["app", app, "version"], Some(version), &[])
            .await
    }

    /// Update a version; only fields set on `update` are sent.
    pub async fn update_application_version(
        &self,
        app: &str,
        version_name: &str,
        update: &ApplicationVersionUpdate,
    ) -> Result<ApiResponse<ApplicationVersionCreateResponse>> {
        self.send_json(
            Method::PATCH,
            &["app", app, "version", version_name],
            Some(update),
            &[],
        )
        .await
    }

    /// Delete a version.
    pub async fn delete_application_version(
        &self,
        app: &str,
        version: &str,
    ) -> Result<ApiResponse<Value>> {
        self.send_empty(Method::DELETE, &["app", app, "version", version])
            .await
    }

    /// Fetch a version.
    pub async fn get_application_version(
        &self,
        app: &str,
        version: &str,
    ) -> Result<ApiResponse<ApplicationVersion>> {
        self.get_json(&["app", app, "version", version], &[]).await
    }

    /// List the versions of an application.
    pub async fn list_application_versions(
        &self,
        app: &str,
    ) -> Result<ApiResponse<ApplicationVersionList>> {
        self.get_json(&["app", app, "versions"], &[]).await
    }

    /// Add an ACL entry to a version.
    pub async fn create_acl_entry(
        &self,
        app: &str,
        version: &str,
        entry: &ApplicationAcl,
    ) -> Result<ApiResponse<ApplicationAclCreateResponse>> {
        self.send_json(
            Method::POST,
            &["app", app, "version", version, "whitelist"],
            Some(entry),
            &[],
        )
        .await
    }

    /// List the ACL entries of a version.
    pub async fn list_acl_entries(
        &self,
        app: &str,
        version: &str,
    ) -> Result<ApiResponse<ApplicationAclEntries>> {
        self.get_json(&["app", app, "version", version, "whitelist"], &[])
            .await
    }

    /// Fetch an ACL entry.
    pub async fn get_acl_entry(
        &self,
        app: &str,
        version: &str,
        entry_id: &str,
    ) -> Result<ApiResponse<ApplicationAcl>> {
        self.get_json(&["app", app, "version", version, "whitelist", entry_id], &[])
            .await
    }

    /// Remove an ACL entry.
    pub async fn delete_acl_entry(
        &self,
        app: &str,
        version: &str,
        entry_id: &str,
    ) -> Result<ApiResponse<ApplicationAclCreateResponse>> {
        self.send_empty(
            Method::DELETE,
            &["app", app, "version", version, "whitelist", entry_id],
        )
        .await
    }
}
