use reqwest::Method;
use validator::Validate;

use crate::client::EdgegapClient;
use crate::models::ip::{IpBulkInformation, IpBulkLookup, IpInformation, PublicIp};
use crate::{ApiResponse, Result};

impl EdgegapClient {
    /// Return the public IP the API sees for the caller.
    pub async fn get_public_ip(&self) -> Result<ApiResponse<PublicIp>> {
        self.get_json(&["ip"], &[]).await
    }

    /// Look up the location of an IP address.
    pub async fn lookup_ip(&self, ip: &str) -> Result<ApiResponse<IpInformation>> {
        self.get_json(&["ip", ip, "lookup"], &[]).await
    }

    /// Look up up to 20 addresses at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`](crate::Error::ValidationError)
    /// without sending a request when the address count is outside
    /// `1..=`[`MAX_BULK_ADDRESSES`](crate::models::ip::MAX_BULK_ADDRESSES).
    pub async fn lookup_ips(
        &self,
        lookup: &IpBulkLookup,
    ) -> Result<ApiResponse<IpBulkInformation>> {
        lookup.validate()?;
        self.send_json(Method::POST, &["ips", "lookup"], Some(lookup), &[])
            .await
    }
}
