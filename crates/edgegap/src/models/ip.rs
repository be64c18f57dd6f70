//! IP lookup models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Maximum number of addresses per bulk lookup.
pub const MAX_BULK_ADDRESSES: usize = 20;

/// `MAX_BULK_ADDRESSES` typed for the `validator` derive, which requires `u64`.
const MAX_BULK_ADDRESSES_U64: u64 = MAX_BULK_ADDRESSES as u64;

/// Public IP of the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicIp {
    /// Public IP address.
    #[serde(rename = "public_ip")]
    pub ip: String,
}

/// Code and name of a continent or country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpLocationMeta {
    /// ISO code.
    #[serde(default)]
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Location of an IP address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IpLocation {
    /// Continent.
    #[serde(default)]
    pub continent: IpLocationMeta,
    /// Country.
    #[serde(default)]
    pub country: IpLocationMeta,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
}

/// Lookup result for one IP address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IpInformation {
    /// Address family (`ipv4`, `ipv6`).
    #[serde(default, rename = "type")]
    pub ip_type: String,
    /// Address.
    #[serde(default)]
    pub ip_address: String,
    /// Location.
    #[serde(default)]
    pub location: IpLocation,
}

/// Body of a bulk lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct IpBulkLookup {
    /// Addresses to look up.
    #[validate(length(min = 1, max = MAX_BULK_ADDRESSES_U64))]
    pub addresses: Vec<String>,
}

impl IpBulkLookup {
    /// Create a bulk lookup body.
    #[must_use]
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }
}

/// Results of a bulk lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IpBulkInformation {
    /// One entry per resolved address.
    #[serde(default)]
    pub addresses: Vec<IpInformation>,
}
