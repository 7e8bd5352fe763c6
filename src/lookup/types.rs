//! Lookup API data structures.

use serde::{Deserialize, Deserializer, Serialize};

/// One record returned by the ip-api.com compatible lookup API.
///
/// Field names follow the API's JSON keys. Every string and flag is
/// null-coalesced on decode (`null` or a missing key becomes `""`/`false`),
/// so downstream code never has to deal with absent values. Only the
/// coordinates stay optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLookupRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub isp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub org: String,
    /// e.g. `"AS13335 Cloudflare, Inc."`
    #[serde(rename = "as", default, deserialize_with = "null_as_default")]
    pub as_number: String,
    #[serde(rename = "asname", default, deserialize_with = "null_as_default")]
    pub as_name: String,
    #[serde(rename = "reverse", default, deserialize_with = "null_as_default")]
    pub reverse_dns: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxy: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hosting: bool,
    #[serde(rename = "query", default, deserialize_with = "null_as_default")]
    pub query_ip: String,
}

impl RawLookupRecord {
    pub fn is_success(&self) -> bool {
        self.status == crate::config::LOOKUP_STATUS_SUCCESS
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
