//! Datacenter vs. residential classification.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use super::keywords::{matches_any, CLOUD_PROVIDERS, HOME_ISPS};
use crate::lookup::RawLookupRecord;

/// Kind of network an address belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IpType {
    /// Hosting/cloud infrastructure (IDC)
    #[serde(alias = "IDC机房IP")]
    Datacenter,
    /// Residential broadband or mobile subscriber line
    #[serde(alias = "家庭宽带IP")]
    Residential,
}

impl IpType {
    pub fn label(&self) -> &'static str {
        match self {
            IpType::Datacenter => "Datacenter (IDC) IP",
            IpType::Residential => "Residential broadband IP",
        }
    }
}

/// Outcome of [`determine_ip_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub ip_type: IpType,
    pub is_cloud_provider: bool,
}

impl ClassificationResult {
    /// Classification reported when no lookup record is available.
    pub fn fallback() -> Self {
        ClassificationResult {
            ip_type: IpType::Datacenter,
            is_cloud_provider: false,
        }
    }
}

/// True when the ISP or organization name contains a cloud-provider keyword.
pub fn is_cloud_provider(record: &RawLookupRecord) -> bool {
    matches_any(CLOUD_PROVIDERS, &record.isp, &record.org)
}

/// Classifies the record's network.
///
/// Cloud keywords or the hosting flag win first; then home-ISP keywords or the
/// mobile flag mean residential; everything else is treated as a datacenter.
pub fn determine_ip_type(record: &RawLookupRecord) -> ClassificationResult {
    let is_cloud = is_cloud_provider(record);

    let ip_type = if is_cloud || record.hosting {
        IpType::Datacenter
    } else if matches_any(HOME_ISPS, &record.isp, &record.org) || record.mobile {
        IpType::Residential
    } else {
        IpType::Datacenter
    };

    ClassificationResult {
        ip_type,
        is_cloud_provider: is_cloud,
    }
}
