//! Assembly of the final display profile.

use serde::Serialize;

use super::classify::{determine_ip_type, ClassificationResult};
use super::links::{OwnerKind, OwnerLink};
use super::location::{asn_info, country_flag, format_location};
use super::native::{check_native_ip, NativeIpStatus};
use super::risk::{calculate_risk_score, RiskProfile};
use super::shared::shared_users_bucket;
use crate::ip::{is_reserved_prefix, IpAddress};
use crate::lookup::RawLookupRecord;

/// Everything the presentation layer shows for one address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProfile {
    pub ip: String,
    pub ip_number: i64,
    pub location_info: String,
    pub country_flag: String,
    pub asn_info: String,
    pub asn_owner: Option<OwnerLink>,
    pub organization: Option<OwnerLink>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub timezone: String,
    pub rdns: String,
    pub classification: ClassificationResult,
    pub risk: RiskProfile,
    pub native_ip: NativeIpStatus,
    /// Textual private-range hint, see [`is_reserved_prefix`]
    pub reserved_prefix: bool,
}

/// Derives the full profile from a successful lookup record.
///
/// The caller is responsible for checking `record.status`; this function
/// reads every field as-is and never fails.
pub fn build_display_profile(ip: &IpAddress, record: &RawLookupRecord) -> DisplayProfile {
    let number = ip.number();
    let classification = determine_ip_type(record);
    let score = calculate_risk_score(classification.ip_type, record, number);

    DisplayProfile {
        ip: ip.as_str().to_string(),
        ip_number: number.value(),
        location_info: format_location(record),
        country_flag: country_flag(&record.country_code).to_string(),
        asn_info: asn_info(record),
        asn_owner: OwnerLink::new(OwnerKind::Isp, &record.isp),
        organization: OwnerLink::new(OwnerKind::Org, &record.org),
        longitude: record.lon,
        latitude: record.lat,
        timezone: record.timezone.clone(),
        rdns: record.reverse_dns.clone(),
        classification,
        risk: RiskProfile::from_score(score, shared_users_bucket(number)),
        native_ip: check_native_ip(record),
        reserved_prefix: is_reserved_prefix(ip.as_str()),
    }
}

/// Profile reported when the lookup failed or returned a non-success status.
pub fn fallback_display_profile(ip: &IpAddress) -> DisplayProfile {
    DisplayProfile {
        ip: ip.as_str().to_string(),
        ip_number: ip.number().value(),
        location_info: String::new(),
        country_flag: String::new(),
        asn_info: String::new(),
        asn_owner: None,
        organization: None,
        longitude: None,
        latitude: None,
        timezone: String::new(),
        rdns: String::new(),
        classification: ClassificationResult::fallback(),
        risk: RiskProfile::fallback(),
        native_ip: NativeIpStatus::Native,
        reserved_prefix: is_reserved_prefix(ip.as_str()),
    }
}
