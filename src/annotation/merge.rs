//! Applying an annotation to an engine profile.

use super::types::ManualAnnotation;
use crate::profile::{country_flag, DisplayProfile, OwnerKind, OwnerLink};

/// Flag override: a two-letter code goes through the flag table, anything
/// else (usually a glyph) is used as-is.
fn resolve_flag(value: &str) -> String {
    let value = value.trim();
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        country_flag(&value.to_ascii_uppercase()).to_string()
    } else {
        value.to_string()
    }
}

/// Overwrites the profile fields the annotation sets.
///
/// A manual risk score recomputes tier and color; a manual network type
/// replaces the classification's type but leaves the cloud-provider flag.
pub fn apply_annotation(profile: &mut DisplayProfile, annotation: &ManualAnnotation) {
    if let Some(location) = &annotation.location_info {
        profile.location_info = location.clone();
    }
    if let Some(asn) = &annotation.asn_info {
        profile.asn_info = asn.clone();
    }
    if let Some(owner) = &annotation.asn_owner {
        profile.asn_owner = OwnerLink::new(OwnerKind::Isp, owner);
    }
    if let Some(org) = &annotation.organization {
        profile.organization = OwnerLink::new(OwnerKind::Org, org);
    }
    if let Some(longitude) = annotation.longitude {
        profile.longitude = Some(longitude);
    }
    if let Some(latitude) = annotation.latitude {
        profile.latitude = Some(latitude);
    }
    if let Some(ip_type) = annotation.ip_type {
        profile.classification.ip_type = ip_type;
    }
    if let Some(score) = annotation.risk_score {
        profile.risk.set_score(score);
    }
    if let Some(native) = annotation.native_ip {
        profile.native_ip = native;
    }
    if let Some(bucket) = annotation.shared_users {
        profile.risk.shared_users = bucket;
    }
    if let Some(rdns) = &annotation.rdns {
        profile.rdns = rdns.clone();
    }
    if let Some(flag) = &annotation.country_flag {
        profile.country_flag = resolve_flag(flag);
    }
}
