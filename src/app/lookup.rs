//! Per-address profiling: fetch, score, annotate.

use log::{debug, warn};
use serde::Serialize;

use super::context::AppState;
use crate::annotation::apply_annotation;
use crate::error_handling::LookupErrorKind;
use crate::ip::IpAddress;
use crate::lookup::fetch_record;
use crate::profile::{build_display_profile, fallback_display_profile, DisplayProfile};

/// Profile plus how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutcome {
    pub profile: DisplayProfile,
    /// The lookup failed and the fallback values were used
    pub used_defaults: bool,
    /// A manual annotation was merged in
    pub annotated: bool,
}

/// Profiles `ip`.
///
/// Never fails: a malformed address is profiled with the zero seed, and a
/// failed or declined lookup yields the fallback profile with
/// `used_defaults` set. Each call fetches afresh.
pub async fn profile_for_ip(state: &AppState, ip: &str) -> LookupOutcome {
    let stats = &state.stats;
    stats.increment_lookups();

    let address = IpAddress::parse(ip).unwrap_or_else(|e| {
        warn!("{}; using the zero seed", e);
        stats.increment_error(LookupErrorKind::InvalidAddress);
        IpAddress::unparsed(ip)
    });

    let (mut profile, used_defaults) = match fetch_record(&state.client, &state.config, ip).await {
        Ok(record) => (build_display_profile(&address, &record), false),
        Err(e) => {
            warn!("Lookup for {} failed, using defaults: {}", ip, e);
            stats.increment_error(e.kind());
            stats.increment_defaults_used();
            (fallback_display_profile(&address), true)
        }
    };

    let annotated = match state.annotations.get(address.as_str()) {
        Some(annotation) => {
            debug!("Applying manual annotation for {}", ip);
            apply_annotation(&mut profile, annotation);
            stats.increment_annotated();
            true
        }
        None => false,
    };

    LookupOutcome {
        profile,
        used_defaults,
        annotated,
    }
}
