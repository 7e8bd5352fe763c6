//! Server response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::app::LookupOutcome;
use crate::profile::DisplayProfile;
use crate::router::TargetSource;

/// Body of a successful profile request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetResponse {
    pub target_ip: String,
    pub source: TargetSource,
    pub used_defaults: bool,
    pub annotated: bool,
    pub profile: DisplayProfile,
}

impl TargetResponse {
    pub fn new(target_ip: String, source: TargetSource, outcome: LookupOutcome) -> Self {
        TargetResponse {
            target_ip,
            source,
            used_defaults: outcome.used_defaults,
            annotated: outcome.annotated,
            profile: outcome.profile,
        }
    }
}

/// Body of a 503 when no target address could be determined.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON response for `/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub lookups: usize,
    pub defaults_used: usize,
    pub annotated: usize,
    pub annotations_loaded: usize,
    pub errors: ErrorCounts,
}

#[derive(Debug, Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    /// Keyed by `LookupErrorKind::as_str`, zero counts included
    pub by_kind: BTreeMap<&'static str, usize>,
}
