//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use strum::IntoEnumIterator;

use crate::app::AppState;
use crate::error_handling::LookupErrorKind;
use crate::server::types::{ErrorCounts, StatusResponse};

/// Builds the `/status` body from the shared counters.
pub fn status_snapshot(state: &AppState) -> StatusResponse {
    let stats = &state.stats;
    StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        lookups: stats.lookups(),
        defaults_used: stats.defaults_used(),
        annotated: stats.annotated(),
        annotations_loaded: state.annotations.len(),
        errors: ErrorCounts {
            total: stats.total_errors(),
            by_kind: LookupErrorKind::iter()
                .map(|kind| (kind.as_str(), stats.get_error_count(kind)))
                .collect(),
        },
    }
}

/// JSON status endpoint
pub async fn status_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(status_snapshot(&state))).into_response()
}
