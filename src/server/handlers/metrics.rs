//! Prometheus metrics handler.

use std::fmt::Write;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use crate::app::AppState;
use crate::error_handling::LookupErrorKind;

/// Renders the counters in Prometheus text exposition format.
pub fn render_metrics(state: &AppState) -> String {
    let stats = &state.stats;

    let mut metrics = format!(
        r#"# HELP ipyard_uptime_seconds Seconds since the server started
# TYPE ipyard_uptime_seconds gauge
ipyard_uptime_seconds {}

# HELP ipyard_lookups_total Number of address profiles produced
# TYPE ipyard_lookups_total counter
ipyard_lookups_total {}

# HELP ipyard_defaults_used_total Profiles that fell back to default values
# TYPE ipyard_defaults_used_total counter
ipyard_defaults_used_total {}

# HELP ipyard_annotated_total Profiles with a manual annotation applied
# TYPE ipyard_annotated_total counter
ipyard_annotated_total {}

# HELP ipyard_annotations_loaded Number of manual annotations loaded
# TYPE ipyard_annotations_loaded gauge
ipyard_annotations_loaded {}

# HELP ipyard_errors_total Lookup errors by kind
# TYPE ipyard_errors_total counter
"#,
        state.start_time.elapsed().as_secs_f64(),
        stats.lookups(),
        stats.defaults_used(),
        stats.annotated(),
        state.annotations.len(),
    );

    for kind in LookupErrorKind::iter() {
        // Writing to a String cannot fail
        let _ = writeln!(
            metrics,
            "ipyard_errors_total{{kind=\"{}\"}} {}",
            kind.as_str(),
            stats.get_error_count(kind)
        );
    }

    metrics
}

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        render_metrics(&state),
    )
        .into_response()
}
