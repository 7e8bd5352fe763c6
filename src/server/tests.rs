use super::*;
use crate::annotation::{AnnotationStore, ManualAnnotation};
use crate::config::Config;
use crate::error_handling::LookupErrorKind;
use crate::initialization::{init_client, init_resolver};

fn test_state() -> AppState {
    let config = Config::default();
    let client = init_client(&config).unwrap();
    let mut annotations = AnnotationStore::default();
    annotations
        .insert("8.8.8.8", ManualAnnotation::default())
        .unwrap();
    AppState::new(config, client, init_resolver().unwrap(), annotations)
}

#[tokio::test]
async fn test_status_snapshot_counts() {
    let state = test_state();
    state.stats.increment_lookups();
    state.stats.increment_lookups();
    state.stats.increment_defaults_used();
    state.stats.increment_error(LookupErrorKind::HttpTimeout);

    let snapshot = status_snapshot(&state);
    assert_eq!(snapshot.lookups, 2);
    assert_eq!(snapshot.defaults_used, 1);
    assert_eq!(snapshot.annotated, 0);
    assert_eq!(snapshot.annotations_loaded, 1);
    assert_eq!(snapshot.errors.total, 1);
    assert_eq!(snapshot.errors.by_kind["http_timeout"], 1);
    assert_eq!(snapshot.errors.by_kind["lookup_status"], 0);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["errors"]["by_kind"]["http_timeout"], 1);
}

#[tokio::test]
async fn test_render_metrics() {
    let state = test_state();
    state.stats.increment_lookups();
    state.stats.increment_annotated();
    state.stats.increment_error(LookupErrorKind::NoPublicAddress);

    let metrics = render_metrics(&state);
    assert!(metrics.contains("# TYPE ipyard_lookups_total counter"));
    assert!(metrics.contains("\nipyard_lookups_total 1\n"));
    assert!(metrics.contains("\nipyard_annotated_total 1\n"));
    assert!(metrics.contains("\nipyard_annotations_loaded 1\n"));
    assert!(metrics.contains("ipyard_errors_total{kind=\"no_public_address\"} 1\n"));
    assert!(metrics.contains("ipyard_errors_total{kind=\"http_timeout\"} 0\n"));
}

#[tokio::test]
async fn test_start_server_reports_bind_failure() {
    // Hold the port so the second bind fails
    let holder = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = holder.local_addr().unwrap();

    let err = start_server(addr, test_state(), CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to bind server"));
}

#[tokio::test]
async fn test_serve_stops_on_cancel() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(serve(listener, test_state(), cancel.clone()));

    cancel.cancel();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .expect("server should stop after cancel")
        .expect("server task should not panic");
    assert!(result.is_ok());
}
