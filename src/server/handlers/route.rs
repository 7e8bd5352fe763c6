//! Profile handler: every path that is not a monitoring endpoint.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};

use crate::app::{profile_for_ip, AppState};
use crate::router::{resolve_target, RouteDecision};
use crate::server::types::{ErrorResponse, TargetResponse};

/// Routes the request and answers with a domain, a 204, or a profile.
pub async fn route_handler(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let peer = connect_info.map(|ConnectInfo(addr)| addr.ip());

    match resolve_target(&state, uri.path(), &headers, peer).await {
        Ok(RouteDecision::DnsDomain(domain)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            domain,
        )
            .into_response(),
        Ok(RouteDecision::NoContent) => StatusCode::NO_CONTENT.into_response(),
        Ok(RouteDecision::Target { ip, source }) => {
            let target_ip = ip.to_string();
            info!("Profiling {} ({:?}) for {}", target_ip, source, uri.path());
            let outcome = profile_for_ip(&state, &target_ip).await;
            (
                StatusCode::OK,
                Json(TargetResponse::new(target_ip, source, outcome)),
            )
                .into_response()
        }
        Err(e) => {
            warn!("Cannot route {}: {:#}", uri.path(), anyhow::Error::from(e));
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "Unable to determine an IP address to look up".to_string(),
                }),
            )
                .into_response()
        }
    }
}
