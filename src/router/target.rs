//! Route resolution: path, headers, DNS and echo-service fallback.

use std::net::{IpAddr, Ipv4Addr};

use axum::http::HeaderMap;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, info, warn};
use serde::Serialize;

use super::client_ip::detect_client_ip;
use super::path::{parse_route, RouteCandidate};
use crate::app::AppState;
use crate::error_handling::{LookupErrorKind, RouterError};
use crate::lookup::discover_public_ip;

/// Where the target address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// IPv4 literal in the path
    Path,
    /// DNS answer for a hostname in the path
    Hostname,
    /// Proxy header or TCP peer
    Client,
    /// Echo service
    EchoService,
}

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Answer with the configured DNS domain as text
    DnsDomain(String),
    /// Answer with an empty 204
    NoContent,
    /// Profile this address
    Target { ip: Ipv4Addr, source: TargetSource },
}

/// First IPv4 answer for `host`, or `None` when resolution fails.
pub async fn resolve_hostname(resolver: &TokioAsyncResolver, host: &str) -> Option<Ipv4Addr> {
    match resolver.lookup_ip(host).await {
        Ok(lookup) => lookup.iter().find_map(|addr| match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        }),
        Err(e) => {
            debug!("DNS lookup for {} failed: {}", host, e);
            None
        }
    }
}

/// Decides what a request is asking for.
///
/// `getdns` and `peer` short-circuit. A literal wins as-is; a hostname is
/// resolved through DNS. Anything else (including a hostname without an
/// IPv4 answer) falls through to the caller's address and finally to the
/// echo services.
///
/// # Errors
///
/// Returns `RouterError::Unresolvable` when every source came up empty.
pub async fn resolve_target(
    state: &AppState,
    path: &str,
    headers: &HeaderMap,
    peer: Option<IpAddr>,
) -> Result<RouteDecision, RouterError> {
    match parse_route(path) {
        RouteCandidate::GetDns => return Ok(RouteDecision::DnsDomain(state.config.dns_domain.clone())),
        RouteCandidate::Peer => return Ok(RouteDecision::NoContent),
        RouteCandidate::Literal(ip) => {
            return Ok(RouteDecision::Target {
                ip,
                source: TargetSource::Path,
            })
        }
        RouteCandidate::Hostname(host) => {
            if let Some(ip) = resolve_hostname(&state.resolver, &host).await {
                debug!("Resolved {} to {}", host, ip);
                return Ok(RouteDecision::Target {
                    ip,
                    source: TargetSource::Hostname,
                });
            }
            warn!("Hostname {} has no IPv4 answer, using the client address", host);
        }
        RouteCandidate::Invalid(candidate) => {
            warn!("Ignoring invalid route target {:?}", candidate);
        }
        RouteCandidate::Absent => {}
    }

    if let Some(ip) = detect_client_ip(headers, peer, &state.config.trusted_proxy_header) {
        return Ok(RouteDecision::Target {
            ip,
            source: TargetSource::Client,
        });
    }

    info!("No public client address, asking echo services");
    match discover_public_ip(&state.client, &state.config.ip_echo_services).await {
        Ok(ip) => Ok(RouteDecision::Target {
            ip,
            source: TargetSource::EchoService,
        }),
        Err(e) => {
            state.stats.increment_error(LookupErrorKind::NoPublicAddress);
            Err(RouterError::Unresolvable(e))
        }
    }
}
