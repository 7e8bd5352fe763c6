//! Client address detection from proxy headers.

use std::net::{IpAddr, Ipv4Addr};

use axum::http::HeaderMap;

use crate::config::CLIENT_IP_HEADERS;
use crate::ip::{is_public_ipv4, unwrap_ipv6_mapped_ipv4};

/// Turns one header value or peer address into a public IPv4 address, if it
/// is one.
fn usable(candidate: &str) -> Option<Ipv4Addr> {
    let candidate = candidate.trim();
    let literal = unwrap_ipv6_mapped_ipv4(candidate).unwrap_or_else(|| candidate.to_string());
    literal
        .parse::<Ipv4Addr>()
        .ok()
        .filter(|addr| is_public_ipv4(*addr))
}

fn header_values<'a>(headers: &'a HeaderMap, name: &'a str) -> impl Iterator<Item = &'a str> {
    headers
        .get_all(name)
        .into_iter()
        .filter_map(|value| value.to_str().ok())
}

/// Picks the caller's public IPv4 address.
///
/// Candidates are tried in order: `trusted_header`, then every entry of the
/// [`CLIENT_IP_HEADERS`] (comma-separated lists read left to right, across
/// repeated headers), then the TCP peer. The first public IPv4 address wins.
pub fn detect_client_ip(
    headers: &HeaderMap,
    peer: Option<IpAddr>,
    trusted_header: &str,
) -> Option<Ipv4Addr> {
    let proxied = CLIENT_IP_HEADERS
        .iter()
        .flat_map(|name| header_values(headers, name))
        .flat_map(|value| value.split(','));

    header_values(headers, trusted_header)
        .chain(proxied)
        .find_map(usable)
        .or_else(|| {
            peer.and_then(|addr| match addr {
                IpAddr::V4(v4) => Some(v4).filter(|a| is_public_ipv4(*a)),
                IpAddr::V6(v6) => v6.to_ipv4_mapped().filter(|a| is_public_ipv4(*a)),
            })
        })
}
