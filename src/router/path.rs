//! Route candidates extracted from the request path.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::ip::unwrap_ipv6_mapped_ipv4;

/// First path segment that introduces a candidate (`/ip/<candidate>`).
const ROUTE_PREFIX: &str = "ip";
const GETDNS_SEGMENT: &str = "getdns";
const PEER_SEGMENT: &str = "peer";

static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$").expect("static regex is valid")
});

/// What the path asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteCandidate {
    /// No `/ip/<candidate>` segment
    Absent,
    /// `/ip/getdns`
    GetDns,
    /// `/ip/peer`
    Peer,
    /// `/ip/<IPv4 literal>`, already unwrapped from `::ffff:` form
    Literal(Ipv4Addr),
    /// `/ip/<hostname>`
    Hostname(String),
    /// A candidate segment that is none of the above
    Invalid(String),
}

/// Returns true for names like `example.com` or `a-b.c.example.org`.
pub fn is_hostname(s: &str) -> bool {
    HOSTNAME.is_match(s)
}

/// Classifies the request path.
///
/// Leading and trailing slashes are ignored. The candidate is the second
/// segment when the first is `ip` (any case); further segments are ignored.
pub fn parse_route(path: &str) -> RouteCandidate {
    let mut segments = path.trim_matches('/').split('/');

    let prefix = segments.next().unwrap_or_default();
    if !prefix.eq_ignore_ascii_case(ROUTE_PREFIX) {
        return RouteCandidate::Absent;
    }
    let Some(candidate) = segments.next() else {
        return RouteCandidate::Absent;
    };

    let candidate = candidate.trim();
    if candidate.is_empty() {
        return RouteCandidate::Absent;
    }
    if candidate.eq_ignore_ascii_case(GETDNS_SEGMENT) {
        return RouteCandidate::GetDns;
    }
    if candidate.eq_ignore_ascii_case(PEER_SEGMENT) {
        return RouteCandidate::Peer;
    }

    let literal = unwrap_ipv6_mapped_ipv4(candidate).unwrap_or_else(|| candidate.to_string());
    if let Ok(addr) = literal.parse::<Ipv4Addr>() {
        return RouteCandidate::Literal(addr);
    }
    if is_hostname(candidate) {
        return RouteCandidate::Hostname(candidate.to_string());
    }
    RouteCandidate::Invalid(candidate.to_string())
}
