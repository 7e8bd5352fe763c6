//! Address range checks.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

static IPV6_MAPPED_IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^::ffff:(\d+\.\d+\.\d+\.\d+)$").expect("static regex is valid")
});

/// Prefix test used by the presentation layer to flag private-looking input.
///
/// This is a literal character comparison, not CIDR matching: `"192.0.2.1"`
/// and `"172.200.0.1"` match, while `"19.0.0.1"` and `"1729999"` (no dot)
/// do not.
pub fn is_reserved_prefix(ip: &str) -> bool {
    ["10.", "172.", "192.", "127.", "169."]
        .iter()
        .any(|prefix| ip.starts_with(prefix))
}

/// Returns the embedded dotted quad of an `::ffff:a.b.c.d` address.
pub fn unwrap_ipv6_mapped_ipv4(s: &str) -> Option<String> {
    IPV6_MAPPED_IPV4
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// True when `addr` is globally routable.
///
/// Rejects private, loopback, link-local, unspecified, broadcast,
/// documentation, multicast, shared (100.64/10), benchmarking (198.18/15),
/// "this network" (0/8) and reserved (240/4) ranges.
pub fn is_public_ipv4(addr: Ipv4Addr) -> bool {
    let [a, b, _, _] = addr.octets();
    let shared = a == 100 && (64..128).contains(&b);
    let benchmarking = a == 198 && (b == 18 || b == 19);
    let this_network = a == 0;
    let reserved = a >= 240;

    !(addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_unspecified()
        || addr.is_broadcast()
        || addr.is_documentation()
        || addr.is_multicast()
        || shared
        || benchmarking
        || this_network
        || reserved)
}
