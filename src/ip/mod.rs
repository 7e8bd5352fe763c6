//! IP address utilities.
//!
//! This module provides:
//! - Dotted-quad to integer conversion with signed 32-bit shift semantics
//! - The linear congruential generator used for deterministic jitter
//! - Reserved-prefix, IPv6-mapped-IPv4 and public-address checks

mod number;
mod reserved;

#[cfg(test)]
mod tests;

pub use number::{lcg, parse_to_integer, IpAddress, IpNumber, LCG_INCREMENT, LCG_MULTIPLIER};
pub use reserved::{is_public_ipv4, is_reserved_prefix, unwrap_ipv6_mapped_ipv4};
