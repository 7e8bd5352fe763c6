// IP utility tests.

use super::*;
use crate::error_handling::IpFormatError;
use std::net::Ipv4Addr;

#[test]
fn test_parse_to_integer_basic() {
    assert_eq!(parse_to_integer("1.1.1.1").unwrap().value(), 16_843_009);
    assert_eq!(parse_to_integer("8.8.8.8").unwrap().value(), 134_744_072);
    assert_eq!(parse_to_integer("0.0.0.0").unwrap().value(), 0);
}

#[test]
fn test_parse_to_integer_high_bit_is_negative() {
    // Signed 32-bit shift of the first octet
    assert_eq!(parse_to_integer("200.1.1.1").unwrap().value(), -939_458_303);
    assert_eq!(parse_to_integer("128.0.0.0").unwrap().value(), -2_147_483_648);
    assert_eq!(parse_to_integer("255.255.255.255").unwrap().value(), -1);
    assert_eq!(
        parse_to_integer("192.168.1.1").unwrap().value(),
        -1_062_731_519
    );
}

#[test]
fn test_parse_to_integer_out_of_range_octets_wrap() {
    // 256 << 24 overflows the 32-bit domain to 0
    assert_eq!(parse_to_integer("256.0.0.1").unwrap().value(), 1);
    assert_eq!(parse_to_integer("1.300.1.1").unwrap().value(), 36_438_273);
    // The last octet is added without shifting
    assert_eq!(parse_to_integer("0.0.0.300").unwrap().value(), 300);
}

#[test]
fn test_parse_to_integer_rejects_wrong_segment_count() {
    for input in ["", "1.1.1", "1.1.1.1.1", "1..1.1", "localhost"] {
        assert_eq!(
            parse_to_integer(input),
            Err(IpFormatError::InvalidFormat(input.to_string())),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_to_integer_rejects_non_numeric_segments() {
    for input in ["1.1.1.a", "a.b.c.d", "1.1.1.-1", "1.1.1. 1", "::ffff:1.1.1.1"] {
        assert!(parse_to_integer(input).is_err(), "{input:?} should be rejected");
    }
}

#[test]
fn test_seed_is_absolute_value() {
    assert_eq!(parse_to_integer("200.1.1.1").unwrap().seed(), 939_458_303);
    assert_eq!(parse_to_integer("128.0.0.0").unwrap().seed(), 2_147_483_648);
    assert_eq!(parse_to_integer("255.255.255.255").unwrap().seed(), 1);
    assert_eq!(IpNumber::ZERO.seed(), 0);
}

#[test]
fn test_lcg_known_values() {
    assert_eq!(lcg(0), 1_013_904_223);
    assert_eq!(lcg(1), 1_015_568_748);
    assert_eq!(lcg(16_843_009), 3_371_918_956);
    assert_eq!(lcg(134_744_072), 2_698_152_903);
    assert_eq!(lcg(939_458_303), 2_497_871_954);
    assert_eq!(lcg(2_147_483_648), 3_161_387_871);
}

#[test]
fn test_ip_number_random_uses_seed() {
    let n = parse_to_integer("192.168.1.1").unwrap();
    assert_eq!(n.random(), 1_785_167_954);
    let n = parse_to_integer("114.114.114.114").unwrap();
    assert_eq!(n.random(), 3_539_611_433);
}

#[test]
fn test_ip_address_parse_and_unparsed() {
    let ip = IpAddress::parse("1.1.1.1").unwrap();
    assert_eq!(ip.as_str(), "1.1.1.1");
    assert_eq!(ip.number().value(), 16_843_009);
    assert_eq!(ip.to_string(), "1.1.1.1");

    assert!(IpAddress::parse("example.com").is_err());
    let fallback = IpAddress::unparsed("example.com");
    assert_eq!(fallback.as_str(), "example.com");
    assert_eq!(fallback.number(), IpNumber::ZERO);
}

#[test]
fn test_is_reserved_prefix() {
    assert!(is_reserved_prefix("10.0.0.1"));
    assert!(!is_reserved_prefix("19.0.0.1"));
    assert!(is_reserved_prefix("192.168.1.1"));
    assert!(is_reserved_prefix("172.16.0.1"));
    assert!(is_reserved_prefix("127.0.0.1"));
    assert!(is_reserved_prefix("169.254.1.1"));
    assert!(!is_reserved_prefix("1.172.0.1"));
    assert!(!is_reserved_prefix("8.8.8.8"));
    assert!(!is_reserved_prefix(""));
}

#[test]
fn test_is_reserved_prefix_is_textual() {
    // Prefix comparison, not CIDR
    assert!(!is_reserved_prefix("1729999"));
    assert!(is_reserved_prefix("192.0.2.1"));
    assert!(is_reserved_prefix("172.200.0.1"));
    assert!(!is_reserved_prefix("100.64.0.1"));
}

#[test]
fn test_unwrap_ipv6_mapped_ipv4() {
    assert_eq!(
        unwrap_ipv6_mapped_ipv4("::ffff:203.0.113.9"),
        Some("203.0.113.9".to_string())
    );
    assert_eq!(
        unwrap_ipv6_mapped_ipv4("::FFFF:8.8.4.4"),
        Some("8.8.4.4".to_string())
    );
    assert_eq!(unwrap_ipv6_mapped_ipv4("203.0.113.9"), None);
    assert_eq!(unwrap_ipv6_mapped_ipv4("::ffff:203.0.113"), None);
    assert_eq!(unwrap_ipv6_mapped_ipv4("2001:db8::1"), None);
    assert_eq!(unwrap_ipv6_mapped_ipv4(" ::ffff:1.2.3.4"), None);
}

#[test]
fn test_is_public_ipv4() {
    let public = ["8.8.8.8", "1.1.1.1", "114.114.114.114", "100.128.0.1"];
    for ip in public {
        assert!(is_public_ipv4(ip.parse().unwrap()), "{ip} should be public");
    }

    let not_public = [
        "10.1.2.3",
        "172.16.0.1",
        "192.168.0.1",
        "127.0.0.1",
        "169.254.10.10",
        "0.0.0.0",
        "0.1.2.3",
        "255.255.255.255",
        "192.0.2.1",
        "198.51.100.1",
        "203.0.113.1",
        "224.0.0.1",
        "100.64.0.1",
        "100.127.255.255",
        "198.18.0.1",
        "198.19.255.1",
        "240.0.0.1",
    ];
    for ip in not_public {
        assert!(
            !is_public_ipv4(ip.parse::<Ipv4Addr>().unwrap()),
            "{ip} should not be public"
        );
    }
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_parse_to_integer_deterministic(a in 0u32..=255, b in 0u32..=255, c in 0u32..=255, d in 0u32..=255) {
        let ip = format!("{a}.{b}.{c}.{d}");
        let first = parse_to_integer(&ip).unwrap();
        let second = parse_to_integer(&ip).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_parse_to_integer_matches_u32_bit_pattern(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        // For in-range octets the value is the u32 address reinterpreted as i32.
        let ip = Ipv4Addr::new(a, b, c, d);
        let n = parse_to_integer(&ip.to_string()).unwrap();
        prop_assert_eq!(n.value(), u32::from(ip) as i32 as i64);
    }

    #[test]
    fn test_lcg_deterministic(seed in any::<u32>()) {
        prop_assert_eq!(lcg(seed), lcg(seed));
        let expected = (seed as u64 * LCG_MULTIPLIER as u64 + LCG_INCREMENT as u64) % (1u64 << 32);
        prop_assert_eq!(lcg(seed) as u64, expected);
    }

    #[test]
    fn test_unwrap_mapped_roundtrip(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let quad = format!("{a}.{b}.{c}.{d}");
        let mapped = format!("::ffff:{quad}");
        prop_assert_eq!(unwrap_ipv6_mapped_ipv4(&mapped), Some(quad));
    }
}
