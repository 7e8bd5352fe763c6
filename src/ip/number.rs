//! Integer form of a dotted-quad address and the LCG keyed on it.

use serde::Serialize;

use crate::error_handling::IpFormatError;

/// LCG multiplier (Numerical Recipes constants)
pub const LCG_MULTIPLIER: u32 = 1_664_525;
/// LCG increment
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Integer form of a dotted-quad address.
///
/// The value is the sum `(b0 << 24) + (b1 << 16) + (b2 << 8) + b3` where each
/// shift is evaluated on a signed 32-bit integer and wraps. Addresses with the
/// high bit set are therefore negative (e.g. `200.1.1.1` is `-939458303`), and
/// out-of-range octets are not rejected (`256.0.0.1` is `1`). The sum itself is
/// kept in 64 bits so it is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct IpNumber(i64);

impl IpNumber {
    /// Seed used when an address could not be parsed.
    pub const ZERO: IpNumber = IpNumber(0);

    pub fn value(&self) -> i64 {
        self.0
    }

    /// `abs(value)` reduced mod 2^32, the input to [`lcg`].
    pub fn seed(&self) -> u32 {
        // Truncation is the mod 2^32 reduction.
        self.0.unsigned_abs() as u32
    }

    /// `lcg(seed())`, the deterministic pseudo-random value for this address.
    pub fn random(&self) -> u32 {
        lcg(self.seed())
    }
}

impl From<IpNumber> for i64 {
    fn from(n: IpNumber) -> Self {
        n.0
    }
}

/// Parses a dotted-quad string into its integer form.
///
/// Exactly four segments of ASCII digits are required, each fitting in a `u32`.
/// Octets are deliberately not range-checked against 0-255.
///
/// # Errors
///
/// Returns `IpFormatError::InvalidFormat` for any other shape.
pub fn parse_to_integer(ip: &str) -> Result<IpNumber, IpFormatError> {
    let invalid = || IpFormatError::InvalidFormat(ip.to_string());

    let segments: Vec<&str> = ip.split('.').collect();
    if segments.len() != 4 {
        return Err(invalid());
    }

    let mut octets = [0u32; 4];
    for (slot, segment) in octets.iter_mut().zip(&segments) {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = segment.parse::<u32>().map_err(|_| invalid())?;
    }

    let shifted = |octet: u32, by: u32| -> i64 { (octet as i32).wrapping_shl(by) as i64 };

    Ok(IpNumber(
        shifted(octets[0], 24) + shifted(octets[1], 16) + shifted(octets[2], 8) + octets[3] as i64,
    ))
}

/// One step of the linear congruential generator:
/// `(seed * 1664525 + 1013904223) mod 2^32`.
pub fn lcg(seed: u32) -> u32 {
    seed.wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
}

/// A validated dotted-quad string together with its integer form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpAddress {
    address: String,
    number: IpNumber,
}

impl IpAddress {
    /// Parses `ip`, keeping the original string.
    pub fn parse(ip: &str) -> Result<Self, IpFormatError> {
        let number = parse_to_integer(ip)?;
        Ok(IpAddress {
            address: ip.to_string(),
            number,
        })
    }

    /// Wraps an address whose string form could not be parsed, using the
    /// zero seed for every derived value.
    pub fn unparsed(ip: &str) -> Self {
        IpAddress {
            address: ip.to_string(),
            number: IpNumber::ZERO,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    pub fn number(&self) -> IpNumber {
        self.number
    }
}

impl std::fmt::Display for IpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}
