//! Address and CIDR parsing.

use crate::error::RangeError;
use crate::models::{addr_to_u128, AddressFamily, Range};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// How text after a second `/` is handled.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuffixPolicy {
    /// `10.0.0.0/24/extra` is rejected with [`RangeError::InvalidSuffix`].
    #[default]
    Strict,
    /// `10.0.0.0/24/extra` parses as `10.0.0.0/24`.
    Lenient,
}

impl std::str::FromStr for SuffixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(SuffixPolicy::Strict),
            "lenient" => Ok(SuffixPolicy::Lenient),
            other => Err(format!("unknown suffix policy '{other}'")),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub suffix_policy: SuffixPolicy,
}

/// Parse an address or CIDR block with the default (strict) options.
///
/// # Examples
/// ```
/// use allowlist_range::codec::parse;
/// let range = parse("192.168.1.0/24").unwrap();
/// assert_eq!(range.start(), 3232235776);
/// assert_eq!(range.end(), 3232236031);
/// ```
pub fn parse(input: &str) -> Result<Range, RangeError> {
    parse_with(input, &ParseOptions::default())
}

/// Parse an address or CIDR block.
///
/// A bare address is treated as a full-length prefix (`/32` or `/128`).
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Range, RangeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(RangeError::EmptyInput);
    }

    let (addr_part, suffix_part) = match input.split_once('/') {
        Some((addr, rest)) => (addr, Some(rest)),
        None => (input, None),
    };

    let addr: IpAddr = addr_part
        .parse()
        .map_err(|_| RangeError::InvalidAddress(addr_part.to_string()))?;
    let family = AddressFamily::of(&addr);

    let prefix = match suffix_part {
        Some(rest) => parse_suffix(rest, family, options.suffix_policy)?,
        None => family.width(),
    };

    let mask = prefix_mask(prefix, family);
    let start = addr_to_u128(&addr) & mask;
    let end = start | (!mask & family.max_value());
    log::trace!("parse({input}) -> {family} /{prefix} start={start} end={end}");

    Range::new(family, start, end)
}

fn parse_suffix(
    rest: &str,
    family: AddressFamily,
    policy: SuffixPolicy,
) -> Result<u8, RangeError> {
    let suffix = match rest.split_once('/') {
        Some((suffix, trailing)) => match policy {
            SuffixPolicy::Strict => {
                return Err(RangeError::InvalidSuffix {
                    suffix: rest.to_string(),
                    family,
                })
            }
            SuffixPolicy::Lenient => {
                log::warn!("Discarding trailing '/{trailing}' after prefix length {suffix}");
                suffix
            }
        },
        None => rest,
    };

    let invalid = || RangeError::InvalidSuffix {
        suffix: suffix.to_string(),
        family,
    };

    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let prefix: u32 = suffix.parse().map_err(|_| invalid())?;
    if prefix > family.width() as u32 {
        return Err(invalid());
    }
    Ok(prefix as u8)
}

/// Bitmask with the top `prefix` bits of the family width set.
///
/// # Examples
/// ```
/// use allowlist_range::codec::prefix_mask;
/// use allowlist_range::models::AddressFamily;
/// assert_eq!(prefix_mask(24, AddressFamily::IPv4), 0xFFFFFF00);
/// assert_eq!(prefix_mask(0, AddressFamily::IPv6), 0);
/// ```
pub fn prefix_mask(prefix: u8, family: AddressFamily) -> u128 {
    let right_len = u32::from(family.width() - prefix.min(family.width()));
    let all_bits = family.max_value();

    // a shift by the full 128 bits is an overflow, not zero
    all_bits
        .checked_shr(right_len)
        .map_or(0, |bits| bits << right_len)
}
