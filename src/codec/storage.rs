//! Conversion between [`Range`] and [`StoredRange`].

use super::bias::{decode_half, encode_half, is_lossy_half};
use crate::error::RangeError;
use crate::models::{AddressFamily, Range, StoredRange};

/// Split a 128-bit value into its high and low halves and bias-encode both.
pub fn encode_value(value: u128) -> (i64, i64) {
    let high = (value >> 64) as u64;
    let low = value as u64;
    if is_lossy_half(high) || is_lossy_half(low) {
        log::warn!(
            "Value {value:#x} has a half equal to 2^64-2, stored the same as 2^64-1"
        );
    }
    (encode_half(high), encode_half(low))
}

/// Encode a range into its storage tuple.
///
/// # Examples
/// ```
/// use allowlist_range::codec::{encode, parse};
/// let stored = encode(&parse("10.0.0.0/8").unwrap());
/// assert_eq!(stored.ip_size, 4);
/// assert_eq!(stored.start_high, -9223372036854775807);
/// ```
pub fn encode(range: &Range) -> StoredRange {
    let (start_high, start_low) = encode_value(range.start());
    let (end_high, end_low) = encode_value(range.end());
    StoredRange {
        ip_size: range.family().ip_size(),
        start_high,
        start_low,
        end_high,
        end_low,
    }
}

fn decode_value(family: AddressFamily, high: i64, low: i64) -> Result<u128, RangeError> {
    let high = decode_half(high)
        .ok_or_else(|| RangeError::CorruptRecord(format!("high half {high} is not encodable")))?;
    let low = decode_half(low)
        .ok_or_else(|| RangeError::CorruptRecord(format!("low half {low} is not encodable")))?;

    if family == AddressFamily::IPv4 && (high != 0 || low > u32::MAX as u64) {
        return Err(RangeError::CorruptRecord(format!(
            "value {high:#x}:{low:#x} outside the IPv4 address space"
        )));
    }
    Ok(((high as u128) << 64) | low as u128)
}

/// Decode a storage tuple back into a range, using `ip_size` to pick the family.
pub fn decode(stored: &StoredRange) -> Result<Range, RangeError> {
    let family = AddressFamily::from_ip_size(i64::from(stored.ip_size))?;
    let start = decode_value(family, stored.start_high, stored.start_low)?;
    let end = decode_value(family, stored.end_high, stored.end_low)?;
    Range::new(family, start, end)
}

/// Decode the simplified IPv4-only scheme, which stores plain unsigned 32-bit
/// bounds in 64-bit columns.
pub fn decode_legacy_ipv4(start: i64, end: i64) -> Result<Range, RangeError> {
    let to_u32 = |value: i64| {
        u32::try_from(value).map_err(|_| {
            RangeError::CorruptRecord(format!("legacy IPv4 value {value} out of range"))
        })
    };
    Range::new(
        AddressFamily::IPv4,
        to_u32(start)? as u128,
        to_u32(end)? as u128,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse;

    const ENCODED_ZERO: i64 = -9223372036854775807;

    #[test]
    fn test_encode_ipv4() {
        let stored = encode(&parse("192.168.1.0/24").unwrap());
        assert_eq!(stored.ip_size, 4);
        assert_eq!(stored.start_high, ENCODED_ZERO);
        assert_eq!(stored.end_high, ENCODED_ZERO);
        assert_eq!(stored.start_low, 3232235776 + ENCODED_ZERO);
        assert_eq!(stored.end_low, 3232236031 + ENCODED_ZERO);

        let range = decode(&stored).unwrap();
        assert_eq!(range.start(), 3232235776);
        assert_eq!(range.end(), 3232236031);
    }

    #[test]
    fn test_encode_ipv6() {
        let stored = encode(&parse("2001:db8::/32").unwrap());
        assert_eq!(stored.ip_size, 16);
        assert_eq!(stored.start_high, encode_half(0x2001_0db8_0000_0000));
        assert_eq!(stored.start_low, ENCODED_ZERO);
        assert_eq!(stored.end_high, encode_half(0x2001_0db8_ffff_ffff));
        assert_eq!(stored.end_low, i64::MAX);
        assert_eq!(decode(&stored).unwrap(), parse("2001:db8::/32").unwrap());
    }

    #[test]
    fn test_encode_full_ipv6_space() {
        let stored = encode(&parse("::/0").unwrap());
        assert_eq!(stored.start(), (ENCODED_ZERO, ENCODED_ZERO));
        assert_eq!(stored.end(), (i64::MAX, i64::MAX));
        assert_eq!(decode(&stored).unwrap().end(), u128::MAX);
    }

    #[test]
    fn test_decode_rejects_bad_ip_size() {
        let mut stored = encode(&parse("10.0.0.1").unwrap());
        stored.ip_size = 8;
        assert_eq!(decode(&stored), Err(RangeError::InvalidIpSize(8)));
    }

    #[test]
    fn test_decode_rejects_corrupt_values() {
        let good = encode(&parse("10.0.0.0/8").unwrap());

        let mut stored = good;
        stored.start_low = i64::MIN;
        assert!(matches!(decode(&stored), Err(RangeError::CorruptRecord(_))));

        // IPv4 with a non-zero high half
        let mut stored = good;
        stored.end_high = 0;
        assert!(matches!(decode(&stored), Err(RangeError::CorruptRecord(_))));

        // IPv4 low half beyond 32 bits
        let mut stored = good;
        stored.end_low = 0;
        assert!(matches!(decode(&stored), Err(RangeError::CorruptRecord(_))));

        // start after end
        let mut stored = good;
        std::mem::swap(&mut stored.start_low, &mut stored.end_low);
        assert!(matches!(decode(&stored), Err(RangeError::CorruptRecord(_))));
    }

    #[test]
    fn test_decode_legacy_ipv4() {
        let range = decode_legacy_ipv4(3232235776, 3232236031).unwrap();
        assert_eq!(range, parse("192.168.1.0/24").unwrap());
        assert!(decode_legacy_ipv4(-1, 10).is_err());
        assert!(decode_legacy_ipv4(0, 4294967296).is_err());
        assert!(decode_legacy_ipv4(10, 5).is_err());
    }
}
