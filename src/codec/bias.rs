//! Bias conversion between unsigned 64-bit halves and signed storage columns.
//!
//! `[0, 2^64-1]` maps onto `[-(2^63-1), 2^63-1]` in ascending order. The
//! signed minimum is never produced, and `2^64-2` and `2^64-1` share the
//! encoded value `2^63-1`; decoding that value yields `2^64-1`.

/// `2^63 - 1`, the offset between the two domains.
pub const BIAS: u64 = i64::MAX as u64;

const TOP_BIT_32: u32 = 0x8000_0000;

/// Encode an unsigned 64-bit half into its signed storage value.
///
/// # Examples
/// ```
/// use allowlist_range::codec::encode_half;
/// assert_eq!(encode_half(0), -9223372036854775807);
/// assert_eq!(encode_half(u64::MAX), i64::MAX);
/// ```
pub fn encode_half(value: u64) -> i64 {
    let high32 = (value >> 32) as u32;
    let low32 = value as u32;

    if value == u64::MAX {
        i64::MAX
    } else if high32 >= TOP_BIT_32 {
        ((((high32 - TOP_BIT_32) as i64) << 32) + low32 as i64) + 1
    } else {
        (((high32 as i64) << 32) + low32 as i64) - i64::MAX
    }
}

/// Decode a signed storage value back to its unsigned half.
///
/// Returns `None` for `i64::MIN`, which the encoder never produces.
pub fn decode_half(stored: i64) -> Option<u64> {
    if stored == i64::MAX {
        Some(u64::MAX)
    } else if stored >= 0 {
        Some(stored as u64 + BIAS)
    } else if stored == i64::MIN {
        None
    } else {
        Some((stored + i64::MAX) as u64)
    }
}

/// True for the one unsigned value the storage format cannot tell apart from
/// `u64::MAX`.
pub fn is_lossy_half(value: u64) -> bool {
    value == u64::MAX - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_half_boundaries() {
        assert_eq!(encode_half(0), -9223372036854775807);
        assert_eq!(encode_half(1), -9223372036854775806);
        assert_eq!(encode_half(BIAS), 0);
        assert_eq!(encode_half(BIAS + 1), 1);
        assert_eq!(encode_half(u64::MAX), 9223372036854775807);
        assert_eq!(encode_half(u64::MAX - 1), 9223372036854775807);
        assert_eq!(encode_half(u32::MAX as u64), -9223372032559808512);
    }

    #[test]
    fn test_encode_half_word_split() {
        // high32 = 0x8000_0000, low32 = 0
        assert_eq!(encode_half(0x8000_0000_0000_0000), 1);
        // high32 = 0x7FFF_FFFF, low32 = 0xFFFF_FFFF
        assert_eq!(encode_half(0x7FFF_FFFF_FFFF_FFFF), 0);
        // high32 = 0xFFFF_FFFF, low32 = 0
        assert_eq!(encode_half(0xFFFF_FFFF_0000_0000), 0x7FFF_FFFF_0000_0001);
    }

    #[test]
    fn test_decode_half() {
        assert_eq!(decode_half(-9223372036854775807), Some(0));
        assert_eq!(decode_half(0), Some(BIAS));
        assert_eq!(decode_half(1), Some(BIAS + 1));
        assert_eq!(decode_half(i64::MAX), Some(u64::MAX));
        assert_eq!(decode_half(i64::MAX - 1), Some(u64::MAX - 2));
        assert_eq!(decode_half(i64::MIN), None);
    }

    #[test]
    fn test_lossy_half() {
        assert!(is_lossy_half(0xFFFF_FFFF_FFFF_FFFE));
        assert!(!is_lossy_half(u64::MAX));
        assert_eq!(decode_half(encode_half(u64::MAX - 1)), Some(u64::MAX));
    }

    proptest! {
        #[test]
        fn prop_half_round_trip(value in any::<u64>()) {
            prop_assume!(!is_lossy_half(value));
            prop_assert_eq!(decode_half(encode_half(value)), Some(value));
        }

        #[test]
        fn prop_half_preserves_order(a in any::<u64>(), b in any::<u64>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(encode_half(lo) <= encode_half(hi));
        }

        #[test]
        fn prop_half_never_min(value in any::<u64>()) {
            prop_assert!(encode_half(value) > i64::MIN);
        }
    }
}
