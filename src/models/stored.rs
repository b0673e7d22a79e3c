//! Persisted form of a range.

use super::family::{addr_to_u128, AddressFamily};
use crate::codec::encode_value;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A range as four bias-encoded signed 64-bit halves plus its `ip_size` tag.
///
/// `*_high` hold bits 127..64 and `*_low` bits 63..0 of each bound. For IPv4
/// the high halves are always the encoding of `0`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StoredRange {
    pub ip_size: u8,
    pub start_high: i64,
    pub start_low: i64,
    pub end_high: i64,
    pub end_low: i64,
}

impl StoredRange {
    pub fn start(&self) -> (i64, i64) {
        (self.start_high, self.start_low)
    }

    pub fn end(&self) -> (i64, i64) {
        (self.end_high, self.end_low)
    }

    /// Membership test on the encoded values, without decoding.
    ///
    /// Compares `(high, low)` pairs in signed order, the way a range query over
    /// the storage columns does.
    pub fn contains_addr(&self, addr: IpAddr) -> bool {
        if AddressFamily::of(&addr).ip_size() != self.ip_size {
            return false;
        }
        let probe = encode_value(addr_to_u128(&addr));
        self.start() <= probe && probe <= self.end()
    }
}

impl std::fmt::Display for StoredRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ip_size={} start=({}, {}) end=({}, {})",
            self.ip_size, self.start_high, self.start_low, self.end_high, self.end_low
        )
    }
}
