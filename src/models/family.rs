//! Address family of a range.

use crate::error::RangeError;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// IPv4 (32-bit) or IPv6 (128-bit) address space.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

impl AddressFamily {
    /// Number of bits in an address of this family.
    pub fn width(self) -> u8 {
        match self {
            AddressFamily::IPv4 => 32,
            AddressFamily::IPv6 => 128,
        }
    }

    /// Storage footprint in bytes, persisted as `ip_size`.
    pub fn ip_size(self) -> u8 {
        self.width() / 8
    }

    /// Map a persisted `ip_size` tag back to its family.
    ///
    /// # Examples
    /// ```
    /// use allowlist_range::models::AddressFamily;
    /// assert_eq!(AddressFamily::from_ip_size(16).unwrap(), AddressFamily::IPv6);
    /// assert!(AddressFamily::from_ip_size(8).is_err());
    /// ```
    pub fn from_ip_size(ip_size: i64) -> Result<AddressFamily, RangeError> {
        match ip_size {
            4 => Ok(AddressFamily::IPv4),
            16 => Ok(AddressFamily::IPv6),
            other => Err(RangeError::InvalidIpSize(other)),
        }
    }

    /// Largest address value of this family.
    pub fn max_value(self) -> u128 {
        match self {
            AddressFamily::IPv4 => u32::MAX as u128,
            AddressFamily::IPv6 => u128::MAX,
        }
    }

    /// Family of a parsed address.
    pub fn of(addr: &IpAddr) -> AddressFamily {
        match addr {
            IpAddr::V4(_) => AddressFamily::IPv4,
            IpAddr::V6(_) => AddressFamily::IPv6,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressFamily::IPv4 => write!(f, "IPv4"),
            AddressFamily::IPv6 => write!(f, "IPv6"),
        }
    }
}

/// Unsigned integer form of an address.
pub fn addr_to_u128(addr: &IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(*v4) as u128,
        IpAddr::V6(v6) => u128::from(*v6),
    }
}
