//! Parsed address range.

use super::family::{addr_to_u128, AddressFamily};
use crate::error::RangeError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Inclusive range of addresses within one family.
///
/// Bounds are held as `u128` for both families; IPv4 values never exceed
/// `u32::MAX`. Built by [`crate::codec::parse`] or [`crate::codec::decode`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    family: AddressFamily,
    start: u128,
    end: u128,
}

impl Range {
    /// Create a range, checking `start <= end` and the family's address space.
    pub fn new(family: AddressFamily, start: u128, end: u128) -> Result<Range, RangeError> {
        if end > family.max_value() {
            return Err(RangeError::CorruptRecord(format!(
                "end {end} outside the {family} address space"
            )));
        }
        if start > end {
            return Err(RangeError::CorruptRecord(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Range { family, start, end })
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// First address, inclusive.
    pub fn start(&self) -> u128 {
        self.start
    }

    /// Last address, inclusive.
    pub fn end(&self) -> u128 {
        self.end
    }

    pub fn start_addr(&self) -> IpAddr {
        to_ip_addr(self.family, self.start)
    }

    pub fn end_addr(&self) -> IpAddr {
        to_ip_addr(self.family, self.end)
    }

    /// Number of addresses in the range, saturating for `::/0`.
    pub fn size(&self) -> u128 {
        (self.end - self.start).saturating_add(1)
    }

    /// Membership test for an already parsed address.
    ///
    /// An address of the other family is never contained.
    pub fn contains_addr(&self, addr: IpAddr) -> bool {
        if AddressFamily::of(&addr) != self.family {
            return false;
        }
        let value = addr_to_u128(&addr);
        self.start <= value && value <= self.end
    }

    /// Membership test for a candidate address string.
    ///
    /// # Examples
    /// ```
    /// use allowlist_range::codec::parse;
    /// let range = parse("10.0.0.0/8").unwrap();
    /// assert!(range.contains("10.20.30.40").unwrap());
    /// assert!(!range.contains("::1").unwrap());
    /// ```
    pub fn contains(&self, candidate: &str) -> Result<bool, RangeError> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(RangeError::EmptyInput);
        }
        let addr: IpAddr = candidate
            .parse()
            .map_err(|_| RangeError::InvalidAddress(candidate.to_string()))?;
        Ok(self.contains_addr(addr))
    }

    /// True when `other` lies completely inside this range.
    pub fn covers(&self, other: &Range) -> bool {
        self.family == other.family && self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start_addr())
        } else {
            write!(f, "{}-{}", self.start_addr(), self.end_addr())
        }
    }
}

fn to_ip_addr(family: AddressFamily, value: u128) -> IpAddr {
    match family {
        AddressFamily::IPv4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
        AddressFamily::IPv6 => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_bounds() {
        assert!(Range::new(AddressFamily::IPv4, 0, u32::MAX as u128).is_ok());
        assert!(Range::new(AddressFamily::IPv4, 0, u32::MAX as u128 + 1).is_err());
        assert!(Range::new(AddressFamily::IPv6, 0, u128::MAX).is_ok());
        assert!(Range::new(AddressFamily::IPv6, 5, 4).is_err());
    }

    #[test]
    fn test_addrs_and_display() {
        let range = Range::new(AddressFamily::IPv4, 3232235776, 3232236031).unwrap();
        assert_eq!(range.start_addr(), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(range.end_addr(), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 255)));
        assert_eq!(range.to_string(), "192.168.1.0-192.168.1.255");
        assert_eq!(range.size(), 256);

        let single = Range::new(AddressFamily::IPv6, 1, 1).unwrap();
        assert_eq!(single.to_string(), "::1");
        assert_eq!(single.size(), 1);
    }

    #[test]
    fn test_size_saturates() {
        let all = Range::new(AddressFamily::IPv6, 0, u128::MAX).unwrap();
        assert_eq!(all.size(), u128::MAX);
    }

    #[test]
    fn test_contains() {
        let range = Range::new(AddressFamily::IPv4, 3232235776, 3232236031).unwrap();
        assert!(range.contains("192.168.1.0").unwrap());
        assert!(range.contains(" 192.168.1.255 ").unwrap());
        assert!(!range.contains("192.168.2.0").unwrap());
        assert!(!range.contains("192.168.0.255").unwrap());
        assert!(!range.contains("::1").unwrap());
        assert_eq!(range.contains(""), Err(RangeError::EmptyInput));
        assert_eq!(
            range.contains("192.168.1.0/24"),
            Err(RangeError::InvalidAddress("192.168.1.0/24".to_string()))
        );
    }

    #[test]
    fn test_covers() {
        let wide = Range::new(AddressFamily::IPv4, 0, 1000).unwrap();
        let narrow = Range::new(AddressFamily::IPv4, 10, 20).unwrap();
        let other = Range::new(AddressFamily::IPv6, 10, 20).unwrap();
        assert!(wide.covers(&narrow));
        assert!(wide.covers(&wide));
        assert!(!narrow.covers(&wide));
        assert!(!wide.covers(&other));
    }
}
