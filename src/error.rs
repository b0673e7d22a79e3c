//! Error types for range parsing, decoding and allow-list storage.

use crate::models::AddressFamily;
use thiserror::Error;

/// Errors produced by the range codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The input was blank after trimming.
    #[error("empty input")]
    EmptyInput,

    /// The address part is neither a valid IPv4 nor IPv6 address.
    #[error("invalid IP address: '{0}'")]
    InvalidAddress(String),

    /// The prefix length is empty, not a decimal number, or out of bounds.
    #[error("invalid prefix length '{suffix}' for {family}")]
    InvalidSuffix {
        suffix: String,
        family: AddressFamily,
    },

    /// A persisted `ip_size` tag that is neither 4 nor 16.
    #[error("invalid ip_size {0}, expected 4 or 16")]
    InvalidIpSize(i64),

    /// Stored integers that no valid range encodes to.
    #[error("corrupt stored range: {0}")]
    CorruptRecord(String),
}

/// Errors produced by the allow-list store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("'{0}' is already in the allow-list")]
    DuplicateEntry(String),

    #[error("'{0}' not found in the allow-list")]
    NotFound(String),

    #[error("allow-list storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RangeError::EmptyInput.to_string(), "empty input");
        assert_eq!(
            RangeError::InvalidAddress("999.1.1.1".to_string()).to_string(),
            "invalid IP address: '999.1.1.1'"
        );
        assert_eq!(
            RangeError::InvalidSuffix {
                suffix: "33".to_string(),
                family: AddressFamily::IPv4
            }
            .to_string(),
            "invalid prefix length '33' for IPv4"
        );
    }

    #[test]
    fn test_store_error_wraps_range_error() {
        let err: StoreError = RangeError::EmptyInput.into();
        assert!(matches!(err, StoreError::Range(RangeError::EmptyInput)));
        assert_eq!(err.to_string(), "empty input");
    }
}
