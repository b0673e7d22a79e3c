//! Allow-list item as persisted alongside the security engine's own records.

use super::{Range, StoredRange};
use crate::codec::decode;
use crate::error::RangeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One allow-list entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowlistRecord {
    /// Original user input, kept for display.
    pub value: String,
    /// Encoded low half of the first address.
    pub start_ip: i64,
    /// Encoded low half of the last address.
    pub end_ip: i64,
    /// Encoded high half of the first address.
    pub start_suffix: i64,
    /// Encoded high half of the last address.
    pub end_suffix: i64,
    /// 4 for IPv4, 16 for IPv6.
    pub ip_size: u8,
    /// Free-text reason for the exemption.
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// No longer applied after this instant.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AllowlistRecord {
    pub fn new(
        value: &str,
        stored: StoredRange,
        description: &str,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        AllowlistRecord {
            value: value.trim().to_string(),
            start_ip: stored.start_low,
            end_ip: stored.end_low,
            start_suffix: stored.start_high,
            end_suffix: stored.end_high,
            ip_size: stored.ip_size,
            description: description.to_string(),
            created_at,
            expires_at,
        }
    }

    pub fn stored(&self) -> StoredRange {
        StoredRange {
            ip_size: self.ip_size,
            start_high: self.start_suffix,
            start_low: self.start_ip,
            end_high: self.end_suffix,
            end_low: self.end_ip,
        }
    }

    /// Replace all encoded fields from one stored range.
    pub fn set_stored(&mut self, value: &str, stored: StoredRange) {
        self.value = value.trim().to_string();
        self.start_ip = stored.start_low;
        self.end_ip = stored.end_low;
        self.start_suffix = stored.start_high;
        self.end_suffix = stored.end_high;
        self.ip_size = stored.ip_size;
    }

    pub fn range(&self) -> Result<Range, RangeError> {
        decode(&self.stored())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
