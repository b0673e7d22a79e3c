//! In-memory allow-list: the writer and reader side of the codec.

use crate::codec::{encode, parse_with, ParseOptions};
use crate::error::StoreError;
use crate::models::AllowlistRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A named, ordered set of allow-list records.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<AllowlistRecord>,
    #[serde(skip)]
    options: ParseOptions,
}

impl AllowList {
    pub fn new(name: &str, description: &str) -> Self {
        AllowList {
            name: name.to_string(),
            description: description.to_string(),
            items: vec![],
            options: ParseOptions::default(),
        }
    }

    /// Parse options used by [`AllowList::add`] and [`AllowList::replace`].
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_options(&mut self, options: ParseOptions) {
        self.options = options;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<&AllowlistRecord> {
        let value = value.trim();
        self.items.iter().find(|r| r.value == value)
    }

    /// Parse and encode `value`, then append it.
    ///
    /// Nothing is appended when parsing fails or the value is already listed.
    pub fn add(
        &mut self,
        value: &str,
        description: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<&AllowlistRecord, StoreError> {
        let range = parse_with(value, &self.options)?;
        if self.get(value).is_some() {
            return Err(StoreError::DuplicateEntry(value.trim().to_string()));
        }

        if let Some(existing) = self
            .items
            .iter()
            .find(|r| r.range().is_ok_and(|r| r.covers(&range)))
        {
            log::warn!(
                "'{}' is already covered by '{}' in allow-list '{}'",
                value.trim(),
                existing.value,
                self.name
            );
        }

        let record = AllowlistRecord::new(value, encode(&range), description, Utc::now(), expires_at);
        log::info!(
            "Adding '{}' ({}) to allow-list '{}'",
            record.value,
            range,
            self.name
        );
        self.items.push(record);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Re-parse and re-encode an entry under a new value.
    ///
    /// All encoded fields are replaced together; on error the entry is left
    /// as it was.
    pub fn replace(
        &mut self,
        old_value: &str,
        new_value: &str,
    ) -> Result<&AllowlistRecord, StoreError> {
        let index = self
            .position(old_value)
            .ok_or_else(|| StoreError::NotFound(old_value.trim().to_string()))?;
        let range = parse_with(new_value, &self.options)?;
        if old_value.trim() != new_value.trim() && self.get(new_value).is_some() {
            return Err(StoreError::DuplicateEntry(new_value.trim().to_string()));
        }

        log::info!(
            "Replacing '{}' with '{}' ({}) in allow-list '{}'",
            old_value.trim(),
            new_value.trim(),
            range,
            self.name
        );
        self.items[index].set_stored(new_value, encode(&range));
        Ok(&self.items[index])
    }

    pub fn remove(&mut self, value: &str) -> Result<AllowlistRecord, StoreError> {
        let index = self
            .position(value)
            .ok_or_else(|| StoreError::NotFound(value.trim().to_string()))?;
        log::info!("Removing '{}' from allow-list '{}'", value.trim(), self.name);
        Ok(self.items.remove(index))
    }

    /// Records whose range contains `addr` and that have not expired at `now`.
    ///
    /// Records that fail to decode are logged and skipped.
    pub fn matches(&self, addr: IpAddr, now: DateTime<Utc>) -> Vec<&AllowlistRecord> {
        self.items
            .iter()
            .filter(|record| !record.is_expired(now))
            .filter(|record| match record.range() {
                Ok(range) => range.contains_addr(addr),
                Err(e) => {
                    log::error!("Skipping corrupt allow-list record '{}': {e}", record.value);
                    false
                }
            })
            .collect()
    }

    pub fn is_allowed(&self, addr: IpAddr, now: DateTime<Utc>) -> bool {
        !self.matches(addr, now).is_empty()
    }

    /// Drop records expired at `now`, returning how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|r| !r.is_expired(now));
        let purged = before - self.items.len();
        if purged > 0 {
            log::info!("Purged {purged} expired record(s) from allow-list '{}'", self.name);
        }
        purged
    }

    fn position(&self, value: &str) -> Option<usize> {
        let value = value.trim();
        self.items.iter().position(|r| r.value == value)
    }
}
