//! Terminal output utilities.
//!
//! Provides formatting helpers and the allow-list table view.

use crate::models::AllowlistRecord;
use crate::store::AllowList;
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render an allow-list as aligned table rows, header first.
pub fn table_rows(list: &AllowList, now: DateTime<Utc>) -> Vec<String> {
    let mut rows = vec![format!(
        "{cnt},{value},{family},{first},{last},{expires},{status},{description}",
        cnt = format_field("cnt", 5),
        value = format_field("value", 22),
        family = format_field("family", 8),
        first = format_field("first", 20),
        last = format_field("last", 42),
        expires = format_field("expires_at", 22),
        status = format_field("status", 9),
        description = format_field("description", 0),
    )];

    for (i, record) in list.items.iter().enumerate() {
        rows.push(table_row(i + 1, record, now));
    }
    rows
}

fn table_row(j: usize, record: &AllowlistRecord, now: DateTime<Utc>) -> String {
    let (family, first, last) = match record.range() {
        Ok(range) => (
            range.family().to_string(),
            range.start_addr().to_string(),
            range.end_addr().to_string(),
        ),
        Err(e) => {
            log::warn!("Cannot decode '{}': {e}", record.value);
            ("?".to_string(), "corrupt".to_string(), "corrupt".to_string())
        }
    };
    let expires = record
        .expires_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());
    let status = if record.is_expired(now) {
        "expired".on_red().to_string()
    } else {
        "active".green().to_string()
    };

    format!(
        "{j},{value},{family},{first},{last},{expires},{status},{description}",
        j = format_field(j, 5),
        value = format_field(&record.value, 22),
        family = format_field(family, 8),
        first = format_field(first, 20),
        last = format_field(last, 42),
        expires = format_field(expires, 22),
        status = format_field(status, 9),
        description = format_field(&record.description, 0),
    )
}
