//! CSV export of allow-list records.

use crate::models::AllowlistRecord;
use crate::store::AllowList;

const HEADER: &str = r#""value","start_ip","end_ip","start_suffix","end_suffix","ip_size","description","created_at","expires_at""#;

/// Render an allow-list as CSV lines, header first.
///
/// Every persisted field is written, so the output can be loaded into the
/// engine's allow-list table as is.
pub fn csv_rows(list: &AllowList) -> Vec<String> {
    log::debug!("csv_rows() for '{}' count={}", list.name, list.len());
    let mut rows = Vec::with_capacity(list.len() + 1);
    rows.push(HEADER.to_string());
    rows.extend(list.items.iter().map(csv_row));
    rows
}

fn csv_row(record: &AllowlistRecord) -> String {
    format!(
        "{value},{start_ip},{end_ip},{start_suffix},{end_suffix},{ip_size},{description},{created_at},{expires_at}",
        value = escape_csv_field(&record.value),
        start_ip = record.start_ip,
        end_ip = record.end_ip,
        start_suffix = record.start_suffix,
        end_suffix = record.end_suffix,
        ip_size = record.ip_size,
        description = escape_csv_field(&record.description),
        created_at = escape_csv_field(&record.created_at.to_rfc3339()),
        expires_at = escape_csv_field(
            &record
                .expires_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default()
        ),
    )
}

/// Quote a text field, doubling any embedded double quotes.
fn escape_csv_field(input: &str) -> String {
    format!("\"{}\"", input.replace('"', "\"\""))
}
