//! Output formatting for allow-lists.
//!
//! This module handles rendering allow-list records:
//! - [`csv`] - CSV export
//! - [`terminal`] - Terminal table with colors

mod csv;
mod terminal;

pub use csv::csv_rows;
pub use terminal::{format_field, table_rows};
