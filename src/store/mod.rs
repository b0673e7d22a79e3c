//! Allow-list storage around the codec.
//!
//! - [`allowlist`] - add / replace / remove / lookup of records
//! - [`file`] - JSON persistence

mod allowlist;
mod file;

pub use allowlist::AllowList;
pub use file::{load, load_or_new, save};
