//! Allow-list range codec.
//!
//! The path runs in one direction for writes and the other for reads:
//! - [`parse`] - text to [`crate::models::Range`]
//! - [`encode`] - range to the signed 64-bit [`crate::models::StoredRange`]
//! - [`decode`] - stored tuple back to a range
//!
//! All functions are pure and hold no state.

mod bias;
mod parse;
mod storage;

pub use bias::{decode_half, encode_half, is_lossy_half, BIAS};
pub use parse::{parse, parse_with, prefix_mask, ParseOptions, SuffixPolicy};
pub use storage::{decode, decode_legacy_ipv4, encode, encode_value};
