//! Allow-list IP-range codec.
//!
//! Turns an IPv4/IPv6 address or CIDR block into an inclusive numeric range,
//! encodes it into the four signed 64-bit storage fields shared with the
//! security engine, decodes it back and answers containment queries.
//!
//! - [`codec`] - parse / encode / decode
//! - [`models`] - ranges, stored tuples and allow-list records
//! - [`store`] - allow-list add / replace / remove and JSON files
//! - [`output`] - terminal and CSV rendering
//! - [`cli`] - command line front end

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod store;

pub use codec::{decode, encode, parse, parse_with, ParseOptions, SuffixPolicy};
pub use error::{RangeError, StoreError};
pub use models::{AddressFamily, AllowlistRecord, Range, StoredRange};
pub use store::AllowList;
