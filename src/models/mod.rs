//! Domain models for the allow-list.
//!
//! - [`AddressFamily`] - IPv4 or IPv6 and its storage width
//! - [`Range`] - parsed inclusive address range
//! - [`StoredRange`] - bias-encoded storage tuple
//! - [`AllowlistRecord`] - persisted allow-list item

mod family;
mod range;
mod record;
mod stored;

// Re-export public types
pub use family::{addr_to_u128, AddressFamily};
pub use range::Range;
pub use record::AllowlistRecord;
pub use stored::StoredRange;
