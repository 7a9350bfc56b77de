//! Pattern matching for Neo addresses.
//!
//! Supports multiple matching strategies:
//! - Prefix: Match at the start of the address
//! - Suffix: Match at the end of the address
//! - Contains: Match anywhere in the address

mod pattern;
mod range;

pub use pattern::{MatchResult, Pattern, PatternType, BASE58_ALPHABET};
pub use range::AddressRange;
