//! Cryptographic operations for Neo key and address generation.
//!
//! This module provides:
//! - P-256 key generation with an injectable entropy source
//! - Verification script construction and script hashing
//! - Base58Check rendering of addresses and WIF strings

pub mod base58;
pub mod hash;

mod address;
mod error;
mod keypair;
mod network;
mod script;

pub use address::Address;
pub use error::{KeyError, Result};
pub use keypair::{KeyPair, SECRET_KEY_LEN};
pub use network::{LeadingZeros, NetworkProfile};
pub use script::{Script, ScriptHash, COMPRESSED_PUBLIC_KEY_LEN, SCRIPT_LEN};
