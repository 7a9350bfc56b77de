//! Neo address representation and parsing.

use std::fmt;

use super::base58;
use super::error::{KeyError, Result};
use super::hash::SCRIPT_HASH_LEN;
use super::network::NetworkProfile;
use super::script::ScriptHash;

/// A Base58Check address: version byte followed by a script hash.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    text: String,
    script_hash: ScriptHash,
}

impl Address {
    /// Renders the address for a script hash on the given network.
    pub fn from_script_hash(script_hash: ScriptHash, profile: &NetworkProfile) -> Self {
        let text = base58::script_hash_to_address(script_hash.as_bytes(), profile);
        Self { text, script_hash }
    }

    /// Parses address text, verifying checksum, length, version byte and that
    /// the text is exactly what [`Address::from_script_hash`] renders.
    pub fn parse(text: &str, profile: &NetworkProfile) -> Result<Self> {
        let payload =
            base58::decode_with_checksum_exact(text, profile.leading_zeros, 1 + SCRIPT_HASH_LEN)?;

        if payload[0] != profile.address_version {
            return Err(KeyError::InvalidPayload(format!(
                "address version 0x{:02x}, expected 0x{:02x}",
                payload[0], profile.address_version
            )));
        }

        let mut hash = [0u8; SCRIPT_HASH_LEN];
        hash.copy_from_slice(&payload[1..]);

        // Collapse decoding ignores leading '1's, so compare against the rendering.
        let address = Self::from_script_hash(ScriptHash::from_bytes(hash), profile);
        if address.text != text {
            return Err(KeyError::InvalidPayload(format!(
                "non-canonical address text, expected {}",
                address.text
            )));
        }

        Ok(address)
    }

    /// Returns the Base58 text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn script_hash(&self) -> &ScriptHash {
        &self.script_hash
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.text)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
