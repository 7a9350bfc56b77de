//! Network profiles: the version and prefix bytes a network agrees on.

use std::fmt;

/// How Base58 rendering treats leading zero bytes of the checksummed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingZeros {
    /// Encode the payload as a single integer; leading zero bytes vanish.
    ///
    /// Matches the output of the Neo reference tooling.
    #[default]
    Collapse,
    /// Canonical Base58Check: one `'1'` per leading zero byte.
    Preserve,
}

impl fmt::Display for LeadingZeros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadingZeros::Collapse => write!(f, "collapse"),
            LeadingZeros::Preserve => write!(f, "preserve"),
        }
    }
}

/// Immutable record of the constants used to render keys for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Display name
    pub name: &'static str,
    /// Prefix byte of the address payload
    pub address_version: u8,
    /// Prefix byte of the WIF payload
    pub wif_prefix: u8,
    /// Suffix byte marking a compressed public key in WIF
    pub wif_compression_suffix: u8,
    /// Script opcode: push the next 33 bytes
    pub push_bytes33: u8,
    /// Script opcode: check signature
    pub check_sig: u8,
    /// Base58 leading zero policy
    pub leading_zeros: LeadingZeros,
}

impl NetworkProfile {
    /// Neo main network.
    pub const NEO_MAINNET: NetworkProfile = NetworkProfile {
        name: "neo-mainnet",
        address_version: 0x17,
        wif_prefix: 0x80,
        wif_compression_suffix: 0x01,
        push_bytes33: 0x21,
        check_sig: 0xac,
        leading_zeros: LeadingZeros::Collapse,
    };

    /// Looks up a built-in profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "neo" | "mainnet" | "neo-mainnet" => Some(Self::NEO_MAINNET),
            _ => None,
        }
    }

    /// Returns a copy with a different address version byte.
    pub fn with_address_version(mut self, version: u8) -> Self {
        self.address_version = version;
        self.name = "custom";
        self
    }

    /// Returns a copy with a different WIF prefix byte.
    pub fn with_wif_prefix(mut self, prefix: u8) -> Self {
        self.wif_prefix = prefix;
        self.name = "custom";
        self
    }

    /// Returns a copy with a different Base58 leading zero policy.
    pub fn with_leading_zeros(mut self, policy: LeadingZeros) -> Self {
        self.leading_zeros = policy;
        self
    }
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self::NEO_MAINNET
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (address version 0x{:02x}, wif prefix 0x{:02x}, base58 {})",
            self.name, self.address_version, self.wif_prefix, self.leading_zeros
        )
    }
}
