//! Single-signature verification script.

use super::hash;
use super::network::NetworkProfile;

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Length of a verification script: opcode + key + opcode.
pub const SCRIPT_LEN: usize = COMPRESSED_PUBLIC_KEY_LEN + 2;

/// `PUSHBYTES33 <compressed public key> CHECKSIG`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Script([u8; SCRIPT_LEN]);

impl Script {
    /// Builds the verification script for a compressed public key.
    ///
    /// The key bytes are taken as-is; they are not checked against the curve.
    pub fn verification(
        public_key: &[u8; COMPRESSED_PUBLIC_KEY_LEN],
        profile: &NetworkProfile,
    ) -> Self {
        let mut bytes = [0u8; SCRIPT_LEN];
        bytes[0] = profile.push_bytes33;
        bytes[1..SCRIPT_LEN - 1].copy_from_slice(public_key);
        bytes[SCRIPT_LEN - 1] = profile.check_sig;
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SCRIPT_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// RIPEMD160(SHA256(script)).
    #[inline]
    pub fn hash(&self) -> ScriptHash {
        ScriptHash(hash::script_hash(&self.0))
    }
}

impl std::fmt::Debug for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

/// 20-byte account identifier derived from a script.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptHash([u8; hash::SCRIPT_HASH_LEN]);

impl ScriptHash {
    #[inline]
    pub const fn from_bytes(bytes: [u8; hash::SCRIPT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; hash::SCRIPT_HASH_LEN] {
        &self.0
    }

    /// Lowercase hex, in digest byte order.
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScriptHash({})", self.to_hex())
    }
}

impl std::fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_script_layout() {
        let mut public_key = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        public_key[0] = 0x02;

        let script = Script::verification(&public_key, &NetworkProfile::NEO_MAINNET);
        let expected = format!("2102{}ac", "00".repeat(32));

        assert_eq!(script.to_hex(), expected);
        assert_eq!(script.to_hex().len(), 70);
        assert_eq!(
            script.hash().to_hex(),
            "3b1644cad0b84a1a0a3d1e1db66a7e4fb0636956"
        );
    }

    #[test]
    fn test_opcodes_follow_profile() {
        let public_key = [0x03; COMPRESSED_PUBLIC_KEY_LEN];
        let mut profile = NetworkProfile::NEO_MAINNET;
        profile.push_bytes33 = 0x0c;
        profile.check_sig = 0x41;

        let script = Script::verification(&public_key, &profile);
        assert_eq!(script.as_bytes()[0], 0x0c);
        assert_eq!(script.as_bytes()[SCRIPT_LEN - 1], 0x41);
        assert_eq!(&script.as_bytes()[1..SCRIPT_LEN - 1], &public_key[..]);
    }
}
