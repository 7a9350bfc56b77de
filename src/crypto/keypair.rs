//! Neo keypair generation on NIST P-256.

use std::fmt;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::base58;
use super::error::{KeyError, Result};
use super::network::NetworkProfile;
use super::script::{Script, ScriptHash, COMPRESSED_PUBLIC_KEY_LEN};
use super::Address;

/// Width of a P-256 scalar in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Length of a decoded WIF payload: prefix + key + compression suffix.
const WIF_PAYLOAD_LEN: usize = SECRET_KEY_LEN + 2;

/// Out-of-range candidates tolerated before the entropy source is
/// considered broken. A healthy source hits one with probability ~2^-32.
const MAX_SCALAR_CANDIDATES: usize = 8;

/// A P-256 keypair with its derived script, script hash and address.
#[derive(Clone)]
pub struct KeyPair {
    /// The private scalar (32 bytes, big-endian)
    secret_key: [u8; SECRET_KEY_LEN],
    /// SEC1 compressed public key
    public_key: [u8; COMPRESSED_PUBLIC_KEY_LEN],
    script: Script,
    address: Address,
    profile: NetworkProfile,
}

impl KeyPair {
    /// Generates a new random keypair for Neo main net.
    ///
    /// Uses the thread-local cryptographically secure random number generator.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut rand::thread_rng(), NetworkProfile::default())
    }

    /// Generates a new keypair from an explicit entropy source.
    ///
    /// Candidates outside `[1, n)` are resampled; a failing source is reported
    /// as [`KeyError::KeyGeneration`] immediately.
    pub fn generate_with<R: RngCore + CryptoRng>(
        rng: &mut R,
        profile: NetworkProfile,
    ) -> Result<Self> {
        let mut candidate = [0u8; SECRET_KEY_LEN];

        for _ in 0..MAX_SCALAR_CANDIDATES {
            rng.try_fill_bytes(&mut candidate)
                .map_err(|e| KeyError::KeyGeneration(e.to_string()))?;

            match Self::from_secret_bytes(candidate, profile) {
                Ok(keypair) => {
                    debug!(
                        address = %keypair.address,
                        network = profile.name,
                        "generated keypair"
                    );
                    return Ok(keypair);
                }
                Err(KeyError::InvalidSecretKey) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(KeyError::KeyGeneration(format!(
            "entropy source produced no valid scalar in {} attempts",
            MAX_SCALAR_CANDIDATES
        )))
    }

    /// Builds a keypair from an existing private scalar.
    ///
    /// Fails with [`KeyError::InvalidSecretKey`] if the scalar is zero or not
    /// below the curve order.
    pub fn from_secret_bytes(
        secret_bytes: [u8; SECRET_KEY_LEN],
        profile: NetworkProfile,
    ) -> Result<Self> {
        let secret =
            SecretKey::from_slice(&secret_bytes).map_err(|_| KeyError::InvalidSecretKey)?;
        let encoded = secret.public_key().to_encoded_point(true);

        let public_key: [u8; COMPRESSED_PUBLIC_KEY_LEN] =
            encoded.as_bytes().try_into().map_err(|_| {
                KeyError::KeyGeneration(format!(
                    "compressed point has {} bytes",
                    encoded.as_bytes().len()
                ))
            })?;

        let script = Script::verification(&public_key, &profile);
        let address = Address::from_script_hash(script.hash(), &profile);

        Ok(Self {
            secret_key: secret_bytes,
            public_key,
            script,
            address,
            profile,
        })
    }

    /// Builds a keypair from 64 hex characters of private key.
    pub fn from_private_key_hex(private_key_hex: &str, profile: NetworkProfile) -> Result<Self> {
        let mut secret_bytes = [0u8; SECRET_KEY_LEN];
        hex::decode_to_slice(private_key_hex, &mut secret_bytes)?;
        Self::from_secret_bytes(secret_bytes, profile)
    }

    /// Re-opens a keypair from its WIF string.
    pub fn from_wif(wif: &str, profile: NetworkProfile) -> Result<Self> {
        let payload =
            base58::decode_with_checksum_exact(wif, profile.leading_zeros, WIF_PAYLOAD_LEN)?;

        if payload[0] != profile.wif_prefix {
            return Err(KeyError::InvalidPayload(format!(
                "WIF prefix 0x{:02x}, expected 0x{:02x}",
                payload[0], profile.wif_prefix
            )));
        }
        if payload[WIF_PAYLOAD_LEN - 1] != profile.wif_compression_suffix {
            return Err(KeyError::InvalidPayload(format!(
                "WIF suffix 0x{:02x}, expected 0x{:02x}",
                payload[WIF_PAYLOAD_LEN - 1],
                profile.wif_compression_suffix
            )));
        }

        let mut secret_bytes = [0u8; SECRET_KEY_LEN];
        secret_bytes.copy_from_slice(&payload[1..WIF_PAYLOAD_LEN - 1]);
        let keypair = Self::from_secret_bytes(secret_bytes, profile)?;

        if keypair.wif() != wif {
            return Err(KeyError::InvalidPayload("non-canonical WIF text".into()));
        }
        Ok(keypair)
    }

    /// Returns the private key as 64 lowercase hex characters.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key)
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.secret_key
    }

    /// Returns the compressed public key as 66 lowercase hex characters.
    pub fn compressed_public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    pub fn compressed_public_key(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Returns the verification script as hex (`21 <key> ac` on Neo).
    pub fn script(&self) -> String {
        self.script.to_hex()
    }

    /// Returns the verification script.
    pub fn verification_script(&self) -> &Script {
        &self.script
    }

    /// Returns RIPEMD160(SHA256(script)) as 40 lowercase hex characters.
    pub fn script_hash(&self) -> String {
        self.address.script_hash().to_hex()
    }

    pub fn script_hash_bytes(&self) -> &ScriptHash {
        self.address.script_hash()
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the private key in Wallet Import Format.
    pub fn wif(&self) -> String {
        base58::private_key_to_wif(&self.secret_key, &self.profile)
    }

    /// Returns the network profile the keypair renders with.
    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address)
            .field("public_key", &self.compressed_public_key_hex())
            .finish_non_exhaustive()
    }
}
