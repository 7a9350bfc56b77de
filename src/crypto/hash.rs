//! SHA-256 / RIPEMD-160 compositions used by addresses and checksums.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of a Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Length of a script hash in bytes.
pub const SCRIPT_HASH_LEN: usize = 20;

/// Returns the first four bytes of SHA256(SHA256(payload)).
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(payload));

    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Returns RIPEMD160(SHA256(payload)).
#[inline]
pub fn script_hash(payload: &[u8]) -> [u8; SCRIPT_HASH_LEN] {
    let digest = Ripemd160::digest(Sha256::digest(payload));

    let mut out = [0u8; SCRIPT_HASH_LEN];
    out.copy_from_slice(&digest);
    out
}
