//! Errors raised while generating, deriving or decoding keys.

/// Errors that can occur in the key derivation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The entropy source or the curve library failed. Not retried.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid Base58 input: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The scalar is zero or not below the curve order.
    #[error("Invalid secret key")]
    InvalidSecretKey,
}

/// Result type alias for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
