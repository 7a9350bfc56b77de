//! Base58Check encoding with a double-SHA256 checksum.
//!
//! Neo reference tooling renders the checksummed payload as one big-endian
//! integer, so leading zero bytes do not show up in the text. Canonical
//! Base58Check writes a `'1'` for each of them instead. [`LeadingZeros`]
//! selects between the two; both agree whenever the payload starts with a
//! non-zero byte, which holds for every versioned payload built here.

use super::error::{KeyError, Result};
use super::hash::{checksum, CHECKSUM_LEN};
use super::network::{LeadingZeros, NetworkProfile};

/// Encodes `payload` followed by its checksum.
pub fn encode_with_checksum(payload: &[u8], policy: LeadingZeros) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));

    let significant = match policy {
        LeadingZeros::Preserve => &data[..],
        LeadingZeros::Collapse => strip_leading_zeros(&data),
    };

    bs58::encode(significant).into_string()
}

/// Encodes a hex payload followed by its checksum.
///
/// Fails with [`KeyError::InvalidHex`] on odd length or non-hex characters.
pub fn encode_with_checksum_hex(payload_hex: &str, policy: LeadingZeros) -> Result<String> {
    let payload = hex::decode(payload_hex)?;
    Ok(encode_with_checksum(&payload, policy))
}

/// Decodes Base58Check text and verifies its checksum.
///
/// Under [`LeadingZeros::Collapse`] leading zero bytes of the payload cannot
/// be recovered; use [`decode_with_checksum_exact`] when the payload length
/// is known.
pub fn decode_with_checksum(text: &str, policy: LeadingZeros) -> Result<Vec<u8>> {
    let data = decode_significant(text, policy)?;
    if data.len() < CHECKSUM_LEN {
        return Err(KeyError::InvalidPayload(format!(
            "decoded {} bytes, need at least {}",
            data.len(),
            CHECKSUM_LEN
        )));
    }
    verify(data)
}

/// Decodes Base58Check text whose payload is exactly `payload_len` bytes.
pub fn decode_with_checksum_exact(
    text: &str,
    policy: LeadingZeros,
    payload_len: usize,
) -> Result<Vec<u8>> {
    let mut data = decode_significant(text, policy)?;
    let expected = payload_len + CHECKSUM_LEN;

    if policy == LeadingZeros::Collapse && data.len() < expected {
        let mut padded = vec![0u8; expected - data.len()];
        padded.append(&mut data);
        data = padded;
    }

    if data.len() != expected {
        return Err(KeyError::InvalidPayload(format!(
            "decoded {} bytes, expected {}",
            data.len(),
            expected
        )));
    }
    verify(data)
}

/// Renders a 20-byte script hash as an address.
pub fn script_hash_to_address(script_hash: &[u8], profile: &NetworkProfile) -> String {
    let mut payload = Vec::with_capacity(1 + script_hash.len());
    payload.push(profile.address_version);
    payload.extend_from_slice(script_hash);
    encode_with_checksum(&payload, profile.leading_zeros)
}

/// Renders raw private key bytes as a compressed-key WIF string.
pub fn private_key_to_wif(private_key: &[u8], profile: &NetworkProfile) -> String {
    let mut payload = Vec::with_capacity(2 + private_key.len());
    payload.push(profile.wif_prefix);
    payload.extend_from_slice(private_key);
    payload.push(profile.wif_compression_suffix);
    encode_with_checksum(&payload, profile.leading_zeros)
}

fn strip_leading_zeros(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|&b| b != 0).unwrap_or(data.len());
    &data[start..]
}

fn decode_significant(text: &str, policy: LeadingZeros) -> Result<Vec<u8>> {
    let data = bs58::decode(text).into_vec()?;
    Ok(match policy {
        LeadingZeros::Preserve => data,
        // Leading '1's carry no value in integer form.
        LeadingZeros::Collapse => strip_leading_zeros(&data).to_vec(),
    })
}

fn verify(mut data: Vec<u8>) -> Result<Vec<u8>> {
    let found = data.split_off(data.len() - CHECKSUM_LEN);
    let expected = checksum(&data);

    if found != expected {
        return Err(KeyError::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_encodes_checksum_only() {
        // checksum("") = 5df6e0e2
        let expected = bs58::encode([0x5d, 0xf6, 0xe0, 0xe2]).into_string();
        assert_eq!(expected, "3QJmnh");
        assert_eq!(encode_with_checksum(&[], LeadingZeros::Collapse), expected);
        assert_eq!(encode_with_checksum(&[], LeadingZeros::Preserve), expected);
        assert_eq!(encode_with_checksum_hex("", LeadingZeros::Collapse).unwrap(), expected);
    }

    #[test]
    fn test_leading_zero_policies() {
        assert_eq!(
            encode_with_checksum_hex("000001", LeadingZeros::Collapse).unwrap(),
            "BwW2qR"
        );
        assert_eq!(
            encode_with_checksum_hex("000001", LeadingZeros::Preserve).unwrap(),
            "11BwW2qR"
        );
    }

    #[test]
    fn test_collapse_decode_needs_length_for_leading_zeros() {
        let encoded = encode_with_checksum(&[0, 0, 1], LeadingZeros::Collapse);

        assert!(matches!(
            decode_with_checksum(&encoded, LeadingZeros::Collapse),
            Err(KeyError::ChecksumMismatch { .. })
        ));
        assert_eq!(
            decode_with_checksum_exact(&encoded, LeadingZeros::Collapse, 3).unwrap(),
            vec![0, 0, 1]
        );
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            encode_with_checksum_hex("abc", LeadingZeros::Collapse),
            Err(KeyError::InvalidHex(_))
        ));
        assert!(matches!(
            encode_with_checksum_hex("zz", LeadingZeros::Collapse),
            Err(KeyError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_decode_recovers_payload() {
        let payloads: [&[u8]; 4] = [b"", b"hello", &[0, 0, 0, 7, 255], &[0x17; 21]];

        for payload in payloads {
            let encoded = encode_with_checksum(payload, LeadingZeros::Preserve);
            assert_eq!(
                decode_with_checksum(&encoded, LeadingZeros::Preserve).unwrap(),
                payload
            );
        }

        assert_eq!(encode_with_checksum(b"hello", LeadingZeros::Preserve), "2L5B5yqsVG8Vt");
    }

    #[test]
    fn test_single_character_corruption_is_detected() {
        let alphabet = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
        let encoded = encode_with_checksum(b"neo account payload", LeadingZeros::Preserve);

        for (i, original) in encoded.char_indices() {
            let replacement = alphabet.chars().find(|&c| c != original).unwrap();
            let mut corrupted = encoded.clone();
            corrupted.replace_range(i..i + 1, &replacement.to_string());

            assert!(
                decode_with_checksum(&corrupted, LeadingZeros::Preserve).is_err(),
                "corruption at {} went undetected",
                i
            );
        }
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(
            decode_with_checksum("0OIl", LeadingZeros::Collapse),
            Err(KeyError::InvalidBase58(_))
        ));
        assert!(matches!(
            decode_with_checksum("2", LeadingZeros::Collapse),
            Err(KeyError::InvalidPayload(_))
        ));
        let encoded = encode_with_checksum(b"hello", LeadingZeros::Preserve);
        assert!(matches!(
            decode_with_checksum_exact(&encoded, LeadingZeros::Preserve, 4),
            Err(KeyError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_address_and_wif_rendering() {
        let profile = NetworkProfile::NEO_MAINNET;
        let script_hash = hex::decode("3775292229eccdf904f16fff8e83e7cffdc0f0ce").unwrap();
        assert_eq!(
            script_hash_to_address(&script_hash, &profile),
            "ALq7AWrhAueN6mJNqk6FHJjnsEoPRytLdW"
        );

        let key = hex::decode("7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344")
            .unwrap();
        assert_eq!(
            private_key_to_wif(&key, &profile),
            "L1QqQJnpBwbsPGAuutuzPTac8piqvbR1HRjrY5qHup48TBCBFe4g"
        );
    }
}
