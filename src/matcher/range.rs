//! Leading characters an address can have on a given network.

use crate::crypto::hash::{CHECKSUM_LEN, SCRIPT_HASH_LEN};
use crate::crypto::NetworkProfile;

use super::BASE58_ALPHABET;

/// Bounds of the Base58 text of every `version ∥ hash ∥ checksum` payload.
///
/// Addresses of one length are ordered the same way as their payloads, so a
/// prefix is reachable iff some string of that length starting with it lies
/// between the bounds.
#[derive(Debug, Clone)]
pub struct AddressRange {
    /// Inclusive `(low, high)` digit bounds, one pair per possible text length
    bounds: Vec<(Vec<u8>, Vec<u8>)>,
}

impl AddressRange {
    /// Computes the range for a profile's address version byte.
    pub fn for_profile(profile: &NetworkProfile) -> Self {
        // A zero version byte leaves the text length free; nothing to bound.
        if profile.address_version == 0 {
            return Self { bounds: Vec::new() };
        }

        let body = SCRIPT_HASH_LEN + CHECKSUM_LEN;
        let mut smallest = vec![0u8; 1 + body];
        smallest[0] = profile.address_version;
        let mut largest = vec![0xffu8; 1 + body];
        largest[0] = profile.address_version;

        let low = digits(&smallest);
        let high = digits(&largest);

        let bounds = if low.len() == high.len() {
            vec![(low, high)]
        } else {
            // Lengths differ by at most one since (v + 1) / v < 58.
            let mut longest_low = vec![0u8; high.len()];
            longest_low[0] = 1;
            let shortest_high = vec![57u8; low.len()];
            vec![(low, shortest_high), (longest_low, high)]
        };

        Self { bounds }
    }

    /// Returns true if some address can start with `prefix`.
    pub fn can_start_with(&self, prefix: &str, case_sensitive: bool) -> bool {
        if self.bounds.is_empty() {
            return true;
        }

        let choices: Vec<Vec<u8>> = prefix
            .chars()
            .map(|c| {
                BASE58_ALPHABET
                    .char_indices()
                    .filter(|&(_, a)| {
                        if case_sensitive {
                            a == c
                        } else {
                            a.eq_ignore_ascii_case(&c)
                        }
                    })
                    .map(|(i, _)| i as u8)
                    .collect()
            })
            .collect();

        self.bounds.iter().any(|(low, high)| {
            choices.len() <= low.len() && fits(&choices, 0, low, high, true, true)
        })
    }
}

/// Depth-first search that stays inside `[low, high]`, digit by digit.
fn fits(
    choices: &[Vec<u8>],
    pos: usize,
    low: &[u8],
    high: &[u8],
    tight_low: bool,
    tight_high: bool,
) -> bool {
    if pos == choices.len() || (!tight_low && !tight_high) {
        return true;
    }

    choices[pos].iter().any(|&digit| {
        let above = !tight_low || digit >= low[pos];
        let below = !tight_high || digit <= high[pos];
        above
            && below
            && fits(
                choices,
                pos + 1,
                low,
                high,
                tight_low && digit == low[pos],
                tight_high && digit == high[pos],
            )
    })
}

/// Base58 digit indices of the integer value of `bytes`.
fn digits(bytes: &[u8]) -> Vec<u8> {
    let text = bs58::encode(bytes).into_string();
    text.chars()
        .filter_map(|c| BASE58_ALPHABET.find(c).map(|i| i as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo_range() -> AddressRange {
        // AFmseVrdL9f9oyCzZefL9tG6UbvhMPRAGw ..= Af7Udc9v3L82dQM5b4zee1Xt77Be4czzbG
        AddressRange::for_profile(&NetworkProfile::NEO_MAINNET)
    }

    #[test]
    fn test_reachable_prefixes() {
        let range = neo_range();
        assert!(range.can_start_with("", true));
        assert!(range.can_start_with("A", true));
        assert!(range.can_start_with("AN", true));
        assert!(range.can_start_with("AFm", true));
        assert!(range.can_start_with("Af7", true));
        assert!(range.can_start_with("AR6NuGFzZfzqbXR3YasfXNmR3VHVNKi2yo", true));
    }

    #[test]
    fn test_unreachable_prefixes() {
        let range = neo_range();
        assert!(!range.can_start_with("Neo", true));
        assert!(!range.can_start_with("A1", true));
        assert!(!range.can_start_with("AFk", true));
        assert!(!range.can_start_with("Ag", true));
        assert!(!range.can_start_with("AR6NuGFzZfzqbXR3YasfXNmR3VHVNKi2yoo", true));
    }

    #[test]
    fn test_case_folded_prefixes() {
        let range = neo_range();
        assert!(range.can_start_with("an", false));
        assert!(range.can_start_with("ag", false));
        assert!(!range.can_start_with("ag", true));
        assert!(!range.can_start_with("neo", false));
    }

    #[test]
    fn test_range_follows_version_byte() {
        let range =
            AddressRange::for_profile(&NetworkProfile::NEO_MAINNET.with_address_version(0x35));
        assert!(range.can_start_with("N", true));
        assert!(!range.can_start_with("A", true));

        let unbounded =
            AddressRange::for_profile(&NetworkProfile::NEO_MAINNET.with_address_version(0x00));
        assert!(unbounded.can_start_with("zzz", true));
    }
}
