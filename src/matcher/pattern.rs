//! Pattern matching implementation.

use std::str::FromStr;

use crate::crypto::Address;

/// Characters that can appear in a Base58 address.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Distinct symbols once case is folded (digits plus a-z).
const CASE_FOLDED_SYMBOLS: u64 = 35;

/// The type of pattern matching to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternType {
    /// Match at the beginning of the address
    #[default]
    Prefix,
    /// Match at the end of the address
    Suffix,
    /// Match anywhere in the address
    Contains,
    /// Match both prefix and suffix
    PrefixAndSuffix,
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prefix" | "start" | "begin" => Ok(PatternType::Prefix),
            "suffix" | "end" => Ok(PatternType::Suffix),
            "contains" | "anywhere" | "any" => Ok(PatternType::Contains),
            "prefixandsuffix" | "both" => Ok(PatternType::PrefixAndSuffix),
            _ => Err(format!("Unknown pattern type: {}", s)),
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternType::Prefix => write!(f, "prefix"),
            PatternType::Suffix => write!(f, "suffix"),
            PatternType::Contains => write!(f, "contains"),
            PatternType::PrefixAndSuffix => write!(f, "prefix+suffix"),
        }
    }
}

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Match,
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// A normalized pattern over Base58 address text.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: String,
    /// Only used in PrefixAndSuffix mode
    suffix: Option<String>,
    pattern_type: PatternType,
    case_sensitive: bool,
}

impl Pattern {
    pub fn new(pattern: impl Into<String>, pattern_type: PatternType, case_sensitive: bool) -> Self {
        let pattern = pattern.into();
        let pattern = if case_sensitive {
            pattern
        } else {
            pattern.to_lowercase()
        };

        Self {
            pattern,
            suffix: None,
            pattern_type,
            case_sensitive,
        }
    }

    pub fn new_prefix_and_suffix(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        let normalize = |s: String| if case_sensitive { s } else { s.to_lowercase() };

        Self {
            pattern: normalize(prefix.into()),
            suffix: Some(normalize(suffix.into())),
            pattern_type: PatternType::PrefixAndSuffix,
            case_sensitive,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn pattern_type(&self) -> PatternType {
        self.pattern_type
    }

    /// Matches an address against this pattern.
    #[inline]
    pub fn matches(&self, address: &Address) -> MatchResult {
        if self.case_sensitive {
            self.matches_text(address.as_str())
        } else {
            self.matches_text(&address.as_str().to_lowercase())
        }
    }

    fn matches_text(&self, text: &str) -> MatchResult {
        let matched = match self.pattern_type {
            PatternType::Prefix => text.starts_with(&self.pattern),
            PatternType::Suffix => text.ends_with(&self.pattern),
            PatternType::Contains => text.contains(&self.pattern),
            PatternType::PrefixAndSuffix => {
                let suffix = self.suffix.as_deref().unwrap_or("");
                text.starts_with(&self.pattern) && text.ends_with(suffix)
            }
        };

        if matched {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }

    /// Returns the estimated number of attempts to find a match.
    ///
    /// Each Base58 character has 58 possible values, 35 with case folded.
    pub fn estimated_difficulty(&self) -> u64 {
        let total_len = self.pattern.chars().count()
            + self.suffix.as_ref().map_or(0, |s| s.chars().count());
        let base = if self.case_sensitive {
            BASE58_ALPHABET.len() as u64
        } else {
            CASE_FOLDED_SYMBOLS
        };
        base.saturating_pow(total_len as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        let diff = self.estimated_difficulty();
        match diff {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{KeyPair, NetworkProfile};

    fn known_address() -> Address {
        // AR6NuGFzZfzqbXR3YasfXNmR3VHVNKi2yo
        let mut secret = [0u8; 32];
        secret[31] = 1;
        KeyPair::from_secret_bytes(secret, NetworkProfile::NEO_MAINNET)
            .unwrap()
            .address()
            .clone()
    }

    #[test]
    fn test_prefix_match() {
        let pattern = Pattern::new("AR6N", PatternType::Prefix, true);
        assert!(pattern.matches(&known_address()).is_match());
    }

    #[test]
    fn test_prefix_no_match() {
        let pattern = Pattern::new("Abcd", PatternType::Prefix, true);
        assert!(!pattern.matches(&known_address()).is_match());
    }

    #[test]
    fn test_case_insensitive_match() {
        let sensitive = Pattern::new("ar6nu", PatternType::Prefix, true);
        let insensitive = Pattern::new("ar6nu", PatternType::Prefix, false);
        assert!(!sensitive.matches(&known_address()).is_match());
        assert!(insensitive.matches(&known_address()).is_match());
    }

    #[test]
    fn test_suffix_and_contains_match() {
        let address = known_address();
        assert!(Pattern::new("i2yo", PatternType::Suffix, true)
            .matches(&address)
            .is_match());
        assert!(Pattern::new("YasfX", PatternType::Contains, true)
            .matches(&address)
            .is_match());
        assert!(Pattern::new_prefix_and_suffix("AR", "yo", true)
            .matches(&address)
            .is_match());
    }

    #[test]
    fn test_difficulty() {
        let pattern = Pattern::new("Neo", PatternType::Contains, true);
        assert_eq!(pattern.estimated_difficulty(), 58 * 58 * 58);

        let folded = Pattern::new("neo", PatternType::Contains, false);
        assert_eq!(folded.estimated_difficulty(), 35 * 35 * 35);
    }
}
