//! Runtime configuration for the key generator.

use clap::Parser;

use crate::crypto::{LeadingZeros, NetworkProfile};
use crate::matcher::{AddressRange, PatternType, BASE58_ALPHABET};

/// Longest Base58 address text for a 25-byte payload.
const MAX_ADDRESS_LEN: usize = 34;

/// Neo Key Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of keypairs to print, or matches to find with --pattern (0 = run forever)
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Search for an address matching this Base58 pattern
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Suffix pattern (when used, --pattern becomes the prefix and matching uses both)
    #[arg(short = 's', long)]
    pub suffix: Option<String>,

    /// Pattern type: prefix, suffix, or contains
    #[arg(short = 't', long, default_value = "prefix")]
    pub pattern_type: PatternType,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Case sensitive matching
    #[arg(short = 'c', long, default_value = "false")]
    pub case_sensitive: bool,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,

    /// Network profile
    #[arg(long, default_value = "neo-mainnet")]
    pub network: String,

    /// Override the address version byte (hex, e.g. 17)
    #[arg(long, value_parser = parse_hex_byte)]
    pub address_version: Option<u8>,

    /// Override the WIF prefix byte (hex, e.g. 80)
    #[arg(long, value_parser = parse_hex_byte)]
    pub wif_prefix: Option<u8>,

    /// Pad leading zero bytes with '1' (canonical Base58Check)
    #[arg(long, default_value = "false")]
    pub canonical_base58: bool,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Returns true when a vanity search was requested.
    pub fn is_search(&self) -> bool {
        self.pattern.is_some()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let profile = self.profile()?;

        if self.workers == Some(0) {
            return Err(ConfigError::InvalidWorkers);
        }

        let Some(pattern) = self.pattern.as_deref() else {
            if self.suffix.is_some() {
                return Err(ConfigError::InvalidPattern(
                    "Suffix requires --pattern".into(),
                ));
            }
            if self.count == 0 {
                return Err(ConfigError::InvalidCount);
            }
            return Ok(());
        };

        self.validate_base58("Pattern", pattern)?;

        if pattern.chars().count() > MAX_ADDRESS_LEN {
            return Err(ConfigError::InvalidPattern(format!(
                "Pattern cannot be longer than {} characters (full address)",
                MAX_ADDRESS_LEN
            )));
        }

        if let Some(ref suffix) = self.suffix {
            self.validate_base58("Suffix", suffix)?;

            let total_len = pattern.chars().count() + suffix.chars().count();
            if total_len > MAX_ADDRESS_LEN {
                return Err(ConfigError::InvalidPattern(format!(
                    "Combined prefix + suffix cannot be longer than {} characters",
                    MAX_ADDRESS_LEN
                )));
            }
        }

        let anchored = matches!(
            self.effective_pattern_type(),
            PatternType::Prefix | PatternType::PrefixAndSuffix
        );
        let range = AddressRange::for_profile(&profile);
        if anchored && !range.can_start_with(pattern, self.case_sensitive) {
            return Err(ConfigError::InvalidPattern(format!(
                "No {} address can start with '{}'",
                profile.name, pattern
            )));
        }

        Ok(())
    }

    fn validate_base58(&self, what: &str, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::InvalidPattern(format!("{} cannot be empty", what)));
        }

        let valid = value.chars().all(|c| {
            if self.case_sensitive {
                BASE58_ALPHABET.contains(c)
            } else {
                BASE58_ALPHABET.chars().any(|a| a.eq_ignore_ascii_case(&c))
            }
        });

        if !valid {
            return Err(ConfigError::InvalidPattern(format!(
                "{} must contain only Base58 characters (no 0, O, I, l)",
                what
            )));
        }
        Ok(())
    }

    /// Builds the network profile from --network and the byte overrides.
    pub fn profile(&self) -> Result<NetworkProfile, ConfigError> {
        let mut profile = NetworkProfile::by_name(&self.network)
            .ok_or_else(|| ConfigError::UnknownNetwork(self.network.clone()))?;

        if let Some(version) = self.address_version {
            profile = profile.with_address_version(version);
        }
        if let Some(prefix) = self.wif_prefix {
            profile = profile.with_wif_prefix(prefix);
        }
        if self.canonical_base58 {
            profile = profile.with_leading_zeros(LeadingZeros::Preserve);
        }

        Ok(profile)
    }

    /// Returns the effective pattern type, accounting for --suffix flag
    pub fn effective_pattern_type(&self) -> PatternType {
        if self.suffix.is_some() {
            PatternType::PrefixAndSuffix
        } else {
            self.pattern_type
        }
    }
}

fn parse_hex_byte(s: &str) -> Result<u8, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex byte '{}': {}", s, e))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Count must be at least 1 when not searching")]
    InvalidCount,

    #[error("Worker count must be at least 1")]
    InvalidWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config(pattern: Option<&str>) -> Config {
        Config {
            count: 1,
            pattern: pattern.map(Into::into),
            suffix: None,
            pattern_type: PatternType::Prefix,
            workers: None,
            case_sensitive: false,
            report_interval: 5,
            network: "neo-mainnet".into(),
            address_version: None,
            wif_prefix: None,
            canonical_base58: false,
        }
    }

    #[test]
    fn test_plain_generation_config() {
        let config = make_test_config(None);
        assert!(config.validate().is_ok());
        assert!(!config.is_search());
        assert_eq!(config.profile().unwrap(), NetworkProfile::NEO_MAINNET);
    }

    #[test]
    fn test_valid_pattern() {
        let mut config = make_test_config(Some("AN"));
        assert!(config.validate().is_ok());

        config.pattern = Some("Neo".into());
        config.pattern_type = PatternType::Contains;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unreachable_prefix_is_rejected() {
        // Main net addresses run from "AFmse..." to "Af7Ud...".
        let mut config = make_test_config(Some("Neo"));
        config.case_sensitive = true;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPattern(_))));

        config.pattern = Some("A1".into());
        assert!(config.validate().is_err());

        config.pattern = Some("Ag".into());
        config.suffix = Some("xyz".into());
        assert!(config.validate().is_err());

        // Suffix matching has no anchored first character.
        config.pattern = Some("Neo".into());
        config.suffix = None;
        config.pattern_type = PatternType::Suffix;
        assert!(config.validate().is_ok());

        // Different version byte, different leading character.
        config.pattern = Some("N".into());
        config.pattern_type = PatternType::Prefix;
        assert!(config.validate().is_err());
        config.address_version = Some(0x35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_pattern() {
        let mut config = make_test_config(Some("A0"));
        assert!(config.validate().is_err());

        // 'l' folds to 'L' unless matching is case sensitive
        config.pattern = Some("AL".into());
        assert!(config.validate().is_ok());
        config.pattern = Some("Al".into());
        assert!(config.validate().is_ok());
        config.case_sensitive = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_suffix_requires_pattern() {
        let mut config = make_test_config(None);
        config.suffix = Some("xyz".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_profile_overrides() {
        let mut config = make_test_config(None);
        config.address_version = Some(0x35);
        config.canonical_base58 = true;

        let profile = config.profile().unwrap();
        assert_eq!(profile.address_version, 0x35);
        assert_eq!(profile.leading_zeros, LeadingZeros::Preserve);

        config.network = "bitcoin".into();
        assert!(matches!(config.profile(), Err(ConfigError::UnknownNetwork(_))));
    }

    #[test]
    fn test_hex_byte_parser() {
        assert_eq!(parse_hex_byte("17"), Ok(0x17));
        assert_eq!(parse_hex_byte("0x80"), Ok(0x80));
        assert!(parse_hex_byte("100").is_err());
    }
}
