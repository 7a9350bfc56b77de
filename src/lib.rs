//! # neo_keygen
//!
//! Neo account key generator.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, verification scripts and Base58Check encoding
//! - `matcher`: Pattern matching strategies for vanity addresses
//! - `worker`: Parallel execution and worker pool management
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod worker;

pub use config::Config;
pub use crypto::{Address, KeyError, KeyPair, LeadingZeros, NetworkProfile, Script, ScriptHash};
pub use matcher::{MatchResult, Pattern, PatternType};
pub use worker::{VanityResult, WorkerPool};
