//! Configuration for the text scanner and combinatorics tables
//!
//! Configuration arrives as JSON bytes; every field is optional and falls
//! back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combinatorics::DEFAULT_MODULUS;

/// Scanner configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Fold ASCII letters in both pattern and text before matching
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,

    /// Maximum text length to scan (bounds per-call work)
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// Whether to emit telemetry events for scans
    #[serde(default = "default_log_matches")]
    pub log_matches: bool,

    /// Factorial table settings
    #[serde(default)]
    pub combinatorics: CombinatoricsConfig,
}

/// Settings for [`ModChooseCalculator`](crate::combinatorics::ModChooseCalculator)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CombinatoricsConfig {
    /// Largest `n` with a precomputed factorial
    #[serde(default = "default_max_n")]
    pub max_n: usize,

    /// Prime modulus
    #[serde(default = "default_modulus")]
    pub modulus: u64,
}

fn default_case_insensitive() -> bool {
    false
}

fn default_max_text_len() -> usize {
    10 * 1024 * 1024 // 10MB
}

fn default_log_matches() -> bool {
    true
}

fn default_max_n() -> usize {
    100_000
}

fn default_modulus() -> u64 {
    DEFAULT_MODULUS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_case_insensitive(),
            max_text_len: default_max_text_len(),
            log_matches: default_log_matches(),
            combinatorics: CombinatoricsConfig::default(),
        }
    }
}

impl Default for CombinatoricsConfig {
    fn default() -> Self {
        Self {
            max_n: default_max_n(),
            modulus: default_modulus(),
        }
    }
}

impl SearchConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str = std::str::from_utf8(bytes)?;
        Ok(serde_json::from_str(config_str)?)
    }
}

/// Configuration parsing errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
