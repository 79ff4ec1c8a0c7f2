//! Text Scanner
//!
//! Wraps a byte [`Matcher`] with the policy a caller needs around it:
//! - Texts above `max_text_len` are refused before any work is done
//! - Optional ASCII case folding (offsets are unaffected, folding keeps lengths)
//! - Structured telemetry for every scan

use serde::Serialize;
use thiserror::Error;

use crate::config::SearchConfig;
use crate::kmp::Matcher;
use crate::telemetry::{event_matcher_built, event_search_completed, event_text_rejected};

/// Single-pattern scanner over byte texts
#[derive(Clone, Debug)]
pub struct TextScanner {
    matcher: Matcher<u8>,
    case_insensitive: bool,
    max_text_len: usize,
    log_matches: bool,
}

impl TextScanner {
    /// Create a scanner for a string pattern
    pub fn new(pattern: &str, config: &SearchConfig) -> Self {
        Self::with_pattern_bytes(pattern.as_bytes(), config)
    }

    /// Create a scanner for a raw byte pattern
    pub fn with_pattern_bytes(pattern: &[u8], config: &SearchConfig) -> Self {
        let matcher = if config.case_insensitive {
            Matcher::new(pattern.to_ascii_lowercase())
        } else {
            Matcher::new(pattern)
        };

        if config.log_matches {
            event_matcher_built(matcher.len())
                .with_metadata(serde_json::json!({ "case_insensitive": config.case_insensitive }))
                .emit();
        }

        Self {
            matcher,
            case_insensitive: config.case_insensitive,
            max_text_len: config.max_text_len,
            log_matches: config.log_matches,
        }
    }

    /// Scan `text` for every occurrence of the pattern.
    ///
    /// O(n) time; allocates a folded copy of the text only when case
    /// insensitive.
    pub fn scan(&self, text: &[u8]) -> Result<ScanReport, ScanError> {
        if text.len() > self.max_text_len {
            if self.log_matches {
                event_text_rejected(text.len(), "text exceeds max length").emit();
            }
            return Err(ScanError::TextTooLong {
                len: text.len(),
                max: self.max_text_len,
            });
        }

        let offsets = if self.case_insensitive {
            self.matcher.search(&text.to_ascii_lowercase())
        } else {
            self.matcher.search(text)
        };

        if self.log_matches {
            event_search_completed(self.matcher.len(), text.len(), &offsets).emit();
        }

        Ok(ScanReport {
            offsets,
            text_len: text.len(),
            pattern_len: self.matcher.len(),
        })
    }

    /// Scan a string; offsets are byte offsets
    pub fn scan_str(&self, text: &str) -> Result<ScanReport, ScanError> {
        self.scan(text.as_bytes())
    }

    /// The underlying matcher (pattern already folded if case insensitive)
    pub fn matcher(&self) -> &Matcher<u8> {
        &self.matcher
    }
}

/// Outcome of a successful scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Match start offsets, increasing, overlaps included
    pub offsets: Vec<usize>,
    /// Length of the scanned text in bytes
    pub text_len: usize,
    /// Length of the pattern in bytes
    pub pattern_len: usize,
}

impl ScanReport {
    /// Check if the pattern occurred at least once
    pub fn is_match(&self) -> bool {
        !self.offsets.is_empty()
    }

    /// Number of occurrences found
    pub fn match_count(&self) -> usize {
        self.offsets.len()
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Reasons a scan is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("text of {len} bytes exceeds the {max}-byte limit")]
    TextTooLong { len: usize, max: usize },
}
