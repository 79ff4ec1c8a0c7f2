//! Telemetry for searches
//!
//! Events are serialized to JSON and handed to the `log` facade, so any
//! logger the host application installs can collect them.

use log::{info, warn};
use serde::Serialize;

/// Search event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchEventType {
    /// Pattern compiled into a matcher
    MatcherBuilt,
    /// Text scanned
    SearchCompleted,
    /// Text refused before scanning
    TextRejected,
}

/// Structured search event
#[derive(Debug, Clone, Serialize)]
pub struct SearchEvent {
    /// Event type
    pub event_type: SearchEventType,
    /// Pattern length in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_len: Option<usize>,
    /// Text length in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_len: Option<usize>,
    /// Number of matches found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
    /// Offset of the first match, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_offset: Option<usize>,
    /// Reason for a rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl SearchEvent {
    /// Create a new event with no fields set
    pub fn new(event_type: SearchEventType) -> Self {
        Self {
            event_type,
            pattern_len: None,
            text_len: None,
            match_count: None,
            first_offset: None,
            reason: None,
            metadata: None,
        }
    }

    /// Set pattern length
    pub fn with_pattern_len(mut self, len: usize) -> Self {
        self.pattern_len = Some(len);
        self
    }

    /// Set text length
    pub fn with_text_len(mut self, len: usize) -> Self {
        self.text_len = Some(len);
        self
    }

    /// Record match count and first offset from a result list
    pub fn with_offsets(mut self, offsets: &[usize]) -> Self {
        self.match_count = Some(offsets.len());
        self.first_offset = offsets.first().copied();
        self
    }

    /// Set reason
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Set additional metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Log the event
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => match self.event_type {
                SearchEventType::TextRejected => warn!("[KMP-SEARCH] {}", json),
                _ => info!("[KMP-SEARCH] {}", json),
            },
            Err(e) => {
                warn!("Failed to serialize search event: {}", e);
            }
        }
    }
}

/// Create a matcher built event
pub fn event_matcher_built(pattern_len: usize) -> SearchEvent {
    SearchEvent::new(SearchEventType::MatcherBuilt).with_pattern_len(pattern_len)
}

/// Create a search completed event
pub fn event_search_completed(
    pattern_len: usize,
    text_len: usize,
    offsets: &[usize],
) -> SearchEvent {
    SearchEvent::new(SearchEventType::SearchCompleted)
        .with_pattern_len(pattern_len)
        .with_text_len(text_len)
        .with_offsets(offsets)
}

/// Create a text rejected event
pub fn event_text_rejected(text_len: usize, reason: &str) -> SearchEvent {
    SearchEvent::new(SearchEventType::TextRejected)
        .with_text_len(text_len)
        .with_reason(reason)
}
