//! Knuth-Morris-Pratt exact substring search
//!
//! This module provides:
//! - LPS (failure) table construction
//! - A reusable matcher that finds all occurrences, overlaps included
//!
//! Works over any symbol type with equality: bytes, `char`s, or tokens.

pub mod lps_table;
pub mod matcher;

pub use lps_table::{build_lps, LpsTable};
pub use matcher::{Matcher, Matches};

/// Create a matcher for `pattern`.
pub fn new_matcher<T: PartialEq>(pattern: impl Into<Vec<T>>) -> Matcher<T> {
    Matcher::new(pattern)
}

/// All offsets where the matcher's pattern occurs in `text`.
///
/// An empty pattern yields no offsets.
pub fn search<T: PartialEq>(matcher: &Matcher<T>, text: &[T]) -> Vec<usize> {
    matcher.search(text)
}

/// The LPS table of the matcher's pattern.
pub fn lps_of<T: PartialEq>(matcher: &Matcher<T>) -> &[usize] {
    matcher.lps().as_slice()
}
