//! Longest Prefix-Suffix (LPS) Table
//!
//! For every prefix `pattern[0..=i]`, the table records the length of the
//! longest proper prefix that is also a suffix of that prefix (its "border").
//!
//! Example for `ababaca`:
//!
//! ```text
//! index:    0  1  2  3  4  5  6
//! pattern:  a  b  a  b  a  c  a
//! lps:      0  0  1  2  3  0  1
//! ```
//!
//! The same [`advance`] step drives both table construction and text search,
//! so the two can never disagree on how a mismatch is handled.

use std::ops::Deref;

/// Failure table of a pattern, index-aligned with the pattern.
///
/// Invariant: `lps[i] <= i` and `pattern[..lps[i]] == pattern[i + 1 - lps[i]..=i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LpsTable(Vec<usize>);

impl LpsTable {
    /// Build the table for `pattern` - O(m)
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let mut lps = vec![0; pattern.len()];
        let mut length = 0;

        // lps[0] is always 0: a single symbol has no proper prefix
        for i in 1..pattern.len() {
            length = advance(pattern, &lps[..i], length, &pattern[i]);
            lps[i] = length;
        }

        Self(lps)
    }

    /// Table entries as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consume the table, returning the raw entries
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for LpsTable {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for LpsTable {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Build the LPS table for `pattern`.
pub fn build_lps<T: PartialEq>(pattern: &[T]) -> LpsTable {
    LpsTable::build(pattern)
}

/// Feed one symbol to the prefix automaton of `pattern`.
///
/// `state` is the number of pattern symbols currently matched and must be
/// below `pattern.len()`. `lps` must hold the entries for `pattern[..state]`,
/// which lets table construction call this with a partially built table.
///
/// On mismatch the state falls back through the table instead of restarting
/// at 0; each fallback strictly shrinks the state, which keeps both callers
/// amortized O(1) per symbol.
#[inline]
pub(crate) fn advance<T: PartialEq>(
    pattern: &[T],
    lps: &[usize],
    mut state: usize,
    symbol: &T,
) -> usize {
    loop {
        if pattern[state] == *symbol {
            return state + 1;
        }
        if state == 0 {
            return 0;
        }
        state = lps[state - 1];
    }
}
