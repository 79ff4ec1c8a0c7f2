//! KMP Matcher
//!
//! A [`Matcher`] owns a pattern and its LPS table, built together once.
//! Searching is a single left-to-right pass over the text:
//! - O(n) per search, never re-reading a text symbol after a mismatch
//! - Reports overlapping occurrences
//! - Immutable, so one matcher can serve any number of threads

use std::iter::FusedIterator;

use log::debug;

use super::lps_table::{advance, LpsTable};

/// A pattern together with its precomputed failure table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matcher<T> {
    pattern: Vec<T>,
    lps: LpsTable,
}

impl<T: PartialEq> Matcher<T> {
    /// Create a matcher, building the LPS table up front
    pub fn new(pattern: impl Into<Vec<T>>) -> Self {
        let pattern = pattern.into();
        let lps = LpsTable::build(&pattern);

        debug!("Built LPS table for {}-symbol pattern", pattern.len());

        Self { pattern, lps }
    }

    /// The pattern this matcher searches for
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// The failure table of the pattern
    pub fn lps(&self) -> &LpsTable {
        &self.lps
    }

    /// Pattern length in symbols
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Check if the pattern has no symbols (and so never matches)
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Lazily iterate over match offsets in `text`, in increasing order.
    ///
    /// An empty pattern never matches.
    pub fn find_iter<'m, 't>(&'m self, text: &'t [T]) -> Matches<'m, 't, T> {
        Matches {
            matcher: self,
            text,
            text_pos: 0,
            state: 0,
        }
    }

    /// All offsets where the pattern occurs in `text`, overlaps included
    pub fn search(&self, text: &[T]) -> Vec<usize> {
        self.find_iter(text).collect()
    }

    /// Offset of the first occurrence, if any
    pub fn find(&self, text: &[T]) -> Option<usize> {
        self.find_iter(text).next()
    }

    /// Number of occurrences, overlaps included
    pub fn count(&self, text: &[T]) -> usize {
        self.find_iter(text).count()
    }

    /// Check if the pattern occurs anywhere in `text`
    pub fn is_match(&self, text: &[T]) -> bool {
        self.find(text).is_some()
    }
}

impl Matcher<u8> {
    /// Create a byte matcher from a string pattern
    pub fn from_text(pattern: &str) -> Self {
        Self::new(pattern.as_bytes())
    }

    /// Search a string by bytes; offsets are byte offsets
    pub fn search_str(&self, text: &str) -> Vec<usize> {
        self.search(text.as_bytes())
    }
}

impl Matcher<char> {
    /// Create a matcher over Unicode scalar values
    pub fn from_chars(pattern: &str) -> Self {
        Self::new(pattern.chars().collect::<Vec<_>>())
    }
}

/// Iterator over match offsets, created by [`Matcher::find_iter`].
#[derive(Clone, Debug)]
pub struct Matches<'m, 't, T> {
    matcher: &'m Matcher<T>,
    text: &'t [T],
    /// Next text position to consume
    text_pos: usize,
    /// Number of pattern symbols currently matched
    state: usize,
}

impl<T: PartialEq> Iterator for Matches<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let pattern = self.matcher.pattern.as_slice();
        let m = pattern.len();

        if m == 0 || m > self.text.len() {
            return None;
        }

        while self.text_pos < self.text.len() {
            self.state = advance(pattern, &self.matcher.lps, self.state, &self.text[self.text_pos]);
            self.text_pos += 1;

            if self.state == m {
                // Keep the longest border so overlapping matches are found
                self.state = self.matcher.lps[m - 1];
                return Some(self.text_pos - m);
            }
        }

        None
    }
}

impl<T: PartialEq> FusedIterator for Matches<'_, '_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::sync::Arc;
    use std::thread;

    /// Byte symbol that counts every equality check made against it
    #[derive(Clone, Debug)]
    struct Counted<'a> {
        value: u8,
        comparisons: &'a Cell<usize>,
    }

    impl PartialEq for Counted<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.comparisons.set(self.comparisons.get() + 1);
            self.value == other.value
        }
    }

    fn counted<'a>(bytes: &[u8], comparisons: &'a Cell<usize>) -> Vec<Counted<'a>> {
        bytes
            .iter()
            .map(|&value| Counted { value, comparisons })
            .collect()
    }

    fn naive_search(pattern: &[u8], text: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > text.len() {
            return Vec::new();
        }

        text.windows(pattern.len())
            .enumerate()
            .filter(|(_, window)| *window == pattern)
            .map(|(offset, _)| offset)
            .collect()
    }

    #[test]
    fn test_search_examples() {
        let text = "aaacatdogcatxxx";
        assert_eq!(Matcher::from_text("cat").search_str(text), vec![3, 9]);
        assert_eq!(Matcher::from_text("catdogcat").search_str(text), vec![3]);
        assert_eq!(Matcher::from_text("catdogcatxxx").search_str(text), vec![3]);
        assert_eq!(Matcher::from_text("aaa").search_str(text), vec![0]);
        assert!(Matcher::from_text("squirrel").search_str(text).is_empty());
    }

    #[test]
    fn test_partial_match_before_real_one() {
        let text = "aaacatdogcabbbcatdogcataaa";
        assert_eq!(Matcher::from_text("catdogcat").search_str(text), vec![14]);
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(Matcher::from_text("aa").search_str("aaaa"), vec![0, 1, 2]);
        assert_eq!(Matcher::from_text("aba").search_str("ababababa"), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(Matcher::from_text("").search_str("abc").is_empty());
        assert!(Matcher::from_text("").search_str("").is_empty());
        assert!(Matcher::from_text("abcd").search_str("abc").is_empty());
        assert!(Matcher::from_text("a").search_str("").is_empty());
    }

    #[test]
    fn test_whole_text_match() {
        assert_eq!(Matcher::from_text("abc").search_str("abc"), vec![0]);
    }

    #[test]
    fn test_repeated_search_is_stable() {
        let matcher = Matcher::from_text("catdogcat");
        let table_before = matcher.lps().clone();
        let text = b"catdogcatdogcat";

        let first = matcher.search(text);
        let second = matcher.search(text);

        assert_eq!(first, vec![0, 6]);
        assert_eq!(first, second);
        assert_eq!(matcher.lps(), &table_before);
    }

    #[test]
    fn test_find_count_and_is_match() {
        let matcher = Matcher::from_text("cat");
        let text = b"aaacatdogcatxxx";

        assert_eq!(matcher.find(text), Some(3));
        assert_eq!(matcher.count(text), 2);
        assert!(matcher.is_match(text));
        assert!(!matcher.is_match(b"dog"));
        assert_eq!(matcher.find(b"dog"), None);
    }

    #[test]
    fn test_find_iter_is_lazy_and_fused() {
        let matcher = Matcher::from_text("ab");
        let mut matches = matcher.find_iter(b"abxab");

        assert_eq!(matches.next(), Some(0));
        assert_eq!(matches.next(), Some(3));
        assert_eq!(matches.next(), None);
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_char_alphabet() {
        let matcher = Matcher::from_chars("ñu");
        let text: Vec<char> = "ñuñu ñandú".chars().collect();

        assert_eq!(matcher.search(&text), vec![0, 2]);
        assert_eq!(matcher.len(), 2);
    }

    #[test]
    fn test_generic_symbols() {
        let matcher = Matcher::new(vec![1u32, 2, 1]);
        assert_eq!(matcher.search(&[1, 2, 1, 2, 1, 3]), vec![0, 2]);
        assert_eq!(matcher.lps().as_slice(), &[0, 0, 1]);
    }

    #[test]
    fn test_shared_across_threads() {
        let matcher = Arc::new(Matcher::from_text("aa"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                thread::spawn(move || matcher.search_str("aaaa"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_comparisons_stay_linear_on_worst_case_input() {
        // a^999 b against a^200000: every text symbol mismatches 'b' once
        let comparisons = Cell::new(0);
        let mut pattern_bytes = vec![b'a'; 999];
        pattern_bytes.push(b'b');
        let m = pattern_bytes.len();

        let matcher = Matcher::new(counted(&pattern_bytes, &comparisons));
        assert!(comparisons.get() <= 2 * m);

        let n = 200_000;
        let text = counted(&vec![b'a'; n], &comparisons);
        comparisons.set(0);

        assert!(matcher.search(&text).is_empty());
        assert!(comparisons.get() <= 2 * n);
    }

    proptest! {
        #[test]
        fn test_agrees_with_naive_search(
            pattern in prop::collection::vec(b'a'..=b'c', 0..6),
            text in prop::collection::vec(b'a'..=b'c', 0..64),
        ) {
            let matcher = Matcher::new(pattern.clone());
            prop_assert_eq!(matcher.search(&text), naive_search(&pattern, &text));
        }

        #[test]
        fn test_offsets_are_true_and_increasing(
            pattern in prop::collection::vec(0u8..2, 1..5),
            text in prop::collection::vec(0u8..2, 0..48),
        ) {
            let matcher = Matcher::new(pattern.clone());
            let offsets = matcher.search(&text);

            for pair in offsets.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for &offset in &offsets {
                prop_assert_eq!(&text[offset..offset + pattern.len()], pattern.as_slice());
            }
        }
    }
}
