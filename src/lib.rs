//! Exact substring search with the Knuth-Morris-Pratt algorithm
//!
//! Build a [`Matcher`] once per pattern; its LPS (failure) table is computed
//! at construction. Every search is then a single O(n) pass that reports all
//! occurrences, overlapping ones included:
//!
//! ```
//! use kmp_search::Matcher;
//!
//! let matcher = Matcher::from_text("cat");
//! assert_eq!(matcher.search_str("aaacatdogcatxxx"), vec![3, 9]);
//! assert_eq!(matcher.lps().as_slice(), &[0, 0, 0]);
//! ```
//!
//! Alongside the matcher:
//! - [`scanner::TextScanner`] bounds text size, folds case, and emits telemetry
//! - [`combinatorics::ModChooseCalculator`] answers `C(n, k) mod p` queries

pub mod combinatorics;
pub mod config;
pub mod kmp;
pub mod scanner;
pub mod telemetry;

pub use combinatorics::{CombinatoricsError, ModChooseCalculator};
pub use config::{CombinatoricsConfig, ConfigError, SearchConfig};
pub use kmp::{build_lps, lps_of, new_matcher, search, LpsTable, Matcher, Matches};
pub use scanner::{ScanError, ScanReport, TextScanner};
