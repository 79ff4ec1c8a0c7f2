//! Modular combinatorics
//!
//! Standalone utility: binomial coefficients modulo a prime, backed by
//! precomputed factorial tables. Shares no state with the matcher.

pub mod calculator;

pub use calculator::{
    generate_factorials, generate_inverse_factorials, ModChooseCalculator, DEFAULT_MODULUS,
};

use thiserror::Error;

/// Errors from building or querying a [`ModChooseCalculator`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatoricsError {
    #[error("modulus {0} is not a prime of at least 2")]
    InvalidModulus(u64),
    #[error("max_n {max_n} must be below the modulus {modulus}")]
    TableTooLarge { max_n: usize, modulus: u64 },
    #[error("n = {n} is outside the precomputed table (max_n = {max_n})")]
    OutOfRange { n: usize, max_n: usize },
}
