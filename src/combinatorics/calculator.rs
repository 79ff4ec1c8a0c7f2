//! Binomial Coefficients Modulo a Prime
//!
//! Precomputes `n!` and `(n!)^-1` for every `n <= max_n`, then answers each
//! `C(n, k) mod p` query with two multiplications.
//!
//! The inverse of `max_n!` comes from Fermat's little theorem
//! (`a^(p-2) = a^-1 mod p`), which only holds for a prime modulus. The
//! remaining inverses are derived downwards: `(i!)^-1 = ((i+1)!)^-1 * (i+1)`.

use log::debug;

use super::CombinatoricsError;
use crate::config::CombinatoricsConfig;

/// The usual competitive-programming prime, 10^9 + 7
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// `C(n, k) mod p` calculator backed by factorial tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModChooseCalculator {
    max_n: usize,
    modulus: u64,
    /// `factorials[i] = i! mod p`
    factorials: Vec<u64>,
    /// `inverse_factorials[i] = (i!)^-1 mod p`
    inverse_factorials: Vec<u64>,
}

impl ModChooseCalculator {
    /// Precompute tables for all `n <= max_n`.
    ///
    /// `modulus` MUST be prime. This is not checked: a composite modulus
    /// silently produces wrong answers. It must also exceed `max_n`, otherwise
    /// `max_n!` is 0 and has no inverse.
    pub fn new(max_n: usize, modulus: u64) -> Result<Self, CombinatoricsError> {
        if modulus < 2 {
            return Err(CombinatoricsError::InvalidModulus(modulus));
        }
        if max_n as u64 >= modulus {
            return Err(CombinatoricsError::TableTooLarge { max_n, modulus });
        }

        let factorials = generate_factorials(max_n, modulus);
        let inverse_factorials = generate_inverse_factorials(max_n, modulus, &factorials);

        debug!("Precomputed factorial tables up to {} mod {}", max_n, modulus);

        Ok(Self {
            max_n,
            modulus,
            factorials,
            inverse_factorials,
        })
    }

    /// Create a calculator from configuration
    pub fn from_config(config: &CombinatoricsConfig) -> Result<Self, CombinatoricsError> {
        Self::new(config.max_n, config.modulus)
    }

    /// `C(n, k) mod p`; zero when `k > n`
    pub fn choose(&self, k: usize, n: usize) -> Result<u64, CombinatoricsError> {
        if n > self.max_n {
            return Err(CombinatoricsError::OutOfRange { n, max_n: self.max_n });
        }
        if k > n {
            return Ok(0);
        }

        let partial = mul_mod(self.factorials[n], self.inverse_factorials[k], self.modulus);
        Ok(mul_mod(partial, self.inverse_factorials[n - k], self.modulus))
    }

    /// `n! mod p`, if `n` is within the table
    pub fn factorial(&self, n: usize) -> Option<u64> {
        self.factorials.get(n).copied()
    }

    /// Largest `n` covered by the tables
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// The prime modulus
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// `[0!, 1!, ..., max_n!]` modulo `modulus`
pub fn generate_factorials(max_n: usize, modulus: u64) -> Vec<u64> {
    let mut factorials = vec![1 % modulus; max_n + 1];
    for i in 1..=max_n {
        factorials[i] = mul_mod(factorials[i - 1], i as u64, modulus);
    }
    factorials
}

/// Modular inverses of `factorials` (as produced by [`generate_factorials`]).
///
/// Requires a prime `modulus` greater than `max_n`.
pub fn generate_inverse_factorials(max_n: usize, modulus: u64, factorials: &[u64]) -> Vec<u64> {
    let mut inverse_factorials = vec![1 % modulus; max_n + 1];
    inverse_factorials[max_n] = pow_mod(factorials[max_n], modulus - 2, modulus);
    for i in (0..max_n).rev() {
        inverse_factorials[i] = mul_mod(inverse_factorials[i + 1], (i + 1) as u64, modulus);
    }
    inverse_factorials
}

fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Square-and-multiply exponentiation
fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}
