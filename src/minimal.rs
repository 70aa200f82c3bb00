//! Reduction of raw cut sets to minimal cut sets.
//!
//! Each distinct basic event gets its own prime (first-seen order), and each
//! cut set is encoded as the product of its members' primes. By unique
//! factorization, `A ⊆ B` exactly when `code(A)` divides `code(B)`, so a cut
//! set is dropped whenever another set's code divides its own.
//!
//! Products are [`BigUint`]s and primes are generated on demand, so the
//! encoding has no capacity limit.
//!
//! The pairwise test is `O(N²)` in the number of cut sets, which is fine for
//! trees with a few hundred cut sets.

use std::collections::HashMap;

use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::cutset::CutSet;
use crate::primes::Primes;
use crate::types::Code;

/// Number of cut sets above which the quadratic reduction is reported as slow.
const LARGE_INPUT: usize = 2000;

/// Prime assigned to each distinct basic event.
#[derive(Debug, Clone)]
pub struct PrimeEncoding {
    primes: HashMap<Code, u64>,
}

impl PrimeEncoding {
    /// Assigns primes to events in the order they first appear.
    pub fn new<'a>(cut_sets: impl IntoIterator<Item = &'a CutSet>) -> Self {
        let mut generator = Primes::new();
        let mut primes = HashMap::new();
        for cs in cut_sets {
            for code in cs.iter() {
                primes.entry(code).or_insert_with(|| generator.next().unwrap_or_default());
            }
        }
        Self { primes }
    }

    pub fn prime(&self, code: Code) -> Option<u64> {
        self.primes.get(&code).copied()
    }

    /// Product of the members' primes. Events without a prime are skipped.
    pub fn encode(&self, cut_set: &CutSet) -> BigUint {
        cut_set
            .iter()
            .filter_map(|code| self.prime(code))
            .fold(BigUint::one(), |acc, p| acc * p)
    }
}

/// Returns the minimal cut sets among `cut_sets`, preserving input order.
///
/// A set is removed when another set's encoding divides its own. When two
/// sets are equal, only the first occurrence is kept.
pub fn minimal_cut_sets(cut_sets: &[CutSet]) -> Vec<CutSet> {
    if cut_sets.len() > LARGE_INPUT {
        warn!(
            "reducing {} cut sets with a quadratic containment test",
            cut_sets.len()
        );
    }

    let encoding = PrimeEncoding::new(cut_sets);
    let codes: Vec<BigUint> = cut_sets.iter().map(|cs| encoding.encode(cs)).collect();

    let is_minimal = |i: usize| {
        !codes.iter().enumerate().any(|(j, code_j)| {
            if i == j || !(&codes[i] % code_j).is_zero() {
                return false;
            }
            // Equal codes are duplicates: the earlier copy wins.
            codes[i] != *code_j || j < i
        })
    };

    let minimal: Vec<CutSet> = (0..cut_sets.len())
        .filter(|&i| is_minimal(i))
        .map(|i| cut_sets[i].clone())
        .collect();

    debug!(
        "reduced {} cut sets over {} events to {} minimal cut sets",
        cut_sets.len(),
        encoding.primes.len(),
        minimal.len()
    );
    minimal
}
