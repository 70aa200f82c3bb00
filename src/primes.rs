//! Unbounded prime number generator.

/// Iterator over the primes `2, 3, 5, 7, ...`, generated on demand by trial
/// division against the primes found so far.
///
/// ```
/// use fta_rs::primes::Primes;
///
/// let first: Vec<u64> = Primes::new().take(6).collect();
/// assert_eq!(first, [2, 3, 5, 7, 11, 13]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Primes {
    found: Vec<u64>,
}

impl Primes {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_prime(&self, n: u64) -> bool {
        self.found
            .iter()
            .take_while(|&&p| p * p <= n)
            .all(|&p| n % p != 0)
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let mut candidate = match self.found.last() {
            None => 2,
            Some(2) => 3,
            Some(&p) => p + 2,
        };
        while !self.is_prime(candidate) {
            candidate += 2;
        }
        self.found.push(candidate);
        Some(candidate)
    }
}
