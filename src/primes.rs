//! Trial-division primality scan.

/// Number of primes below 2^32, the most [`Primes`] can ever yield.
pub const MAX_PRIME_COUNT: usize = 203_280_221;

/// Trial division by odd numbers up to `sqrt(n)`.
pub fn is_prime(n: u32) -> bool {
    if n <= 1 {
        return false;
    }

    if n == 2 || n == 3 {
        return true;
    }

    if n % 2 == 0 {
        return false;
    }

    let n_wide = n as u64;
    let mut i: u64 = 3;
    while i * i <= n_wide {
        if n_wide % i == 0 {
            return false;
        }
        i += 2;
    }

    true
}

/// Yields the primes in ascending order, testing every candidate starting at 1.
///
/// Ends once the candidates reach `u32::MAX`.
#[derive(Clone, Debug)]
pub struct Primes {
    next_candidate: Option<u32>,
}

impl Primes {
    pub fn new() -> Self {
        Self {
            next_candidate: Some(1),
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some(n) = self.next_candidate {
            self.next_candidate = n.checked_add(1);
            if is_prime(n) {
                return Some(n);
            }
        }

        None
    }
}

/// Collects the first `count` primes. Counts above [`MAX_PRIME_COUNT`] yield all primes below
/// 2^32.
pub fn first_primes(count: usize) -> Vec<u32> {
    collect_primes(Primes::new(), count)
}

fn collect_primes(primes: Primes, count: usize) -> Vec<u32> {
    let mut found = Vec::with_capacity(count.min(MAX_PRIME_COUNT));
    found.extend(primes.take(count));
    found
}
