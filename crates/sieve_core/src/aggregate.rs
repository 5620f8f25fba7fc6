//! Sequential summary of a finished sieve.

use serde::Serialize;

use crate::ring::RingBuffer;
use crate::store::SieveStore;

/// How many of the largest primes a summary keeps.
pub const LARGEST_PRIMES: usize = 10;

/// Count, sum and largest primes of a sieved range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeSummary {
    pub count: u64,
    /// Sum of every prime; 64-bit since the default range overflows 32 bits.
    pub sum: u64,
    /// Up to ten largest primes, ascending.
    pub largest: Vec<usize>,
}

/// Scan the store once: 2 first, then odd indices only.
#[tracing::instrument(skip_all, fields(limit = store.limit()))]
pub fn summarize(store: &SieveStore) -> PrimeSummary {
    let limit = store.limit();
    let mut count = 0u64;
    let mut sum = 0u64;
    let mut last: RingBuffer<usize, LARGEST_PRIMES> = RingBuffer::new();

    let odd = (3..=limit).step_by(2);
    let candidates = (limit >= 2).then_some(2).into_iter().chain(odd);
    for n in candidates {
        if store.is_candidate(n) {
            count += 1;
            sum += n as u64;
            last.push(n);
        }
    }

    PrimeSummary {
        count,
        sum,
        largest: last.into_sorted_vec(),
    }
}
