#![allow(dead_code)]

use sieve_core::{ParallelSieve, SieveConfig, SieveStats, SieveStore};

/// Run the marking phase for `limit` with `workers` threads.
pub fn sieved_store(limit: usize, workers: usize) -> (SieveStore, SieveStats) {
    let config = SieveConfig::default()
        .with_limit(limit)
        .with_workers(workers);
    ParallelSieve::new(config)
        .expect("sieve should build")
        .run()
        .expect("sieve should run")
}

/// Worker counts exercised by the property tests, from serial to oversubscribed.
pub const WORKER_COUNTS: [usize; 5] = [1, 2, 3, 8, 32];
