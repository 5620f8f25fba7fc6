//! End-to-end execution of one configured sieve.

use std::time::Instant;

use tracing::info;

use crate::aggregate::summarize;
use crate::config::SieveConfig;
use crate::error::SieveError;
use crate::report::SieveReport;
use crate::sieve::ParallelSieve;

/// Build the marking pool, sieve, summarize and time the whole computation.
///
/// Pool start-up happens before the clock starts; the elapsed time covers
/// store allocation, marking and aggregation.
pub fn run_sieve(config: SieveConfig) -> Result<SieveReport, SieveError> {
    let sieve = ParallelSieve::new(config)?;

    let started = Instant::now();
    let (store, stats) = sieve.run()?;
    let summary = summarize(&store);
    let report = SieveReport {
        elapsed: started.elapsed(),
        limit: config.limit,
        workers: config.workers,
        summary,
    };

    info!(
        limit = report.limit,
        workers = report.workers,
        sieving_primes = stats.sieving_primes,
        blocks = stats.blocks,
        count = report.summary.count,
        elapsed_ms = report.elapsed_ms(),
        "sieve completed"
    );

    Ok(report)
}
