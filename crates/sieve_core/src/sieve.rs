//! Outer sieve loop: finds each prime up to the square root of the limit
//! and strikes its multiples on the marking pool.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, trace};

use crate::config::SieveConfig;
use crate::error::SieveError;
use crate::partition::{block_size, partition};
use crate::pool::MarkingPool;
use crate::store::SieveStore;

/// Counters describing a finished marking phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SieveStats {
    /// Odd candidates inspected (3 up to the square root of the limit).
    pub candidates: usize,
    /// Candidates that were prime and spawned marking work.
    pub sieving_primes: usize,
    /// Blocks dispatched across all batches.
    pub blocks: usize,
}

/// Parallel Sieve of Eratosthenes bound to one configuration.
#[derive(Debug)]
pub struct ParallelSieve {
    config: SieveConfig,
    pool: MarkingPool,
}

impl ParallelSieve {
    pub fn new(config: SieveConfig) -> Result<Self, SieveError> {
        config.validate()?;
        let pool = MarkingPool::new(config.workers)?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Allocate a store and strike every composite odd index in it.
    #[tracing::instrument(skip_all, fields(limit = self.config.limit))]
    pub fn run(&self) -> Result<(SieveStore, SieveStats), SieveError> {
        let mut store = SieveStore::allocate(self.config.limit)?;
        debug!(
            entries = store.limit() + 1,
            workers = self.pool.workers(),
            "sieve store allocated"
        );
        let stats = self.mark_composites(&mut store);
        debug!(?stats, "marking phase finished");
        Ok((store, stats))
    }

    /// Strike the multiples of every prime `x` with `x * x <= limit`.
    ///
    /// Each prime's batch completes before the next candidate is read, so a
    /// candidate still flagged when reached is guaranteed prime.
    pub fn mark_composites(&self, store: &mut SieveStore) -> SieveStats {
        let limit = store.limit();
        let workers = self.config.workers;
        let mut stats = SieveStats::default();
        let progress = self.progress_bar(limit);

        let mut candidate = 3usize;
        while candidate <= limit / candidate {
            stats.candidates += 1;
            if let Some(bar) = &progress {
                bar.inc(1);
            }

            if store.is_candidate(candidate) {
                let size = block_size(limit, candidate, workers);
                let blocks = partition(store, candidate, size);
                trace!(
                    prime = candidate,
                    block_size = size,
                    blocks = blocks.len(),
                    "dispatching batch"
                );
                stats.sieving_primes += 1;
                stats.blocks += blocks.len();
                self.pool.mark_batch(blocks);
            }

            candidate += 2;
        }

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        stats
    }

    fn progress_bar(&self, limit: usize) -> Option<ProgressBar> {
        if !self.config.show_progress {
            return None;
        }

        let total = odd_candidates_up_to_root(limit) as u64;
        if total == 0 {
            return None;
        }

        let template =
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} candidates";
        let bar = ProgressBar::new(total);
        match ProgressStyle::default_bar().template(template) {
            Ok(style) => bar.set_style(style.progress_chars("#>-")),
            Err(error) => debug!(%error, "falling back to default progress style"),
        }
        Some(bar)
    }
}

/// Number of odd values in `[3, floor(sqrt(limit))]`.
fn odd_candidates_up_to_root(limit: usize) -> usize {
    let mut root = 0usize;
    loop {
        let next = root + 1;
        if next > limit / next {
            break;
        }
        root = next;
    }
    if root < 3 {
        0
    } else {
        (root - 3) / 2 + 1
    }
}
