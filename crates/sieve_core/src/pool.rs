//! Reusable fork-join pool for marking phases.

use std::num::NonZeroUsize;

use rayon::prelude::*;

use crate::config::DEFAULT_WORKERS;
use crate::error::SieveError;
use crate::partition::Block;

/// Threads allowed per available core before extra workers share threads.
const THREADS_PER_CORE: usize = 4;

/// Upper bound on pool threads: four per core, never below the default
/// worker count.
pub fn max_threads() -> usize {
    let cores = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    (cores * THREADS_PER_CORE).max(DEFAULT_WORKERS)
}

/// Fixed set of worker threads that marks one batch of blocks at a time.
pub struct MarkingPool {
    pool: rayon::ThreadPool,
}

impl MarkingPool {
    /// Build a pool with `workers` threads, capped at [`max_threads`].
    ///
    /// Worker counts above the cap still shape block sizes; their blocks
    /// queue on the capped pool instead of each getting an OS thread.
    pub fn new(workers: usize) -> Result<Self, SieveError> {
        if workers == 0 {
            return Err(SieveError::InvalidWorkers);
        }

        let threads = workers.min(max_threads());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("sieve-marker-{index}"))
            .build()?;

        Ok(Self { pool })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Mark every block of the batch, returning only once all of them are done.
    ///
    /// Writes made by the batch are visible to the caller when this returns.
    pub fn mark_batch(&self, blocks: Vec<Block<'_>>) {
        if blocks.len() < 2 {
            blocks.into_iter().for_each(Block::mark);
            return;
        }

        self.pool.install(|| {
            blocks.into_par_iter().with_max_len(1).for_each(Block::mark);
        });
    }
}

impl std::fmt::Debug for MarkingPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkingPool")
            .field("workers", &self.workers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crate::store::SieveStore;

    #[test]
    fn pool_uses_requested_worker_count() {
        let pool = MarkingPool::new(3).expect("pool should build");
        assert_eq!(pool.workers(), 3);
    }

    #[test]
    fn oversized_worker_counts_are_capped() {
        let pool = MarkingPool::new(5_000).expect("pool should build");
        assert_eq!(pool.workers(), 5_000_usize.min(max_threads()));
        assert!(max_threads() >= DEFAULT_WORKERS);
    }

    #[test]
    fn pool_rejects_zero_workers() {
        assert!(matches!(
            MarkingPool::new(0),
            Err(SieveError::InvalidWorkers)
        ));
    }

    #[test]
    fn batch_completes_before_returning() {
        let pool = MarkingPool::new(4).expect("pool should build");
        let mut store = SieveStore::allocate(1_000).expect("store should allocate");

        pool.mark_batch(partition(&mut store, 3, 5));

        for n in (6..=1_000).step_by(3) {
            assert!(!store.is_candidate(n), "multiple {n} should be struck");
        }
        assert!(store.is_candidate(3));
        assert!(store.is_candidate(5));
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let pool = MarkingPool::new(2).expect("pool should build");
        pool.mark_batch(Vec::new());
    }
}
