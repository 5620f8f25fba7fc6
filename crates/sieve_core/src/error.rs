use thiserror::Error;

/// Failures that can stop a sieve run before it produces a summary.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("cannot allocate sieve store of {entries} entries: {source}")]
    Allocation {
        entries: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    #[error("worker count must be a positive integer")]
    InvalidWorkers,

    #[error("failed to build marking pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
