//! Parallel Sieve of Eratosthenes.
//!
//! Finds every prime up to a configured limit, marking composites in
//! parallel and summarizing the result sequentially.
//!
//! # Quick Start
//!
//! ```no_run
//! use sieve_core::{run_sieve, SieveConfig};
//!
//! let report = run_sieve(SieveConfig::default().with_limit(1_000_000)).unwrap();
//! print!("{}", report.render_text());
//! ```
//!
//! # Architecture
//!
//! - [`store`]: the candidate flags, the only shared mutable state
//! - [`partition`]: splits one prime's multiples into disjoint blocks
//! - [`pool`]: reusable fork-join pool that marks a batch of blocks
//! - [`sieve`]: outer loop over candidates up to the square root of the limit
//! - [`aggregate`]: sequential count, sum and largest primes
//! - [`report`]: timed result and its text/JSON renderings

pub mod aggregate;
pub mod config;
pub mod error;
pub mod partition;
pub mod pool;
pub mod report;
pub mod ring;
pub mod runner;
pub mod sieve;
pub mod store;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use aggregate::{summarize, PrimeSummary, LARGEST_PRIMES};
pub use config::{SieveConfig, DEFAULT_LIMIT, DEFAULT_WORKERS};
pub use error::SieveError;
pub use report::SieveReport;
pub use runner::run_sieve;
pub use sieve::{ParallelSieve, SieveStats};
pub use store::SieveStore;
