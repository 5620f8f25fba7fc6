use serde::Serialize;

use crate::error::SieveError;

/// Inclusive upper bound searched when no limit is configured.
pub const DEFAULT_LIMIT: usize = 100_000_000;

/// Marking parallelism per prime when no worker count is configured.
pub const DEFAULT_WORKERS: usize = 8;

/// Inputs of one sieve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SieveConfig {
    /// Inclusive upper bound of the search.
    pub limit: usize,
    /// Number of marking workers, also the divisor of the block-size formula.
    pub workers: usize,
    /// Draw a progress bar over sieving candidates on stderr.
    #[serde(skip)]
    pub show_progress: bool,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            workers: DEFAULT_WORKERS,
            show_progress: false,
        }
    }
}

impl SieveConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn validate(&self) -> Result<(), SieveError> {
        if self.workers == 0 {
            return Err(SieveError::InvalidWorkers);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SieveConfig::default();
        assert_eq!(config.limit, 100_000_000);
        assert_eq!(config.workers, 8);
        assert!(!config.show_progress);
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let config = SieveConfig::default().with_workers(0);
        assert!(matches!(config.validate(), Err(SieveError::InvalidWorkers)));
    }

    #[test]
    fn builders_override_fields() {
        let config = SieveConfig::default()
            .with_limit(30)
            .with_workers(3)
            .with_progress(true);
        assert_eq!(config.limit, 30);
        assert_eq!(config.workers, 3);
        assert!(config.show_progress);
        assert!(config.validate().is_ok());
    }
}
