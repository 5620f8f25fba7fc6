//! Dense candidate array shared by every marking phase.

use crate::error::SieveError;

/// One flag per integer in `0..=limit`; `true` means "not yet proven composite".
///
/// Even indices above 2 are never marked by the odd-only sieve, so their raw
/// flag carries no meaning. Use [`SieveStore::is_prime`] for a verdict.
#[derive(Debug)]
pub struct SieveStore {
    cells: Vec<bool>,
}

impl SieveStore {
    /// Allocate `limit + 1` candidate flags with 0 and 1 already struck out.
    pub fn allocate(limit: usize) -> Result<Self, SieveError> {
        let entries = limit.saturating_add(1);
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(entries)
            .map_err(|source| SieveError::Allocation { entries, source })?;
        cells.resize(entries, true);

        for cell in cells.iter_mut().take(2) {
            *cell = false;
        }

        Ok(Self { cells })
    }

    /// Largest index held by the store.
    pub fn limit(&self) -> usize {
        self.cells.len() - 1
    }

    /// Raw candidate flag for `n`. Panics when `n` exceeds the limit.
    pub fn is_candidate(&self, n: usize) -> bool {
        self.cells[n]
    }

    /// Final primality verdict for `n`, valid once sieving has completed.
    pub fn is_prime(&self, n: usize) -> bool {
        match n {
            _ if n > self.limit() => false,
            2 => true,
            _ if n % 2 == 0 => false,
            _ => self.cells[n],
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}
