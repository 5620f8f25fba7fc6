//! Splits the multiples of one prime into disjoint marking blocks.
//!
//! Planning works on plain index ranges ([`BlockRange`]); carving turns a plan
//! into [`Block`] capabilities, each holding the only mutable borrow of its
//! slice of the store. Markers can therefore run concurrently without locks.

use crate::store::SieveStore;

/// Inclusive index range `[low, high]` of multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub low: usize,
    pub high: usize,
    pub step: usize,
}

impl BlockRange {
    /// Every index this range marks, in ascending order.
    pub fn multiples(&self) -> impl Iterator<Item = usize> {
        (self.low..=self.high).step_by(self.step)
    }
}

/// Approximate number of multiples per block for `prime`.
///
/// Larger primes have sparser multiples, so each block spans proportionally
/// more of them. Never returns zero.
pub fn block_size(limit: usize, prime: usize, workers: usize) -> usize {
    let span = limit.saturating_sub(prime);
    let divisor = prime.saturating_mul(workers.max(1)).max(1);
    span / divisor + 1
}

/// Plan the blocks for `prime`, covering `{2p, 3p, ...} ∩ [1, limit]`.
///
/// Blocks advance `block_size` multiples at a time; the first one skips the
/// prime itself. A block whose start lies beyond its end is not emitted.
pub fn plan_blocks(prime: usize, block_size: usize, limit: usize) -> Vec<BlockRange> {
    let block_size = block_size.max(1);
    let mut ranges = Vec::new();
    if prime == 0 {
        return ranges;
    }

    let mut multiple = 1usize;
    while prime.saturating_mul(multiple) <= limit {
        let low = prime.saturating_mul(multiple.max(2));
        let last_multiple = multiple.saturating_add(block_size - 1);
        let high = prime.saturating_mul(last_multiple).min(limit);
        if low <= high {
            ranges.push(BlockRange {
                low,
                high,
                step: prime,
            });
        }
        multiple = multiple.saturating_add(block_size);
    }

    ranges
}

/// Exclusive write capability over one block of the store.
///
/// Only [`partition`] constructs blocks, and it hands out non-overlapping
/// sub-slices, so two blocks can never touch the same index.
#[derive(Debug)]
pub struct Block<'a> {
    range: BlockRange,
    cells: &'a mut [bool],
}

impl Block<'_> {
    pub fn range(&self) -> BlockRange {
        self.range
    }

    /// Strike out every multiple of the step inside this block.
    pub fn mark(self) {
        for cell in self.cells.iter_mut().step_by(self.range.step) {
            *cell = false;
        }
    }
}

/// Plan the blocks for `prime` and carve matching slices out of `store`.
pub fn partition(store: &mut SieveStore, prime: usize, block_size: usize) -> Vec<Block<'_>> {
    let ranges = plan_blocks(prime, block_size, store.limit());
    let mut blocks = Vec::with_capacity(ranges.len());
    let mut rest = store.cells_mut();
    let mut consumed = 0usize;

    for range in ranges {
        let skip = range.low - consumed;
        let (_, tail) = std::mem::take(&mut rest).split_at_mut(skip);
        let (cells, tail) = tail.split_at_mut(range.high - range.low + 1);
        rest = tail;
        consumed = range.high + 1;
        blocks.push(Block { range, cells });
    }

    blocks
}
