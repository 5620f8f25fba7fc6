/// Fixed-capacity buffer that keeps the last `N` values pushed.
///
/// Once full, each push overwrites the oldest entry.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    slots: [Option<T>; N],
    cursor: usize,
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            cursor: 0,
        }
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        self.slots[self.cursor] = Some(value);
        self.cursor = (self.cursor + 1) % N;
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied slots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer).flatten()
    }

    /// Consume the buffer, dropping unused slots.
    pub fn into_vec(self) -> Vec<T> {
        let mut slots: Vec<Option<T>> = self.slots.into_iter().collect();
        slots.rotate_left(self.cursor);
        slots.into_iter().flatten().collect()
    }
}

impl<T: Ord, const N: usize> RingBuffer<T, N> {
    /// Consume the buffer and return its values in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut values = self.into_vec();
        values.sort_unstable();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partially_filled_buffer_skips_unused_slots() {
        let mut ring: RingBuffer<u32, 4> = RingBuffer::new();
        assert!(ring.is_empty());
        ring.push(7);
        ring.push(3);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![7, 3]);
        assert_eq!(ring.into_sorted_vec(), vec![3, 7]);
    }

    #[test]
    fn push_overwrites_oldest_once_full() {
        let mut ring: RingBuffer<u32, 3> = RingBuffer::new();
        for value in 1..=5 {
            ring.push(value);
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(ring.into_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn sorting_is_separate_from_discovery_order() {
        let mut ring: RingBuffer<i64, 3> = RingBuffer::new();
        for value in [9, 1, 5, 2] {
            ring.push(value);
        }
        assert_eq!(ring.clone().into_vec(), vec![1, 5, 2]);
        assert_eq!(ring.into_sorted_vec(), vec![1, 2, 5]);
    }
}
