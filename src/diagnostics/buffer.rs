// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer holding the most recent lifecycle events.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity buffer that evicts its oldest entry when full.
///
/// Elements are kept in chronological order (oldest first). The buffer also
/// counts how many entries it has evicted, so a report can tell a quiet
/// session from one that overflowed.
///
/// # Example
///
/// ```
/// use batch_notify::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push(1);
/// buffer.push(2);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2]);
/// assert_eq!(buffer.evicted(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `item`, dropping the oldest entry first if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity && self.data.pop_front().is_some() {
            self.evicted += 1;
        }
        self.data.push_back(item);
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Most entries the buffer will hold before evicting.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries pushed out by overflow since creation or the last `clear`.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Drops every entry and resets the eviction count. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
        self.evicted = 0;
    }
}
