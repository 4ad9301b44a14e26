//! Fixed-capacity history of accepted lines.

use crate::error::{Error, Result};

/// Circular store of previously accepted lines, oldest at `head`, newest at
/// `tail`.
///
/// Once full, every push evicts the oldest line.
#[derive(Debug)]
pub struct HistoryRing {
    slots: Vec<Option<String>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl HistoryRing {
    /// Creates an empty ring holding at most `capacity` lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroHistoryCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroHistoryCapacity);
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    pub fn push(&mut self, line: String) {
        let capacity = self.slots.len();

        if self.count == 0 {
            self.slots[self.head] = Some(line);
            self.tail = self.head;
            self.count = 1;
        } else if self.count < capacity {
            self.tail = (self.tail + 1) % capacity;
            self.slots[self.tail] = Some(line);
            self.count += 1;
        } else {
            // Full: the head slot is the oldest and becomes the newest
            self.slots[self.head] = Some(line);
            self.tail = self.head;
            self.head = (self.head + 1) % capacity;
        }
    }

    /// Line `depth` steps back from the newest one (0 = most recent).
    #[must_use]
    pub fn read_at(&self, depth: usize) -> Option<&str> {
        if depth >= self.count {
            return None;
        }

        let capacity = self.slots.len();
        let index = (self.tail + capacity - depth) % capacity;
        self.slots[index].as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        (0..self.count).rev().filter_map(move |depth| self.read_at(depth))
    }
}
