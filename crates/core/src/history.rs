//! History module - the last few scored guesses
//!
//! A fixed-capacity ring: slots are reused in place and a push into a full
//! buffer evicts the oldest entry. Nothing here allocates.

use std::iter::FusedIterator;

use serde::Serialize;

use crate::types::{Guess, ScoreResult, HISTORY_CAPACITY};

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub score: ScoreResult,
}

impl HistoryEntry {
    pub fn new(guess: Guess, score: ScoreResult) -> Self {
        Self { guess, score }
    }
}

/// Circular buffer of the most recent [`HISTORY_CAPACITY`] guesses.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    slots: [Option<HistoryEntry>; HISTORY_CAPACITY],
    /// Slot of the oldest entry.
    front: usize,
    len: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            front: 0,
            len: 0,
        }
    }

    /// Append `entry` as the newest element.
    ///
    /// When the buffer is full the oldest entry is evicted first and returned.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.is_full() {
            let oldest = self.slots[self.front].take();
            self.front = (self.front + 1) % HISTORY_CAPACITY;
            self.len -= 1;
            oldest
        } else {
            None
        };

        let back = (self.front + self.len) % HISTORY_CAPACITY;
        self.slots[back] = Some(entry);
        self.len += 1;
        evicted
    }

    /// Most recent entry, if any.
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.newest_first().next()
    }

    /// Entries from the most recent push back to the oldest retained one.
    ///
    /// Each call returns a fresh iterator over the current contents.
    pub fn newest_first(&self) -> NewestFirst<'_> {
        NewestFirst {
            buffer: self,
            remaining: self.len,
        }
    }

    /// Entries in arrival order.
    pub fn oldest_first(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + '_ {
        (0..self.len).filter_map(move |i| self.slot(i))
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == HISTORY_CAPACITY
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// Entry `offset` places after the oldest one.
    fn slot(&self, offset: usize) -> Option<&HistoryEntry> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.front + offset) % HISTORY_CAPACITY].as_ref()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`HistoryBuffer::newest_first`].
#[derive(Debug, Clone)]
pub struct NewestFirst<'a> {
    buffer: &'a HistoryBuffer,
    remaining: usize,
}

impl<'a> Iterator for NewestFirst<'a> {
    type Item = &'a HistoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.buffer.slot(self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for NewestFirst<'_> {}

impl FusedIterator for NewestFirst<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Code;

    fn entry(n: u8) -> HistoryEntry {
        HistoryEntry::new(
            Code::from_digits(&[n, n, n]).unwrap(),
            ScoreResult::new(0, n % 4),
        )
    }

    fn guesses_newest_first(buffer: &HistoryBuffer) -> Vec<u8> {
        buffer.newest_first().map(|e| e.guess.digits()[0]).collect()
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = HistoryBuffer::new();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.newest().is_none());
        assert_eq!(buffer.newest_first().count(), 0);
    }

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let mut buffer = HistoryBuffer::new();
        for n in 1..=3 {
            assert!(buffer.push(entry(n)).is_none());
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(guesses_newest_first(&buffer), vec![3, 2, 1]);
        assert_eq!(buffer.newest(), Some(&entry(3)));
    }

    #[test]
    fn test_seven_pushes_keep_last_five() {
        let mut buffer = HistoryBuffer::new();
        let mut evicted = Vec::new();
        for n in 1..=7 {
            if let Some(old) = buffer.push(entry(n)) {
                evicted.push(old.guess.digits()[0]);
            }
        }

        assert!(buffer.is_full());
        assert_eq!(buffer.len(), 5);
        assert_eq!(guesses_newest_first(&buffer), vec![7, 6, 5, 4, 3]);
        assert_eq!(evicted, vec![1, 2]);
        assert!(buffer.newest_first().all(|e| e.guess.digits()[0] > 2));
    }

    #[test]
    fn test_wraparound_many_times() {
        let mut buffer = HistoryBuffer::new();
        for n in 0..23 {
            buffer.push(entry(n));
        }
        assert_eq!(guesses_newest_first(&buffer), vec![22, 21, 20, 19, 18]);
        let oldest: Vec<u8> = buffer.oldest_first().map(|e| e.guess.digits()[0]).collect();
        assert_eq!(oldest, vec![18, 19, 20, 21, 22]);
    }

    #[test]
    fn test_newest_first_is_restartable_and_exact_size() {
        let mut buffer = HistoryBuffer::new();
        for n in 1..=4 {
            buffer.push(entry(n));
        }
        let iter = buffer.newest_first();
        assert_eq!(iter.len(), 4);
        assert_eq!(guesses_newest_first(&buffer), guesses_newest_first(&buffer));
    }

    #[test]
    fn test_clear_resets() {
        let mut buffer = HistoryBuffer::new();
        for n in 1..=6 {
            buffer.push(entry(n));
        }
        buffer.clear();
        assert!(buffer.is_empty());

        buffer.push(entry(9));
        assert_eq!(guesses_newest_first(&buffer), vec![9]);
    }
}
