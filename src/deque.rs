//! A double-ended queue over a growable circular buffer.
//!
//! Storage is a slot array indexed modulo its capacity. A head offset marks
//! the front; logical position `i` lives in slot `(head + i) % capacity`.
//! When the buffer fills up, the elements are moved into a larger slot array
//! starting at offset zero, so insertion at either end stays amortized O(1).

use crate::error::{CollectionError, Result};

/// Initial capacity allocated on the first insertion into an empty buffer.
const MIN_CAPACITY: usize = 8;

/// A double-ended queue: elements enter and leave at the front or the back.
pub struct Deque<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Deque<T> {
    /// Creates an empty deque. No allocation happens until the first insertion.
    pub fn new() -> Self {
        Deque {
            slots: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty deque with room for at least `capacity` elements
    /// before the first regrowth.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        Deque {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index backing logical position `logical`. Callers must ensure the
    /// buffer has non-zero capacity.
    fn slot(&self, logical: usize) -> usize {
        (self.head + logical) % self.slots.len()
    }

    /// Moves every element into a larger slot array, front element first, and
    /// resets the head offset to zero.
    fn grow(&mut self) {
        let old_cap = self.capacity();
        let new_cap = if old_cap == 0 {
            MIN_CAPACITY
        } else {
            old_cap * 2
        };

        let mut slots = Vec::with_capacity(new_cap);
        for logical in 0..self.len {
            let idx = (self.head + logical) % old_cap;
            slots.push(self.slots[idx].take());
        }
        slots.resize_with(new_cap, || None);

        self.slots = slots;
        self.head = 0;
    }

    /// Inserts `value` at the front.
    pub fn add_first(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let cap = self.capacity();
        self.head = (self.head + cap - 1) % cap;
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at the back.
    pub fn add_last(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at the back; alias of [`add_last`](Self::add_last).
    pub fn add(&mut self, value: T) {
        self.add_last(value);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] when the deque is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        let value = self.slots[self.head]
            .take()
            .expect("front slot vacant despite non-zero length");
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] when the deque is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        self.len -= 1;
        let tail = self.slot(self.len);
        let value = self.slots[tail]
            .take()
            .expect("back slot vacant despite non-zero length");
        Ok(value)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}
