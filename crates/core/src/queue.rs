//! Fixed-capacity FIFO queue over a circular backing array.
//!
//! Head index plus length give O(1) enqueue/dequeue with wraparound
//! indexing; elements are never shifted and nothing reallocates.

use arrayvec::CapacityError;

#[derive(Debug, Clone)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    len: usize,
}

impl<T, const N: usize> BoundedQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Append at the logical tail. Rejects the value when already at capacity.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        let tail = (self.head + self.len) % N;
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the logical head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        value
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.peek_at(0)
    }

    /// Element at `offset` from the head (0 = head), without removing it.
    pub fn peek_at(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % N].as_ref()
    }

    /// Mutable access at `offset` from the head, for in-place exchanges.
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % N].as_mut()
    }

    /// Walk the queue head to tail. Restartable: each call re-walks from the
    /// current head.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % N].as_ref())
    }
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
