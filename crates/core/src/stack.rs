//! Fixed-capacity LIFO stack backed by inline `ArrayVec` storage.

use arrayvec::{ArrayVec, CapacityError};

#[derive(Debug, Clone, Default)]
pub struct BoundedStack<T, const M: usize> {
    items: ArrayVec<T, M>,
}

impl<T, const M: usize> BoundedStack<T, M> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        M
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Place on top. Rejects the value when already at capacity.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.items.try_push(value)
    }

    /// Remove and return the top, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek_top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Element at `depth` below the top (0 = top), without removing it.
    pub fn peek_at(&self, depth: usize) -> Option<&T> {
        let index = self.items.len().checked_sub(1 + depth)?;
        self.items.get(index)
    }

    /// Mutable access at `depth` below the top, for in-place exchanges.
    pub fn get_mut_from_top(&mut self, depth: usize) -> Option<&mut T> {
        let index = self.items.len().checked_sub(1 + depth)?;
        self.items.get_mut(index)
    }

    /// Walk the stack top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}
