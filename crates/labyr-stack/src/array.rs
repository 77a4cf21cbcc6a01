//! Contiguous-buffer stack.

use crate::stack::Stack;
use labyr_core::EmptyStackError;

/// A stack backed by a growable contiguous buffer.
///
/// Push and pop are amortised O(1) at the tail of a `Vec`; no per-item
/// allocation.
#[derive(Clone, Debug)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// An empty stack with room for `capacity` items before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Current buffer capacity.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.items.pop().ok_or(EmptyStackError)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
