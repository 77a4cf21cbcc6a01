//! Standard-library deque used as a stack.

use crate::stack::Stack;
use labyr_core::EmptyStackError;
use std::collections::VecDeque;

/// A stack over the standard library's ring-buffer deque.
///
/// Items are pushed and popped at the back only.
#[derive(Clone, Debug)]
pub struct DequeStack<T> {
    items: VecDeque<T>,
}

impl<T> DequeStack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for DequeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for DequeStack<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.items.pop_back().ok_or(EmptyStackError)
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
        self.items.back()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
