//! The `Stack` trait.

use labyr_core::EmptyStackError;

/// Last-in-first-out container.
///
/// The most recently pushed item is the next one popped; no other
/// ordering is promised. Implementations must be observably identical
/// through this interface: for any sequence of operations, every backing
/// returns the same values and errors.
///
/// `Default` constructs an empty stack, which is how the traversal engine
/// obtains a fresh instance per search.
pub trait Stack<T>: Default {
    /// Push `item` on top.
    fn push(&mut self, item: T);

    /// Remove and return the top item.
    ///
    /// Returns `Err(EmptyStackError)` when the stack is empty. Callers
    /// that loop on [`is_empty`](Self::is_empty) never see the error.
    fn pop(&mut self) -> Result<T, EmptyStackError>;

    /// Whether the stack holds no items.
    fn is_empty(&self) -> bool;

    /// Number of items held.
    fn len(&self) -> usize;

    /// The top item, without removing it.
    fn peek(&self) -> Option<&T>;

    /// Drop every item.
    fn clear(&mut self) {
        while self.pop().is_ok() {}
    }
}
