//! Linked-node stack.

use crate::stack::Stack;
use labyr_core::EmptyStackError;

struct Node<T> {
    item: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A stack backed by a singly linked chain of heap nodes.
///
/// Every push allocates one node and every pop frees one. The top of the
/// stack is the head of the chain.
pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
    }

    fn pop(&mut self) -> Result<T, EmptyStackError> {
        let node = self.head.take().ok_or(EmptyStackError)?;
        let Node { item, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(item)
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.item)
    }
}

// Unlink node by node; the default recursive drop of `Box<Node>` chains
// overflows the thread stack on long chains.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Top-to-bottom iterator over a [`LinkedStack`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut s = LinkedStack::new();
        for i in 0..5 {
            s.push(i);
        }
        assert_eq!(s.len(), 5);
        assert_eq!(s.peek(), Some(&4));
        for i in (0..5).rev() {
            assert_eq!(s.pop(), Ok(i));
        }
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(EmptyStackError));
    }

    #[test]
    fn iter_runs_top_to_bottom() {
        let mut s = LinkedStack::new();
        s.push('a');
        s.push('b');
        s.push('c');
        let seen: Vec<char> = s.iter().copied().collect();
        assert_eq!(seen, vec!['c', 'b', 'a']);
        assert_eq!(format!("{s:?}"), "['c', 'b', 'a']");
    }

    #[test]
    fn clear_via_default_method() {
        let mut s = LinkedStack::new();
        s.push(1u32);
        s.push(2);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn dropping_long_chain_does_not_overflow() {
        let mut s = LinkedStack::new();
        for i in 0..1_000_000u32 {
            s.push(i);
        }
        drop(s);
    }
}
