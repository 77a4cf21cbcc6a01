//! LIFO stacks for the labyr traversal engine.
//!
//! The engine is written once against the [`Stack`] trait and run over
//! one of three storage strategies with identical semantics:
//!
//! - [`ArrayStack`]: growable contiguous buffer (`Vec`)
//! - [`LinkedStack`]: singly linked chain of boxed nodes
//! - [`DequeStack`]: the standard library's `VecDeque`, used at one end
//!
//! [`StackKind`] names a backing as a configuration value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod deque;
pub mod kind;
pub mod linked;
pub mod stack;

pub use array::ArrayStack;
pub use deque::DequeStack;
pub use kind::{StackKind, UnknownStackKind};
pub use labyr_core::EmptyStackError;
pub use linked::LinkedStack;
pub use stack::Stack;
