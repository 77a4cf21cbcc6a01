//! Error types for grid construction and stack access.
//!
//! Reachability itself never fails: invalid endpoints and empty grids are
//! reported as a negative verdict. The errors here cover the two places
//! where something can genuinely be malformed: the input matrix handed to
//! a grid constructor, and a pop on an empty stack.

use std::error::Error;
use std::fmt;

/// Errors raised while building a grid from caller-supplied data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A binary matrix entry is neither 0 nor 1.
    InvalidCell {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// A text grid contains a character outside `0 1 . #`.
    InvalidSymbol {
        /// Row (line, after blank lines are skipped) of the character.
        row: usize,
        /// Column of the character.
        col: usize,
        /// The rejected character.
        symbol: char,
    },
    /// `rows * cols` does not fit in `usize`.
    DimensionTooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell ({row}, {col}) has value {value}, expected 0 or 1")
            }
            Self::InvalidSymbol { row, col, symbol } => {
                write!(f, "cell ({row}, {col}) has symbol {symbol:?}, expected one of 0 1 . #")
            }
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells overflows usize")
            }
        }
    }
}

impl Error for GridError {}

/// A pop was attempted on an empty stack.
///
/// The traversal engine checks emptiness before every pop, so seeing this
/// from a search indicates an engine bug rather than bad input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyStackError;

impl fmt::Display for EmptyStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pop from empty stack")
    }
}

impl Error for EmptyStackError {}
