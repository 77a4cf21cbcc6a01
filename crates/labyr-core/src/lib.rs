//! Core types for the labyr reachability solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid
//! coordinates, cell states, and the error types raised while building
//! grids or draining stacks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;

pub use cell::Cell;
pub use coord::{Coord, Step, STEPS};
pub use error::{EmptyStackError, GridError};
