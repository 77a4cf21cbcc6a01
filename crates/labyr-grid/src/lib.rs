//! Grid model for labyr.
//!
//! A [`Grid`] is an immutable rectangular matrix of [`Cell`]s with
//! boundary queries for entrances (open cells of the top row) and exits
//! (open cells of the bottom row). A [`VisitedSet`] is the per-search
//! overlay that the admission gate
//! [`Grid::is_open_and_unvisited`] consults.
//!
//! [`Cell`]: labyr_core::Cell

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod visited;

pub use grid::Grid;
pub use visited::VisitedSet;
