//! Seeded random maze generation for labyr.
//!
//! [`MazeGenerator`] produces [`Grid`](labyr_grid::Grid)s for demos and
//! benchmarks. Output is a pure function of the configuration: the same
//! seed always yields the same maze.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generator;

pub use error::GenError;
pub use generator::{random_dimensions, MazeGenerator, MazeGeneratorBuilder};
