//! Reachability search for labyr.
//!
//! - [`engine`]: depth-first traversal from one cell to another, generic
//!   over the [`Stack`](labyr_stack::Stack) backing
//! - [`policy`]: the paired and any-exit entrance/exit policies
//! - [`report`]: per-entrance breakdown of a policy run
//! - [`config`]: [`SolverConfig`] and the [`Solver`] front end
//!
//! # Example
//!
//! ```
//! use labyr_grid::Grid;
//! use labyr_search::{solve, Policy};
//! use labyr_stack::StackKind;
//!
//! let grid: Grid = "..#\n#.#\n#..".parse().unwrap();
//! for kind in StackKind::ALL {
//!     assert!(solve(&grid, Policy::Paired, kind));
//!     assert!(solve(&grid, Policy::AnyExit, kind));
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod policy;
pub mod report;

pub use config::{ConfigError, Solver, SolverConfig};
pub use engine::{search, search_stats, search_with, search_with_stats, SearchOutcome};
pub use policy::{solve, Policy, UnknownPolicy};
pub use report::{report, EntranceVerdict, PolicyReport};
