//! Labyr: entrance-to-exit reachability in grid mazes.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! labyr sub-crates. For most users, adding `labyr` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use labyr::prelude::*;
//!
//! // 0 = Open, 1 = Wall. Entrances are the open top-row cells, exits the
//! // open bottom-row cells.
//! let grid = Grid::from_rows(&[
//!     [0u8, 1, 0, 0],
//!     [0, 1, 0, 1],
//!     [0, 0, 0, 1],
//!     [1, 1, 0, 1],
//!     [0, 1, 0, 1],
//! ])
//! .unwrap();
//! assert_eq!(grid.entrances().len(), 3);
//! assert_eq!(grid.exits(), vec![Coord::new(4, 0), Coord::new(4, 2)]);
//!
//! for stack in StackKind::ALL {
//!     // (0,0) cannot reach its paired exit (4,0)...
//!     assert!(!solve(&grid, Policy::Paired, stack));
//!     // ...but every entrance reaches some exit.
//!     assert!(solve(&grid, Policy::AnyExit, stack));
//! }
//!
//! let report = Solver::new(SolverConfig::default()).report(&grid);
//! assert_eq!(report.stranded().collect::<Vec<_>>(), vec![Coord::new(0, 0)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `labyr-core` | `Coord`, `Step`, `Cell`, error types |
//! | [`grid`] | `labyr-grid` | `Grid` and the visited overlay |
//! | [`stack`] | `labyr-stack` | `Stack` trait and the three backings |
//! | [`search`] | `labyr-search` | DFS engine, policies, reports, solver config |
//! | [`gen`] | `labyr-gen` | Seeded random maze generation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, cells, and error types (`labyr-core`).
pub use labyr_core as types;

/// Grid storage, neighbour enumeration, and the visited overlay
/// (`labyr-grid`).
pub use labyr_grid as grid;

/// The [`stack::Stack`] trait and its backings [`stack::ArrayStack`],
/// [`stack::LinkedStack`], and [`stack::DequeStack`] (`labyr-stack`).
pub use labyr_stack as stack;

/// Depth-first reachability and the entrance/exit policies
/// (`labyr-search`).
pub use labyr_search as search;

/// Seeded maze generation (`labyr-gen`).
///
/// [`gen::MazeGenerator`] is configured through its builder and yields the
/// same grid for the same seed.
pub use labyr_gen as gen;

/// Common imports for typical labyr usage.
///
/// ```rust
/// use labyr::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use labyr_core::{Cell, Coord};

    // Errors
    pub use labyr_core::{EmptyStackError, GridError};
    pub use labyr_gen::GenError;
    pub use labyr_search::ConfigError;

    // Grid
    pub use labyr_grid::Grid;

    // Stacks
    pub use labyr_stack::{Stack, StackKind};

    // Search
    pub use labyr_search::{
        report, search, solve, Policy, PolicyReport, SearchOutcome, Solver, SolverConfig,
    };

    // Generation
    pub use labyr_gen::MazeGenerator;
}
