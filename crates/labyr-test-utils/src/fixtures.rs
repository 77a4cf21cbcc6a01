//! Fixture grids with known verdicts.
//!
//! - [`corner_example`]: the 3x3 grid whose entrances touch; both
//!   policies pass.
//! - [`stranded_example`]: same shape with the entrances separated;
//!   both policies fail.
//! - [`serpentine`]: a single winding corridor, worst case for stack
//!   depth.
//! - [`checkerboard`]: open cells never 4-touch; nothing but a cell
//!   itself is reachable.

use labyr_core::{Cell, Coord};
use labyr_grid::Grid;

/// Parse a text grid, panicking on malformed fixtures.
pub fn grid(text: &str) -> Grid {
    text.parse()
        .unwrap_or_else(|e| panic!("bad fixture grid {text:?}: {e}"))
}

/// ```text
/// ..#
/// #.#
/// #..
/// ```
///
/// Entrances `[(0,0), (0,1)]`, exits `[(2,1), (2,2)]`. The entrances are
/// 4-adjacent, so `(0,0)` reaches both exits through `(0,1)`. Paired and
/// any-exit both pass.
pub fn corner_example() -> Grid {
    grid("..#\n#.#\n#..")
}

/// ```text
/// .#.
/// ##.
/// #..
/// ```
///
/// Entrances `[(0,0), (0,2)]`, exits `[(2,1), (2,2)]`. `(0,0)` is walled
/// in. Paired (`(0,0)->(2,1)`) and any-exit both fail, although
/// `(0,2)` reaches both exits.
pub fn stranded_example() -> Grid {
    grid(".#.\n##.\n#..")
}

/// A `rows x cols` grid with one corridor snaking from `(0,0)` to the
/// bottom row.
///
/// Even rows are fully open; odd rows are walls except for a single gap
/// that alternates between the right and left edge. Every open cell lies
/// on the one corridor, so every entrance reaches every exit, but only
/// after walking most of the grid.
pub fn serpentine(rows: usize, cols: usize) -> Grid {
    Grid::from_fn(rows, cols, |Coord { row, col }| {
        if row % 2 == 0 {
            return Cell::Open;
        }
        let gap = if (row / 2) % 2 == 0 { cols - 1 } else { 0 };
        if col == gap {
            Cell::Open
        } else {
            Cell::Wall
        }
    })
    .unwrap_or_else(|e| panic!("serpentine {rows}x{cols}: {e}"))
}

/// A `rows x cols` grid with Open cells where `row + col` is even.
pub fn checkerboard(rows: usize, cols: usize) -> Grid {
    Grid::from_fn(rows, cols, |Coord { row, col }| {
        if (row + col) % 2 == 0 {
            Cell::Open
        } else {
            Cell::Wall
        }
    })
    .unwrap_or_else(|e| panic!("checkerboard {rows}x{cols}: {e}"))
}

/// All walls except the listed cells.
pub fn walls_except(rows: usize, cols: usize, open: &[Coord]) -> Grid {
    Grid::from_fn(rows, cols, |c| {
        if open.contains(&c) {
            Cell::Open
        } else {
            Cell::Wall
        }
    })
    .unwrap_or_else(|e| panic!("walls_except {rows}x{cols}: {e}"))
}
