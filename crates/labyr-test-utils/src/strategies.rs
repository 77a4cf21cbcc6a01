//! Proptest strategies for random grids.

use labyr_core::{Cell, Coord};
use labyr_grid::Grid;
use proptest::prelude::*;

/// Grids of `1..=max_rows` by `1..=max_cols` cells, each cell a Wall with
/// roughly `wall_percent`% probability.
pub fn arb_grid_sized(
    max_rows: usize,
    max_cols: usize,
    wall_percent: u8,
) -> impl Strategy<Value = Grid> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(move |(rows, cols)| {
        proptest::collection::vec(0u8..100, rows * cols).prop_map(move |rolls| {
            Grid::from_fn(rows, cols, |Coord { row, col }| {
                if rolls[row * cols + col] < wall_percent {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .unwrap_or_else(|e| panic!("arb_grid {rows}x{cols}: {e}"))
        })
    })
}

/// Grids up to 12x12 with about 35% walls.
pub fn arb_grid() -> impl Strategy<Value = Grid> {
    arb_grid_sized(12, 12, 35)
}

/// A grid together with two coordinates inside it.
pub fn arb_grid_with_endpoints() -> impl Strategy<Value = (Grid, Coord, Coord)> {
    arb_grid().prop_flat_map(|g| {
        let (rows, cols) = (g.rows(), g.cols());
        (Just(g), 0..rows, 0..cols, 0..rows, 0..cols)
            .prop_map(|(g, sr, sc, tr, tc)| (g, Coord::new(sr, sc), Coord::new(tr, tc)))
    })
}
