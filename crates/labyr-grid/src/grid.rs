//! Immutable rectangular wall grid with 4-connected neighbourhood.

use crate::visited::VisitedSet;
use labyr_core::{Cell, Coord, GridError, STEPS};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A rectangular matrix of [`Cell`]s.
///
/// Cells are stored row-major. Coordinate `(row, col)` is valid when
/// `row < rows` and `col < cols`. A grid without cells is legal and has
/// no entrances or exits. Every constructor collapses it to
/// [`Grid::empty`], so `rows` and `cols` are either both zero or both
/// positive, and the text form round-trips.
///
/// Grids are never mutated after construction, so a `&Grid` may be
/// shared freely, including across threads.
///
/// # Examples
///
/// ```
/// use labyr_core::Coord;
/// use labyr_grid::Grid;
///
/// let grid = Grid::from_rows(&[[0u8, 0, 1], [1, 0, 1], [1, 0, 0]]).unwrap();
/// assert_eq!(grid.entrances(), vec![Coord::new(0, 0), Coord::new(0, 1)]);
/// assert_eq!(grid.exits(), vec![Coord::new(2, 1), Coord::new(2, 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// The grid with zero rows and zero columns.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// A `rows * cols` grid where every cell is `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Result<Self, GridError> {
        let n = checked_area(rows, cols)?;
        Ok(Self::shaped(rows, cols, vec![cell; n]))
    }

    /// A `rows * cols` grid with no walls.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::filled(rows, cols, Cell::Open)
    }

    /// Build a grid by evaluating `f` for every coordinate in row-major
    /// order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Coord) -> Cell,
    ) -> Result<Self, GridError> {
        let n = checked_area(rows, cols)?;
        let mut cells = Vec::with_capacity(n);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(Coord::new(row, col)));
            }
        }
        Ok(Self::shaped(rows, cols, cells))
    }

    /// Build a grid from the binary matrix encoding (0 = Open, 1 = Wall).
    ///
    /// All rows must have the length of the first row. An empty slice
    /// yields the empty grid.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let n = checked_area(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(n);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::from_bit(value).ok_or(GridError::InvalidCell {
                    row: r,
                    col: c,
                    value,
                })?;
                cells.push(cell);
            }
        }
        Ok(Self::shaped(rows.len(), cols, cells))
    }

    fn shaped(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        if cells.is_empty() {
            return Self::empty();
        }
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of Open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            Some(self.cells[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    /// Whether `coord` is in bounds and Open.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_open)
    }

    /// Admission gate for traversal expansion: `coord` is in bounds, Open,
    /// and not yet marked in `visited`.
    pub fn is_open_and_unvisited(&self, visited: &VisitedSet, coord: Coord) -> bool {
        self.is_open(coord) && !visited.is_visited(coord)
    }

    /// A fresh all-unvisited overlay shaped like this grid.
    pub fn visited_set(&self) -> VisitedSet {
        VisitedSet::new(self.rows, self.cols)
    }

    /// In-bounds 4-connected neighbours of `coord`, in expansion order
    /// (+col, +row, -col, -row). Walls are not filtered out.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        STEPS
            .iter()
            .filter_map(|&s| coord.step(s))
            .filter(|&n| self.contains(n))
            .collect()
    }

    fn open_cells_in_row(&self, row: usize) -> Vec<Coord> {
        (0..self.cols)
            .map(|col| Coord::new(row, col))
            .filter(|&c| self.is_open(c))
            .collect()
    }

    /// Open cells of the top row, left to right.
    pub fn entrances(&self) -> Vec<Coord> {
        if self.rows == 0 {
            return Vec::new();
        }
        self.open_cells_in_row(0)
    }

    /// Open cells of the bottom row, left to right.
    pub fn exits(&self) -> Vec<Coord> {
        match self.rows.checked_sub(1) {
            Some(last) => self.open_cells_in_row(last),
            None => Vec::new(),
        }
    }

}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

fn checked_area(rows: usize, cols: usize) -> Result<usize, GridError> {
    rows.checked_mul(cols)
        .ok_or(GridError::DimensionTooLarge { rows, cols })
}

/// Text form: one row per line, `0`/`.` Open and `1`/`#` Wall.
///
/// Whitespace inside and around lines is ignored, as are blank lines, so
/// both `"0 1\n0 0"` and `".#\n.."` describe the same grid.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cols = None;
        let mut rows = 0usize;
        let mut cells = Vec::new();
        for line in s.lines() {
            let symbols: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if symbols.is_empty() {
                continue;
            }
            let expected = *cols.get_or_insert(symbols.len());
            if symbols.len() != expected {
                return Err(GridError::RaggedRow {
                    row: rows,
                    expected,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::InvalidSymbol {
                    row: rows,
                    col,
                    symbol,
                })?;
                cells.push(cell);
            }
            rows += 1;
        }
        Ok(Self {
            rows,
            cols: cols.unwrap_or(0),
            cells,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
