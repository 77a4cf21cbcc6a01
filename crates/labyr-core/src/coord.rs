//! Grid coordinates and the 4-connected step relation.

use std::fmt;

/// A cell position `(row, col)` in a grid.
///
/// Both axes are unsigned, so a coordinate can never point above or to
/// the left of the grid. Whether it lies inside a particular grid's
/// bottom/right bounds is checked by the grid itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, 0 is the top row.
    pub row: usize,
    /// Column index, 0 is the leftmost column.
    pub col: usize,
}

impl Coord {
    /// Construct a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in `step`'s direction.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant
    /// (row or column below zero) or overflow `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyr_core::{Coord, Step};
    ///
    /// let c = Coord::new(0, 3);
    /// assert_eq!(c.step(Step::Right), Some(Coord::new(0, 4)));
    /// assert_eq!(c.step(Step::Up), None);
    /// ```
    pub fn step(self, step: Step) -> Option<Self> {
        let (dr, dc) = step.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

/// One of the four cardinal moves of the 4-connected neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// `+col`
    Right,
    /// `+row`
    Down,
    /// `-col`
    Left,
    /// `-row`
    Up,
}

impl Step {
    /// `(d_row, d_col)` offset of this step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }
}

/// Neighbour expansion order used by the traversal engine.
///
/// The order decides which of several equally valid routes is explored
/// first. It never changes whether a target is reachable.
pub const STEPS: [Step; 4] = [Step::Right, Step::Down, Step::Left, Step::Up];
