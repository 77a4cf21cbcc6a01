//! Per-search visited overlay.

use labyr_core::Coord;

/// Boolean overlay with the same shape as a grid, recording which cells a
/// single traversal has already expanded.
///
/// A `VisitedSet` belongs to exactly one search. The traversal engine
/// allocates a fresh one per call, so state from one search can never
/// leak into the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedSet {
    rows: usize,
    cols: usize,
    marks: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// An all-unvisited overlay of `rows * cols` cells.
    ///
    /// The caller guarantees `rows * cols` fits in `usize`; [`Grid`]
    /// construction already enforces this for every grid that exists.
    ///
    /// [`Grid`]: crate::Grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            marks: vec![false; rows * cols],
            count: 0,
        }
    }

    /// Number of rows covered.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns covered.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Whether `coord` has been marked. Out-of-range coordinates are
    /// reported as unvisited.
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.marks[i])
    }

    /// Mark `coord` as visited.
    ///
    /// Returns `true` if the cell was newly marked, `false` if it was
    /// already marked or lies outside the overlay.
    pub fn mark(&mut self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(i) if !self.marks[i] => {
                self.marks[i] = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reset every cell to unvisited, keeping the allocation.
    pub fn clear(&mut self) {
        self.marks.fill(false);
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_is_idempotent() {
        let mut v = VisitedSet::new(2, 3);
        let c = Coord::new(1, 2);
        assert!(!v.is_visited(c));
        assert!(v.mark(c));
        assert!(!v.mark(c));
        assert!(v.is_visited(c));
        assert_eq!(v.count(), 1);
    }

    #[test]
    fn out_of_range_is_never_visited() {
        let mut v = VisitedSet::new(2, 2);
        assert!(!v.mark(Coord::new(2, 0)));
        assert!(!v.mark(Coord::new(0, 2)));
        assert!(!v.is_visited(Coord::new(5, 5)));
        assert_eq!(v.count(), 0);
    }

    #[test]
    fn clear_resets_marks_and_count() {
        let mut v = VisitedSet::new(3, 3);
        v.mark(Coord::new(0, 0));
        v.mark(Coord::new(2, 2));
        v.clear();
        assert_eq!(v.count(), 0);
        assert!(!v.is_visited(Coord::new(0, 0)));
        assert!(!v.is_visited(Coord::new(2, 2)));
    }

    #[test]
    fn zero_sized_overlay() {
        let v = VisitedSet::new(0, 0);
        assert!(!v.is_visited(Coord::new(0, 0)));
        assert_eq!(v.rows(), 0);
        assert_eq!(v.cols(), 0);
    }
}
