//! Random wall placement with boundary reopening.
//!
//! Generation runs in three passes over a seeded ChaCha8 stream:
//!
//! 1. every cell, row-major, becomes a Wall with probability `wall_prob`;
//! 2. for each column left to right, a walled top-row cell and then a
//!    walled bottom-row cell are reopened with probability `reopen_prob`;
//! 3. with `guarantee_boundary`, a boundary row left fully walled gets one
//!    random cell reopened, so the maze has at least one entrance and one
//!    exit.
//!
//! Constructed via the builder pattern: [`MazeGenerator::builder`].

use crate::error::GenError;
use labyr_core::{Cell, GridError};
use labyr_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deterministic maze generator.
///
/// # Examples
///
/// ```
/// use labyr_gen::MazeGenerator;
///
/// let generator = MazeGenerator::builder()
///     .rows(20)
///     .cols(30)
///     .seed(42)
///     .guarantee_boundary(true)
///     .build()
///     .unwrap();
/// let maze = generator.generate().unwrap();
/// assert_eq!((maze.rows(), maze.cols()), (20, 30));
/// assert!(!maze.entrances().is_empty());
/// assert_eq!(maze, generator.generate().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
    wall_prob: f64,
    reopen_prob: f64,
    guarantee_boundary: bool,
    seed: u64,
}

/// Builder for [`MazeGenerator`].
///
/// Required fields: `rows` and `cols`.
pub struct MazeGeneratorBuilder {
    rows: Option<usize>,
    cols: Option<usize>,
    wall_prob: f64,
    reopen_prob: f64,
    guarantee_boundary: bool,
    seed: u64,
}

impl MazeGenerator {
    /// Create a new builder. Defaults: `wall_prob` 0.3, `reopen_prob`
    /// 0.5, no boundary guarantee, seed 0.
    pub fn builder() -> MazeGeneratorBuilder {
        MazeGeneratorBuilder {
            rows: None,
            cols: None,
            wall_prob: 0.3,
            reopen_prob: 0.5,
            guarantee_boundary: false,
            seed: 0,
        }
    }

    /// Number of rows generated.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns generated.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Seed of the RNG stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the maze for the configured seed.
    pub fn generate(&self) -> Result<Grid, GenError> {
        self.generate_with_seed(self.seed)
    }

    /// Generate the `n`-th maze of a family sharing this configuration.
    ///
    /// Uses seed `seed ^ n`, so `generate_nth(0)` equals `generate()`.
    pub fn generate_nth(&self, n: u64) -> Result<Grid, GenError> {
        self.generate_with_seed(self.seed ^ n)
    }

    fn generate_with_seed(&self, seed: u64) -> Result<Grid, GenError> {
        let (rows, cols) = (self.rows, self.cols);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cells = vec![Cell::Open; rows * cols];

        for cell in cells.iter_mut() {
            if rng.random_bool(self.wall_prob) {
                *cell = Cell::Wall;
            }
        }

        let top = 0;
        let bottom = (rows - 1) * cols;
        for col in 0..cols {
            for base in [top, bottom] {
                let cell = &mut cells[base + col];
                if *cell == Cell::Wall && rng.random_bool(self.reopen_prob) {
                    *cell = Cell::Open;
                }
            }
        }

        if self.guarantee_boundary {
            for base in [top, bottom] {
                let row = &mut cells[base..base + cols];
                if row.iter().all(|c| *c == Cell::Wall) {
                    row[rng.random_range(0..cols)] = Cell::Open;
                }
            }
        }

        Ok(Grid::from_fn(rows, cols, |c| cells[c.row * cols + c.col])?)
    }
}

impl MazeGeneratorBuilder {
    /// Set the row count. Required, must be > 0.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the column count. Required, must be > 0.
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Set the per-cell wall probability (default: 0.3).
    pub fn wall_prob(mut self, p: f64) -> Self {
        self.wall_prob = p;
        self
    }

    /// Set the probability that a walled boundary cell is reopened
    /// (default: 0.5).
    pub fn reopen_prob(mut self, p: f64) -> Self {
        self.reopen_prob = p;
        self
    }

    /// Force at least one Open cell in the top and bottom rows
    /// (default: false).
    pub fn guarantee_boundary(mut self, on: bool) -> Self {
        self.guarantee_boundary = on;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the generator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `rows` or `cols` is unset or zero
    /// - `rows * cols` overflows `usize`
    /// - either probability is NaN or outside `[0, 1]`
    pub fn build(self) -> Result<MazeGenerator, GenError> {
        let rows = self
            .rows
            .ok_or(GenError::MissingDimension { name: "rows" })?;
        let cols = self
            .cols
            .ok_or(GenError::MissingDimension { name: "cols" })?;
        if rows == 0 || cols == 0 {
            return Err(GenError::EmptyMaze);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(GridError::DimensionTooLarge { rows, cols }.into());
        }
        if !(0.0..=1.0).contains(&self.wall_prob) {
            return Err(GenError::InvalidWallProbability {
                value: self.wall_prob,
            });
        }
        if !(0.0..=1.0).contains(&self.reopen_prob) {
            return Err(GenError::InvalidReopenProbability {
                value: self.reopen_prob,
            });
        }
        Ok(MazeGenerator {
            rows,
            cols,
            wall_prob: self.wall_prob,
            reopen_prob: self.reopen_prob,
            guarantee_boundary: self.guarantee_boundary,
            seed: self.seed,
        })
    }
}

/// Draw a `(rows, cols)` pair, each uniformly in `1..=max`, from `seed`.
///
/// Returns `(1, 1)` when `max` is 0.
pub fn random_dimensions(seed: u64, max: usize) -> (usize, usize) {
    let max = max.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (rng.random_range(1..=max), rng.random_range(1..=max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn generator(rows: usize, cols: usize) -> MazeGeneratorBuilder {
        MazeGenerator::builder().rows(rows).cols(cols)
    }

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn build_requires_dimensions() {
        assert_eq!(
            MazeGenerator::builder().cols(3).build().unwrap_err(),
            GenError::MissingDimension { name: "rows" }
        );
        assert_eq!(
            MazeGenerator::builder().rows(3).build().unwrap_err(),
            GenError::MissingDimension { name: "cols" }
        );
    }

    #[test]
    fn build_rejects_zero_dimension() {
        assert_eq!(generator(0, 4).build().unwrap_err(), GenError::EmptyMaze);
        assert_eq!(generator(4, 0).build().unwrap_err(), GenError::EmptyMaze);
    }

    #[test]
    fn build_rejects_overflowing_area() {
        assert!(matches!(
            generator(usize::MAX, 2).build(),
            Err(GenError::Grid(GridError::DimensionTooLarge { .. }))
        ));
    }

    #[test]
    fn build_rejects_bad_probabilities() {
        assert!(matches!(
            generator(2, 2).wall_prob(1.5).build(),
            Err(GenError::InvalidWallProbability { .. })
        ));
        assert!(matches!(
            generator(2, 2).wall_prob(f64::NAN).build(),
            Err(GenError::InvalidWallProbability { .. })
        ));
        assert!(matches!(
            generator(2, 2).reopen_prob(-0.1).build(),
            Err(GenError::InvalidReopenProbability { .. })
        ));
    }

    // ---------------------------------------------------------------
    // Generation tests
    // ---------------------------------------------------------------

    #[test]
    fn same_seed_same_maze() {
        let g = generator(15, 25).seed(7).build().unwrap();
        assert_eq!(g.generate().unwrap(), g.generate().unwrap());
        assert_eq!(g.generate().unwrap(), g.generate_nth(0).unwrap());
        assert_eq!((g.rows(), g.cols(), g.seed()), (15, 25, 7));
    }

    #[test]
    fn different_seeds_differ() {
        let a = generator(20, 20).seed(1).build().unwrap().generate().unwrap();
        let b = generator(20, 20).seed(2).build().unwrap().generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_wall_prob_is_fully_open() {
        let g = generator(6, 9).wall_prob(0.0).build().unwrap();
        let maze = g.generate().unwrap();
        assert_eq!(maze.open_count(), 54);
    }

    #[test]
    fn solid_walls_without_reopen_stay_solid() {
        let g = generator(4, 4).wall_prob(1.0).reopen_prob(0.0).build().unwrap();
        let maze = g.generate().unwrap();
        assert_eq!(maze.open_count(), 0);
        assert!(maze.entrances().is_empty());
    }

    #[test]
    fn full_reopen_clears_boundary_rows() {
        let g = generator(5, 7).wall_prob(1.0).reopen_prob(1.0).build().unwrap();
        let maze = g.generate().unwrap();
        assert_eq!(maze.entrances().len(), 7);
        assert_eq!(maze.exits().len(), 7);
        assert_eq!(maze.open_count(), 14);
    }

    #[test]
    fn guarantee_opens_exactly_one_cell_per_walled_row() {
        let g = generator(4, 6)
            .wall_prob(1.0)
            .reopen_prob(0.0)
            .guarantee_boundary(true)
            .build()
            .unwrap();
        let maze = g.generate().unwrap();
        assert_eq!(maze.entrances().len(), 1);
        assert_eq!(maze.exits().len(), 1);
        assert_eq!(maze.open_count(), 2);
    }

    #[test]
    fn single_row_guarantee_shares_the_row() {
        let g = generator(1, 5)
            .wall_prob(1.0)
            .reopen_prob(0.0)
            .guarantee_boundary(true)
            .build()
            .unwrap();
        let maze = g.generate().unwrap();
        assert_eq!(maze.open_count(), 1);
        assert_eq!(maze.entrances(), maze.exits());
    }

    #[test]
    fn random_dimensions_in_range_and_deterministic() {
        for seed in 0..50 {
            let (r, c) = random_dimensions(seed, 100);
            assert!((1..=100).contains(&r));
            assert!((1..=100).contains(&c));
            assert_eq!((r, c), random_dimensions(seed, 100));
        }
        assert_eq!(random_dimensions(3, 0), (1, 1));
    }

    proptest! {
        #[test]
        fn guaranteed_mazes_have_boundary_cells(
            rows in 1usize..30,
            cols in 1usize..30,
            wall in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let maze = generator(rows, cols)
                .wall_prob(wall)
                .guarantee_boundary(true)
                .seed(seed)
                .build()
                .unwrap()
                .generate()
                .unwrap();
            prop_assert_eq!(maze.rows(), rows);
            prop_assert_eq!(maze.cols(), cols);
            prop_assert!(!maze.entrances().is_empty());
            prop_assert!(!maze.exits().is_empty());
        }
    }
}
