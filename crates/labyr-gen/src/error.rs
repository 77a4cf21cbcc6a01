//! Generator configuration errors.

use labyr_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors detected by [`MazeGeneratorBuilder::build`](crate::MazeGeneratorBuilder::build)
/// or raised while assembling a generated grid.
#[derive(Clone, Debug, PartialEq)]
pub enum GenError {
    /// `rows` or `cols` was not set.
    MissingDimension {
        /// Which dimension is missing.
        name: &'static str,
    },
    /// A dimension is zero.
    EmptyMaze,
    /// `wall_prob` is NaN or outside `[0, 1]`.
    InvalidWallProbability {
        /// The rejected value.
        value: f64,
    },
    /// `reopen_prob` is NaN or outside `[0, 1]`.
    InvalidReopenProbability {
        /// The rejected value.
        value: f64,
    },
    /// The grid could not be assembled.
    Grid(GridError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDimension { name } => write!(f, "{name} is required"),
            Self::EmptyMaze => write!(f, "maze must have at least one row and one column"),
            Self::InvalidWallProbability { value } => {
                write!(f, "wall_prob must be within [0, 1], got {value}")
            }
            Self::InvalidReopenProbability { value } => {
                write!(f, "reopen_prob must be within [0, 1], got {value}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for GenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
