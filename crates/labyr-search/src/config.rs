//! Solver configuration and the [`Solver`] front end.
//!
//! [`SolverConfig`] selects the policy and the stack backing. Neither
//! choice is stored alongside any search state: a [`Solver`] holds only
//! its configuration, and every call allocates its own visited overlay
//! and stack, so one solver can be reused for any number of grids.

use crate::policy::{solve, Policy, UnknownPolicy};
use crate::report::{report, PolicyReport};
use labyr_grid::Grid;
use labyr_stack::{StackKind, UnknownStackKind};
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a [`SolverConfig`] from names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The stack name is not recognised.
    StackKind(UnknownStackKind),
    /// The policy name is not recognised.
    Policy(UnknownPolicy),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackKind(e) => write!(f, "stack: {e}"),
            Self::Policy(e) => write!(f, "policy: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StackKind(e) => Some(e),
            Self::Policy(e) => Some(e),
        }
    }
}

impl From<UnknownStackKind> for ConfigError {
    fn from(e: UnknownStackKind) -> Self {
        Self::StackKind(e)
    }
}

impl From<UnknownPolicy> for ConfigError {
    fn from(e: UnknownPolicy) -> Self {
        Self::Policy(e)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Which policy to evaluate and which stack backing to search with.
///
/// Defaults to [`Policy::Paired`] over [`StackKind::Array`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SolverConfig {
    /// Entrance/exit matching policy.
    pub policy: Policy,
    /// Stack backing for every search.
    pub stack: StackKind,
}

impl SolverConfig {
    /// Parse a configuration from a policy name and a stack name, as
    /// accepted by `Policy`'s and `StackKind`'s `FromStr` impls.
    pub fn from_names(policy: &str, stack: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            policy: policy.parse()?,
            stack: stack.parse()?,
        })
    }
}

// ── Solver ─────────────────────────────────────────────────────────

/// Applies a fixed [`SolverConfig`] to grids.
///
/// # Examples
///
/// ```
/// use labyr_grid::Grid;
/// use labyr_search::{Policy, Solver, SolverConfig};
/// use labyr_stack::StackKind;
///
/// let solver = Solver::new(SolverConfig {
///     policy: Policy::AnyExit,
///     stack: StackKind::Linked,
/// });
/// let grid: Grid = ".#.\n...\n#.#".parse().unwrap();
/// assert!(solver.solve(&grid));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// A solver using `config` for every call.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Overall verdict for `grid`.
    pub fn solve(&self, grid: &Grid) -> bool {
        solve(grid, self.config.policy, self.config.stack)
    }

    /// Per-entrance breakdown for `grid`.
    pub fn report(&self, grid: &Grid) -> PolicyReport {
        report(grid, self.config.policy, self.config.stack)
    }
}
