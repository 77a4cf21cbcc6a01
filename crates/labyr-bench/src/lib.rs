//! Benchmark profiles and the stack comparison harness for labyr.
//!
//! - [`reference_maze`]: 100x100 generated maze (10K cells)
//! - [`stress_maze`]: 316x316 generated maze (~100K cells)
//! - [`random_generator`] / [`random_maze`]: seeded maze with random
//!   dimensions
//! - [`compare`] / [`render`]: time every policy over every stack backing
//!   on one grid and format the results as a table
//! - [`init_tracing`]: log output filtered by `LABYR_LOG`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use labyr_gen::{random_dimensions, GenError, MazeGenerator};
use labyr_grid::Grid;
use labyr_search::{solve, Policy};
use labyr_stack::StackKind;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LABYR_LOG";

/// Install a `fmt` subscriber filtered by [`LOG_ENV`], defaulting to
/// `info`.
///
/// Panics if a global subscriber is already set, so call it once from
/// `main`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

// ── Profiles ─────────────────────────────────────────────────────────

fn generated(rows: usize, cols: usize, seed: u64, guarantee: bool) -> Result<Grid, GenError> {
    MazeGenerator::builder()
        .rows(rows)
        .cols(cols)
        .seed(seed)
        .guarantee_boundary(guarantee)
        .build()?
        .generate()
}

/// 100x100 maze with default wall density and at least one entrance and
/// one exit.
pub fn reference_maze(seed: u64) -> Result<Grid, GenError> {
    generated(100, 100, seed, true)
}

/// 316x316 maze, otherwise as [`reference_maze`].
pub fn stress_maze(seed: u64) -> Result<Grid, GenError> {
    generated(316, 316, seed, true)
}

/// Generator for a maze with each side drawn from `1..=max_side`,
/// default densities and no boundary guarantee.
pub fn random_generator(seed: u64, max_side: usize) -> Result<MazeGenerator, GenError> {
    let (rows, cols) = random_dimensions(seed, max_side);
    MazeGenerator::builder()
        .rows(rows)
        .cols(cols)
        .seed(seed)
        .build()
}

/// The maze produced by [`random_generator`].
pub fn random_maze(seed: u64, max_side: usize) -> Result<Grid, GenError> {
    random_generator(seed, max_side)?.generate()
}

// ── Comparison ───────────────────────────────────────────────────────

/// Verdict and wall-clock time of one [`solve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Result of the policy.
    pub verdict: bool,
    /// Time spent inside [`solve`].
    pub elapsed: Duration,
}

/// Timings keyed by policy, then stack backing, in [`Policy::ALL`] and
/// [`StackKind::ALL`] order.
pub type Comparison = IndexMap<Policy, IndexMap<StackKind, Timing>>;

/// Run and time `policy` over `kind` once.
pub fn time_solve(grid: &Grid, policy: Policy, kind: StackKind) -> Timing {
    let start = Instant::now();
    let verdict = solve(grid, policy, kind);
    let elapsed = start.elapsed();
    debug!(%policy, stack = %kind, verdict, ?elapsed, "timed solve");
    Timing { verdict, elapsed }
}

/// Time every policy over every stack backing.
pub fn compare(grid: &Grid) -> Comparison {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let row = StackKind::ALL
                .iter()
                .map(|&kind| (kind, time_solve(grid, policy, kind)))
                .collect();
            (policy, row)
        })
        .collect()
}

/// Policies whose backings returned different verdicts. Always empty for
/// a correct build.
pub fn disagreements(results: &Comparison) -> Vec<Policy> {
    results
        .iter()
        .filter(|(_, row)| {
            let mut verdicts = row.values().map(|t| t.verdict);
            let first = verdicts.next();
            verdicts.any(|v| Some(v) != first)
        })
        .map(|(&policy, _)| policy)
        .collect()
}

/// Format the grid's boundary counts and one line per policy and backing.
pub fn render(grid: &Grid, results: &Comparison) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "maze {}x{}: {} entrances, {} exits",
        grid.rows(),
        grid.cols(),
        grid.entrances().len(),
        grid.exits().len()
    );
    let _ = writeln!(out, "{:<8} {:<12} {:<8} {:>12}", "policy", "stack", "verdict", "time");
    for (policy, row) in results {
        for (kind, timing) in row {
            let elapsed = format!("{:.2?}", timing.elapsed);
            let _ = writeln!(
                out,
                "{:<8} {:<12} {:<8} {:>12}",
                policy.name(),
                kind.name(),
                timing.verdict,
                elapsed
            );
        }
    }
    out
}
