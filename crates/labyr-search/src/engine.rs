//! Depth-first traversal engine.
//!
//! One algorithm, written once against [`Stack`], monomorphised per
//! backing. [`search`] and [`search_stats`] pick the backing from a
//! [`StackKind`] value.
//!
//! # Algorithm
//!
//! ```text
//! if start or target fails the admission gate: return false
//! push start
//! while stack not empty:
//!     cell = pop
//!     if cell == target:       return true
//!     if cell already visited: discard           (lazy deletion)
//!     mark cell
//!     push each neighbour (+col, +row, -col, -row) passing the gate
//! return false
//! ```
//!
//! A cell may be pushed several times before it is first expanded (two
//! expanded cells can both see it unvisited), so the visited re-check on
//! pop is required, not an optimisation. Each cell is expanded at most
//! once and pushed at most four times, which bounds the work.

use labyr_core::Coord;
use labyr_grid::Grid;
use labyr_stack::{ArrayStack, DequeStack, LinkedStack, Stack, StackKind};

/// Counters collected during one traversal.
///
/// `reached` is the reachability verdict; the remaining fields describe
/// how much work the traversal did before stopping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the target was popped.
    pub reached: bool,
    /// Cells marked visited and expanded.
    pub expanded: usize,
    /// Total pushes, including the start cell.
    pub pushed: usize,
    /// Pops discarded because the cell had already been expanded.
    pub discarded: usize,
    /// Largest stack length observed.
    pub peak_depth: usize,
}

/// Run the traversal over stack backing `S` and report its counters.
///
/// The visited overlay and the stack are created here and dropped on
/// return, so no state survives between calls.
pub fn search_with_stats<S: Stack<Coord>>(
    grid: &Grid,
    start: Coord,
    target: Coord,
) -> SearchOutcome {
    let mut visited = grid.visited_set();
    let mut outcome = SearchOutcome::default();

    // Fresh overlay: this only rejects out-of-bounds and wall endpoints.
    if !grid.is_open_and_unvisited(&visited, start)
        || !grid.is_open_and_unvisited(&visited, target)
    {
        return outcome;
    }

    let mut stack = S::default();
    stack.push(start);
    outcome.pushed = 1;
    outcome.peak_depth = 1;

    while !stack.is_empty() {
        let Ok(cell) = stack.pop() else {
            unreachable!("pop on a stack that reported non-empty");
        };

        if cell == target {
            outcome.reached = true;
            break;
        }

        if !visited.mark(cell) {
            outcome.discarded += 1;
            continue;
        }
        outcome.expanded += 1;

        for next in grid.neighbours(cell) {
            if grid.is_open_and_unvisited(&visited, next) {
                stack.push(next);
                outcome.pushed += 1;
            }
        }
        outcome.peak_depth = outcome.peak_depth.max(stack.len());
    }

    outcome
}

/// Whether `target` is reachable from `start`, over stack backing `S`.
pub fn search_with<S: Stack<Coord>>(grid: &Grid, start: Coord, target: Coord) -> bool {
    search_with_stats::<S>(grid, start, target).reached
}

/// [`search_with_stats`] over the backing named by `kind`.
pub fn search_stats(grid: &Grid, start: Coord, target: Coord, kind: StackKind) -> SearchOutcome {
    match kind {
        StackKind::Array => search_with_stats::<ArrayStack<Coord>>(grid, start, target),
        StackKind::Linked => search_with_stats::<LinkedStack<Coord>>(grid, start, target),
        StackKind::Deque => search_with_stats::<DequeStack<Coord>>(grid, start, target),
    }
}

/// Whether `target` is reachable from `start` through Open cells.
///
/// Out-of-bounds or walled endpoints yield `false`, as does a missing
/// path. The result does not depend on `kind`.
pub fn search(grid: &Grid, start: Coord, target: Coord, kind: StackKind) -> bool {
    search_stats(grid, start, target, kind).reached
}
