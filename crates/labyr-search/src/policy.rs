//! Entrance/exit matching policies.
//!
//! Both policies recompute the entrances and exits of the grid on every
//! call and run an independent [`search_stats`] per attempted pair, so no
//! visited state is shared between attempts.

use crate::engine::search_stats;
use labyr_core::Coord;
use labyr_grid::Grid;
use labyr_stack::StackKind;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// How entrances are matched to exits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Entrance `i` must reach exit `i`, for `i < min(|E|, |X|)`.
    #[default]
    Paired,
    /// Every entrance must reach at least one exit.
    AnyExit,
}

impl Policy {
    /// Both policies, in report order.
    pub const ALL: [Policy; 2] = [Self::Paired, Self::AnyExit];

    /// Canonical name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Paired => "paired",
            Self::AnyExit => "any",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `paired`/`a` and `any`/`any_exit`/`b`, case-insensitively.
impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paired" | "a" => Ok(Self::Paired),
            "any" | "any_exit" | "b" => Ok(Self::AnyExit),
            _ => Err(UnknownPolicy {
                name: s.to_string(),
            }),
        }
    }
}

/// A string did not name any [`Policy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPolicy {
    /// The rejected input.
    pub name: String,
}

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy '{}', expected paired or any", self.name)
    }
}

impl Error for UnknownPolicy {}

/// Overall verdict of `policy` on `grid`, searching over `kind`.
///
/// Returns `false` when there is nothing to match (no entrances, no
/// exits, or an empty grid). Stops at the first entrance that fails.
pub fn solve(grid: &Grid, policy: Policy, kind: StackKind) -> bool {
    let entrances = grid.entrances();
    let exits = grid.exits();
    debug!(
        %policy,
        stack = %kind,
        entrances = entrances.len(),
        exits = exits.len(),
        "solving"
    );
    match policy {
        Policy::Paired => solve_paired(grid, &entrances, &exits, kind),
        Policy::AnyExit => solve_any_exit(grid, &entrances, &exits, kind),
    }
}

fn attempt(grid: &Grid, entrance: Coord, exit: Coord, kind: StackKind) -> bool {
    let outcome = search_stats(grid, entrance, exit, kind);
    trace!(
        %entrance,
        %exit,
        reached = outcome.reached,
        expanded = outcome.expanded,
        "search attempt"
    );
    outcome.reached
}

fn solve_paired(grid: &Grid, entrances: &[Coord], exits: &[Coord], kind: StackKind) -> bool {
    if entrances.is_empty() || exits.is_empty() {
        return false;
    }
    // zip stops at min(|E|, |X|); surplus entrances or exits are ignored.
    for (&entrance, &exit) in entrances.iter().zip(exits) {
        if !attempt(grid, entrance, exit, kind) {
            debug!(%entrance, %exit, "entrance cannot reach its paired exit");
            return false;
        }
    }
    true
}

/// Exit reached first by `entrance`, trying exits in order.
pub(crate) fn first_reachable_exit(
    grid: &Grid,
    entrance: Coord,
    exits: &[Coord],
    kind: StackKind,
) -> Option<Coord> {
    exits
        .iter()
        .copied()
        .find(|&exit| attempt(grid, entrance, exit, kind))
}

fn solve_any_exit(grid: &Grid, entrances: &[Coord], exits: &[Coord], kind: StackKind) -> bool {
    if entrances.is_empty() || exits.is_empty() {
        return false;
    }
    for &entrance in entrances {
        if first_reachable_exit(grid, entrance, exits, kind).is_none() {
            debug!(%entrance, "entrance cannot reach any exit");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    fn verdicts(g: &Grid, policy: Policy) -> bool {
        let v: Vec<bool> = StackKind::ALL
            .iter()
            .map(|&k| solve(g, policy, k))
            .collect();
        assert!(v.windows(2).all(|w| w[0] == w[1]), "backings disagree: {v:?}");
        v[0]
    }

    #[test]
    fn empty_grid_fails_both_policies() {
        let g = Grid::empty();
        assert!(!verdicts(&g, Policy::Paired));
        assert!(!verdicts(&g, Policy::AnyExit));
    }

    #[test]
    fn walled_boundary_rows_fail_both_policies() {
        let top_walled = grid("###\n...\n...");
        let bottom_walled = grid("...\n...\n###");
        for g in [top_walled, bottom_walled] {
            assert!(!verdicts(&g, Policy::Paired));
            assert!(!verdicts(&g, Policy::AnyExit));
        }
    }

    #[test]
    fn paired_single_entrance_single_exit() {
        // E = [(0,0)], X = [(2,2)].
        let g = grid(".##\n...\n##.");
        assert!(verdicts(&g, Policy::Paired));
    }

    #[test]
    fn paired_fails_when_entrance_is_walled_in() {
        // E = [(0,0)], X = [(2,0), (2,2)]; (0,0) is walled in.
        let g = grid(".##\n#..\n.#.");
        assert!(!verdicts(&g, Policy::Paired));
        assert!(!verdicts(&g, Policy::AnyExit));
    }

    #[test]
    fn paired_ignores_surplus_exits() {
        // E = [(0,0)], X = [(2,0), (2,2)]; only (0,0)->(2,0) is checked.
        let g = grid(".##\n.##\n.#.");
        assert!(verdicts(&g, Policy::Paired));
    }

    #[test]
    fn separate_columns_pair_with_themselves() {
        // E = [(0,0), (0,2)], X = [(2,0), (2,2)], two unconnected columns.
        let g = grid(".#.\n.#.\n.#.");
        assert!(verdicts(&g, Policy::Paired));
        assert!(verdicts(&g, Policy::AnyExit));
    }

    #[test]
    fn any_exit_accepts_any_reachable_exit() {
        // E = [(0,0), (0,1), (0,2)], X = [(2,0), (2,2)]; (2,0) is sealed,
        // but every entrance reaches (2,2).
        let g = grid("...\n#..\n.#.");
        assert!(verdicts(&g, Policy::AnyExit));
        assert!(!verdicts(&g, Policy::Paired));
    }

    #[test]
    fn any_exit_fails_when_one_entrance_is_stranded() {
        // E = [(0,0), (0,2)]; (0,0) is enclosed.
        let g = grid(".#.\n##.\n...");
        assert!(!verdicts(&g, Policy::AnyExit));
    }

    #[test]
    fn open_three_by_three_passes_both() {
        let g = Grid::open(3, 3).unwrap();
        assert!(verdicts(&g, Policy::Paired));
        assert!(verdicts(&g, Policy::AnyExit));
    }

    #[test]
    fn single_row_grid_matches_cells_with_themselves() {
        let g = grid(".#.");
        assert!(verdicts(&g, Policy::Paired));
        assert!(verdicts(&g, Policy::AnyExit));
    }

    #[test]
    fn policy_names_round_trip() {
        for p in Policy::ALL {
            assert_eq!(p.to_string().parse::<Policy>(), Ok(p));
        }
        assert_eq!("A".parse::<Policy>(), Ok(Policy::Paired));
        assert_eq!("b".parse::<Policy>(), Ok(Policy::AnyExit));
        assert_eq!("any_exit".parse::<Policy>(), Ok(Policy::AnyExit));
        assert!("shortest".parse::<Policy>().is_err());
    }
}
