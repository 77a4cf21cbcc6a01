//! Per-entrance breakdown of a policy run.
//!
//! [`solve`](crate::solve) stops at the first failing entrance. A
//! [`PolicyReport`] instead evaluates every entrance the policy covers and
//! records which exit each one reached, which is what the comparison
//! harness prints.

use crate::engine::search_stats;
use crate::policy::{first_reachable_exit, Policy};
use labyr_core::Coord;
use labyr_grid::Grid;
use labyr_stack::StackKind;

/// Result for a single entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntranceVerdict {
    /// The entrance cell.
    pub entrance: Coord,
    /// Exit the entrance reached, `None` if it reached none it tried.
    pub reached: Option<Coord>,
}

/// Every entrance's verdict under one policy and stack backing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyReport {
    /// Policy evaluated.
    pub policy: Policy,
    /// Backing used.
    pub stack: StackKind,
    /// Number of entrances in the grid.
    pub entrance_count: usize,
    /// Number of exits in the grid.
    pub exit_count: usize,
    /// One verdict per evaluated entrance, in entrance order.
    ///
    /// For [`Policy::Paired`] only the first `min(entrances, exits)`
    /// entrances are evaluated; for [`Policy::AnyExit`] all of them, or
    /// none when the grid has no exits.
    pub verdicts: Vec<EntranceVerdict>,
}

impl PolicyReport {
    /// Overall verdict; equal to [`solve`](crate::solve) for the same
    /// inputs.
    pub fn verdict(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(|v| v.reached.is_some())
    }

    /// Entrances that failed.
    pub fn stranded(&self) -> impl Iterator<Item = Coord> + '_ {
        self.verdicts
            .iter()
            .filter(|v| v.reached.is_none())
            .map(|v| v.entrance)
    }
}

/// Evaluate every entrance covered by `policy` on `grid`.
pub fn report(grid: &Grid, policy: Policy, kind: StackKind) -> PolicyReport {
    let entrances = grid.entrances();
    let exits = grid.exits();

    let verdicts = match policy {
        Policy::Paired => entrances
            .iter()
            .zip(&exits)
            .map(|(&entrance, &exit)| EntranceVerdict {
                entrance,
                reached: search_stats(grid, entrance, exit, kind)
                    .reached
                    .then_some(exit),
            })
            .collect(),
        Policy::AnyExit if exits.is_empty() => Vec::new(),
        Policy::AnyExit => entrances
            .iter()
            .map(|&entrance| EntranceVerdict {
                entrance,
                reached: first_reachable_exit(grid, entrance, &exits, kind),
            })
            .collect(),
    };

    PolicyReport {
        policy,
        stack: kind,
        entrance_count: entrances.len(),
        exit_count: exits.len(),
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::solve;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn paired_report_lists_each_pair() {
        // E = [(0,0), (0,1), (0,2)], X = [(2,0), (2,2)]; (2,0) is sealed.
        let g: Grid = "...\n#..\n.#.".parse().unwrap();
        let r = report(&g, Policy::Paired, StackKind::Array);
        assert_eq!(r.entrance_count, 3);
        assert_eq!(r.exit_count, 2);
        assert_eq!(
            r.verdicts,
            vec![
                EntranceVerdict {
                    entrance: c(0, 0),
                    reached: None
                },
                EntranceVerdict {
                    entrance: c(0, 1),
                    reached: Some(c(2, 2))
                },
            ]
        );
        assert!(!r.verdict());
        assert_eq!(r.stranded().collect::<Vec<_>>(), vec![c(0, 0)]);
    }

    #[test]
    fn any_exit_report_records_first_exit_found() {
        let g: Grid = "...\n#..\n.#.".parse().unwrap();
        let r = report(&g, Policy::AnyExit, StackKind::Linked);
        assert_eq!(r.verdicts.len(), 3);
        assert!(r.verdicts.iter().all(|v| v.reached == Some(c(2, 2))));
        assert!(r.verdict());
    }

    #[test]
    fn report_keeps_going_past_failures() {
        // Both entrances walled in; solve stops at the first, report
        // records both.
        let g: Grid = ".#.\n###\n...".parse().unwrap();
        let r = report(&g, Policy::AnyExit, StackKind::Deque);
        assert_eq!(r.stranded().count(), 2);
    }

    #[test]
    fn no_exits_means_no_verdicts() {
        let g: Grid = "...\n###".parse().unwrap();
        for policy in Policy::ALL {
            let r = report(&g, policy, StackKind::Array);
            assert!(r.verdicts.is_empty());
            assert!(!r.verdict());
        }
    }

    #[test]
    fn report_verdict_matches_solve() {
        let grids = [
            "...\n#..\n.#.",
            ".#.\n##.\n...",
            "..#\n#.#\n#..",
            ".#.\n.#.\n.#.",
            "###\n...",
            "",
        ];
        for text in grids {
            let g: Grid = text.parse().unwrap();
            for policy in Policy::ALL {
                for kind in StackKind::ALL {
                    assert_eq!(
                        report(&g, policy, kind).verdict(),
                        solve(&g, policy, kind),
                        "grid {text:?} policy {policy} stack {kind}"
                    );
                }
            }
        }
    }
}
