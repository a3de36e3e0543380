//! Guess-and-check search for grids that propagation alone can't finish.
//!
//! When propagation stalls, every unsolved cell still has at least two
//! candidates.  The searcher picks the most constrained one as a pivot,
//! forks a private copy of the grid per candidate, and propagates each copy,
//! recursing where a copy stalls again.  The first completed branch in
//! ascending-candidate, depth-first order wins; contradicted branches are
//! simply dropped.

use crate::core::*;
use crate::propagate::{self, Outcome};
use log::{debug, trace};

/// What searching one subtree ends in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchOutcome {
  /// The first completed grid reached.  For well-formed puzzles (which have
  /// one solution) this is the only one.
  Found(Grid),
  /// Every branch of the subtree contradicted.  The caller moves on to its
  /// own next candidate, or reports failure at the root.
  Exhausted,
}

/// Drives the guess-and-check search.  One searcher handles one solve call;
/// its counters accumulate over the whole search tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Searcher {
  /// How many hypothesis grids were forked.
  pub total_forks: i32,
  /// The deepest pivot nesting reached.
  pub max_depth: i32,
}

impl Searcher {
  /// Makes a fresh searcher.
  pub fn new() -> Self {
    Searcher::default()
  }

  /// Searches the subtree rooted at the given stalled grid.
  ///
  /// `unsolved` must be the stall's unsolved set for `grid`.  The grid
  /// itself is never mutated; every hypothesis works on a fork.
  pub fn search(&mut self, grid: &Grid, unsolved: &LocSet) -> SearchOutcome {
    self.search_at(grid, unsolved, 1)
  }

  fn search_at(&mut self, grid: &Grid, unsolved: &LocSet, depth: i32) -> SearchOutcome {
    self.max_depth = self.max_depth.max(depth);
    let pivot = choose_pivot(grid, unsolved);
    let candidates = grid.cell(pivot).candidates(grid);
    trace!("depth {depth}: pivot {pivot:?}, candidates {candidates:?}");
    for num in candidates.iter() {
      // The fork owns its 81 cells outright; abandoning it is just letting
      // it drop.
      let mut fork = *grid;
      self.total_forks += 1;
      // Can't fail: the pivot is unsolved in `grid`, hence blank in the fork.
      fork.cell_mut(pivot).assign(num).unwrap();
      match propagate::run(&mut fork) {
        Outcome::Solved => {
          debug!("depth {depth}: {num} at {pivot:?} completes the grid");
          return SearchOutcome::Found(fork);
        }
        Outcome::Contradiction(_) => {
          trace!("depth {depth}: {num} at {pivot:?} contradicts");
        }
        Outcome::Stalled(unsolved) => {
          if let SearchOutcome::Found(solution) = self.search_at(&fork, &unsolved, depth + 1) {
            return SearchOutcome::Found(solution);
          }
        }
      }
    }
    trace!("depth {depth}: all candidates of {pivot:?} exhausted");
    SearchOutcome::Exhausted
  }
}

/// Picks the cell to guess at: fewest candidates, ties broken by ascending
/// location (lowest row, then lowest column).  Minimizing the branching
/// factor keeps the tree narrow; the tie-break keeps it reproducible.
fn choose_pivot(grid: &Grid, unsolved: &LocSet) -> Loc {
  let mut best: Option<(i32, Loc)> = None;
  for loc in unsolved.iter() {
    let count = grid.cell(loc).candidates(grid).len();
    match best {
      Some((best_count, _)) if best_count <= count => {}
      _ => best = Some((count, loc)),
    }
    if count == 2 {
      // A stalled cell has at least two candidates; two is as good as it gets.
      break;
    }
  }
  // Search only runs on a stall, so `unsolved` is never empty.
  best.map(|(_, loc)| loc).unwrap()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn stalled(s: &str) -> (Grid, LocSet) {
    let mut grid = s.parse::<Grid>().unwrap();
    match propagate::run(&mut grid) {
      Outcome::Stalled(unsolved) => (grid, unsolved),
      outcome => panic!("expected a stall, got {outcome:?}"),
    }
  }

  #[test]
  fn pivot_prefers_fewest_candidates_then_lowest_loc() {
    // Every blank has candidates {1, 2}; the tie must break to the first
    // blank in row-major order, which is L11.
    let (grid, unsolved) =
      stalled(&"123456789456789123789123456234567891567891234891234567345678912678912345912345678"
        .replace(['1', '2'], "."));
    assert_eq!(choose_pivot(&grid, &unsolved), L11);
  }

  #[test]
  fn found_branch_short_circuits() {
    // The two-digit stall has two completions (swap 1s and 2s).  Ascending
    // order tries 1 at L11 first, which cascades to the canonical grid, so
    // exactly one fork ever happens.
    let canonical =
      "123456789456789123789123456234567891567891234891234567345678912678912345912345678";
    let (grid, unsolved) = stalled(&canonical.replace(['1', '2'], "."));
    let mut searcher = Searcher::new();
    match searcher.search(&grid, &unsolved) {
      SearchOutcome::Found(solution) => assert_eq!(solution.to_string(), canonical),
      SearchOutcome::Exhausted => panic!("solvable grid reported exhausted"),
    }
    assert_eq!(searcher.total_forks, 1);
    assert_eq!(searcher.max_depth, 1);
  }

  #[test]
  fn exhausted_when_no_branch_completes() {
    // A stalled grid that admits no completion at all: searching must come
    // back Exhausted rather than loop or panic.
    let (grid, unsolved) = stalled(
      "1....6....59.....82....8....45...3....3...7....6..3.54...325..6........17389.....",
    );
    assert_eq!(unsolved.len(), 56);
    let mut searcher = Searcher::new();
    assert_eq!(searcher.search(&grid, &unsolved), SearchOutcome::Exhausted);
    assert_eq!(searcher.total_forks, 4);
    assert_eq!(searcher.max_depth, 2);
  }
}
