//! The solver facade: validate the givens, propagate, then search if needed.

use crate::core::*;
use crate::propagate::{self, Outcome};
use crate::search::{SearchOutcome, Searcher};
use log::debug;

/// The one outcome of a solve call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveResult {
  /// The puzzle's solution: the first one reached in ascending-candidate,
  /// depth-first order, which for a well-formed puzzle is its only one.
  Solved(SolvedGrid),
  /// The givens are consistent but admit no complete filling, whether
  /// propagation deduced that directly or the search exhausted every branch.
  NoSolution,
  /// The givens already repeat a digit within a unit, at these locations.
  /// Distinct from `NoSolution`: this is bad input, not a deduction.
  Invalid(LocSet),
}

/// Solves the puzzle.  The input grid is never mutated; all deduction happens
/// on private copies.
pub fn solve(puzzle: &Grid) -> SolveResult {
  solve_with_stats(puzzle).0
}

/// Solves the puzzle and also reports how much guessing it took.  A searcher
/// with zero forks means propagation finished the grid on its own.
pub fn solve_with_stats(puzzle: &Grid) -> (SolveResult, Searcher) {
  let mut searcher = Searcher::new();

  // Reject malformed input before any deduction runs.
  if let GridState::Broken(locs) = puzzle.state() {
    debug!("rejecting givens with repeats at {locs:?}");
    return (SolveResult::Invalid(locs), searcher);
  }

  let mut working = *puzzle;
  let result = match propagate::run(&mut working) {
    Outcome::Solved => SolveResult::Solved(solved(&working)),
    Outcome::Contradiction(_) => SolveResult::NoSolution,
    Outcome::Stalled(unsolved) => match searcher.search(&working, &unsolved) {
      SearchOutcome::Found(solution) => SolveResult::Solved(solved(&solution)),
      SearchOutcome::Exhausted => SolveResult::NoSolution,
    },
  };
  (result, searcher)
}

fn solved(grid: &Grid) -> SolvedGrid {
  // Can't fail: the engines only report success for complete, valid grids.
  SolvedGrid::try_from(grid).unwrap()
}

#[cfg(test)]
mod tests {
  use super::*;
  use paste::paste;
  use std::str::FromStr;

  const CANONICAL: &str =
    "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

  /// Asserts a full solve: result, search statistics, and that the solution
  /// extends the clues without touching them.
  macro_rules! solve_test {
    ($name:ident, $clues:expr, solved $solution:expr, forks $forks:expr, depth $depth:expr) => {
      paste! {
          #[test]
          fn [<test_solve_ $name>]() {
              let clues = Grid::from_str($clues).unwrap();
              let (result, searcher) = solve_with_stats(&clues);
              let SolveResult::Solved(solution) = result else {
                  panic!("expected a solution, got {result:?}");
              };
              assert_eq!(solution.to_string(), $solution);
              assert_eq!(searcher.total_forks, $forks);
              assert_eq!(searcher.max_depth, $depth);
              // The solution extends the clues.
              let mut masked = solution.grid();
              masked.intersect(&clues);
              assert_eq!(masked, clues);
              // And the clues themselves were never touched.
              assert_eq!(clues.to_string(), Grid::from_str($clues).unwrap().to_string());
          }
      }
    };
    ($name:ident, $clues:expr, no_solution) => {
      paste! {
          #[test]
          fn [<test_solve_ $name>]() {
              let clues = Grid::from_str($clues).unwrap();
              assert_eq!(clues.state(), GridState::Incomplete);
              assert_eq!(solve(&clues), SolveResult::NoSolution);
          }
      }
    };
  }

  // A fully pre-filled valid grid comes back as-is, no deduction needed.
  solve_test!(prefilled, CANONICAL, solved CANONICAL, forks 0, depth 0);

  // Every blank is a naked single: propagation alone finishes, the search
  // never forks.
  solve_test!(
    elimination_only,
    ".23456789456789123789123456234567891567891234891234567345678912678912345912345678",
    solved CANONICAL, forks 0, depth 0
  );

  // Propagation stalls at one two-candidate pivot; the lower digit
  // contradicts and the higher one completes, so exactly two forks happen.
  solve_test!(
    one_guess,
    "...45..89.5.7...2..89..34..234..7..15..891234.9...4.......7891.67.9.....9...45..8",
    solved CANONICAL, forks 2, depth 1
  );

  // A hard puzzle: deep search, still deterministic.
  solve_test!(
    search_heavy,
    ".6.5.4.3.1...9...8.........9...5...6.4.6.2.7.7...4...5.........4...8...1.5.2.3.4.",
    solved "869574132124396758375128694932857416541632879786941325217469583493785261658213947",
    forks 13, depth 6
  );

  // Consistent givens with no completion: the search exhausts and the facade
  // reports no solution.
  solve_test!(
    exhausted,
    "1....6....59.....82....8....45...3....3...7....6..3.54...325..6........17389.....",
    no_solution
  );

  #[test]
  fn duplicate_givens_are_invalid_without_searching() {
    // Two 5s in row 1.  This is Invalid, not NoSolution, and no deduction
    // ever starts.
    let clues = format!("5...5....{}", ".".repeat(72)).parse::<Grid>().unwrap();
    let (result, searcher) = solve_with_stats(&clues);
    assert_eq!(result, SolveResult::Invalid(LocSet::from_iter([L11, L15])));
    assert_eq!(searcher.total_forks, 0);
  }

  #[test]
  fn complete_but_broken_grid_is_invalid() {
    let clues = "1".repeat(81).parse::<Grid>().unwrap();
    assert!(matches!(solve(&clues), SolveResult::Invalid(_)));
  }

  #[test]
  fn contradiction_found_by_propagation() {
    // No duplicate givens, but L19 can hold nothing: its row rules out 1..8
    // and its column rules out 9.
    let clues = Grid::from_str(
      r"
            1 2 3 | 4 5 6 | 7 8 .
            . . . | . . . | . . 9
            . . . | . . . | . . .
            - - - + - - - + - - -
            . . . | . . . | . . .
            . . . | . . . | . . .
            . . . | . . . | . . .
            - - - + - - - + - - -
            . . . | . . . | . . .
            . . . | . . . | . . .
            . . . | . . . | . . .",
    )
    .unwrap();
    let (result, searcher) = solve_with_stats(&clues);
    assert_eq!(result, SolveResult::NoSolution);
    assert_eq!(searcher.total_forks, 0);
  }

  #[test]
  fn solving_twice_gives_the_identical_grid() {
    let clues =
      ".6.5.4.3.1...9...8.........9...5...6.4.6.2.7.7...4...5.........4...8...1.5.2.3.4."
        .parse::<Grid>()
        .unwrap();
    let first = solve(&clues);
    let second = solve(&clues);
    assert_eq!(first, second);
  }

  #[test]
  fn solution_respects_all_units() {
    let clues =
      "...45..89.5.7...2..89..34..234..7..15..891234.9...4.......7891.67.9.....9...45..8"
        .parse::<Grid>()
        .unwrap();
    let SolveResult::Solved(solution) = solve(&clues) else {
      panic!("expected a solution");
    };
    // state() re-checks every row, column, and block for repeats.
    assert_eq!(solution.grid().state(), GridState::Solved);
  }
}
