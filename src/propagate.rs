//! Single-candidate constraint propagation.
//!
//! Repeatedly sweeps every unsolved cell: a cell whose candidate set has
//! shrunk to one digit takes it, a cell whose set is empty is a
//! contradiction, and anything else waits for a later pass.  Sweeping
//! continues until a pass changes nothing, which is the fixpoint: either the
//! grid completed, or the remaining ambiguity is the search's problem.

use crate::core::*;
use log::{debug, trace};

/// What a propagation run ends in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
  /// Every cell holds a digit.
  Solved,
  /// A full pass changed nothing, and these locations are still unsolved.
  /// Not a failure: this is the handoff to the search.
  Stalled(LocSet),
  /// This location's candidate set became empty.
  Contradiction(Loc),
}

/// Runs elimination passes over the grid until it completes, stalls, or
/// contradicts.
///
/// Cells are swept in ascending location order, but the fixpoint doesn't
/// depend on that: candidate sets only shrink as other cells solve, and a
/// forced digit stays forced, so every sweep order converges to the same
/// grid.  A contradiction stops the run immediately, mid-pass; there's no
/// point finishing the sweep of a dead grid.
pub fn run(grid: &mut Grid) -> Outcome {
  let mut passes = 0;
  loop {
    let unsolved = grid.unsolved_locs();
    if unsolved.is_empty() {
      debug!("grid complete after {passes} passes");
      return Outcome::Solved;
    }
    passes += 1;
    let mut changed = false;
    for loc in unsolved.iter() {
      let candidates = grid.cell(loc).candidates(grid);
      if candidates.is_empty() {
        debug!("contradiction at {loc:?} on pass {passes}");
        return Outcome::Contradiction(loc);
      }
      if let Some(num) = candidates.sole() {
        trace!("pass {passes}: {loc:?} must be {num}");
        // Can't fail: `loc` came from `unsolved_locs`, so its cell is blank.
        grid.cell_mut(loc).assign(num).unwrap();
        changed = true;
      }
    }
    if !changed {
      let unsolved = grid.unsolved_locs();
      debug!("stalled after {passes} passes, {} cells unsolved", unsolved.len());
      return Outcome::Stalled(unsolved);
    }
  }
}
