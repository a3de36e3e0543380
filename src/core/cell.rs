//! Defines the Cell type: one square of a Sudoku grid.

use super::grid::Grid;
use super::loc::Loc;
use super::num::{Num, NumSet};
use std::fmt;

/// One square of a Sudoku grid: a location fixed at construction, plus an
/// optional digit.
///
/// Only the digit ever mutates, and only through [`Cell::assign`]; the
/// propagation and search engines are the sole writers.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Cell {
  loc: Loc,
  value: Option<Num>,
}

impl Cell {
  /// Makes a cell at the given location holding the given digit, if any.
  pub(crate) fn new(loc: Loc, value: Option<Num>) -> Self {
    Cell { loc, value }
  }

  /// This cell's location.
  pub fn loc(&self) -> Loc {
    self.loc
  }

  /// This cell's digit, if assigned.
  pub fn value(&self) -> Option<Num> {
    self.value
  }

  /// Tells whether this cell has a digit.
  pub fn is_solved(&self) -> bool {
    self.value.is_some()
  }

  /// Computes the digits this cell could still hold: all nine minus those
  /// assigned anywhere in its row, column, or block.
  ///
  /// A pure function of the grid at call time, never cached, so it can't go
  /// stale as neighboring cells solve.
  pub fn candidates(&self, grid: &Grid) -> NumSet {
    let taken = grid.row_values(self.loc.row())
      | grid.col_values(self.loc.col())
      | grid.blk_values(self.loc.blk());
    NumSet::all() - taken
  }

  /// Writes a digit into this cell.
  ///
  /// Re-assigning the digit a cell already holds is a no-op.  Overwriting a
  /// different digit is an [`InvalidAssignment`]: that's an engine bug, not
  /// an unsolvable puzzle, and the engines never trigger it.
  pub fn assign(&mut self, num: Num) -> Result<(), InvalidAssignment> {
    match self.value {
      Some(existing) if existing != num => Err(InvalidAssignment {
        loc: self.loc,
        existing,
        attempted: num,
      }),
      _ => {
        self.value = Some(num);
        Ok(())
      }
    }
  }
}

impl fmt::Debug for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.value {
      Some(num) => write!(f, "{:?}={}", self.loc, num),
      None => write!(f, "{:?}=.", self.loc),
    }
  }
}

/// Error: an attempt to overwrite a cell's digit with a different one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidAssignment {
  /// Where the write landed.
  pub loc: Loc,
  /// The digit the cell already held.
  pub existing: Num,
  /// The digit the write carried.
  pub attempted: Num,
}

impl fmt::Display for InvalidAssignment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "cell {} already holds {}, refusing to assign {}",
      self.loc, self.existing, self.attempted
    )
  }
}

impl std::error::Error for InvalidAssignment {}
