//! Defines the Grid type, the 9x9 board of cells, and the SolvedGrid type
//! that a successful solve produces.

use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::cell::Cell;
use super::loc::*;
use super::num::{Num, NumSet, N1};
use super::set::Set;

/// A Sudoku grid: 81 cells in row-major order, each holding an optional digit
/// 1 through 9.
///
/// Grids are plain values, 162 bytes, `Copy`.  Copying one is the search's
/// fork operation: the copy shares no state whatsoever with the original, so
/// hypothesis branches can never corrupt each other.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Grid([Cell; 81]);

impl Grid {
  /// Makes an empty Grid.
  pub fn new() -> Grid {
    let mut cells = [Cell::new(L11, None); 81];
    for loc in Loc::all() {
      cells[loc.index()] = Cell::new(loc, None);
    }
    Grid(cells)
  }

  /// Builds a grid from a 9x9 array of digits, 0 meaning blank.
  ///
  /// This is the shape outside collaborators naturally hold; anything above 9
  /// is rejected.
  pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Grid, String> {
    let mut grid = Grid::new();
    for loc in Loc::all() {
      let value = values[loc.row().index()][loc.col().index()];
      if value > 9 {
        return Err(format!("{value} is not a Sudoku digit"));
      }
      grid.0[loc.index()] = Cell::new(loc, Num::new(value as i8));
    }
    Ok(grid)
  }

  /// The cell at the given location.
  pub fn cell(&self, loc: Loc) -> &Cell {
    &self.0[loc.index()]
  }

  /// The cell at the given row and column.
  pub fn cell_at(&self, row: Row, col: Col) -> &Cell {
    self.cell(Loc::at(row, col))
  }

  /// The cell at the given location, for mutation.
  ///
  /// Crate-private: per the solver's write discipline, only the propagation
  /// and search engines mutate cells.
  pub(crate) fn cell_mut(&mut self, loc: Loc) -> &mut Cell {
    &mut self.0[loc.index()]
  }

  /// Iterates all 81 cells in row-major order.
  pub fn cells(&self) -> impl Iterator<Item = &Cell> {
    self.0.iter()
  }

  /// The digits currently assigned in the given row.
  pub fn row_values(&self, row: Row) -> NumSet {
    self.values_in(row.locs())
  }

  /// The digits currently assigned in the given column.
  pub fn col_values(&self, col: Col) -> NumSet {
    self.values_in(col.locs())
  }

  /// The digits currently assigned in the given block.
  pub fn blk_values(&self, blk: Blk) -> NumSet {
    self.values_in(blk.locs())
  }

  fn values_in(&self, locs: LocSet) -> NumSet {
    locs.iter().filter_map(|loc| self.cell(loc).value()).collect()
  }

  /// Returns the number of cells that hold digits.
  pub fn len(&self) -> usize {
    self.cells().filter(|cell| cell.is_solved()).count()
  }

  /// Tells whether no cell holds a digit.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Tells whether every cell holds a digit.
  pub fn is_complete(&self) -> bool {
    self.cells().all(Cell::is_solved)
  }

  /// The locations whose cells hold no digit yet.
  pub fn unsolved_locs(&self) -> LocSet {
    self
      .cells()
      .filter(|cell| !cell.is_solved())
      .map(Cell::loc)
      .collect()
  }

  /// This grid's state: solved, incomplete, or broken.
  ///
  /// Broken means some digit appears twice in a row, column, or block; the
  /// returned set holds every location involved in a repeat.
  pub fn state(&self) -> GridState {
    let mut broken = LocSet::new();
    let units = Row::all()
      .map(Row::locs)
      .chain(Col::all().map(Col::locs))
      .chain(Blk::all().map(Blk::locs));
    for unit in units {
      let mut where_seen: [Option<Loc>; 9] = [None; 9];
      for loc in unit.iter() {
        if let Some(num) = self.cell(loc).value() {
          if let Some(first_loc) = where_seen[num.index()] {
            broken.insert(loc);
            broken.insert(first_loc);
          } else {
            where_seen[num.index()] = Some(loc);
          }
        }
      }
    }
    if !broken.is_empty() {
      GridState::Broken(broken)
    } else if self.is_complete() {
      GridState::Solved
    } else {
      GridState::Incomplete
    }
  }

  /// Clears all cells whose digits differ from `other`'s.
  pub fn intersect(&mut self, other: &Grid) {
    for loc in Loc::all() {
      if self.cell(loc).value() != other.cell(loc).value() {
        self.0[loc.index()] = Cell::new(loc, None);
      }
    }
  }
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

/// A grid's validity state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridState {
  /// Complete and duplicate-free.
  Solved,
  /// Duplicate-free, with blanks remaining.
  Incomplete,
  /// Some unit holds a repeated digit, at these locations.
  Broken(LocSet),
}

impl fmt::Display for Grid {
  /// Prints this grid in row-major order, with `.` for blank cells.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for cell in self.cells() {
      match cell.value() {
        Some(num) => write!(f, "{num}")?,
        None => write!(f, ".")?,
      }
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as ASCII art.  The art parses back into the same grid.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let row = |r: usize| {
      self.0[r * 9..(r + 1) * 9]
        .chunks(3)
        .map(|trio| {
          trio
            .iter()
            .map(|cell| match cell.value() {
              Some(num) => char::from(b'0' + num.get() as u8),
              None => '.',
            })
            .join(" ")
        })
        .join(" | ")
    };
    let band = |b: usize| (b * 3..b * 3 + 3).map(row).join("\n");
    let art = (0..3).map(band).join("\n- - - + - - - + - - -\n");
    f.write_str(&art)
  }
}

impl FromStr for Grid {
  type Err = String;

  /// Constructs a Grid from a string holding exactly 81 cell characters:
  /// `1` through `9` for a given digit, `0` or `.` for a blank.  All other
  /// characters are ignored, so both of Grid's rendered forms (the flat
  /// `Display` string and the `Debug` ASCII art) parse back into the
  /// original grid.
  fn from_str(s: &str) -> Result<Grid, String> {
    let mut grid = Grid::new();
    let mut locs = Loc::all();
    for ch in s.chars() {
      let value = match ch {
        '.' | '0' => None,
        '1'..='9' => Num::new(ch as i8 - '0' as i8),
        _ => continue,
      };
      let Some(loc) = locs.next() else {
        return Err(format!("more than 81 cells in {s:?}"));
      };
      grid.0[loc.index()] = Cell::new(loc, value);
    }
    if locs.next().is_some() {
      return Err(format!("fewer than 81 cells in {s:?}"));
    }
    Ok(grid)
  }
}

impl Serialize for Grid {
  /// Serializes as the flat 81-character string.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}

/// A solved Sudoku grid: every cell holds a digit, and every row, column,
/// and block holds all nine.
///
/// Values of this type only come from grids whose `state()` is `Solved`, so
/// holding one is proof of a valid solution.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct SolvedGrid([Num; 81]);

impl SolvedGrid {
  /// The digit at the given location.
  pub fn get(&self, loc: Loc) -> Num {
    self.0[loc.index()]
  }

  /// Converts back into an ordinary grid.
  pub fn grid(&self) -> Grid {
    let mut grid = Grid::new();
    for loc in Loc::all() {
      grid.0[loc.index()] = Cell::new(loc, Some(self.get(loc)));
    }
    grid
  }
}

impl TryFrom<&Grid> for SolvedGrid {
  type Error = &'static str;

  fn try_from(grid: &Grid) -> Result<Self, Self::Error> {
    if grid.state() != GridState::Solved {
      return Err("grid is not solved");
    }
    let mut nums = [N1; 81];
    for loc in Loc::all() {
      // Can't fail: Solved state means every cell holds a digit.
      nums[loc.index()] = grid.cell(loc).value().ok_or("grid is not solved")?;
    }
    Ok(SolvedGrid(nums))
  }
}

impl Index<Loc> for SolvedGrid {
  type Output = Num;

  fn index(&self, loc: Loc) -> &Num {
    &self.0[loc.index()]
  }
}

impl fmt::Display for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.grid(), f)
  }
}

impl fmt::Debug for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.grid(), f)
  }
}

impl Serialize for SolvedGrid {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}
