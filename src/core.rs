//! Defines the core solver types.
//!
//! Among these are:
//!
//! - Grid: the 9x9 Sudoku board, and SolvedGrid, a completed one
//! - Cell: one square of the board
//! - Num: the 9 digits that go in the board's cells
//! - Loc: the 81 locations of the board, with Row, Col and Blk grouping them

mod cell;
mod grid;
mod id_types;
mod loc;
mod num;
mod set;

pub use cell::*;
pub use grid::*;
pub use loc::*;
pub use num::*;
pub use set::Set;
