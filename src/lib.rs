//! A 9x9 Sudoku solving engine.
//!
//! [`solve::solve`] takes a partially filled [`core::Grid`] and either fills
//! it completely, consistent with row/column/block uniqueness, or reports
//! that no consistent filling exists.  Deduction runs in two layers:
//! single-candidate propagation ([`propagate`]) and, for grids that stall,
//! guess-and-check search over forked grids ([`search`]).

pub mod core;
pub mod propagate;
pub mod search;
pub mod solve;
