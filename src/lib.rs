//! Solve 9x9 Sudoku puzzles with constraint propagation and backtracking search

#[macro_use]
extern crate log;

pub mod collections;
pub mod puzzle;
pub mod solve;
