//! 9x9 Sudoku grids

pub use self::error::{GridFromFileError, InvalidGridError, ParseGridError};
pub use self::parse::parse_grid;

pub mod error;
mod parse;

use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;

use crate::collections::square::{Coord, Square};

pub type CellId = usize;
pub type Value = i32;

/// A fully assigned grid, as produced by the solver
pub type Solution = Square<Value>;

/// Width (and height) of a grid
pub const GRID_WIDTH: usize = 9;

/// Number of cells in a grid
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_WIDTH;

/// Width (and height) of a box, the 3x3 sub-grid
pub const BOX_WIDTH: usize = 3;

pub(crate) fn row_of(id: CellId) -> usize {
    id / GRID_WIDTH
}

pub(crate) fn col_of(id: CellId) -> usize {
    id % GRID_WIDTH
}

pub(crate) fn box_of(id: CellId) -> usize {
    row_of(id) / BOX_WIDTH * BOX_WIDTH + col_of(id) / BOX_WIDTH
}

pub(crate) fn row_cells(row: usize) -> impl Iterator<Item = CellId> {
    (0..GRID_WIDTH).map(move |col| row * GRID_WIDTH + col)
}

pub(crate) fn col_cells(col: usize) -> impl Iterator<Item = CellId> {
    (0..GRID_WIDTH).map(move |row| row * GRID_WIDTH + col)
}

pub(crate) fn box_cells(box_id: usize) -> impl Iterator<Item = CellId> {
    let first_row = box_id / BOX_WIDTH * BOX_WIDTH;
    let first_col = box_id % BOX_WIDTH * BOX_WIDTH;
    (0..GRID_WIDTH).map(move |i| {
        let row = first_row + i / BOX_WIDTH;
        let col = first_col + i % BOX_WIDTH;
        row * GRID_WIDTH + col
    })
}

/// Every row, column and box of the grid, each as a list of cell ids
pub(crate) fn units() -> impl Iterator<Item = Vec<CellId>> {
    let rows = (0..GRID_WIDTH).map(|r| row_cells(r).collect_vec());
    let cols = (0..GRID_WIDTH).map(|c| col_cells(c).collect_vec());
    let boxes = (0..GRID_WIDTH).map(|b| box_cells(b).collect_vec());
    rows.chain(cols).chain(boxes)
}

/// A 9x9 Sudoku grid with values 0-9, where 0 denotes a blank cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Square<Value>,
}

impl Grid {
    /// Creates a grid from a flat, row-major list of 81 values 0-9
    pub fn new(values: Vec<Value>) -> Result<Self, InvalidGridError> {
        if values.len() != GRID_CELLS {
            return Err(InvalidGridError::new(format!(
                "expected {} cells, found {}",
                GRID_CELLS,
                values.len()
            )));
        }
        if let Some(&value) = values.iter().find(|&&v| v < 0 || v > GRID_WIDTH as Value) {
            return Err(InvalidGridError::new(format!(
                "cell value out of range: {}",
                value
            )));
        }
        let cells = Square::from_vec(GRID_WIDTH, values).unwrap();
        Ok(Self { cells })
    }

    /// Reads and parses a grid from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GridFromFileError> {
        let text = fs::read_to_string(path)?;
        let grid = text.parse()?;
        Ok(grid)
    }

    pub fn cells(&self) -> &Square<Value> {
        &self.cells
    }

    pub fn value(&self, id: CellId) -> Value {
        self.cells[id]
    }

    pub fn is_blank(&self, id: CellId) -> bool {
        self.cells[id] == 0
    }

    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn coord_at(&self, id: CellId) -> Coord {
        self.cells.coord_at(id)
    }

    /// Checks that no value appears twice among the clues of any row, column or box
    pub fn validate(&self) -> Result<(), InvalidGridError> {
        for unit in units() {
            let mut seen = [false; GRID_WIDTH + 1];
            for &id in &unit {
                let value = self.cells[id];
                if value == 0 {
                    continue;
                }
                if seen[value as usize] {
                    return Err(InvalidGridError::new(format!(
                        "duplicate clue {} at {:?}",
                        value,
                        self.coord_at(id)
                    )));
                }
                seen[value as usize] = true;
            }
        }
        Ok(())
    }

    /// Returns true if `solution` is a complete valid grid that preserves the clues
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.width() != GRID_WIDTH {
            return false;
        }
        let clues_match = (0..GRID_CELLS)
            .all(|id| self.cells[id] == 0 || self.cells[id] == solution[id]);
        clues_match && is_valid_solution(solution)
    }
}

/// Returns true if every row, column and box contains each of 1-9 exactly once
pub fn is_valid_solution(solution: &Solution) -> bool {
    units().all(|unit| {
        let mut seen = [false; GRID_WIDTH + 1];
        unit.iter().all(|&id| {
            let value = solution[id];
            if value < 1 || value > GRID_WIDTH as Value || seen[value as usize] {
                return false;
            }
            seen[value as usize] = true;
            true
        })
    })
}

/// Formats grid values as nine lines of nine space-separated integers
pub fn format_grid(values: &Square<Value>) -> String {
    values
        .rows()
        .map(|row| row.iter().join(" "))
        .join("\n")
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_grid(&self.cells))
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // row r, col c = (r * 3 + r / 3 + c) % 9 + 1
    fn base_solution() -> Vec<Value> {
        (0..GRID_CELLS)
            .map(|id| ((row_of(id) * 3 + row_of(id) / 3 + col_of(id)) % 9 + 1) as Value)
            .collect()
    }

    #[test]
    fn units_cover_grid() {
        assert_eq!(27, units().count());
        for unit in units() {
            assert_eq!(9, unit.len());
        }
    }

    #[test]
    fn box_membership() {
        assert_eq!(0, box_of(0));
        assert_eq!(0, box_of(20)); // (2, 2)
        assert_eq!(4, box_of(40)); // (4, 4)
        assert_eq!(8, box_of(80));
        let cells: Vec<_> = box_cells(4).collect();
        assert_eq!(vec![30, 31, 32, 39, 40, 41, 48, 49, 50], cells);
    }

    #[test]
    fn new_rejects_bad_shape_and_range() {
        assert!(Grid::new(vec![0; 80]).is_err());
        let mut values = vec![0; GRID_CELLS];
        values[3] = 10;
        assert!(Grid::new(values).is_err());
    }

    #[test]
    fn validate_rejects_duplicate_clues() {
        let mut values = vec![0; GRID_CELLS];
        values[0] = 5;
        values[8] = 5; // same row
        let grid = Grid::new(values).unwrap();
        assert!(grid.validate().is_err());
    }

    #[test]
    fn validate_accepts_clean_grid() {
        let mut values = vec![0; GRID_CELLS];
        values[0] = 5;
        values[40] = 5; // different row, column and box
        let grid = Grid::new(values).unwrap();
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn verify_solution_checks_units_and_clues() {
        let solution = Square::from_vec(GRID_WIDTH, base_solution()).unwrap();
        assert!(is_valid_solution(&solution));

        let mut clues = base_solution();
        clues[40] = 0;
        let grid = Grid::new(clues).unwrap();
        assert!(grid.verify_solution(&solution));

        let mut wrong = base_solution();
        wrong.swap(0, 1);
        let wrong = Square::from_vec(GRID_WIDTH, wrong).unwrap();
        assert!(!is_valid_solution(&wrong));
        assert!(!grid.verify_solution(&wrong));
    }

    #[test]
    fn display_parses_back() {
        let grid = Grid::new(base_solution()).unwrap();
        let text = grid.to_string();
        let parsed: Grid = text.parse().unwrap();
        assert_eq!(grid, parsed);
    }
}
