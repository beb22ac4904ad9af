//! The domain store: candidate values for every cell of a grid

use crate::collections::square::Square;
use crate::puzzle::{CellId, Grid, Solution, Value, GRID_CELLS, GRID_WIDTH};
use crate::solve::peers::PeerGraph;
use crate::solve::{CellVariable, ValueSet};

/// Cell variables for a grid being solved.
///
/// Cloned on every search branch, so a failed branch cannot leave residue in
/// its parent's state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GridMarkup {
    cells: Square<CellVariable>,
}

impl GridMarkup {
    /// Builds the initial domain store for `grid`: a clue becomes a solved
    /// cell, a blank cell starts with 1-9 minus the values of its peer clues.
    pub fn init(grid: &Grid) -> Self {
        let graph = PeerGraph::get();
        let mut cells = Square::with_width_and_value(GRID_WIDTH, CellVariable::unsolved_with_all());
        for id in 0..GRID_CELLS {
            cells[id] = if grid.is_blank(id) {
                let mut domain = ValueSet::with_all();
                for &peer in graph.peers(id) {
                    if !grid.is_blank(peer) {
                        domain.remove(grid.value(peer));
                    }
                }
                CellVariable::Unsolved(domain)
            } else {
                CellVariable::Solved(grid.value(id))
            };
        }
        Self { cells }
    }

    pub fn cell(&self, id: CellId) -> &CellVariable {
        &self.cells[id]
    }

    /// The current domain of a cell; a singleton for a solved cell
    pub fn domain(&self, id: CellId) -> ValueSet {
        self.cells[id].domain()
    }

    /// Marks a cell solved with the given value
    pub fn assign(&mut self, id: CellId, value: Value) {
        debug_assert!(self.cells[id].is_unsolved());
        self.cells[id] = CellVariable::Solved(value);
    }

    /// Removes a candidate from an unsolved cell's domain.
    /// Returns false if the cell is solved or the value was already absent.
    pub fn remove_candidate(&mut self, id: CellId, value: Value) -> bool {
        match self.cells[id] {
            CellVariable::Unsolved(ref mut domain) => domain.remove(value),
            CellVariable::Solved(_) => false,
        }
    }

    pub fn unsolved_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..GRID_CELLS).filter(move |&id| self.cells[id].is_unsolved())
    }

    /// The solved grid, if every cell's domain is a singleton
    pub fn solution(&self) -> Option<Solution> {
        let values = (0..GRID_CELLS)
            .map(|id| self.cells[id].determined_value())
            .collect::<Option<Vec<_>>>()?;
        Square::from_vec(GRID_WIDTH, values)
    }
}
