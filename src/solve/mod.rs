//! Solve Sudoku grids

mod cell_variable;
mod markup;
mod peers;
mod propagate;
mod search;
mod select;
mod value_set;

pub(crate) use self::cell_variable::CellVariable;
pub(crate) use self::value_set::ValueSet;

use crate::puzzle::{Grid, InvalidGridError, Solution};

use self::markup::GridMarkup;
use self::propagate::{propagate, PropagateResult};
use self::search::{search_solution, NodeBudget, SearchResult};

pub enum SolveResult {
    /// No assignment of the blank cells satisfies the constraints
    Unsatisfiable,
    /// The grid was completed
    Solved(SolvedData),
    /// The node budget ran out; satisfiability is unknown
    ResourceExhausted,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }
}

pub struct SolvedData {
    pub solution: Solution,
    /// false if constraint propagation alone determined every cell
    pub used_search: bool,
}

/// Solves a grid by arc-consistency propagation and backtracking search
pub struct SudokuSolver<'a> {
    grid: &'a Grid,
    node_budget: Option<u64>,
}

impl<'a> SudokuSolver<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            node_budget: None,
        }
    }

    /// Bounds the number of search assignments before giving up
    pub fn node_budget(&mut self, limit: u64) -> &mut Self {
        self.node_budget = Some(limit);
        self
    }

    /// Validates the grid, propagates to a fixpoint, then searches.
    ///
    /// A grid whose clues already conflict is an error; an unsatisfiable but
    /// well-formed grid is an ordinary `Unsatisfiable` result.
    pub fn solve(&self) -> Result<SolveResult, InvalidGridError> {
        self.grid.validate()?;
        let mut markup = GridMarkup::init(self.grid);
        match propagate(&mut markup) {
            PropagateResult::Invalid => return Ok(SolveResult::Unsatisfiable),
            PropagateResult::Solved(solution) => {
                debug_assert!(self.grid.verify_solution(&solution));
                return Ok(SolveResult::Solved(SolvedData {
                    solution,
                    used_search: false,
                }));
            }
            PropagateResult::Unsolved => {}
        }
        info!("Begin backtracking");
        let mut budget = NodeBudget::new(self.node_budget);
        let result = match search_solution(&markup, &mut budget) {
            SearchResult::NoSolution => SolveResult::Unsatisfiable,
            SearchResult::Aborted => SolveResult::ResourceExhausted,
            SearchResult::Solved(solution) => {
                debug_assert!(self.grid.verify_solution(&solution));
                SolveResult::Solved(SolvedData {
                    solution,
                    used_search: true,
                })
            }
        };
        debug!("Search finished after {} nodes", budget.nodes());
        Ok(result)
    }
}
