//! Backtracking search over snapshot-per-branch domain stores

use std::borrow::Cow;

use crate::puzzle::{CellId, Solution, Value};
use crate::solve::markup::GridMarkup;
use crate::solve::peers::PeerGraph;
use crate::solve::propagate::{propagate, PropagateResult};
use crate::solve::CellVariable;
use crate::solve::select::{order_values, select_cell};

pub(crate) enum SearchResult {
    /// Every branch was exhausted without finding a solution
    NoSolution,
    Solved(Solution),
    /// The node budget ran out before the search could finish
    Aborted,
}

/// Counts assignments made by the search, against an optional limit
pub(crate) struct NodeBudget {
    nodes: u64,
    limit: Option<u64>,
}

impl NodeBudget {
    pub fn new(limit: Option<u64>) -> Self {
        Self { nodes: 0, limit }
    }

    /// Records one assignment; returns false once the limit is exceeded
    fn spend(&mut self) -> bool {
        self.nodes += 1;
        self.limit.map_or(true, |limit| self.nodes <= limit)
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

struct SearchContext<'a> {
    markup: Cow<'a, GridMarkup>,
    depth: u32,
}

/// Searches for a solution of an arc-consistent `markup`.
///
/// Each branch clones the domain store before mutating it, so backtracking is
/// a matter of dropping the branch's copy.
pub(crate) fn search_solution(markup: &GridMarkup, budget: &mut NodeBudget) -> SearchResult {
    SearchContext {
        markup: Cow::Borrowed(markup),
        depth: 0,
    }
    .search_next(budget)
}

impl SearchContext<'_> {
    fn search_next(&mut self, budget: &mut NodeBudget) -> SearchResult {
        let cell = match select_cell(self.markup.as_ref()) {
            Some(cell) => cell,
            // no unsolved cells remain; the markup must already be a solution
            None => {
                return match self.markup.solution() {
                    Some(solution) => SearchResult::Solved(solution),
                    None => SearchResult::NoSolution,
                };
            }
        };
        let next_depth = self.depth + 1;
        debug!("Backtracking (depth={})", next_depth);
        for (i, value) in order_values(self.markup.as_ref(), cell).into_iter().enumerate() {
            if !self.is_legal(cell, value) {
                continue;
            }
            if !budget.spend() {
                debug!("node budget exhausted after {} nodes", budget.nodes());
                return SearchResult::Aborted;
            }
            debug!("Guessing with {} at cell {}, guess #: {}", value, cell, i + 1);
            let mut context = SearchContext {
                markup: Cow::Borrowed(&self.markup),
                depth: next_depth,
            };
            match context.guess_cell(cell, value, budget) {
                SearchResult::NoSolution => debug!("Guess failed"),
                result => return result,
            }
        }
        SearchResult::NoSolution
    }

    fn guess_cell(&mut self, cell: CellId, value: Value, budget: &mut NodeBudget) -> SearchResult {
        let markup = self.markup.to_mut();
        markup.assign(cell, value);

        // forward checking: prune the assigned value from every peer,
        // failing fast if a peer's domain empties
        let graph = PeerGraph::get();
        for &peer in graph.peers(cell) {
            if markup.remove_candidate(peer, value) && markup.domain(peer).is_empty() {
                return SearchResult::NoSolution;
            }
        }

        match propagate(markup) {
            PropagateResult::Solved(solution) => SearchResult::Solved(solution),
            PropagateResult::Invalid => SearchResult::NoSolution,
            PropagateResult::Unsolved => self.search_next(budget),
        }
    }

    /// Re-validates a candidate against solved peers before assigning
    fn is_legal(&self, cell: CellId, value: Value) -> bool {
        let graph = PeerGraph::get();
        graph
            .peers(cell)
            .iter()
            .all(|&peer| self.markup.cell(peer) != &CellVariable::Solved(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{search_solution, NodeBudget, SearchResult};
    use crate::puzzle::{is_valid_solution, Grid, Value, GRID_CELLS};
    use crate::solve::markup::GridMarkup;
    use crate::solve::propagate::{propagate, PropagateResult};

    fn searchable_markup(grid: &Grid) -> GridMarkup {
        let mut markup = GridMarkup::init(grid);
        assert!(matches!(propagate(&mut markup), PropagateResult::Unsolved));
        markup
    }

    #[test]
    fn solves_empty_grid() {
        let grid = Grid::new(vec![0; GRID_CELLS]).unwrap();
        let markup = searchable_markup(&grid);
        match search_solution(&markup, &mut NodeBudget::new(None)) {
            SearchResult::Solved(solution) => assert!(is_valid_solution(&solution)),
            _ => panic!("expected solved"),
        }
    }

    #[test]
    fn pigeonhole_is_unsolvable() {
        // cells (0,0), (1,0) and (2,0) all end up with the domain {8, 9}
        let mut values = vec![0; GRID_CELLS];
        for (col, &v) in [1, 2, 3, 4, 5, 6].iter().enumerate() {
            values[3 + col] = v;
        }
        values[2 * 9 + 1] = 7; // (1, 2), in the top-left box
        let grid = Grid::new(values).unwrap();
        grid.validate().unwrap();
        let markup = searchable_markup(&grid);
        assert!(matches!(
            search_solution(&markup, &mut NodeBudget::new(None)),
            SearchResult::NoSolution
        ));
    }

    #[test]
    fn tiny_budget_aborts() {
        let grid = Grid::new(vec![0; GRID_CELLS]).unwrap();
        let markup = searchable_markup(&grid);
        let mut budget = NodeBudget::new(Some(3));
        assert!(matches!(
            search_solution(&markup, &mut budget),
            SearchResult::Aborted
        ));
        assert_eq!(4, budget.nodes());
    }

    #[test]
    fn search_is_deterministic() {
        let grid = Grid::new(vec![0; GRID_CELLS]).unwrap();
        let markup = searchable_markup(&grid);
        let first = match search_solution(&markup, &mut NodeBudget::new(None)) {
            SearchResult::Solved(solution) => solution,
            _ => panic!("expected solved"),
        };
        let second = match search_solution(&markup, &mut NodeBudget::new(None)) {
            SearchResult::Solved(solution) => solution,
            _ => panic!("expected solved"),
        };
        assert_eq!(first, second);
    }

    #[test]
    fn budget_counts_assignments() {
        // one blank cell with one candidate: exactly one node
        let values: Vec<_> = (0..GRID_CELLS)
            .map(|id| ((id / 9 * 3 + id / 27 + id % 9) % 9 + 1) as Value)
            .collect();
        let mut values = values;
        values[40] = 0;
        let grid = Grid::new(values).unwrap();
        // the lone blank is a naked single, so propagation solves it; drive
        // the search engine directly from the unpropagated markup instead
        let markup = GridMarkup::init(&grid);
        let mut budget = NodeBudget::new(None);
        match search_solution(&markup, &mut budget) {
            SearchResult::Solved(solution) => assert!(grid.verify_solution(&solution)),
            _ => panic!("expected solved"),
        }
        assert_eq!(1, budget.nodes());
    }
}
