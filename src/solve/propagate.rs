//! Arc-consistency propagation (AC-3) over the peer graph

use std::collections::VecDeque;

use crate::puzzle::{CellId, Solution, GRID_CELLS};
use crate::solve::markup::GridMarkup;
use crate::solve::peers::PeerGraph;
use crate::solve::CellVariable;

pub(crate) enum PropagateResult {
    /// Every domain is a singleton; the induced assignment is the solution
    Solved(Solution),
    /// Arc-consistent fixpoint reached with some domains still open
    Unsolved,
    /// A domain emptied; the current state has no solution
    Invalid,
}

enum Revise {
    Unchanged,
    Revised,
    Empty,
}

/// Runs AC-3 to a fixpoint. The queue starts with every ordered peer pair
/// `(Xi, Xj)`; a successful revision of `Xi` re-enqueues `(Xk, Xi)` for every
/// other peer `Xk` of `Xi`.
pub(crate) fn propagate(markup: &mut GridMarkup) -> PropagateResult {
    let graph = PeerGraph::get();

    // a domain emptied by initialization would never be caught by revise
    if markup.unsolved_cells().any(|id| markup.domain(id).is_empty()) {
        debug!("empty domain before propagation");
        return PropagateResult::Invalid;
    }

    let mut queue: VecDeque<(CellId, CellId)> = (0..GRID_CELLS)
        .flat_map(|id| graph.peers(id).iter().map(move |&peer| (id, peer)))
        .collect();
    while let Some((xi, xj)) = queue.pop_front() {
        match revise(markup, xi, xj) {
            Revise::Unchanged => {}
            Revise::Empty => {
                debug!("domain of cell {} emptied by cell {}", xi, xj);
                return PropagateResult::Invalid;
            }
            Revise::Revised => {
                for &xk in graph.peers(xi) {
                    if xk != xj {
                        queue.push_back((xk, xi));
                    }
                }
            }
        }
    }
    match markup.solution() {
        Some(solution) => PropagateResult::Solved(solution),
        None => PropagateResult::Unsolved,
    }
}

/// Removes from the domain of `xi` any value without support in the domain of
/// `xj`. For the all-different constraint a value loses support exactly when
/// the domain of `xj` is the singleton of that value.
fn revise(markup: &mut GridMarkup, xi: CellId, xj: CellId) -> Revise {
    let value = match markup.cell(xj).determined_value() {
        Some(value) => value,
        None => return Revise::Unchanged,
    };
    match *markup.cell(xi) {
        CellVariable::Solved(v) => {
            if v == value {
                // removing the sole supported value would empty the domain
                Revise::Empty
            } else {
                Revise::Unchanged
            }
        }
        CellVariable::Unsolved(_) => {
            if !markup.remove_candidate(xi, value) {
                return Revise::Unchanged;
            }
            if markup.domain(xi).is_empty() {
                Revise::Empty
            } else {
                Revise::Revised
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{propagate, PropagateResult};
    use crate::puzzle::{parse_grid, Grid, GRID_CELLS};
    use crate::solve::markup::GridMarkup;

    #[test]
    fn fills_a_blank_row() {
        let text = "\
1 2 3 4 5 6 7 8 9
4 5 6 7 8 9 1 2 3
7 8 9 1 2 3 4 5 6
2 3 4 5 6 7 8 9 1
0 0 0 0 0 0 0 0 0
8 9 1 2 3 4 5 6 7
3 4 5 6 7 8 9 1 2
6 7 8 9 1 2 3 4 5
9 1 2 3 4 5 6 7 8";
        let grid = parse_grid(text).unwrap();
        let mut markup = GridMarkup::init(&grid);
        match propagate(&mut markup) {
            PropagateResult::Solved(solution) => {
                assert!(grid.verify_solution(&solution));
                assert_eq!(5, solution[4 * 9]);
            }
            _ => panic!("expected solved"),
        }
    }

    #[test]
    fn conflicting_singletons_are_invalid() {
        // no duplicate clue, but the blank in row 0 has no legal value
        let mut values = vec![0; GRID_CELLS];
        for (col, &v) in [1, 2, 3, 4, 5, 6, 7, 8].iter().enumerate() {
            values[col] = v;
        }
        values[17] = 9; // (8, 1), same column as the blank at (8, 0)
        let grid = Grid::new(values).unwrap();
        grid.validate().unwrap();
        let mut markup = GridMarkup::init(&grid);
        assert!(matches!(propagate(&mut markup), PropagateResult::Invalid));
    }

    #[test]
    fn open_domains_reach_fixpoint() {
        let grid = Grid::new(vec![0; GRID_CELLS]).unwrap();
        let mut markup = GridMarkup::init(&grid);
        assert!(matches!(propagate(&mut markup), PropagateResult::Unsolved));
        assert_eq!(81, markup.unsolved_cells().count());
    }
}
