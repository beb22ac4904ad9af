//! Cell and value ordering heuristics for the search engine

use itertools::Itertools;

use crate::puzzle::{CellId, Value};
use crate::solve::markup::GridMarkup;
use crate::solve::peers::PeerGraph;

/// Picks the unsolved cell to branch on next, or `None` if every cell is
/// solved.
///
/// Minimum remaining values first; ties broken by the higher number of
/// unsolved peers, then by the lower cell id. The keys are explicit so the
/// choice never depends on container iteration order.
pub(crate) fn select_cell(markup: &GridMarkup) -> Option<CellId> {
    let graph = PeerGraph::get();
    let mut best: Option<(CellId, usize, usize)> = None;
    for id in markup.unsolved_cells() {
        let len = markup.domain(id).len();
        let degree = graph
            .peers(id)
            .iter()
            .filter(|&&peer| markup.cell(peer).is_unsolved())
            .count();
        let better = match best {
            None => true,
            Some((_, best_len, best_degree)) => {
                len < best_len || (len == best_len && degree > best_degree)
            }
        };
        if better {
            best = Some((id, len, degree));
        }
    }
    best.map(|(id, _, _)| id)
}

/// Orders the candidates of a cell least-constraining first: ascending by the
/// number of unsolved peers whose domain still contains the value, ties in
/// ascending value order.
pub(crate) fn order_values(markup: &GridMarkup, id: CellId) -> Vec<Value> {
    let graph = PeerGraph::get();
    markup
        .domain(id)
        .iter()
        .sorted_by_key(|&value| {
            graph
                .peers(id)
                .iter()
                .filter(|&&peer| {
                    markup
                        .cell(peer)
                        .unsolved()
                        .map_or(false, |domain| domain.contains(value))
                })
                .count()
        })
        .collect()
}
