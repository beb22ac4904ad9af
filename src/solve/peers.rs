//! The static constraint graph: for each cell, the 20 cells that must differ

use ahash::AHashSet;
use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::puzzle::{box_cells, box_of, col_cells, col_of, row_cells, row_of, CellId, GRID_CELLS};

/// Number of peers of every cell: 8 in the row, 8 in the column, 4 more in the box
pub(crate) const PEER_COUNT: usize = 20;

static GRAPH: Lazy<PeerGraph> = Lazy::new(PeerGraph::build);

/// Peer lists for all 81 cells, computed once and shared
pub(crate) struct PeerGraph {
    peers: Vec<[CellId; PEER_COUNT]>,
}

impl PeerGraph {
    pub fn get() -> &'static PeerGraph {
        &GRAPH
    }

    fn build() -> Self {
        let peers = (0..GRID_CELLS)
            .map(|id| {
                let mut set: AHashSet<CellId> = AHashSet::with_capacity(PEER_COUNT + 1);
                set.extend(row_cells(row_of(id)));
                set.extend(col_cells(col_of(id)));
                set.extend(box_cells(box_of(id)));
                set.remove(&id);
                let mut peers = [0; PEER_COUNT];
                // sorted so that iteration order never depends on the hasher
                for (slot, peer) in peers.iter_mut().zip(set.into_iter().sorted()) {
                    *slot = peer;
                }
                peers
            })
            .collect();
        PeerGraph { peers }
    }

    pub fn peers(&self, id: CellId) -> &[CellId; PEER_COUNT] {
        &self.peers[id]
    }
}
