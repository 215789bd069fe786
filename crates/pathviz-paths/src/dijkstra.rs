use std::collections::BinaryHeap;

use pathviz_core::Grid;

use crate::searcher::{NodeRef, SearchOutcome, Searcher};

impl Searcher {
    /// Dijkstra: minimum total cost with per-cell costs of 1 or 5.
    ///
    /// The frontier is a binary heap of [`NodeRef`]s keyed by distance,
    /// with insertion order as the tie-break. Relaxing a cell to a better
    /// distance pushes a fresh entry rather than re-keying the old one;
    /// the stale duplicate is discarded at pop time via the visited flag.
    /// Walls are excluded during relaxation, so they never enter the
    /// frontier. Frontier exhaustion is the no-path outcome.
    pub(crate) fn dijkstra(&mut self, grid: &Grid) -> SearchOutcome {
        let mut visited = Vec::new();
        let (Some(start_idx), Some(finish_idx)) =
            (self.idx(grid.start()), self.idx(grid.finish()))
        else {
            return SearchOutcome {
                visited,
                valid_path: false,
            };
        };

        {
            let node = self.touch(start_idx);
            node.g = 0;
            node.f = 0;
        }
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            f: 0,
            seq,
        });

        let mut valid_path = false;
        let mut nb = std::mem::take(&mut self.neighbors);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.is_visited(ci) {
                // A cheaper duplicate was finalized earlier.
                log::trace!("discarding stale frontier entry for {}", self.coords(ci));
                continue;
            }
            self.touch(ci).visited = true;
            let cp = self.coords(ci);
            visited.push(cp);

            if ci == finish_idx {
                valid_path = true;
                break;
            }

            let current_g = self.nodes[ci].g;

            let fresh = nb.cardinal(cp, |c| matches!(self.idx(c), Some(i) if !self.is_visited(i)));
            for &np in fresh {
                if grid.is_wall(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let candidate = current_g + grid.cost(np);
                let node = self.touch(ni);
                if candidate < node.g {
                    node.g = candidate;
                    node.f = candidate;
                    node.parent = ci;
                    seq += 1;
                    open.push(NodeRef {
                        idx: ni,
                        f: candidate,
                        seq,
                    });
                }
            }
        }

        if !valid_path {
            log::debug!("dijkstra exhausted the frontier without reaching {}", grid.finish());
        }
        self.neighbors = nb;
        SearchOutcome {
            visited,
            valid_path,
        }
    }
}
