use std::collections::BinaryHeap;

use pathviz_core::Grid;

use crate::distance::manhattan;
use crate::searcher::{NodeRef, SearchOutcome, Searcher};

impl Searcher {
    /// A*: Dijkstra's skeleton with the frontier ordered by
    /// `f = g + manhattan(cell, finish)`.
    ///
    /// Manhattan distance never overestimates on a 4-directional grid with
    /// costs >= 1, so the first pop of the finish is optimal and the total
    /// path cost always equals Dijkstra's — A* just finalizes fewer cells
    /// on the way. Tie-break, stale-entry discard, and wall exclusion are
    /// identical to [`dijkstra`](Self::dijkstra).
    pub(crate) fn astar(&mut self, grid: &Grid) -> SearchOutcome {
        let mut visited = Vec::new();
        let (Some(start_idx), Some(finish_idx)) =
            (self.idx(grid.start()), self.idx(grid.finish()))
        else {
            return SearchOutcome {
                visited,
                valid_path: false,
            };
        };
        let finish = grid.finish();

        let start_h = manhattan(grid.start(), finish);
        {
            let node = self.touch(start_idx);
            node.g = 0;
            node.h = start_h;
            node.f = start_h;
        }
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            f: start_h,
            seq,
        });

        let mut valid_path = false;
        let mut nb = std::mem::take(&mut self.neighbors);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.is_visited(ci) {
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
                let tentative_g = current_g + grid.cost(np);
                let h = manhattan(np, finish);
                let node = self.touch(ni);
                if tentative_g < node.g {
                    node.g = tentative_g;
                    node.h = h;
                    node.f = tentative_g + h;
                    node.parent = ci;
                    seq += 1;
                    open.push(NodeRef {
                        idx: ni,
                        f: tentative_g + h,
                        seq,
                    });
                }
            }
        }

        if !valid_path {
            log::debug!("astar exhausted the frontier without reaching {finish}");
        }
        self.neighbors = nb;
        SearchOutcome {
            visited,
            valid_path,
        }
    }
}
