use pathviz_core::Grid;

use crate::searcher::{SearchOutcome, Searcher};

impl Searcher {
    /// Depth-first search: finds *a* path, with no shortest-path claim.
    ///
    /// The stack is seeded with the start unmarked; a popped cell that is
    /// already visited or a wall is discarded, so a cell reachable from
    /// several predecessors may sit in the stack multiple times and only
    /// its first pop wins. Neighbors are pushed up-down-left-right with the
    /// visited filter applied at push time and the wall check deferred to
    /// pop time; under LIFO this makes the exploration right-left-down-up
    /// biased, which is the defined, reproducible tie-break rather than an
    /// accident. The predecessor is written at push time, so the last push
    /// before the winning pop is the one that ends up on the path.
    pub(crate) fn dfs(&mut self, grid: &Grid) -> SearchOutcome {
        let mut visited = Vec::new();
        let (Some(start_idx), Some(finish_idx)) =
            (self.idx(grid.start()), self.idx(grid.finish()))
        else {
            return SearchOutcome {
                visited,
                valid_path: false,
            };
        };

        let mut stack = vec![start_idx];
        let mut valid_path = false;
        let mut nb = std::mem::take(&mut self.neighbors);

        while let Some(ci) = stack.pop() {
            let cp = self.coords(ci);
            if self.is_visited(ci) || grid.is_wall(cp) {
                continue;
            }
            self.touch(ci).visited = true;
            visited.push(cp);

            if ci == finish_idx {
                valid_path = true;
                break;
            }

            let fresh = nb.cardinal(cp, |c| matches!(self.idx(c), Some(i) if !self.is_visited(i)));
            for &np in fresh {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                self.touch(ni).parent = ci;
                stack.push(ni);
            }
        }

        self.neighbors = nb;
        SearchOutcome {
            visited,
            valid_path,
        }
    }
}
