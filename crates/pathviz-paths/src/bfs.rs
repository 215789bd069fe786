use std::collections::VecDeque;

use pathviz_core::Grid;

use crate::searcher::{SearchOutcome, Searcher};

impl Searcher {
    /// Breadth-first search: fewest cells from start to finish.
    ///
    /// Weights are ignored by contract — BFS answers "fewest cells", not
    /// "lowest cost". Cells are marked visited at *enqueue* time so no cell
    /// is enqueued twice, and recorded in the visitation order at dequeue
    /// time; walls are never enqueued at all.
    pub(crate) fn bfs(&mut self, grid: &Grid) -> SearchOutcome {
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
            node.visited = true;
            node.g = 0;
        }
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start_idx);

        let mut valid_path = false;
        let mut nb = std::mem::take(&mut self.neighbors);

        while let Some(ci) = queue.pop_front() {
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
                let node = self.touch(ni);
                node.visited = true;
                node.g = current_g + 1;
                node.parent = ci;
                queue.push_back(ni);
            }
        }

        self.neighbors = nb;
        SearchOutcome {
            visited,
            valid_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::Algorithm;
    use pathviz_core::Coords;

    fn open_3x3() -> Grid {
        Grid::new(3, 3, Coords::new(0, 0), Coords::new(2, 2)).unwrap()
    }

    #[test]
    fn open_grid_shortest_path() {
        let grid = open_3x3();
        let mut s = Searcher::new(3, 3);
        let outcome = s.run(Algorithm::Bfs, &grid).unwrap();
        assert!(outcome.valid_path);
        assert_eq!(outcome.visited[0], Coords::new(0, 0));

        let path = s.path().unwrap();
        // Manhattan distance 4, so 5 cells including both endpoints.
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Coords::new(0, 0));
        assert_eq!(path[4], Coords::new(2, 2));
        // Consecutive path cells are cardinal neighbors.
        for w in path.windows(2) {
            assert_eq!(
                (w[0].row - w[1].row).abs() + (w[0].col - w[1].col).abs(),
                1
            );
        }
        assert_eq!(s.cost_at(Coords::new(2, 2)), 4);
    }

    #[test]
    fn walls_force_the_border_path() {
        let mut grid = open_3x3();
        grid.toggle_wall(Coords::new(1, 1)).unwrap();
        grid.toggle_wall(Coords::new(1, 2)).unwrap();
        let mut s = Searcher::new(3, 3);
        let outcome = s.run(Algorithm::Bfs, &grid).unwrap();
        assert!(outcome.valid_path);
        let path = s.path().unwrap();
        assert_eq!(path.len(), 5);
        // Only the left-then-bottom border remains.
        assert_eq!(
            path,
            vec![
                Coords::new(0, 0),
                Coords::new(1, 0),
                Coords::new(2, 0),
                Coords::new(2, 1),
                Coords::new(2, 2),
            ]
        );
        // Walls never appear in the visitation record.
        assert!(!outcome.visited.contains(&Coords::new(1, 1)));
    }

    #[test]
    fn weights_are_ignored() {
        let mut grid = open_3x3();
        grid.toggle_weight(Coords::new(0, 1)).unwrap();
        grid.toggle_weight(Coords::new(1, 0)).unwrap();
        let mut s = Searcher::new(3, 3);
        let outcome = s.run(Algorithm::Bfs, &grid).unwrap();
        assert!(outcome.valid_path);
        // Still a 5-cell path; weights do not deflect BFS.
        assert_eq!(s.path().unwrap().len(), 5);
    }
}
