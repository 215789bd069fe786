use pathviz_core::Coords;

/// Cached neighbor computation helper.
///
/// Enumerates the 4 cardinal neighbors of a cell in **up, down, left,
/// right** order, keeping only those for which `keep` returns `true`.
/// The order is the tie-break order of every search in this crate; the
/// two retrieval policies the algorithms need are both expressed through
/// the predicate:
///
/// - *pre-filtered* (BFS, Dijkstra, A*): `keep` excludes out-of-bounds and
///   already-visited cells, so frontier expansion sees only fresh cells;
/// - *unfiltered* (DFS): `keep` checks bounds only, and the algorithm
///   applies its own visited/wall checks at push and pop time.
pub struct Neighbors {
    buf: Vec<Coords>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `c` for which `keep` is `true`,
    /// in up-down-left-right order.
    pub fn cardinal(&mut self, c: Coords, keep: impl Fn(Coords) -> bool) -> &[Coords] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
