use super::*;

/// Dense `n x n` table of shortest path lengths stored in row-major order.
/// Pairs without a connecting path are `None`; there is no magic "infinite" value.
///
/// # Example
/// ```
/// use relief::graph::*;
/// let graph = CityGraph::test_only_from([(0, 1, 2), (1, 2, 3)]);
/// let dist = graph.all_pairs_shortest_paths();
/// assert_eq!(dist.get(0, 2), Some(5));
/// assert_eq!(dist.get(2, 2), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<Option<Distance>>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix in which only the diagonal is reachable (with distance 0)
    pub fn new(size: NumNodes) -> Self {
        let size = size as usize;
        let mut data = vec![None; size * size];
        for i in 0..size {
            data[i * size + i] = Some(0);
        }
        Self { data, size }
    }

    /// Returns the length of a shortest path from `from` to `to`, or `None` if `to`
    /// cannot be reached.
    /// ** Panics if either index is out of bounds **
    pub fn get(&self, from: Node, to: Node) -> Option<Distance> {
        self.data[self.offset(from, to)]
    }

    /// Returns true iff there exists a path between both nodes
    pub fn is_reachable(&self, from: Node, to: Node) -> bool {
        self.get(from, to).is_some()
    }

    /// Number of nodes covered by the matrix
    pub fn size(&self) -> NumNodes {
        self.size as NumNodes
    }

    fn set(&mut self, from: Node, to: Node, distance: Option<Distance>) {
        let offset = self.offset(from, to);
        self.data[offset] = distance;
    }

    fn offset(&self, from: Node, to: Node) -> usize {
        let (from, to) = (from as usize, to as usize);
        assert!(from < self.size && to < self.size);
        from * self.size + to
    }

    /// Returns true if `get(i, j) == get(j, i)` for all pairs
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns true if `get(i, j) <= get(i, k) + get(k, j)` for all triples where
    /// the right hand side is finite. In particular, a finite right hand side implies
    /// a finite left hand side.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let n = self.size();
        for k in 0..n {
            for i in 0..n {
                let Some(dik) = self.get(i, k) else {
                    continue;
                };

                for j in 0..n {
                    let Some(dkj) = self.get(k, j) else {
                        continue;
                    };

                    if self.get(i, j).is_none_or(|dij| dij > dik + dkj) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

pub trait AllPairsShortestPaths {
    /// Computes the length of a shortest path between every pair of nodes (Floyd-Warshall).
    /// Runs in time `O(n^3)`.
    fn all_pairs_shortest_paths(&self) -> DistanceMatrix;
}

impl<G: WeightedAdjacencyList> AllPairsShortestPaths for G {
    fn all_pairs_shortest_paths(&self) -> DistanceMatrix {
        let mut dist = DistanceMatrix::new(self.number_of_nodes());

        for WeightedEdge(u, v, w) in self.weighted_edges() {
            dist.set(u, v, Some(w as Distance));
            dist.set(v, u, Some(w as Distance));
        }

        for k in self.vertices_range() {
            for i in self.vertices_range() {
                let Some(dik) = dist.get(i, k) else {
                    continue;
                };

                for j in self.vertices_range() {
                    let Some(dkj) = dist.get(k, j) else {
                        continue;
                    };

                    let via_k = dik + dkj;
                    if dist.get(i, j).is_none_or(|dij| via_k < dij) {
                        dist.set(i, j, Some(via_k));
                    }
                }
            }
        }

        dist
    }
}
