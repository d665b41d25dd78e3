use super::*;
use std::collections::VecDeque;

pub trait TraversalState {
    fn visited(&self) -> &FixedBitSet;

    fn did_visit_node(&self, u: Node) -> bool {
        self.visited()[u as usize]
    }
}

pub trait NodeSequencer {
    // would prefer this to be private
    fn init(seeds: impl IntoIterator<Item = Node>) -> Self;
    fn push(&mut self, item: Node);
    fn pop(&mut self) -> Option<Node>;
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(seeds: impl IntoIterator<Item = Node>) -> Self {
        seeds.into_iter().collect()
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(seeds: impl IntoIterator<Item = Node>) -> Self {
        seeds.into_iter().collect()
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////// BFS & DFS
pub struct TraversalSearch<'a, G: AdjacencyList, S: NodeSequencer> {
    graph: &'a G,
    visited: FixedBitSet,
    sequencer: S,
}

pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<G: AdjacencyList, S: NodeSequencer> TraversalState for TraversalSearch<'_, G, S> {
    fn visited(&self) -> &FixedBitSet {
        &self.visited
    }
}

impl<G: AdjacencyList, S: NodeSequencer> Iterator for TraversalSearch<'_, G, S> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.put(v as usize) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.count_ones(..) + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G: AdjacencyList, S: NodeSequencer> TraversalSearch<'a, G, S> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::new_from_seeds(graph, [start])
    }

    /// Starts the search simultaneously at all `seeds`. Duplicated seeds are visited once.
    pub fn new_from_seeds(graph: &'a G, seeds: impl IntoIterator<Item = Node>) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        let seeds: Vec<Node> = seeds
            .into_iter()
            .filter(|&u| !visited.put(u as usize))
            .collect();

        Self {
            graph,
            visited,
            sequencer: S::init(seeds),
        }
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken. If the node was already visited,
    /// this is a non-op.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    ///
    /// # Example
    /// ```
    /// use relief::graph::*;
    /// let graph = CityGraph::test_only_from([(0, 1), (1, 2)]);
    /// let dfs: Vec<_> = graph.dfs(0).exclude_node(1).collect();
    /// assert_eq!(dfs, vec![0]);
    /// ```
    pub fn exclude_node(mut self, u: Node) -> Self {
        self.visited.insert(u as usize);
        self
    }

    /// Consumes the search and returns the set of all nodes reachable from the seeds
    pub fn into_visited(mut self) -> FixedBitSet {
        while self.next().is_some() {}
        self.visited
    }

    /// Consumes the traversal search and returns true iff the requested node can be visited.
    ///
    /// # Example
    /// ```
    /// use relief::graph::*;
    /// let graph = CityGraph::test_only_from([(0, 1), (2, 3)]);
    /// assert!(graph.dfs(0).is_node_reachable(1));
    /// assert!(!graph.dfs(1).is_node_reachable(2));
    /// ```
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v == u)
    }
}

/// Offers graph traversal algorithms as methods of the graph representation
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes reachable from `start` in breadth-first-search order
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes reachable from `start` in depth-first-search order
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns an iterator traversing all nodes reachable from any of the `seeds`
    /// in breadth-first-search order
    fn bfs_from_seeds(&self, seeds: impl IntoIterator<Item = Node>) -> BFS<'_, Self> {
        BFS::new_from_seeds(self, seeds)
    }

    /// Returns the set of nodes reachable from at least one of the `seeds`
    fn reachable_from(&self, seeds: impl IntoIterator<Item = Node>) -> FixedBitSet {
        self.bfs_from_seeds(seeds).into_visited()
    }

    /// Returns true iff every node is reachable from at least one of the `seeds`.
    /// Trivially true for an empty graph.
    fn is_fully_reachable_from(&self, seeds: impl IntoIterator<Item = Node>) -> bool {
        self.reachable_from(seeds).count_ones(..) == self.len()
    }

    /// Returns true iff the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.is_empty() || self.is_fully_reachable_from([0])
    }
}

impl<T: AdjacencyList + Sized> Traversal for T {}
