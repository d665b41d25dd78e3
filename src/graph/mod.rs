#[cfg(test)]
pub mod bridges;
pub mod city_graph;
pub mod edge;
pub mod gnp;
pub mod shortest_paths;
pub mod traversal;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

/// Length of a single road; always strictly positive
pub type Weight = u32;

/// Length of a path, i.e. a sum of [`Weight`]s
pub type Distance = u64;

use std::ops::{Deref, Range};

#[cfg(test)]
pub use bridges::*;
pub use city_graph::*;
pub use edge::*;
pub use fixedbitset::FixedBitSet;
pub use gnp::*;
pub use shortest_paths::*;
pub use traversal::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in canonical order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of all vertices. In contrast to self.vertices(), the range
    /// does not borrow self and hence may be used where a mutable reference of self is needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> FixedBitSet {
        FixedBitSet::with_capacity(self.len())
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of undirected edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex.
    /// ** Panics if the v >= n **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of from [`u`]
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns the maximum degree or 0 for an empty graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }
}

pub trait WeightedAdjacencyList: AdjacencyList {
    /// Returns an iterator over all neighbors of `u` together with the weight of the connecting edge
    /// ** Panics if the u >= n **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the weight of edge {u, v} if it exists
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns every undirected edge exactly once as a normalized edge, i.e. `WeightedEdge(u, v, w)`
    /// with `u < v`. Edges are ordered by their first endpoint only.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.weighted_neighbors_of(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| WeightedEdge(u, v, w))
        })
    }

    /// Same as [`WeightedAdjacencyList::weighted_edges`] but sorted lexicographically by endpoints
    fn ordered_weighted_edges(&self) -> Vec<WeightedEdge> {
        let mut edges: Vec<_> = self.weighted_edges().collect();
        edges.sort_unstable();
        edges
    }
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the edge {u, v}
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Provides functions to insert/delete undirected weighted edges
pub trait GraphEdgeEditing: WeightedAdjacencyList {
    /// Adds the edge *{u,v}* with weight `w`, overwriting a previous weight.
    /// ** Panics if u == v, w == 0, or u, v >= n **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        self.try_add_edge(u, v, w);
    }

    /// Adds the edge *{u,v}* with weight `w` and returns the previous weight if the edge existed.
    /// ** Panics if u == v, w == 0, or u, v >= n **
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> Option<Weight>;

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Removes the edge *{u,v}* from the graph and returns its weight.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) -> Weight {
        match self.try_remove_edge(u, v) {
            Some(w) => w,
            None => panic!("edge ({u}, {v}) is not present"),
        }
    }

    /// Removes the edge *{u,v}* from the graph. If the edge was present, its weight is returned.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight>;

    /// Re-inserts an edge previously returned by [`GraphEdgeEditing::try_remove_edge`].
    /// ** Panics if the edge is still present **
    fn restore_edge(&mut self, u: Node, v: Node, w: Weight) {
        let prev = self.try_add_edge(u, v, w);
        assert!(prev.is_none(), "edge ({u}, {v}) was restored twice");
    }

    /// Removes the edge *{u,v}* until the returned guard is dropped. Returns `None` if the
    /// edge does not exist. The guard dereferences to the modified graph.
    fn remove_edge_scoped(&mut self, u: Node, v: Node) -> Option<ScopedEdgeRemoval<'_, Self>> {
        let w = self.try_remove_edge(u, v)?;
        Some(ScopedEdgeRemoval {
            graph: self,
            edge: WeightedEdge(u, v, w),
        })
    }
}

/// Keeps an edge removed from the graph for as long as it lives; restores it when dropped.
pub struct ScopedEdgeRemoval<'a, G: GraphEdgeEditing> {
    graph: &'a mut G,
    edge: WeightedEdge,
}

impl<G: GraphEdgeEditing> ScopedEdgeRemoval<'_, G> {
    /// The edge that is currently missing
    pub fn edge(&self) -> WeightedEdge {
        self.edge
    }
}

impl<G: GraphEdgeEditing> Deref for ScopedEdgeRemoval<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.graph
    }
}

impl<G: GraphEdgeEditing> Drop for ScopedEdgeRemoval<'_, G> {
    fn drop(&mut self) {
        let WeightedEdge(u, v, w) = self.edge;
        self.graph.restore_edge(u, v, w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scoped_removal_restores() {
        let mut graph = CityGraph::test_only_from([(0, 1), (1, 2)]);
        let before = graph.ordered_weighted_edges();

        {
            let removal = graph.remove_edge_scoped(1, 0).unwrap();
            assert_eq!(removal.edge(), WeightedEdge(1, 0, 1));
            assert!(!removal.has_edge(0, 1));
            assert!(!removal.has_edge(1, 0));
            assert_eq!(removal.number_of_edges(), 1);
        }

        assert_eq!(graph.ordered_weighted_edges(), before);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn scoped_removal_of_missing_edge() {
        let mut graph = CityGraph::test_only_from([(0, 1), (1, 2)]);
        assert!(graph.remove_edge_scoped(0, 2).is_none());
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn remove_and_restore_keep_weight() {
        let mut graph = CityGraph::new();
        let (a, b) = graph.add_edge_by_name("A", "B", 7);

        let w = graph.remove_edge(a, b);
        assert_eq!(w, 7);
        assert_eq!(graph.weight_of(a, b), None);

        graph.restore_edge(a, b, w);
        assert_eq!(graph.weight_of(b, a), Some(7));
    }

    #[test]
    #[should_panic]
    fn restore_twice_panics() {
        let mut graph = CityGraph::test_only_from([(0, 1)]);
        graph.restore_edge(0, 1, 1);
    }
}
