use super::*;
use crate::errors::{GraphError, InvariantCheck};
use fxhash::FxHashMap;
use std::fmt;

/// Undirected road network. Cities are identified by dense [`Node`] ids assigned in order of
/// their first appearance; this order is the canonical iteration order of all algorithms.
/// Each city additionally carries a unique name.
#[derive(Clone, Default)]
pub struct CityGraph {
    names: Vec<String>,
    index: FxHashMap<String, Node>,
    adj: Vec<FxHashMap<Node, Weight>>,
    number_of_edges: NumEdges,
}

impl GraphNodeOrder for CityGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for CityGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for CityGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj[u as usize].keys().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }
}

impl WeightedAdjacencyList for CityGraph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[u as usize].iter().map(|(&v, &w)| (v, w))
    }

    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.adj[u as usize].get(&v).copied()
    }
}

impl AdjacencyTest for CityGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj[u as usize].contains_key(&v)
    }
}

impl GraphEdgeEditing for CityGraph {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> Option<Weight> {
        assert_ne!(u, v, "self-loops are not supported");
        assert!(w > 0, "roads must have a positive length");

        let prev = self.adj[u as usize].insert(v, w);
        let _other = self.adj[v as usize].insert(u, w);
        debug_assert_eq!(prev, _other);

        if prev.is_none() {
            self.number_of_edges += 1;
        }

        prev
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        let prev = self.adj[u as usize].remove(&v);

        if prev.is_some() {
            let _other = self.adj[v as usize].remove(&u);
            debug_assert_eq!(prev, _other);
            self.number_of_edges -= 1;
        }

        prev
    }
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of city `name`, creating an isolated city if it does not exist yet
    pub fn add_vertex(&mut self, name: &str) -> Node {
        if let Some(&u) = self.index.get(name) {
            return u;
        }

        let u = self.number_of_nodes();
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), u);
        self.adj.push(FxHashMap::default());
        u
    }

    /// Adds (or overwrites) the road between cities `u` and `v`, creating missing cities first.
    /// Returns the ids of both endpoints.
    pub fn add_edge_by_name(&mut self, u: &str, v: &str, w: Weight) -> (Node, Node) {
        let u = self.add_vertex(u);
        let v = self.add_vertex(v);
        self.add_edge(u, v, w);
        (u, v)
    }

    /// Returns the name of city `u`.
    /// ** Panics if u >= n **
    pub fn name_of(&self, u: Node) -> &str {
        &self.names[u as usize]
    }

    /// Returns all names in canonical order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the id of the city with exactly this name
    pub fn node_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }

    /// Returns the first city (in canonical order) whose name matches `query` if both are
    /// lower-cased. Whitespace around `query` is ignored.
    ///
    /// # Example
    /// ```
    /// use relief::graph::*;
    /// let mut graph = CityGraph::new();
    /// graph.add_edge_by_name("Springfield", "Shelbyville", 3);
    /// assert_eq!(graph.find_city_ignore_case(" SHELBYVILLE "), Some(1));
    /// assert_eq!(graph.find_city_ignore_case("Capital City"), None);
    /// ```
    pub fn find_city_ignore_case(&self, query: &str) -> Option<Node> {
        let query = query.trim().to_lowercase();
        self.names
            .iter()
            .position(|name| name.to_lowercase() == query)
            .map(|u| u as Node)
    }

    /// Translates a sequence of ids into city names
    pub fn names_of(&self, nodes: impl IntoIterator<Item = Node>) -> Vec<&str> {
        nodes.into_iter().map(|u| self.name_of(u)).collect()
    }

    /// Builds a graph with nodes named "0", "1", ... and unit (or given) weights.
    /// The names are created in numeric order so that ids and names coincide.
    pub fn test_only_from(edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(|e| e.into()).collect();
        let n = edges.iter().map(|e| e.0.max(e.1) + 1).max().unwrap_or(0);

        let mut graph = Self::with_numbered_nodes(n);
        graph.add_edges(edges);
        graph
    }

    /// Creates `n` isolated cities named "0" to "n-1"
    pub fn with_numbered_nodes(n: NumNodes) -> Self {
        let mut graph = Self::new();
        for u in 0..n {
            graph.add_vertex(&u.to_string());
        }
        graph
    }
}

impl InvariantCheck<GraphError> for CityGraph {
    fn is_correct(&self) -> Result<(), GraphError> {
        if self.names.len() != self.adj.len() || self.index.len() != self.adj.len() {
            return Err(GraphError::InconsistentIndex);
        }

        for (u, name) in self.names.iter().enumerate() {
            if self.index.get(name) != Some(&(u as Node)) {
                return Err(GraphError::InconsistentIndex);
            }
        }

        let mut half_edges: NumEdges = 0;
        for u in self.vertices() {
            for (v, w) in self.weighted_neighbors_of(u) {
                half_edges += 1;

                if u == v {
                    return Err(GraphError::SelfLoop(u));
                }

                if w == 0 {
                    return Err(GraphError::NonPositiveWeight(u, v));
                }

                if self.weight_of(v, u) != Some(w) {
                    return Err(GraphError::Asymmetric(u, v));
                }
            }
        }

        if half_edges != 2 * self.number_of_edges {
            return Err(GraphError::EdgeCount {
                stored: self.number_of_edges,
                actual: half_edges / 2,
            });
        }

        Ok(())
    }
}

impl fmt::Debug for CityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<_> = self
            .ordered_weighted_edges()
            .into_iter()
            .map(|WeightedEdge(u, v, w)| format!("{}-{}({w})", self.name_of(u), self.name_of(v)))
            .collect();

        write!(
            f,
            "CityGraph {{ cities: [{}], roads: [{}] }}",
            self.names.join(", "),
            edges.join(", ")
        )
    }
}
