use super::*;

pub trait Bridges {
    /// Returns all edges whose removal increases the number of connected components.
    /// Each bridge is reported once and normalized.
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G: AdjacencyList> Bridges for G {
    fn compute_bridges(&self) -> Vec<Edge> {
        BridgeSearch::new(self).compute()
    }
}

struct BridgeSearch<'a, G> {
    graph: &'a G,
    visited: FixedBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a, G: AdjacencyList> BridgeSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices() {
            if self.graph.degree_of(u) == 0 || self.visited.put(u as usize) {
                continue;
            }

            self.compute_node(u, u);
        }

        self.bridges
    }

    fn compute_node(&mut self, parent: Node, u: Node) -> NodeInfo {
        self.time += 1;

        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };

        let graph = self.graph;
        for v in graph.neighbors_of(u) {
            if !self.visited.put(v as usize) {
                let info_v = self.compute_node(u, v);

                self.nodes_info[u as usize].update_low(info_v.low);

                if info_v.low > self.nodes_info[u as usize].discovery {
                    self.bridges.push(Edge(u, v).normalized())
                }
            } else if v != self.nodes_info[u as usize].parent {
                let v_disc = self.nodes_info[v as usize].discovery;
                self.nodes_info[u as usize].update_low(v_disc);
            }
        }

        self.nodes_info[u as usize]
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
    parent: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use crate::graph::*;

    #[test]
    fn bridges_in_path() {
        for n in [0, 1, 5, 10, 15] {
            let mut graph = CityGraph::with_numbered_nodes(n);
            for u in 0..n.saturating_sub(1) {
                graph.add_edge(u, u + 1, u + 1);
            }

            let mut bridges = graph.compute_bridges();
            bridges.sort();

            assert_eq!(
                bridges,
                graph
                    .ordered_weighted_edges()
                    .into_iter()
                    .map(|e| e.endpoints())
                    .collect_vec()
            );
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph =
            CityGraph::test_only_from([(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
    }

    #[test]
    fn no_bridges_in_cycle() {
        let graph = CityGraph::test_only_from([(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(graph.compute_bridges().is_empty());
    }
}
