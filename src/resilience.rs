//! Single road failure analysis relative to a set of supply sites.

use crate::{exact::DominatingSet, graph::*};
use log::{debug, info};

/// Returns all roads whose failure would cut at least one city off from every supply site,
/// sorted by their (normalized) endpoints. An empty result means that the network survives
/// any single road failure without losing coverage.
///
/// Each road is removed, tested, and restored before the next one is considered; the graph is
/// unchanged once the function returns.
pub fn critical_edges<G: GraphEdgeEditing>(
    graph: &mut G,
    supplies: &DominatingSet,
) -> Vec<WeightedEdge> {
    ResilienceChecker::new(graph, supplies).critical_edges()
}

pub struct ResilienceChecker<'a, G> {
    graph: &'a mut G,
    supplies: Vec<Node>,
}

impl<'a, G: GraphEdgeEditing> ResilienceChecker<'a, G> {
    pub fn new(graph: &'a mut G, supplies: &DominatingSet) -> Self {
        Self {
            graph,
            supplies: supplies.iter().collect(),
        }
    }

    /// Number of cities reachable from the supply sites in the intact network. For a valid
    /// dominating set this is every city.
    pub fn baseline(&self) -> usize {
        self.graph
            .reachable_from(self.supplies.iter().copied())
            .count_ones(..)
    }

    /// Returns true iff removing road `{u, v}` shrinks the set of cities reachable from the
    /// supply sites. Returns `None` if the road does not exist.
    pub fn is_critical(&mut self, u: Node, v: Node) -> Option<bool> {
        let baseline = self.baseline();
        let removal = self.graph.remove_edge_scoped(u, v)?;
        Some(Self::reachable_count(&removal, &self.supplies) < baseline)
    }

    pub fn critical_edges(&mut self) -> Vec<WeightedEdge> {
        let baseline = self.baseline();
        if baseline < self.graph.len() {
            debug!(
                "Only {baseline} of {} cities are reachable from the supply sites",
                self.graph.len()
            );
        }

        let candidates = self.graph.ordered_weighted_edges();
        let number_of_roads = candidates.len();
        let mut critical = Vec::new();

        for WeightedEdge(u, v, w) in candidates {
            let Some(removal) = self.graph.remove_edge_scoped(u, v) else {
                continue;
            };

            if Self::reachable_count(&removal, &self.supplies) < baseline {
                critical.push(WeightedEdge(u, v, w));
            }
        }

        info!(
            "{} of {} roads are critical",
            critical.len(),
            number_of_roads
        );

        critical
    }

    fn reachable_count(graph: &G, supplies: &[Node]) -> usize {
        graph.reachable_from(supplies.iter().copied()).count_ones(..)
    }
}
