use super::{exact::DominatingSet, graph::*};
use itertools::Itertools;
use rand::Rng;
use std::ops::Range;

/// Returns `count` random road networks whose number of cities is drawn from `nodes`
/// and whose density varies between sparse and dense.
pub fn random_city_graphs(
    rng: &mut impl Rng,
    nodes: Range<NumNodes>,
    count: usize,
) -> Vec<CityGraph> {
    (0..count)
        .map(|_| {
            let n = rng.gen_range(nodes.clone());
            let p = rng.gen_range(0.1..0.7);
            CityGraph::random_gnp(rng, n, p, 9)
        })
        .collect()
}

/// Size of a minimum dominating set, obtained by trying all subsets in order of their size
pub fn brute_force_domination_number(graph: &CityGraph) -> NumNodes {
    let n = graph.number_of_nodes();
    assert!(n <= 16, "brute force is limited to small graphs");

    (0..=n)
        .find(|&k| {
            graph.vertices().combinations(k as usize).any(|subset| {
                let mut domset = DominatingSet::new(n);
                domset.add_nodes(subset);
                domset.is_valid(graph)
            })
        })
        .unwrap_or(n)
}

/// Cost of a cheapest round trip from `start` through all `targets`, obtained by trying
/// all permutations without any pruning. `None` if no round trip exists.
pub fn brute_force_tour_cost(
    dist: &DistanceMatrix,
    start: Node,
    targets: &[Node],
) -> Option<Distance> {
    targets
        .iter()
        .copied()
        .permutations(targets.len())
        .filter_map(|order| {
            std::iter::once(start)
                .chain(order)
                .chain(std::iter::once(start))
                .tuple_windows()
                .map(|(u, v)| dist.get(u, v))
                .sum::<Option<Distance>>()
        })
        .min()
}
