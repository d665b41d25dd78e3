//! Exact round trips through a set of target cities, using shortest path lengths as costs.

use crate::graph::*;
use log::{debug, info};

/// A closed walk `start, t1, ..., tn, start` together with its total length
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    stops: Vec<Node>,
    cost: Distance,
}

impl Tour {
    /// The trivial round trip that never leaves `start`
    pub fn trivial(start: Node) -> Self {
        Self {
            stops: vec![start, start],
            cost: 0,
        }
    }

    /// All stops including the start at both ends
    pub fn stops(&self) -> &[Node] {
        &self.stops
    }

    /// The stops strictly between leaving and returning to the start
    pub fn targets(&self) -> &[Node] {
        &self.stops[1..self.stops.len() - 1]
    }

    pub fn start(&self) -> Node {
        self.stops[0]
    }

    pub fn cost(&self) -> Distance {
        self.cost
    }
}

/// One complete, feasible ordering of the targets produced by [`TourCandidates`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourCandidate {
    pub order: Vec<Node>,
    pub cost: Distance,
}

pub struct TourPlanner {
    distances: DistanceMatrix,
}

impl TourPlanner {
    /// Computes the shortest path lengths of `graph` once; all subsequent plans use them
    pub fn new<G: AllPairsShortestPaths>(graph: &G) -> Self {
        Self::from_distances(graph.all_pairs_shortest_paths())
    }

    pub fn from_distances(distances: DistanceMatrix) -> Self {
        Self { distances }
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Returns a shortest round trip from `start` that visits every target exactly once, or
    /// `None` if some target cannot be reached. Among equally long tours, the first one in
    /// the enumeration order of [`TourCandidates`] wins.
    pub fn plan(&self, start: Node, targets: &[Node]) -> Option<Tour> {
        if targets.is_empty() {
            return Some(Tour::trivial(start));
        }

        let mut inspected = 0u64;
        let mut best: Option<TourCandidate> = None;
        for candidate in self.candidates(start, targets) {
            inspected += 1;
            if best.as_ref().is_none_or(|b| candidate.cost < b.cost) {
                best = Some(candidate);
            }
        }

        debug!("Inspected {inspected} complete tours over {} targets", targets.len());

        let Some(best) = best else {
            info!("No round trip from {start} reaches all {} targets", targets.len());
            return None;
        };

        info!("Shortest round trip has length {}", best.cost);

        let mut stops = Vec::with_capacity(targets.len() + 2);
        stops.push(start);
        stops.extend(best.order);
        stops.push(start);

        Some(Tour {
            stops,
            cost: best.cost,
        })
    }

    /// Lazily enumerates all orderings of `targets` whose legs (including the way back to
    /// `start`) are reachable. Orderings are produced in lexicographic order of the target
    /// positions in `targets`.
    pub fn candidates<'a>(&'a self, start: Node, targets: &[Node]) -> TourCandidates<'a> {
        TourCandidates::new(&self.distances, start, targets.to_vec())
    }
}

/// Depth-first enumeration of round trips with an explicit stack. A prefix is abandoned as soon
/// as its next leg is unreachable; hence no infeasible ordering is ever completed. The iterator
/// is finite and cannot be restarted.
pub struct TourCandidates<'a> {
    distances: &'a DistanceMatrix,
    start: Node,
    targets: Vec<Node>,
    visited: FixedBitSet,
    // indices into `targets` of the current prefix; `costs[i]` is the length up to `path[i]`
    path: Vec<usize>,
    costs: Vec<Distance>,
    // `cursors[d]` is the next index to try at depth `d`
    cursors: Vec<usize>,
    exhausted: bool,
}

impl<'a> TourCandidates<'a> {
    fn new(distances: &'a DistanceMatrix, start: Node, targets: Vec<Node>) -> Self {
        let n = targets.len();
        Self {
            distances,
            start,
            visited: FixedBitSet::with_capacity(n),
            path: Vec::with_capacity(n),
            costs: Vec::with_capacity(n),
            cursors: vec![0; n + 1],
            targets,
            exhausted: false,
        }
    }

    /// The city the current prefix ends in
    fn current_city(&self) -> Node {
        self.path.last().map_or(self.start, |&i| self.targets[i])
    }

    fn cost(&self) -> Distance {
        self.costs.last().copied().unwrap_or(0)
    }

    /// Extends the prefix by the next reachable, unvisited target; returns false if there is none
    fn advance(&mut self) -> bool {
        let depth = self.path.len();
        let from = self.current_city();

        while self.cursors[depth] < self.targets.len() {
            let i = self.cursors[depth];
            self.cursors[depth] += 1;

            if self.visited[i] {
                continue;
            }

            let Some(leg) = self.distances.get(from, self.targets[i]) else {
                continue;
            };

            let cost = self.cost() + leg;
            self.visited.insert(i);
            self.path.push(i);
            self.costs.push(cost);
            self.cursors[depth + 1] = 0;
            return true;
        }

        false
    }

    /// Drops the last target of the prefix; marks the enumeration as complete if the prefix is empty
    fn backtrack(&mut self) {
        match self.path.pop() {
            Some(i) => {
                self.visited.set(i, false);
                self.costs.pop();
            }
            None => self.exhausted = true,
        }
    }
}

impl Iterator for TourCandidates<'_> {
    type Item = TourCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            if self.path.len() == self.targets.len() {
                let closing = self.distances.get(self.current_city(), self.start);
                let candidate = closing.map(|leg| TourCandidate {
                    order: self.path.iter().map(|&i| self.targets[i]).collect(),
                    cost: self.cost() + leg,
                });

                self.backtrack();

                if candidate.is_some() {
                    return candidate;
                }
            } else if !self.advance() {
                self.backtrack();
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{brute_force_tour_cost, random_city_graphs};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, seq::IteratorRandom};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path_example() {
        // A -2- B -3- C -5- D
        let mut graph = CityGraph::new();
        graph.add_edge_by_name("A", "B", 2);
        graph.add_edge_by_name("B", "C", 3);
        graph.add_edge_by_name("C", "D", 5);

        let planner = TourPlanner::new(&graph);
        let tour = planner.plan(0, &[1, 3]).unwrap();

        assert_eq!(graph.names_of(tour.stops().iter().copied()), ["A", "B", "D", "A"]);
        assert_eq!(tour.cost(), 2 + 8 + 10);
        assert_eq!(tour.targets(), [1, 3]);
        assert_eq!(tour.start(), 0);
    }

    #[test]
    fn uses_shortest_paths_not_roads() {
        // 0 and 2 are not adjacent, 0-3 is long
        let graph = CityGraph::test_only_from([(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 10)]);
        let tour = TourPlanner::new(&graph).plan(0, &[2, 3]).unwrap();

        assert_eq!(tour.stops(), [0, 2, 3, 0]);
        assert_eq!(tour.cost(), 2 + 1 + 3);
    }

    #[test]
    fn picks_cheapest_order() {
        // 0 - 1 (1), 0 - 2 (1), 1 - 2 (10), 0 - 3 (1), 2 - 3 (1)
        let graph =
            CityGraph::test_only_from([(0, 1, 1), (0, 2, 1), (1, 2, 10), (0, 3, 1), (2, 3, 1)]);
        let tour = TourPlanner::new(&graph).plan(1, &[2, 3]).unwrap();

        // 1 -> 2 -> 3 -> 1 costs 2 + 1 + 2 and ties with its reverse, the first one wins
        assert_eq!(tour.stops(), [1, 2, 3, 1]);
        assert_eq!(tour.cost(), 5);
    }

    #[test]
    fn empty_targets_yield_trivial_tour() {
        let graph = CityGraph::test_only_from([(0, 1, 3)]);
        let tour = TourPlanner::new(&graph).plan(1, &[]).unwrap();
        assert_eq!(tour, Tour::trivial(1));
        assert_eq!(tour.cost(), 0);
        assert!(tour.targets().is_empty());
    }

    #[test]
    fn start_among_targets() {
        let graph = CityGraph::test_only_from([(0, 1, 3)]);
        let tour = TourPlanner::new(&graph).plan(0, &[0, 1]).unwrap();
        assert_eq!(tour.stops(), [0, 0, 1, 0]);
        assert_eq!(tour.cost(), 6);
    }

    #[test]
    fn unreachable_target_is_infeasible() {
        let mut graph = CityGraph::test_only_from([(0, 1, 1), (1, 2, 1)]);
        let island = graph.add_vertex("island");

        let planner = TourPlanner::new(&graph);
        assert_eq!(planner.plan(0, &[2, island]), None);
        assert_eq!(planner.plan(0, &[island]), None);
        assert_eq!(planner.plan(island, &[0]), None);
        assert_eq!(planner.candidates(0, &[1, island]).count(), 0);

        assert_eq!(planner.plan(island, &[island]).map(|t| t.cost()), Some(0));
    }

    #[test]
    fn candidates_enumerate_all_permutations() {
        let graph = CityGraph::test_only_from([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let planner = TourPlanner::new(&graph);

        let orders = planner
            .candidates(0, &[1, 2, 3])
            .map(|c| c.order)
            .collect_vec();

        assert_eq!(orders, [1, 2, 3].into_iter().permutations(3).collect_vec());

        let mut candidates = planner.candidates(0, &[]);
        assert_eq!(
            candidates.next(),
            Some(TourCandidate {
                order: vec![],
                cost: 0
            })
        );
        assert_eq!(candidates.next(), None);
        assert_eq!(candidates.next(), None);
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x7047);
        for graph in random_city_graphs(&mut rng, 2..10, 60) {
            let planner = TourPlanner::new(&graph);

            let start = graph.vertices().choose(&mut rng).unwrap();
            let num_targets = rng.gen_range(0..=graph.len().min(5));
            let targets = graph.vertices().choose_multiple(&mut rng, num_targets);

            let expected = brute_force_tour_cost(planner.distances(), start, &targets);
            let tour = planner.plan(start, &targets);
            assert_eq!(tour.as_ref().map(|t| t.cost()), expected, "{graph:?}");

            if let Some(tour) = tour {
                assert_eq!(tour.stops().first(), Some(&start));
                assert_eq!(tour.stops().last(), Some(&start));
                assert_eq!(
                    tour.targets().iter().sorted().collect_vec(),
                    targets.iter().sorted().collect_vec()
                );

                let recomputed: Distance = tour
                    .stops()
                    .iter()
                    .tuple_windows()
                    .map(|(&u, &v)| planner.distances().get(u, v).unwrap())
                    .sum();
                assert_eq!(recomputed, tour.cost());
            }
        }
    }
}
