//! Exhaustive backtracking search for dominating sets of bounded size.
//!
//! Candidates are tried in canonical node order. A candidate is only selected if it covers at
//! least one node that is not covered yet; every other choice can be dropped from a solution
//! without losing coverage. Once the subtree below a candidate failed, the candidate is excluded
//! from the remaining siblings' subtrees, as any solution containing it would have been found
//! there. All exclusions are withdrawn when the search returns from the level that made them.

use super::DominatingSet;
use crate::graph::*;
use log::{debug, info, trace};
use smallvec::SmallVec;

type NewlyCovered = SmallVec<[Node; 8]>;

/// Returns a dominating set with at most `budget` nodes, or `None` if no such set exists.
/// The empty graph is dominated by the empty set for every budget.
pub fn solve_with_budget<G: AdjacencyList>(graph: &G, budget: NumNodes) -> Option<DominatingSet> {
    let mut solver = BacktrackingSolver::new(graph, budget);
    let result = solver.solve();

    debug!(
        "Budget {budget}: {} after {} branches",
        if result.is_some() { "feasible" } else { "infeasible" },
        solver.number_of_branches()
    );

    result
}

/// Tries budgets `1, 2, ..., n` and returns the first feasible dominating set, which is therefore
/// of minimum size. Returns `None` only for the empty graph.
pub fn minimum_dominating_set<G: AdjacencyList>(graph: &G) -> Option<DominatingSet> {
    let domset = (1..=graph.number_of_nodes()).find_map(|k| solve_with_budget(graph, k))?;
    info!("Minimum number of supply sites: {}", domset.len());
    Some(domset)
}

/// Search state of a single budgeted run. Every mutation made while descending is undone
/// before a failing branch returns.
pub struct BacktrackingSolver<'a, G> {
    graph: &'a G,
    budget: NumNodes,
    chosen: Vec<Node>,
    is_chosen: FixedBitSet,
    covered: FixedBitSet,
    num_covered: NumNodes,
    exhausted: FixedBitSet,
    branches: u64,
}

impl<'a, G: AdjacencyList> BacktrackingSolver<'a, G> {
    pub fn new(graph: &'a G, budget: NumNodes) -> Self {
        Self {
            graph,
            budget,
            chosen: Vec::with_capacity(budget.min(graph.number_of_nodes()) as usize),
            is_chosen: graph.vertex_bitset_unset(),
            covered: graph.vertex_bitset_unset(),
            num_covered: 0,
            exhausted: graph.vertex_bitset_unset(),
            branches: 0,
        }
    }

    /// Runs the search. May only be called once per solver.
    pub fn solve(&mut self) -> Option<DominatingSet> {
        assert!(self.chosen.is_empty() && self.branches == 0);

        if !self.recurse() {
            return None;
        }

        let mut domset = DominatingSet::new(self.graph.number_of_nodes());
        domset.add_nodes(self.chosen.iter().copied());
        debug_assert!(domset.is_valid(self.graph));
        Some(domset)
    }

    /// Number of candidates that were tentatively selected so far
    pub fn number_of_branches(&self) -> u64 {
        self.branches
    }

    fn recurse(&mut self) -> bool {
        if self.num_covered == self.graph.number_of_nodes() {
            return true;
        }

        if self.chosen.len() as NumNodes >= self.budget {
            return false;
        }

        let mut failed_here: SmallVec<[Node; 16]> = SmallVec::new();

        for u in self.graph.vertices_range() {
            if self.is_chosen[u as usize] || self.exhausted[u as usize] {
                continue;
            }

            let newly_covered = self.newly_covered_by(u);
            if newly_covered.is_empty() {
                continue;
            }

            self.select(u, &newly_covered);
            if self.recurse() {
                return true;
            }
            self.deselect(u, &newly_covered);

            self.exhausted.insert(u as usize);
            failed_here.push(u);
        }

        for u in failed_here {
            self.exhausted.set(u as usize, false);
        }

        false
    }

    /// Returns `u` (if uncovered) followed by all of its uncovered neighbors
    fn newly_covered_by(&self, u: Node) -> NewlyCovered {
        let mut newly: NewlyCovered = SmallVec::new();
        if !self.covered[u as usize] {
            newly.push(u);
        }

        newly.extend(
            self.graph
                .neighbors_of(u)
                .filter(|&v| !self.covered[v as usize]),
        );

        newly
    }

    fn select(&mut self, u: Node, newly_covered: &[Node]) {
        self.branches += 1;
        trace!("select {u} at depth {}", self.chosen.len());

        self.chosen.push(u);
        self.is_chosen.insert(u as usize);
        for &v in newly_covered {
            self.covered.insert(v as usize);
        }
        self.num_covered += newly_covered.len() as NumNodes;
    }

    fn deselect(&mut self, u: Node, newly_covered: &[Node]) {
        let popped = self.chosen.pop();
        debug_assert_eq!(popped, Some(u));

        self.is_chosen.set(u as usize, false);
        for &v in newly_covered {
            self.covered.set(v as usize, false);
        }
        self.num_covered -= newly_covered.len() as NumNodes;
    }
}
