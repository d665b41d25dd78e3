use crate::graph::*;
use std::io::Write;

/// A set of supply sites. Nodes are kept in insertion order, which is the order
/// in which a solver selected them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DominatingSet {
    number_of_nodes: NumNodes,
    set: Vec<Node>,
}

impl DominatingSet {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            number_of_nodes,
            set: Vec::new(),
        }
    }

    /// Adds a node to the dominating set.
    /// ** Panics if the node is out of range or already contained **
    ///
    /// # Example
    /// ```
    /// use relief::exact::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_node(0);
    /// assert!(domset.contains(0));
    /// ```
    pub fn add_node(&mut self, node: Node) {
        assert!(node < self.number_of_nodes);
        assert!(!self.contains(node), "node {node} added twice");
        self.set.push(node);
    }

    /// Adds multiple nodes to the dominating set.
    ///
    /// # Example
    /// ```
    /// use relief::exact::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_nodes([0, 1, 2]);
    /// assert_eq!(domset.len(), 3);
    /// ```
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.add_node(u);
        }
    }

    /// Returns true if the dominating set is empty.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Returns the number of nodes in the dominating set.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true if `u` was added to the set
    pub fn contains(&self, u: Node) -> bool {
        self.set.contains(&u)
    }

    /// Returns an iterator over the nodes in the dominating set in insertion order.
    ///
    /// # Example
    /// ```
    /// use relief::exact::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_nodes([3, 1]);
    /// let mut iter = domset.iter();
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.set.iter().copied()
    }

    /// Returns the nodes in insertion order
    pub fn as_slice(&self) -> &[Node] {
        &self.set
    }

    /// Writes the number of sites followed by one city name per line.
    ///
    /// ```
    /// use relief::{exact::DominatingSet, graph::*};
    /// let graph = CityGraph::test_only_from([(0, 1), (1, 2)]);
    /// let mut domset = DominatingSet::new(3);
    /// domset.add_node(1);
    ///
    /// let mut buffer: Vec<u8> = Vec::new();
    /// domset.write_names(&graph, &mut buffer).unwrap();
    /// assert_eq!(buffer, b"1\n1\n");
    /// ```
    pub fn write_names<W: Write>(&self, graph: &CityGraph, mut writer: W) -> anyhow::Result<()> {
        writeln!(&mut writer, "{}", self.set.len())?;
        for &u in &self.set {
            writeln!(&mut writer, "{}", graph.name_of(u))?;
        }
        Ok(())
    }

    /// Computes the set of nodes covered by the dominating set.
    pub fn compute_covered<G: AdjacencyList>(&self, graph: &G) -> FixedBitSet {
        let mut covered = graph.vertex_bitset_unset();

        for &u in &self.set {
            covered.extend(graph.neighbors_of(u).map(|v| v as usize));
            covered.insert(u as usize);
        }

        covered
    }

    /// Returns true if the dominating set is valid, i.e. it covers all nodes.
    pub fn is_valid<G: AdjacencyList>(&self, graph: &G) -> bool {
        self.compute_covered(graph).count_ones(..) == graph.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coverage_of_path() {
        // 0 - 1 - 2 - 3
        let graph = CityGraph::test_only_from([(0, 1), (1, 2), (2, 3)]);

        let mut domset = DominatingSet::new(4);
        domset.add_node(1);
        assert!(!domset.is_valid(&graph));
        assert_eq!(
            domset.compute_covered(&graph).ones().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        domset.add_node(3);
        assert!(domset.is_valid(&graph));
        assert_eq!(domset.as_slice(), [1, 3]);
    }

    #[test]
    fn isolated_nodes_need_themselves() {
        let mut graph = CityGraph::test_only_from([(0, 1)]);
        let lonely = graph.add_vertex("lonely");

        let mut domset = DominatingSet::new(3);
        domset.add_node(0);
        assert!(!domset.is_valid(&graph));

        domset.add_node(lonely);
        assert!(domset.is_valid(&graph));
    }

    #[test]
    fn empty_set_covers_empty_graph() {
        let domset = DominatingSet::new(0);
        assert!(domset.is_valid(&CityGraph::new()));
        assert!(domset.is_empty());
    }

    #[test]
    #[should_panic]
    fn duplicates_are_rejected() {
        let mut domset = DominatingSet::new(3);
        domset.add_nodes([2, 2]);
    }
}
