use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation.
///
/// The neighborhoods are kept symmetric: `v` is a neighbor of `u` iff `u` is a neighbor of `v`.
/// Self-loops are never stored and parallel edges collapse into one, so `number_of_edges`
/// counts distinct edges `{u, v}` with `u != v`.
///
/// Not safe for concurrent use without external synchronization: edge insertion requires
/// `&mut self`, so it can never overlap with a running traversal.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
    policy: InsertionPolicy,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using an Adjacency-Set
pub type AdjSetUndir = UndirectedGraph<SetNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Returns a read-only view of the neighborhood of `u`.
    pub fn neighborhood(&self, u: Node) -> Result<&Nbs> {
        self.check_node(u)?;
        Ok(&self.nbs[u as usize])
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        if !self.policy.admit(self.number_of_nodes(), u, v, false)? {
            return Ok(false);
        }

        if self.nbs[u as usize].try_add_neighbor(v) {
            return Ok(false);
        }

        let present = self.nbs[v as usize].try_add_neighbor(u);
        debug_assert!(!present);

        self.num_edges += 1;
        Ok(true)
    }

    fn insertion_policy(&self) -> InsertionPolicy {
        self.policy
    }

    fn set_insertion_policy(&mut self, policy: InsertionPolicy) {
        self.policy = policy;
    }
}

test_graph_ops!(test_adj_array_undir, AdjArrayUndir, true);
test_graph_ops!(test_adj_set_undir, AdjSetUndir, true);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn edge_count_ignores_duplicates_and_loops() {
        let mut graph = AdjArrayUndir::new(4);

        assert_eq!(graph.add_edge(0, 1), Ok(true));
        assert_eq!(graph.add_edge(1, 0), Ok(false));
        assert_eq!(graph.add_edge(0, 1), Ok(false));
        assert_eq!(graph.add_edge(2, 2), Ok(false));
        assert_eq!(graph.add_edge(1, 2), Ok(true));

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(1).sorted().collect_vec(), vec![0, 2]);
        assert!(graph.has_edge(2, 1));
        assert!(!graph.has_edge(2, 2));
    }

    #[test]
    fn permissive_insertion_drops_invalid_edges() {
        crate::testing::init_test_logger();
        let mut graph = AdjSetUndir::new(3);

        assert_eq!(graph.add_edge(0, 3), Ok(false));
        assert_eq!(graph.add_edge(7, 1), Ok(false));
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
    }

    #[test]
    fn strict_insertion_rejects_invalid_edges() {
        let mut graph = AdjArrayUndir::with_policy(3, InsertionPolicy::Strict);

        assert_eq!(
            graph.add_edge(0, 3),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                number_of_nodes: 3
            })
        );
        assert_eq!(graph.add_edge(1, 1), Err(GraphError::SelfLoop(1)));
        assert_eq!(graph.add_edge(1, 2), Ok(true));
        assert_eq!(graph.number_of_edges(), 1);

        graph.set_insertion_policy(InsertionPolicy::Permissive);
        assert_eq!(graph.add_edge(1, 1), Ok(false));
    }

    #[test]
    fn checked_queries() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);

        assert!(graph.try_neighbors_of(3).is_err());
        assert_eq!(graph.try_neighbors_of(2).unwrap().collect_vec(), vec![1]);
        assert_eq!(graph.try_has_edge(0, 1), Ok(true));
        assert!(graph.try_has_edge(0, 5).is_err());
        assert_eq!(graph.neighborhood(1).unwrap().num_of_neighbors(), 2);
        assert!(graph.neighborhood(9).is_err());
    }

    #[test]
    fn try_from_edges() {
        assert!(AdjArrayUndir::try_from_edges(0, [(0, 0)]).is_err());
        assert!(AdjArrayUndir::try_from_edges(2, [(0, 2)]).is_err());

        let graph = AdjArrayUndir::try_from_edges(3, [(0, 1), (1, 0), (2, 1)]).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.insertion_policy(), InsertionPolicy::Strict);
    }
}
