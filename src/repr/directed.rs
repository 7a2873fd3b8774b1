/*!
# Directed Graph Representations

A [`DirectedGraph`] stores **only outgoing neighborhoods**, which is all the directed
algorithms of this crate query. Incoming neighborhoods are never materialized here; algorithms
that ignore edge directions build their own symmetric view once.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// Parallel arcs collapse into one; self-loops are kept as they form cycles of length one.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone, Debug)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
    policy: InsertionPolicy,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using adjacency sets (`FxHashSet<Node>`).
pub type AdjSetArray = DirectedGraph<SetNeighborhood>;

impl_common_graph_ops!(DirectedGraph<OutNbs> => out_nbs, Directed);

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        if !self.policy.admit(self.number_of_nodes(), u, v, true)? {
            return Ok(false);
        }

        if self.out_nbs[u as usize].try_add_neighbor(v) {
            Ok(false)
        } else {
            self.num_edges += 1;
            Ok(true)
        }
    }

    fn insertion_policy(&self) -> InsertionPolicy {
        self.policy
    }

    fn set_insertion_policy(&mut self, policy: InsertionPolicy) {
        self.policy = policy;
    }
}

test_graph_ops!(test_adj_array, AdjArray, false);
test_graph_ops!(test_adj_set_array, AdjSetArray, false);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn arcs_keep_their_direction() {
        let mut graph = AdjArray::new(3);

        assert_eq!(graph.add_edge(0, 1), Ok(true));
        assert_eq!(graph.add_edge(0, 1), Ok(false));
        assert_eq!(graph.add_edge(1, 0), Ok(true));
        assert_eq!(graph.add_edge(2, 2), Ok(true));
        assert_eq!(graph.add_edge(2, 3), Ok(false));

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.out_neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(graph.out_degree_of(2), 1);
        assert!(graph.has_edge(2, 2));
        assert!(AdjArray::is_directed());
    }

    #[test]
    fn strict_arcs() {
        let mut graph = AdjSetArray::with_policy(2, InsertionPolicy::Strict);
        assert!(graph.add_edge(0, 2).is_err());
        assert_eq!(graph.add_edge(1, 1), Ok(true));
    }
}
