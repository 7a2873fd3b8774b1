use std::{iter::Copied, slice::Iter};

use super::*;

/// A plain array of per-node neighbor lists, `lists[u]` holding the neighbors of `u`.
///
/// The lists are expected to be symmetric (an undirected graph), but this is not enforced:
/// construction only guarantees that every listed neighbor is a node of the graph.
/// In contrast to [`UndirectedGraph`], lists may contain duplicates and self-loops, and a graph
/// without any node is allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborLists {
    lists: Vec<Vec<Node>>,
    policy: InsertionPolicy,
}

impl NeighborLists {
    /// Wraps existing neighbor lists.
    /// Fails if any list refers to a node `>= lists.len()`.
    pub fn try_from_lists(lists: Vec<Vec<Node>>) -> Result<Self> {
        let n = lists.len() as NumNodes;
        if let Some(&node) = lists.iter().flatten().find(|&&v| v >= n) {
            return Err(GraphError::NodeOutOfRange {
                node,
                number_of_nodes: n,
            });
        }

        Ok(Self {
            lists,
            policy: InsertionPolicy::default(),
        })
    }

    /// Wraps neighbor lists that are known to be in range
    pub(crate) fn from_lists_unchecked(lists: Vec<Vec<Node>>) -> Self {
        debug_assert!(
            lists
                .iter()
                .flatten()
                .all(|&v| (v as usize) < lists.len())
        );
        Self {
            lists,
            policy: InsertionPolicy::default(),
        }
    }

    /// Returns the underlying lists
    pub fn as_lists(&self) -> &[Vec<Node>] {
        &self.lists
    }

    /// Consumes `self` and returns the underlying lists
    pub fn into_lists(self) -> Vec<Vec<Node>> {
        self.lists
    }
}

impl GraphType for NeighborLists {
    type Dir = Undirected;
}

impl GraphNodeOrder for NeighborLists {
    fn number_of_nodes(&self) -> NumNodes {
        self.lists.len() as NumNodes
    }
}

impl AdjacencyList for NeighborLists {
    type NeighborIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.lists[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.lists[u as usize].len() as NumNodes
    }
}

impl GraphNew for NeighborLists {
    /// Unlike the other representations, `n == 0` is accepted
    fn with_policy(n: NumNodes, policy: InsertionPolicy) -> Self {
        Self {
            lists: vec![Vec::new(); n as usize],
            policy,
        }
    }
}

impl GraphEdgeEditing for NeighborLists {
    /// Appends `v` to the list of `u` and `u` to the list of `v` without checking for duplicates.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        if !self.policy.admit(self.number_of_nodes(), u, v, true)? {
            return Ok(false);
        }

        self.lists[u as usize].push(v);
        self.lists[v as usize].push(u);
        Ok(true)
    }

    fn insertion_policy(&self) -> InsertionPolicy {
        self.policy
    }

    fn set_insertion_policy(&mut self, policy: InsertionPolicy) {
        self.policy = policy;
    }
}

impl TryFrom<Vec<Vec<Node>>> for NeighborLists {
    type Error = GraphError;

    fn try_from(lists: Vec<Vec<Node>>) -> Result<Self> {
        Self::try_from_lists(lists)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn validate_lists() {
        assert!(NeighborLists::try_from_lists(vec![]).unwrap().is_empty());
        assert_eq!(
            NeighborLists::try_from_lists(vec![vec![1], vec![2]]),
            Err(GraphError::NodeOutOfRange {
                node: 2,
                number_of_nodes: 2
            })
        );

        let lists = NeighborLists::try_from(vec![vec![1], vec![0, 2], vec![1]]).unwrap();
        assert_eq!(lists.number_of_nodes(), 3);
        assert_eq!(lists.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(lists.degree_of(2), 1);
        assert_eq!(lists.into_lists()[0], vec![1]);
    }

    #[test]
    fn symmetric_insertion() {
        let mut lists = NeighborLists::new(3);
        assert_eq!(lists.add_edge(0, 2), Ok(true));
        assert_eq!(lists.add_edge(0, 2), Ok(true));
        assert_eq!(lists.add_edge(0, 3), Ok(false));

        assert_eq!(lists.as_lists(), &[vec![2, 2], vec![], vec![0, 0]]);
    }
}
