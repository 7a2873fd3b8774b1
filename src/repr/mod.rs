/*!
# Graph Representations

- [`UndirectedGraph`] ([`AdjArrayUndir`], [`AdjSetUndir`]) stores one symmetric neighborhood per node.
- [`DirectedGraph`] ([`AdjArray`], [`AdjSetArray`]) stores the outgoing neighborhood of every node.
- [`NeighborLists`] is a plain array of per-node neighbor lists as produced by simple loaders.

The first two are parameterized by a [`Neighborhood`] which controls how adjacency information is stored.
*/

use crate::{ops::*, *};

mod directed;
mod lists;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use lists::*;
pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `u` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, u: Node);
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$generic:ident> => $nbs:ident, $directed:ident) => {
            impl<$generic: Neighborhood> GraphType for $struct<$generic> {
                type Dir = $directed;
            }

            impl<$generic: Neighborhood> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$generic: Neighborhood> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$generic: Neighborhood> AdjacencyList for $struct<$generic> {
                type NeighborIter<'a>
                    = <$generic as Neighborhood>::NeighborhoodIter<'a>
                where
                    Self: 'a;

                fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
                    self.$nbs[u as usize].neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<$generic: Neighborhood> AdjacencyTest for $struct<$generic> {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    self.$nbs[u as usize].has_neighbor(v)
                }
            }

            impl<$generic: Neighborhood> GraphNew for $struct<$generic> {
                fn with_policy(n: NumNodes, policy: InsertionPolicy) -> Self {
                    assert!(n > 0);
                    Self {
                        $nbs: vec![$generic::default(); n as usize],
                        num_edges: 0,
                        policy,
                    }
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
