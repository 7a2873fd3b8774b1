/*!
# Bipartite Graph Algorithms

This module provides the 2-colouring test of undirected graphs.

Functionality includes:
- Testing whether a graph is bipartite
- Computing a 2-colouring (or equivalently a bipartition) if one exists
- Verifying that a given bipartition is valid

Every adjacency list can be tested, in particular plain [`NeighborLists`].
*/

use log::debug;

use super::{traversal::*, *};

/// Colour of a node in a 2-colouring: `+1` or `-1`, `0` while uncoloured
pub type Color = i8;

/// Colour of nodes that are not yet reached by the colouring BFS
pub const UNCOLORED: Color = 0;

/// A trait for testing and computing bipartitions in graphs.
///
/// A bipartition is represented by the set of nodes on the **right** side (colour `-1`);
/// all other nodes are on the **left** side (colour `+1`).
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. every edge connects both sides.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    ///
    /// let mut right = NodeBitSet::new(4);
    /// right.set_bit(1);
    /// right.set_bit(3);
    /// assert!(g.is_bipartition(&right));
    /// ```
    fn is_bipartition(&self, bipartition: &NodeBitSet) -> bool;

    /// Computes a 2-colouring with colours `+1` and `-1`, if one exists.
    /// Every component is coloured by a BFS whose root (its smallest node) gets colour `+1`.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
    /// assert_eq!(g.bipartite_coloring(), Some(vec![1, -1, 1, 1, -1]));
    /// ```
    fn bipartite_coloring(&self) -> Option<Vec<Color>>;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(10, (0..9).map(|u| (u, u + 1)));
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.cardinality(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet>;

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge(0, 2).unwrap();
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.bipartite_coloring().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, bipartition: &NodeBitSet) -> bool {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.get_bit(u) != bipartition.get_bit(v))
    }

    fn bipartite_coloring(&self) -> Option<Vec<Color>> {
        if self.is_empty() {
            return Some(Vec::new());
        }

        let colors = propose_possibly_illegal_coloring(self);
        match self
            .edges(false)
            .find(|&Edge(u, v)| colors[u as usize] == colors[v as usize])
        {
            Some(conflict) => {
                debug!("Edge {conflict} connects two nodes of the same colour");
                None
            }
            None => Some(colors),
        }
    }

    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let colors = self.bipartite_coloring()?;

        let mut bipartition = self.vertex_bitset_unset();
        for u in self.vertices().filter(|&u| colors[u as usize] < 0) {
            bipartition.set_bit(u);
        }
        Some(bipartition)
    }
}

/// Colours the graph using BFS traversals started at every yet uncoloured node.
///
/// - If the graph is bipartite, the returned colouring is valid
/// - If the graph is not bipartite, the returned colouring may be invalid
///
/// ** Panics if the graph has no nodes **
fn propose_possibly_illegal_coloring<G>(graph: &G) -> Vec<Color>
where
    G: AdjacencyList,
{
    let mut colors = vec![UNCOLORED; graph.len()];
    let mut bfs = graph.bfs_with_predecessor(0);

    loop {
        for item in bfs.by_ref() {
            colors[item.item() as usize] = match item.predecessor() {
                None => 1,
                Some(pred) => -colors[pred as usize],
            };
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    colors
}
