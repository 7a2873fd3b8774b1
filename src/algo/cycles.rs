/*!
# Cycles in Undirected Graphs

A depth-first visit with parent tracking finds a cycle iff it reads an arc to a node on the
current DFS path that is not the DFS parent (the tree edge read backwards is not a cycle).
*/

use itertools::Itertools;
use log::debug;

use super::*;

/// Cycle detection in undirected graphs
pub trait CycleDetection: AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns *true* if any connected component contains a cycle
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// assert!(!g.has_cycles());
    ///
    /// g.add_edge(3, 1).unwrap();
    /// assert!(g.has_cycles());
    /// ```
    fn has_cycles(&self) -> bool {
        !self.find_any_cycle().is_empty()
    }

    /// Returns the first cycle found by a depth-first visit of the whole graph, or an empty
    /// vector if the graph is acyclic.
    ///
    /// The cycle starts and ends with the node `c` closing it and lists the DFS path from `c`
    /// to the node whose arc closed the cycle in reverse, i.e. `[c, u, ..., c]` where `(u, c)`
    /// is the closing arc. Nodes of the DFS path above `c` are not part of the cycle.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)]);
    /// assert_eq!(g.find_any_cycle(), vec![1, 3, 2, 1]);
    /// ```
    fn find_any_cycle(&self) -> Vec<Node> {
        let mut search = self.depth_first_covering();
        while let Some(event) = search.next() {
            if let DfsEvent::Revisit {
                node,
                on_stack: true,
                to_parent: false,
                ..
            } = event
            {
                let mut cycle = search
                    .current_path()
                    .skip_while(|&u| u != node)
                    .collect_vec();
                cycle.push(node);
                cycle.reverse();

                debug!("Found cycle of length {}", cycle.len() - 1);
                return cycle;
            }
        }

        Vec::new()
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + GraphType<Dir = Undirected> {}
