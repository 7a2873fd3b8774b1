/*!
# Directed Cycles and Topological Orders

A depth-first visit keeps track of the nodes on the current DFS path. An arc into such a node
closes a directed cycle; if no such arc exists, the reversed post-order of the visit is a
topological order.
*/

use itertools::Itertools;
use log::debug;

use super::*;

/// Cycle detection and topological sorting of directed graphs
pub trait TopologicalOrder: DirectedAdjacencyList {
    /// Returns a directed cycle `[c, ..., u, c]` that follows the arcs of the graph and repeats
    /// the closing node `c` last, or `None` if the graph is acyclic.
    /// Self-loops are cycles `[u, u]`.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.find_cycle(), None);
    ///
    /// g.add_edge(3, 1).unwrap();
    /// assert_eq!(g.find_cycle(), Some(vec![1, 2, 3, 1]));
    /// ```
    fn find_cycle(&self) -> Option<Vec<Node>> {
        let mut search = self.depth_first_covering();
        while let Some(event) = search.next() {
            if let DfsEvent::Revisit {
                node,
                on_stack: true,
                ..
            } = event
            {
                let mut cycle = search
                    .current_path()
                    .skip_while(|&u| u != node)
                    .collect_vec();
                cycle.push(node);

                debug!("Found directed cycle of length {}", cycle.len() - 1);
                return Some(cycle);
            }
        }

        None
    }

    /// Returns *true* if the graph contains no directed cycle
    fn is_acyclic(&self) -> bool {
        self.find_cycle().is_none()
    }

    /// Returns the nodes in topological order, i.e. for every arc `(u, v)`, `u` precedes `v`,
    /// or `None` if the graph contains a directed cycle.
    /// The order is the reversed post-order of a depth-first visit with roots in ascending order.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(2, 1), (1, 0), (3, 0)]);
    /// assert_eq!(g.topological_sort(), Some(vec![3, 2, 1, 0]));
    /// ```
    fn topological_sort(&self) -> Option<Vec<Node>> {
        let mut order = Vec::with_capacity(self.len());
        for event in self.depth_first_covering() {
            match event {
                DfsEvent::Revisit { on_stack: true, .. } => {
                    debug!("Graph contains a directed cycle, there is no topological order");
                    return None;
                }
                DfsEvent::Postvisit { node, .. } => order.push(node),
                _ => {}
            }
        }

        order.reverse();
        Some(order)
    }
}

impl<G> TopologicalOrder for G where G: DirectedAdjacencyList {}
