/*!
# Connectivity

Components, reachability and path search in undirected graphs, and weakly connected components
in directed graphs. All queries are answered by a depth-first visit (see [`DepthFirstEvents`]),
so nodes of a component are always reported in DFS discovery order.
*/

use itertools::Itertools;
use log::debug;

use super::*;

/// Connectivity queries on undirected graphs
pub trait Connectivity: AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns all nodes reachable from `start` in DFS discovery order (starting with `start`).
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
    /// assert_eq!(g.find_component(1).unwrap(), vec![1, 0, 2]);
    /// assert!(g.find_component(5).is_err());
    /// ```
    fn find_component(&self, start: Node) -> Result<Vec<Node>> {
        self.check_node(start)?;
        Ok(self
            .depth_first(start)
            .filter_map(|e| e.previsited())
            .collect())
    }

    /// Partitions the graph into its connected components.
    /// Components are ordered by their smallest node, nodes in DFS discovery order.
    fn find_all_components(&self) -> Vec<Vec<Node>> {
        let mut components: Vec<Vec<Node>> = Vec::new();
        for event in self.depth_first_covering() {
            let Some(u) = event.previsited() else {
                continue;
            };

            match components.last_mut() {
                Some(component) if !event.is_root() => component.push(u),
                _ => components.push(vec![u]),
            }
        }

        debug!("Found {} connected components", components.len());
        components
    }

    /// Returns the number of connected components
    fn count_components(&self) -> usize {
        self.depth_first_covering().filter(|e| e.is_root()).count()
    }

    /// Returns *true* if there exists a path between `a` and `b`
    fn path_exists(&self, a: Node, b: Node) -> Result<bool> {
        self.check_node(a)?;
        self.check_node(b)?;
        Ok(self.dfs(a).any(|u| u == b))
    }

    /// Returns a simple path `[a, ..., b]` or an empty vector if `b` is not reachable from `a`.
    /// The path is the DFS path at the moment `b` is discovered; for `a == b` it is `[a]`.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.find_any_path(0, 3).unwrap(), vec![0, 1, 2, 3]);
    /// assert!(g.find_any_path(0, 4).unwrap().is_empty());
    /// ```
    fn find_any_path(&self, a: Node, b: Node) -> Result<Vec<Node>> {
        self.check_node(a)?;
        self.check_node(b)?;

        let mut search = self.depth_first(a);
        while let Some(event) = search.next() {
            if event.previsited() == Some(b) {
                return Ok(search.current_path().collect());
            }
        }

        Ok(Vec::new())
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

/// Connectivity of directed graphs when ignoring the orientation of arcs
pub trait WeakConnectivity: DirectedAdjacencyList {
    /// Returns the undirected view of the graph: the list of `u` holds its out-neighbors
    /// followed by its in-neighbors other than `u` itself, in ascending order.
    fn symmetric_view(&self) -> NeighborLists {
        let mut in_lists = vec![Vec::new(); self.len()];
        for u in self.vertices() {
            for v in self.out_neighbors_of(u).filter(|&v| v != u) {
                in_lists[v as usize].push(u);
            }
        }

        let lists = self
            .vertices()
            .zip(in_lists)
            .map(|(u, in_nbs)| self.out_neighbors_of(u).chain(in_nbs).collect_vec())
            .collect_vec();

        NeighborLists::from_lists_unchecked(lists)
    }

    /// Partitions the graph into its weakly connected components.
    /// Components are ordered by their smallest node.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(5, [(1, 0), (2, 0), (4, 3)]);
    /// assert_eq!(g.weakly_connected_components(), vec![vec![0, 1, 2], vec![3, 4]]);
    /// ```
    fn weakly_connected_components(&self) -> Vec<Vec<Node>> {
        self.symmetric_view().find_all_components()
    }

    /// Returns the number of weakly connected components
    fn count_weakly_connected_components(&self) -> usize {
        self.symmetric_view().count_components()
    }
}

impl<G> WeakConnectivity for G where G: DirectedAdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_edges;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path_example() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);

        assert_eq!(graph.find_all_components(), vec![vec![0, 1, 2, 3]]);
        assert_eq!(graph.count_components(), 1);
        assert_eq!(graph.find_any_path(3, 0).unwrap(), vec![3, 2, 1, 0]);
        assert_eq!(graph.find_any_path(2, 2).unwrap(), vec![2]);
    }

    #[test]
    fn components_in_discovery_order() {
        //  3 - 0 - 5    1    2 - 4
        let graph = AdjArrayUndir::from_edges(6, [(0, 3), (0, 5), (4, 2)]);

        assert_eq!(
            graph.find_all_components(),
            vec![vec![0, 3, 5], vec![1], vec![2, 4]]
        );
        assert_eq!(graph.count_components(), 3);
        assert_eq!(graph.find_component(5).unwrap(), vec![5, 0, 3]);
    }

    #[test]
    fn out_of_range_queries() {
        let graph = AdjSetUndir::from_edges(3, [(0, 1)]);
        let err = GraphError::NodeOutOfRange {
            node: 3,
            number_of_nodes: 3,
        };

        assert_eq!(graph.find_component(3), Err(err));
        assert_eq!(graph.path_exists(0, 3), Err(err));
        assert_eq!(graph.find_any_path(3, 0), Err(err));
    }

    #[test]
    fn neighbor_lists_components() {
        let lists = NeighborLists::try_from_lists(vec![vec![], vec![2], vec![1]]).unwrap();
        assert_eq!(lists.find_all_components(), vec![vec![0], vec![1, 2]]);
        assert!(NeighborLists::new(0).find_all_components().is_empty());
    }

    #[test]
    fn random_components() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [1 as NumNodes, 5, 20, 60] {
            for _ in 0..20 {
                let m_ub = rng.random_range(0..=2 * n);
                let graph = AdjArrayUndir::from_edges(n, random_edges(rng, n, m_ub, true, false));

                let components = graph.find_all_components();
                assert_eq!(components.len(), graph.count_components());

                // every node is in exactly one component
                let mut component_of = vec![usize::MAX; n as usize];
                for (i, comp) in components.iter().enumerate() {
                    for &u in comp {
                        assert_eq!(component_of[u as usize], usize::MAX);
                        component_of[u as usize] = i;
                    }
                }
                assert!(component_of.iter().all(|&c| c != usize::MAX));

                // components are closed under neighborhoods
                for Edge(u, v) in graph.edges(true) {
                    assert_eq!(component_of[u as usize], component_of[v as usize]);
                }

                for a in graph.vertices() {
                    let reachable = graph.find_component(a).unwrap();
                    assert_eq!(
                        reachable.iter().copied().sorted().collect_vec(),
                        components[component_of[a as usize]]
                            .iter()
                            .copied()
                            .sorted()
                            .collect_vec()
                    );

                    for b in graph.vertices() {
                        let same = component_of[a as usize] == component_of[b as usize];
                        assert_eq!(graph.path_exists(a, b), Ok(same));
                        assert_eq!(graph.path_exists(b, a), Ok(same));

                        let path = graph.find_any_path(a, b).unwrap();
                        assert_eq!(path.is_empty(), !same);
                        if same {
                            assert_eq!(path[0], a);
                            assert_eq!(*path.last().unwrap(), b);
                            assert!(path.iter().all_unique());
                            assert!(path.iter().tuple_windows().all(|(&x, &y)| graph.has_edge(x, y)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn weak_components_ignore_directions() {
        let graph = AdjArray::from_edges(
            9,
            [(0, 3), (0, 4), (1, 4), (1, 5), (2, 3), (2, 5), (6, 0), (7, 8), (8, 6)],
        );
        assert_eq!(graph.count_weakly_connected_components(), 1);
        assert_eq!(
            graph.weakly_connected_components(),
            vec![vec![0, 3, 2, 5, 1, 4, 6, 8, 7]]
        );

        let graph = AdjSetArray::from_edges(4, [(1, 0), (2, 2)]);
        assert_eq!(
            graph.weakly_connected_components(),
            vec![vec![0, 1], vec![2], vec![3]]
        );
        assert_eq!(
            graph.symmetric_view().as_lists(),
            &[vec![1], vec![0], vec![2], Vec::<Node>::new()]
        );
    }

    #[test]
    fn random_weak_components() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        for n in [1 as NumNodes, 10, 40] {
            for _ in 0..20 {
                let edges = random_edges(rng, n, n, false, true);
                let directed = AdjArray::from_edges(n, edges.iter());
                let undirected = AdjArrayUndir::from_edges(n, edges.iter());

                let sorted = |comps: Vec<Vec<Node>>| {
                    comps
                        .into_iter()
                        .map(|c| c.into_iter().sorted().collect_vec())
                        .collect_vec()
                };

                assert_eq!(
                    sorted(directed.weakly_connected_components()),
                    sorted(undirected.find_all_components())
                );
                assert_eq!(
                    directed.count_weakly_connected_components(),
                    undirected.count_components()
                );
            }
        }
    }
}
