//! Shared test helpers: seeded random edge lists and a macro checking the basic graph
//! operations of every representation against a naive adjacency matrix.

#[cfg(test)]
use crate::*;
#[cfg(test)]
use itertools::Itertools;
#[cfg(test)]
use rand::Rng;

/// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`.
/// Undirected edges are normalized, self-loops are only kept if `loops` is set.
#[cfg(test)]
pub(crate) fn random_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    undirected: bool,
    loops: bool,
) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);

            if undirected {
                Edge(u, v).normalized()
            } else {
                Edge(u, v)
            }
        })
        .filter(|e| loops || !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();

    edges
}

/// Installs a logger writing to the captured test output; repeated calls are ignored
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every graph should implement `GraphNew`, `AdjacencyList` and `GraphEdgeEditing`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::random_edges, *};
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.insertion_policy(), InsertionPolicy::Permissive);
                }

                assert_eq!(
                    <$graph>::try_new(0, InsertionPolicy::Strict).err(),
                    Some(GraphError::EmptyGraph)
                );
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges, $undirected, !$undirected);

                            let mut adj_matrix = vec![vec![false; n as usize]; n as usize];
                            for &Edge(u, v) in &edges {
                                adj_matrix[u as usize][v as usize] = true;
                                if $undirected {
                                    adj_matrix[v as usize][u as usize] = true;
                                }
                            }

                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                            assert_eq!(
                                graph.edges($undirected).sorted().collect_vec(),
                                edges
                            );

                            for u in 0..n {
                                let expected = (0..n).filter(|&v| adj_matrix[u as usize][v as usize]).collect_vec();
                                assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), expected);
                                assert_eq!(graph.degree_of(u), expected.len() as NumNodes);
                            }
                        }
                    }
                }
            }

            #[test]
            fn graph_edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [10 as NumNodes, 20, 50] {
                    let edges = random_edges(rng, n, n * 5, $undirected, !$undirected);
                    let mut graph = <$graph>::new(n);

                    let mut m = 0;
                    for &Edge(u, v) in &edges {
                        assert_eq!(graph.add_edge(u, v), Ok(true));
                        m += 1;
                        assert_eq!(graph.number_of_edges(), m);
                    }

                    // inserting everything again changes nothing
                    assert_eq!(graph.add_edges(edges.iter()), Ok(0));
                    if $undirected {
                        assert_eq!(graph.add_edges(edges.iter().map(|e| e.reverse())), Ok(0));
                    }
                    assert_eq!(graph.number_of_edges(), m);

                    assert_eq!(graph.add_edge(n, 0), Ok(false));
                    graph.set_insertion_policy(InsertionPolicy::Strict);
                    assert!(graph.add_edge(0, n).is_err());
                    assert_eq!(graph.number_of_edges(), m);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
