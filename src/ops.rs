use std::ops::Range;

use log::warn;

use crate::*;

/// Marker for graphs whose edges have an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Marker for graphs whose edges are symmetric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

/// Compile-time direction of a graph, implemented by [`Directed`] and [`Undirected`]
pub trait GraphDir {
    const DIRECTED: bool;
}

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Tells algorithms whether a graph is directed or undirected
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if edges of this graph type have an orientation
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if edges of this graph type are symmetric
    fn is_undirected() -> bool {
        !Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in ascending order.
    /// The range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn has_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `u` if it is a vertex of the graph and `GraphError::NodeOutOfRange` otherwise
    fn check_node(&self, u: Node) -> Result<Node> {
        if self.has_node(u) {
            Ok(u)
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (distinct) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// The iterator only borrows the graph immutably, so the neighborhood cannot be altered through it.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, these are the out-neighbors of `u`
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Range-checked variant of [`AdjacencyList::neighbors_of`]
    fn try_neighbors_of(&self, u: Node) -> Result<Self::NeighborIter<'_>> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Read-only query interface of a directed graph: the number of nodes and, per node, its
/// out-neighbors. Every directed [`AdjacencyList`] implements it, so graphs of other crates only
/// need to implement [`GraphNodeOrder`], [`AdjacencyList`] and [`GraphType`] with `Dir = Directed`.
pub trait DirectedAdjacencyList: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns an iterator over nodes `v` with edges `(u, v)`
    /// ** Panics if `u >= n` **
    #[inline]
    fn out_neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.neighbors_of(u)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    #[inline]
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }
}

impl<G> DirectedAdjacencyList for G where G: AdjacencyList + GraphType<Dir = Directed> {}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Range-checked variant of [`AdjacencyTest::has_edge`]
    fn try_has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.has_edge(u, v))
    }
}

/// Decides what happens to an edge insertion with an endpoint outside of `0..n`
/// (or a self-loop in graphs that do not store them).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertionPolicy {
    /// Drop the edge and report that nothing was inserted
    #[default]
    Permissive,
    /// Fail the insertion with the corresponding [`GraphError`]
    Strict,
}

impl InsertionPolicy {
    /// Returns `Ok(true)` if the edge `(u, v)` may be inserted into a graph with `n` nodes,
    /// `Ok(false)` if it is dropped and an error if the policy is strict.
    pub(crate) fn admit(self, n: NumNodes, u: Node, v: Node, allow_loops: bool) -> Result<bool> {
        let violation = if u >= n {
            Some(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: n,
            })
        } else if v >= n {
            Some(GraphError::NodeOutOfRange {
                node: v,
                number_of_nodes: n,
            })
        } else if !allow_loops && u == v {
            Some(GraphError::SelfLoop(u))
        } else {
            None
        };

        match (violation, self) {
            (None, _) => Ok(true),
            (Some(err), InsertionPolicy::Strict) => Err(err),
            (Some(err), InsertionPolicy::Permissive) => {
                warn!("Ignoring edge {}: {err}", Edge(u, v));
                Ok(false)
            }
        }
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with n singleton nodes and the given insertion policy
    fn with_policy(n: NumNodes, policy: InsertionPolicy) -> Self;

    /// Creates an empty graph with n singleton nodes that silently drops invalid edges
    fn new(n: NumNodes) -> Self {
        Self::with_policy(n, InsertionPolicy::default())
    }

    /// Creates an empty graph with n singleton nodes or fails if `n == 0`
    fn try_new(n: NumNodes, policy: InsertionPolicy) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self::with_policy(n, policy))
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// Returns `Ok(true)` exactly if the edge was not present previously and got inserted.
    /// Invalid edges are handled according to the [`InsertionPolicy`] of the graph.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds all edges in the collection and returns the number of newly inserted edges.
    /// Stops at the first rejected edge.
    fn add_edges<I>(&mut self, edges: I) -> Result<NumEdges>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut inserted = 0;
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            if self.add_edge(u, v)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Returns the policy applied to invalid insertions
    fn insertion_policy(&self) -> InsertionPolicy;

    /// Changes the policy applied to future invalid insertions
    fn set_insertion_policy(&mut self, policy: InsertionPolicy);
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a permissive graph from a number of nodes and an iterator over Edges.
    /// Invalid edges are dropped.
    /// ** Panics if `n == 0` **
    fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>;

    /// Create a strict graph from a number of nodes and an iterator over Edges.
    /// Fails on the first invalid edge.
    fn try_from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::with_policy(n, InsertionPolicy::Permissive);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            // permissive insertions drop invalid edges instead of failing
            let _ = graph.add_edge(u, v);
        }
        graph
    }

    fn try_from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::try_new(n, InsertionPolicy::Strict)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
