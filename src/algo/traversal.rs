/*!
Graph traversal primitives and the queries derived directly from them.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking) that mark
  nodes as visited when they are pushed.
- [`PopMarkedDfs`], a stack-based DFS that marks nodes only when they are popped.
- A high-level [`Traversal`] trait that exposes traversals and hop distances directly as
  methods on graph data structures.

The event-based depth-first visit used by the component, path, cycle and ordering algorithms
lives in [`depth_first`](super::depth_first).
*/

use std::{collections::VecDeque, marker::PhantomData};

use fxhash::FxHashMap;
use log::trace;

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit and a bitset of
/// discovered nodes. A node is marked as soon as it enters the frontier, hence it is
/// yielded at most once.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }

    /// Returns *true* if `u` was already discovered by the search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let node = self.graph.vertices().find(|&u| !self.visited.get_bit(u));
        match node {
            None => false,
            Some(x) => {
                self.visited.set_bit(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }
}

/// Stack-based depth-first search that marks a node as visited when it is **popped**.
///
/// Unvisited neighbors are pushed without being marked, so a node may sit on the stack several
/// times; only its first pop processes (and yields) it, later pops are skipped.
pub struct PopMarkedDfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> PopMarkedDfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.has_node(start));
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![start],
        }
    }

    /// Returns the number of (possibly repeated) entries currently on the stack
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }
}

impl<G> Iterator for PopMarkedDfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if self.visited.set_bit(u) {
                trace!("Skipping already processed node {u}");
                continue;
            }

            for v in self.graph.neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.stack.push(v);
                }
            }

            return Some(u);
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, DFS events, hop distances)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**, marking nodes when they are pushed.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    /// ** Panics if `start >= n` **
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns the [`DfsEvent`]s of a depth-first visit of all nodes reachable from `start`.
    /// ** Panics if `start >= n` **
    fn depth_first(&self, start: Node) -> DepthFirstEvents<'_, Self> {
        DepthFirstEvents::new(self, start)
    }

    /// Returns the [`DfsEvent`]s of a depth-first visit of the whole graph.
    /// New DFS trees are rooted at the smallest unvisited node.
    fn depth_first_covering(&self) -> DepthFirstEvents<'_, Self> {
        DepthFirstEvents::covering(self)
    }

    /// Returns a stack-based DFS iterator starting from `start` that marks nodes when they
    /// are popped (see [`PopMarkedDfs`]).
    /// ** Panics if `start >= n` **
    fn pop_marked_dfs(&self, start: Node) -> PopMarkedDfs<'_, Self> {
        PopMarkedDfs::new(self, start)
    }

    /// Returns all nodes reachable from `start` in the order in which the stack-based
    /// [`PopMarkedDfs`] processes them.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (1, 2)]);
    /// assert_eq!(g.iterative_dfs(0).unwrap(), vec![0, 2, 1]);
    /// assert!(g.iterative_dfs(4).is_err());
    /// ```
    fn iterative_dfs(&self, start: Node) -> Result<Vec<Node>> {
        self.check_node(start)?;
        Ok(self.pop_marked_dfs(start).collect())
    }

    /// Computes the hop distance from `start` to every node reachable from it.
    /// `start` maps to `0`, unreachable nodes are absent.
    ///
    /// # Examples
    /// ```
    /// use trgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// let distances = g.bfs_distances(0).unwrap();
    /// assert_eq!(distances.len(), 3);
    /// assert_eq!(distances[&2], 2);
    /// assert!(!distances.contains_key(&3));
    /// ```
    fn bfs_distances(&self, start: Node) -> Result<FxHashMap<Node, NumNodes>> {
        self.check_node(start)?;

        let mut distances = FxHashMap::default();
        for item in self.bfs_with_predecessor(start) {
            let distance = item
                .predecessor()
                .and_then(|p| distances.get(&p))
                .map_or(0, |&d: &NumNodes| d + 1);
            distances.insert(item.item(), distance);
        }

        Ok(distances)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArrayUndir::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order: Vec<Node> = graph.bfs(1).collect();
        assert_eq!(order.len(), 6);

        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = AdjArrayUndir::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| (x.predecessor(), x.item()))
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let order: Vec<Node> = graph.dfs(1).collect();
        assert_eq!(order, [1, 0, 5, 4, 3, 2]);

        let order: Vec<Node> = graph.dfs(5).collect();
        assert_eq!(order, [5, 4, 3]);
    }

    #[test]
    fn restart_covers_all_nodes() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (3, 4)]);

        let mut bfs = graph.bfs(0);
        let mut components = Vec::new();
        loop {
            components.push(bfs.by_ref().collect_vec());
            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        assert_eq!(components, vec![vec![0, 1], vec![2], vec![3, 4]]);
        assert!(bfs.did_visit_node(2));
    }

    #[test]
    fn pop_marked_dfs_processes_duplicates_once() {
        // 0 pushes 1 and 2; 2 pushes 1 again before the first copy of 1 is popped
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (2, 1), (1, 3)]);

        let mut dfs = graph.pop_marked_dfs(0);
        assert_eq!(dfs.next(), Some(0));
        assert_eq!(dfs.stack_len(), 2);
        assert_eq!(dfs.next(), Some(2));
        assert_eq!(dfs.stack_len(), 2);
        assert_eq!(dfs.collect_vec(), vec![1, 3]);

        assert_eq!(graph.iterative_dfs(3).unwrap(), vec![3, 1, 2, 0]);
    }

    #[test]
    fn distances_on_path() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let distances = graph.bfs_distances(0).unwrap();

        assert_eq!(
            distances.into_iter().sorted().collect_vec(),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
        assert_eq!(
            graph.bfs_distances(4),
            Err(GraphError::NodeOutOfRange {
                node: 4,
                number_of_nodes: 4
            })
        );
    }

    #[test]
    fn distances_are_shortest() {
        // 0 - 1 - 2 - 3 and shortcut 0 - 3
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (0, 3)]);
        let distances = graph.bfs_distances(0).unwrap();

        assert_eq!(distances[&0], 0);
        assert_eq!(distances[&1], 1);
        assert_eq!(distances[&2], 2);
        assert_eq!(distances[&3], 1);
        assert_eq!(distances.get(&4), None);
    }
}
