/*!
# Event-based Depth-First Visits

[`DepthFirstEvents`] performs a depth-first visit with an explicit stack of frames (one frame
per node on the current DFS path, holding the node, its DFS parent and the remaining part of its
neighborhood). Instead of yielding nodes it yields [`DfsEvent`]s, which is all the information
needed for components, path search, cycle detection and post-order based orderings:

- [`DfsEvent::Previsit`] when a node is discovered,
- [`DfsEvent::Revisit`] when an arc leads to an already discovered node,
- [`DfsEvent::Postvisit`] when all neighbors of a node have been processed.

The order of events is exactly the one of the textbook recursive DFS, but the depth of the
visit is only limited by the available memory.
*/

use log::trace;

use super::*;

/// A single step of a depth-first visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// `node` is discovered for the first time; `pred` is its DFS parent (`None` for roots)
    Previsit { node: Node, pred: Option<Node> },
    /// The arc `(pred, node)` leads to a node that was discovered earlier.
    Revisit {
        node: Node,
        pred: Node,
        /// `node` is still on the current DFS path
        on_stack: bool,
        /// `node` is the DFS parent of `pred`, i.e. the arc is the tree edge read backwards
        to_parent: bool,
    },
    /// All neighbors of `node` have been processed
    Postvisit { node: Node, pred: Option<Node> },
}

impl DfsEvent {
    /// Returns the node of a [`DfsEvent::Previsit`]
    pub fn previsited(&self) -> Option<Node> {
        match *self {
            DfsEvent::Previsit { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Returns the node of a [`DfsEvent::Postvisit`]
    pub fn postvisited(&self) -> Option<Node> {
        match *self {
            DfsEvent::Postvisit { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Returns *true* if the event starts a new DFS tree
    pub fn is_root(&self) -> bool {
        matches!(self, DfsEvent::Previsit { pred: None, .. })
    }
}

struct Frame<I> {
    node: Node,
    parent: Option<Node>,
    neighbors: I,
}

/// Iterator over the [`DfsEvent`]s of a depth-first visit.
///
/// Created either for a single root ([`DepthFirstEvents::new`]) or covering the whole graph
/// ([`DepthFirstEvents::covering`]), in which case unvisited nodes become roots in ascending
/// order whenever the current DFS tree is complete.
pub struct DepthFirstEvents<'a, G>
where
    G: AdjacencyList + 'a,
{
    graph: &'a G,
    visited: NodeBitSet,
    on_stack: NodeBitSet,
    stack: Vec<Frame<G::NeighborIter<'a>>>,
    pending_root: Option<Node>,
    cover_all: bool,
    next_candidate: Node,
}

impl<'a, G> DepthFirstEvents<'a, G>
where
    G: AdjacencyList + 'a,
{
    /// Visits all nodes reachable from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.has_node(start));
        let mut search = Self::empty(graph);
        search.pending_root = Some(start);
        search
    }

    /// Visits all nodes of the graph, restarting at the smallest unvisited node
    pub fn covering(graph: &'a G) -> Self {
        let mut search = Self::empty(graph);
        search.cover_all = true;
        search
    }

    fn empty(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            on_stack: graph.vertex_bitset_unset(),
            stack: Vec::new(),
            pending_root: None,
            cover_all: false,
            next_candidate: 0,
        }
    }

    /// Returns *true* if `u` was already discovered by the search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns *true* if `u` is on the current DFS path
    pub fn is_on_stack(&self, u: Node) -> bool {
        self.on_stack.get_bit(u)
    }

    /// Returns the current DFS path from the root of the current tree to the node
    /// whose neighborhood is being processed.
    /// Consecutive nodes are connected by tree arcs.
    pub fn current_path(&self) -> impl Iterator<Item = Node> + '_ {
        self.stack.iter().map(|frame| frame.node)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.stack.is_empty());
        self.pending_root = self.next_unvisited();
        self.pending_root.is_some()
    }

    fn next_unvisited(&mut self) -> Option<Node> {
        while self.next_candidate < self.graph.number_of_nodes() {
            let u = self.next_candidate;
            self.next_candidate += 1;
            if !self.visited.get_bit(u) {
                return Some(u);
            }
        }
        None
    }

    fn enter(&mut self, node: Node, pred: Option<Node>) -> DfsEvent {
        trace!("Previsit {node} from {pred:?}");
        self.visited.set_bit(node);
        self.on_stack.set_bit(node);
        self.stack.push(Frame {
            node,
            parent: pred,
            neighbors: self.graph.neighbors_of(node),
        });
        DfsEvent::Previsit { node, pred }
    }
}

impl<'a, G> Iterator for DepthFirstEvents<'a, G>
where
    G: AdjacencyList + 'a,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            let root = match self.pending_root.take() {
                Some(root) => root,
                None if self.cover_all => self.next_unvisited()?,
                None => return None,
            };
            return Some(self.enter(root, None));
        }

        let frame = self.stack.last_mut()?;
        let (u, parent) = (frame.node, frame.parent);

        match frame.neighbors.next() {
            Some(v) if self.visited.get_bit(v) => Some(DfsEvent::Revisit {
                node: v,
                pred: u,
                on_stack: self.on_stack.get_bit(v),
                to_parent: parent == Some(v),
            }),
            Some(v) => Some(self.enter(v, Some(u))),
            None => {
                self.stack.pop();
                self.on_stack.clear_bit(u);
                trace!("Postvisit {u}");
                Some(DfsEvent::Postvisit {
                    node: u,
                    pred: parent,
                })
            }
        }
    }
}
