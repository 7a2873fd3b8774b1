/*!
# Errors

The only failure modes of the core are invalid vertex indices and, for graphs that reject them,
self-loops. Negative outcomes of queries (no path, no cycle, not a DAG) are regular results and
never reported through [`GraphError`].
*/

use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors raised at the boundary of a graph (construction, insertion and queries).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange {
        node: Node,
        number_of_nodes: NumNodes,
    },
    #[error("Self-loop at node {0} is not supported by this graph")]
    SelfLoop(Node),
    #[error("A graph needs at least one node")]
    EmptyGraph,
}

/// Shorthand for results of fallible graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
