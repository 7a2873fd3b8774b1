/*!
`trgraphs` is a small library of classical **traversal-based** graph algorithms for graphs that are
unlabelled, unweighted and whose nodes are numbered `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

See the [`repr`] module for the available graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir) / [`AdjSetUndir`](crate::repr::AdjSetUndir): undirected graphs with symmetric neighborhoods,
- [`AdjArray`](crate::repr::AdjArray) / [`AdjSetArray`](crate::repr::AdjSetArray): directed graphs storing outgoing neighborhoods,
- [`NeighborLists`](crate::repr::NeighborLists): a validated array of per-node neighbor lists.

Directed algorithms are not tied to these types: every type implementing
[`AdjacencyList`](crate::ops::AdjacencyList) and [`GraphType`](crate::ops::GraphType) with
`Dir = Directed` can be queried.

# Errors

Vertex indices are validated at the boundary: queries with an invalid node return
[`GraphError::NodeOutOfRange`]. Inserting an invalid edge is governed by an explicit
[`InsertionPolicy`](crate::ops::InsertionPolicy): permissive graphs drop such edges (and log a
warning), strict graphs reject them. Missing paths, cycles or orders are regular results
(empty vectors or `None`), never errors.

# Usage

All algorithms are implemented as traits on the graph itself (see [`algo`]), so
`use trgraphs::{prelude::*, algo::*};` suffices for most needs:

```
use trgraphs::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
assert_eq!(graph.count_components(), 1);
assert_eq!(graph.bfs_distances(0).unwrap()[&3], 3);
assert!(!graph.has_cycles());
```

Each call runs its own traversal with freshly allocated state; results are owned by the caller.
All traversals use explicit stacks or queues, so deep graphs cannot exhaust the call stack.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `trgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
