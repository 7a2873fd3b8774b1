/*!
# Graph Algorithms

This module provides the traversal-based **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use trgraphs::algo::*;
```
and gain access to traversals, components, paths, cycles, topological orders and bipartiteness tests.
Algorithms are implemented as traits with blanket implementations, hence they are available as methods on
every graph implementing the required operations of [`crate::ops`].
Traversals are provided as **iterators**, making it easy to consume results lazily.
*/

mod bipartite;
mod connectivity;
mod cycles;
mod depth_first;
mod topological;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use connectivity::*;
pub use cycles::*;
pub use depth_first::*;
pub use topological::*;
pub use traversal::*;
