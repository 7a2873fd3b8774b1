/*!
# Node Representation

We choose `Node = u32` as all graphs handled here are small enough to number their vertices
with less than `2^32` values. This saves space compared to `usize` and allows node values to
be used directly as indices after a cheap cast.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes are the unsigned integers `0..n`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
