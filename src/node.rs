/*!
# Node Representation

We choose `Node = u32` as generated graphs rarely exceed `2^32` nodes.
A node value is an index into the node arena of a [`NestedGraph`](crate::repr::NestedGraph)
(or of a flat [`AdjArray`](crate::repr::AdjArray)), so node values can be used directly
to index per-node vectors.
*/

use std::num::NonZero;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, indexed by `node as usize`
pub type NodeBitSet = FixedBitSet;

/// Creates an empty [`NodeBitSet`] with one entry per node in `0..n`
pub fn node_bitset(n: NumNodes) -> NodeBitSet {
    FixedBitSet::with_capacity(n as usize)
}

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we store one parent link per node. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
