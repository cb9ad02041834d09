use std::fmt::{Debug, Display};

use crate::{Node, Port};

/// An edge is defined by two nodes/endpoints, source first.
/// All generated edges are directed; algorithms that need undirected semantics
/// look at both endpoints symmetrically instead of normalizing the edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Index of an edge in the edge list of a [`NestedGraph`](crate::repr::NestedGraph)
pub type EdgeId = NumEdges;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns the endpoint opposite to `u`.
    /// ** Panics in debug builds if `u` is not an endpoint **
    pub fn opposite(&self, u: Node) -> Node {
        debug_assert!(self.0 == u || self.1 == u);
        if self.0 == u { self.1 } else { self.0 }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge of a [`NestedGraph`](crate::repr::NestedGraph) together with the
/// ports it is attached to. Edges are owned by the graph, not by their endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeData {
    /// Source and target node
    pub endpoints: Edge,
    /// Port of the source node the edge leaves through, if any
    pub source_port: Option<Port>,
    /// Port of the target node the edge enters through, if any
    pub target_port: Option<Port>,
}

impl EdgeData {
    /// Creates a port-less edge `source -> target`
    pub fn new(source: Node, target: Node) -> Self {
        Self {
            endpoints: Edge(source, target),
            source_port: None,
            target_port: None,
        }
    }

    /// Returns the source node
    pub fn source(&self) -> Node {
        self.endpoints.0
    }

    /// Returns the target node
    pub fn target(&self) -> Node {
        self.endpoints.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_helpers() {
        let e = Edge(5, 2);
        assert_eq!(e.normalized(), Edge(2, 5));
        assert_eq!(e.reverse(), Edge(2, 5));
        assert_eq!(e.opposite(5), 2);
        assert_eq!(e.opposite(2), 5);
        assert!(!e.is_loop());
        assert!(Edge(3, 3).is_loop());
        assert_eq!(format!("{e}"), "(5,2)");
    }
}
