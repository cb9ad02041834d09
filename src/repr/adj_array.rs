/*!
# Flat Directed Adjacency Arrays

[`AdjArray`] stores outgoing and incoming neighborhoods of a flat directed graph as
`Vec<Node>` per node. It is the representation a single level of a
[`NestedGraph`](super::NestedGraph) is extracted into before running the
algorithms of [`algo`](crate::algo) on it.
*/

use super::*;

/// A directed multigraph storing **both outgoing and incoming neighborhoods**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjArray {
    out_nbs: Vec<Vec<Node>>,
    in_nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].iter().copied()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[u as usize].iter().copied()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].len() as NumNodes
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].len() as NumNodes
    }
}

impl GraphNew for AdjArray {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Vec::new(); n as usize],
            in_nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.out_nbs[u as usize].push(v);
        self.in_nbs[v as usize].push(u);
        self.num_edges += 1;
    }
}
