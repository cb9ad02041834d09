/*!
# Substructure Generators

Deterministic motifs used as seeds by the topology builders:

- **Cycles**: the triangle a [`Biconnected`](super::Biconnected) graph grows from
- **Cliques**: the 4-clique a [`Triconnected`](super::Triconnected) graph grows from

Edges are added unconditionally (no admission rules), with ports assigned as for any
other edge of the run.
*/

use super::*;

/// Trait for creating **substructures** between already existing nodes.
pub trait GeneratorSubstructures {
    /// Connects the given nodes with a directed **cycle**: consecutive nodes are
    /// connected, and the last node is connected back to the first.
    /// Returns the ids of the new edges in order.
    fn connect_cycle(&mut self, nodes_in_cycle: &[Node]) -> Vec<EdgeId>;

    /// Connects all given nodes into a **clique**. Each pair `i < j` receives the edge
    /// `nodes[i] -> nodes[j]`, so the clique is acyclic.
    /// Returns the ids of the new edges in order.
    fn connect_clique(&mut self, nodes: &[Node]) -> Vec<EdgeId>;
}

impl<R: Rng> GeneratorSubstructures for Session<'_, R> {
    fn connect_cycle(&mut self, nodes_in_cycle: &[Node]) -> Vec<EdgeId> {
        match nodes_in_cycle {
            [] => Vec::new(),
            [first, ..] => nodes_in_cycle
                .iter()
                .copied()
                .tuple_windows()
                .chain(nodes_in_cycle.last().map(|&last| (last, *first)))
                .map(|(u, v)| self.connect(u, v))
                .collect(),
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) -> Vec<EdgeId> {
        nodes
            .iter()
            .copied()
            .tuple_combinations()
            .map(|(u, v)| self.connect(u, v))
            .collect()
    }
}
