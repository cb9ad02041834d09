use tracing::debug;

use super::*;
use crate::testing::test_generator_invariants;

/// Random out-trees grown by repeatedly attaching a new child to a random candidate.
///
/// - `max_degree` bounds the number of children per node,
/// - `max_width` bounds the number of nodes per depth.
///
/// `0` disables the respective bound. A candidate violating a bound is evicted from the
/// candidate list; if all candidates are evicted, growth stops with fewer nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tree {
    n: NumNodes,
    max_degree: u32,
    max_width: u32,
}

impl Tree {
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            max_degree: 0,
            max_width: 0,
        }
    }

    pub fn max_degree(mut self, max_degree: u32) -> Self {
        self.max_degree = max_degree;
        self
    }

    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }
}

impl TopologyBuilder for Tree {
    fn build<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node) {
        if self.n == 0 {
            return;
        }

        let n = self.n as usize;
        let root = session.create_node(parent);

        // attachable nodes together with their depth
        let mut candidates = vec![(root, 0usize)];
        let mut width = vec![0u32; n + 1];
        let mut created = 1;

        while created < n {
            if candidates.is_empty() {
                debug!(parent, created, n, "no candidates left, tree stays incomplete");
                break;
            }

            let x = session.rng().random_index(candidates.len());
            let (node, depth) = candidates[x];

            if self.max_width != 0 && width[depth + 1] == self.max_width {
                candidates.swap_remove(x);
                continue;
            }

            // the new child is still attached, but `node` takes no further children
            if self.max_degree != 0 && session.graph().out_degree_of(node) + 1 >= self.max_degree {
                candidates.swap_remove(x);
            }

            let child = session.create_node(parent);
            session.connect(node, child);
            candidates.push((child, depth + 1));
            width[depth + 1] += 1;
            created += 1;
        }

        debug!(parent, n = created, "built tree");
    }

    fn nodes(&self) -> NumNodes {
        self.n
    }

    fn nested(&self, nodes: NumNodes) -> Self {
        Self { n: nodes, ..*self }
    }
}

test_generator_invariants!(
    tree_generator_invariants,
    GraphType::Tree,
    |g: &AdjArray| {
        g.number_of_edges() + 1 == g.number_of_nodes() && g.is_connected() && g.is_acyclic()
    }
);
