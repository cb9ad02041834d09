use tracing::debug;

use super::*;
use crate::testing::test_generator_invariants;

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTH: u8 = LEFT | RIGHT;

/// Triconnected graphs grown from a 4-clique by node splits.
///
/// Each step splits a random node `v` into `v` and a new node `w`:
/// two incident edges of `v` are marked *left* and two are marked *right*.
/// Unmarked edges become left with probability `p1`, right with probability `p2`
/// and both otherwise; singly-marked edges become both with probability `1 - p1 - p2`.
/// Right edges move to `w`, both-edges stay at `v` and are duplicated at `w`.
/// Finally `v -> w` is added. Both halves keep at least three neighbors, so the
/// graph stays triconnected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triconnected {
    n: NumNodes,
    p1: f64,
    p2: f64,
}

impl Triconnected {
    /// Creates a builder with split probabilities `p1` and `p2` (`p1 + p2 <= 1`)
    pub fn new(n: NumNodes, p1: f64, p2: f64) -> Self {
        debug_assert!(p1 >= 0.0 && p2 >= 0.0 && p1 + p2 <= 1.0 + f64::EPSILON);
        Self { n, p1, p2 }
    }

    /// Creates a builder drawing `p1` uniformly and setting `p2 = 1 - p1`
    pub fn with_random_split<R: Rng>(n: NumNodes, rng: &mut R) -> Self {
        let p1 = rng.uniform();
        Self::new(n, p1, 1.0 - p1)
    }

    fn split_node<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node, node: Node) -> Node {
        let new_node = session.create_node(parent);

        let incident = session
            .graph()
            .out_edge_ids_of(node)
            .iter()
            .chain(session.graph().in_edge_ids_of(node))
            .copied()
            .collect_vec();
        let d = incident.len();

        let mut marks = vec![0u8; d];
        for bit in [LEFT, RIGHT] {
            let mut remaining = d.min(2);
            while remaining > 0 {
                let r = session.rng().random_index(d);
                if marks[r] & bit == 0 {
                    marks[r] |= bit;
                    remaining -= 1;
                }
            }
        }

        for (&e, &mark) in incident.iter().zip(&marks) {
            let x = session.rng().uniform();
            let mark = match mark {
                0 if x < self.p1 => LEFT,
                0 if x < self.p1 + self.p2 => RIGHT,
                0 => BOTH,
                LEFT | RIGHT if x >= self.p1 + self.p2 => BOTH,
                mark => mark,
            };

            let Edge(source, target) = session.graph().edge(e).endpoints;
            match mark {
                RIGHT if source == node => session.move_source(e, new_node),
                RIGHT => session.move_target(e, new_node),
                BOTH if source == node => {
                    session.connect(new_node, target);
                }
                BOTH => {
                    session.connect(new_node, source);
                }
                _ => {}
            }
        }

        session.connect(node, new_node);
        new_node
    }
}

impl TopologyBuilder for Triconnected {
    fn build<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node) {
        let mut nodes = session.create_nodes(parent, 4);
        session.connect_clique(&nodes);

        for i in 4..self.n as usize {
            let node = nodes[session.rng().random_index(i)];
            nodes.push(self.split_node(session, parent, node));
        }

        debug!(parent, n = nodes.len(), p1 = self.p1, p2 = self.p2, "built triconnected graph");
    }

    fn nodes(&self) -> NumNodes {
        self.n
    }

    fn nested(&self, nodes: NumNodes) -> Self {
        Self { n: nodes, ..*self }
    }
}

test_generator_invariants!(
    triconnected_generator_invariants,
    GraphType::Triconnected,
    |g: &AdjArray| g.is_triconnected()
);
