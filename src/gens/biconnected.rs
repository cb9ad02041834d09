use tracing::debug;

use super::*;
use crate::testing::test_generator_invariants;

/// Biconnected graphs grown from a triangle.
///
/// With `n' = max(3, n)` and `m' = max(m, n')`, the builder performs `n' - 3` edge
/// splits and `m' - n'` edge additions in random interleaving. A split subdivides a
/// random edge with a new node, an addition connects two distinct random nodes; both
/// preserve biconnectivity. The result has exactly `n'` nodes and `m'` edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Biconnected {
    n: NumNodes,
    m: NumEdges,
}

impl Biconnected {
    pub fn new(n: NumNodes, m: NumEdges) -> Self {
        Self { n, m }
    }
}

impl TopologyBuilder for Biconnected {
    fn build<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node) {
        let real_n = self.n.max(3);
        let real_m = self.m.max(real_n);

        let mut splits = real_n - 3;
        let mut additions = real_m - real_n;

        let mut nodes = session.create_nodes(parent, 3);
        let mut edges = session.connect_cycle(&nodes);

        while splits + additions > 0 {
            let p = session.rng().random_int(1, splits + additions);
            if p <= splits {
                let e = edges[session.rng().random_index(edges.len())];
                let (u, f) = session.split(e);
                nodes.push(u);
                edges.push(f);
                splits -= 1;
            } else {
                let k = nodes.len() as u32;
                let i = session.rng().random_int(0, k - 1);
                let j = (i + session.rng().random_int(1, k - 1)) % k;
                edges.push(session.connect(nodes[i as usize], nodes[j as usize]));
                additions -= 1;
            }
        }

        debug!(parent, n = real_n, m = real_m, "built biconnected graph");
    }

    fn nodes(&self) -> NumNodes {
        self.n
    }

    fn nested(&self, nodes: NumNodes) -> Self {
        Self::new(nodes, scale_edge_budget(self.m, self.n, nodes))
    }
}

test_generator_invariants!(
    biconnected_generator_invariants,
    GraphType::Biconnected,
    |g: &AdjArray| g.is_biconnected()
);
