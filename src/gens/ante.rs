use tracing::debug;

use super::*;
use crate::testing::test_generator_invariants;

/// Layered acyclic graphs without transitive edges.
///
/// Nodes are partitioned into consecutive layers and edges only run from one layer to
/// the next, which rules out both cycles and transitive edges. Each node of a layer
/// `l > 0` draws its in-neighbors from a window of layer `l - 1`:
/// - *planar*: windows are monotone intervals overlapping in at most one node, so
///   drawing consecutive layers on parallel lines yields no crossings,
/// - otherwise: the window is the whole previous layer.
///
/// With `single_source`, the first layer consists of a single node and every other
/// node receives at least one incoming edge. The number of edges approximates `m`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ante {
    n: NumNodes,
    m: NumEdges,
    planar: bool,
    single_source: bool,
}

/// Local edges `(tail, head)` as indices into the created nodes
type LocalEdges = Vec<(usize, usize)>;

impl Ante {
    pub fn new(n: NumNodes, m: NumEdges) -> Self {
        Self {
            n,
            m,
            planar: false,
            single_source: false,
        }
    }

    pub fn planar(mut self, planar: bool) -> Self {
        self.planar = planar;
        self
    }

    pub fn single_source(mut self, single_source: bool) -> Self {
        self.single_source = single_source;
        self
    }

    /// Returns the first index of every layer followed by `n`.
    /// A new layer starts after node `i` with probability `1 / sqrt(n)`.
    fn layer_starts<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let n = self.n as usize;
        let mut starts = vec![0];
        for total in 1..=n {
            let r = rng.uniform();
            if (total == 1 && self.single_source) || total == n || r * r * (n as f64) < 1.0 {
                starts.push(total);
            }
        }
        starts
    }

    /// Returns the inclusive window `[left[v], right[v]]` of possible in-neighbors of
    /// every node `v` outside of the first layer
    fn windows<R: Rng>(&self, rng: &mut R, starts: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let n = self.n as usize;
        let mut left = vec![0; n];
        let mut right = vec![0; n];

        for (&prev, &layer, &next) in starts.iter().tuple_windows() {
            if !self.planar {
                left[layer..next].fill(prev);
                right[layer..next].fill(layer - 1);
                continue;
            }

            let ratio = (layer - prev) as f64 / (next - prev) as f64;
            let (mut n1, mut n2) = (prev, layer);
            left[n2] = n1;
            while n1 < layer && n2 < next {
                let r = rng.uniform();
                if n1 != layer - 1 && (n2 == next - 1 || r < ratio) {
                    n1 += 1;
                } else {
                    right[n2] = n1;
                    n2 += 1;
                    if n2 < next {
                        left[n2] = n1;
                    }
                }
            }
        }

        (left, right)
    }

    /// Selects edges from the windows such that about `m` edges are chosen in total
    fn local_edges<R: Rng>(&self, rng: &mut R) -> LocalEdges {
        let n = self.n as usize;
        let starts = self.layer_starts(rng);
        if starts.len() < 3 {
            return Vec::new();
        }
        let (left, right) = self.windows(rng, &starts);

        let first = starts[1];
        let mut wanted = self.m as i64;
        let mut remaining: i64 = (first..n).map(|v| (right[v] - left[v] + 1) as i64).sum();
        let mut edges = Vec::new();

        for head in first..n {
            let mut connected = !self.single_source;
            let mut tail = left[head];
            while tail <= right[head] || !connected {
                let r = rng.uniform();
                if tail > right[head] || r < wanted as f64 / remaining as f64 {
                    let chosen = if tail <= right[head] {
                        tail
                    } else {
                        rng.random_int(left[head] as u32, right[head] as u32) as usize
                    };
                    edges.push((chosen, head));
                    connected = true;
                    wanted -= 1;
                }
                if tail <= right[head] {
                    remaining -= 1;
                }
                tail += 1;
            }
        }

        if self.planar {
            edges.sort();
        }
        edges
    }
}

impl TopologyBuilder for Ante {
    fn build<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node) {
        let nodes = session.create_nodes(parent, self.n);
        let edges = self.local_edges(session.rng());

        for &(tail, head) in &edges {
            session.connect(nodes[tail], nodes[head]);
        }

        debug!(
            parent,
            n = self.n,
            m = edges.len(),
            planar = self.planar,
            single_source = self.single_source,
            "built layered graph"
        );
    }

    fn nodes(&self) -> NumNodes {
        self.n
    }

    fn nested(&self, nodes: NumNodes) -> Self {
        Self {
            n: nodes,
            m: scale_edge_budget(self.m, self.n, nodes),
            ..*self
        }
    }
}

test_generator_invariants!(
    ante_generator_invariants,
    GraphType::AcyclicNoTransitiveEdges,
    |g: &AdjArray| {
        g.is_acyclic() && !g.has_transitive_edges()
    }
);
