use tracing::trace;

use super::*;

/// Assigns ports to new edge endpoints.
///
/// With ports disabled or for hypernodes, endpoints attach to the node directly.
/// Otherwise an existing port of the node is reused with probability `reuse_chance`,
/// provided the node owns a port that is used exclusively in the requested role;
/// in all other cases a fresh port is created.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PortAllocator {
    pub enabled: bool,
    pub reuse_chance: f64,
}

impl PortAllocator {
    pub fn from_options(options: &GeneratorOptions) -> Self {
        Self {
            enabled: options.enable_ports,
            reuse_chance: options.use_existing_ports_chance,
        }
    }

    /// Returns the port an endpoint at `node` in the given role attaches to
    pub fn port_for<R: Rng>(
        &self,
        graph: &mut NestedGraph,
        rng: &mut R,
        node: Node,
        role: PortRole,
    ) -> Option<Port> {
        if !self.enabled || graph.is_hypernode(node) {
            return None;
        }

        if rng.chance(self.reuse_chance) {
            let candidates = graph
                .ports_of(node)
                .iter()
                .copied()
                .filter(|&p| graph.port_used_only_as(p, role))
                .collect_vec();

            if !candidates.is_empty() {
                let port = candidates[rng.random_index(candidates.len())];
                trace!(node, port, %role, "reusing port");
                return Some(port);
            }
        }

        Some(graph.add_port(node))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn disabled_ports_and_hypernodes_attach_directly() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g = NestedGraph::new();
        let u = g.add_node(NestedGraph::ROOT, false);
        let h = g.add_node(NestedGraph::ROOT, true);

        let disabled = PortAllocator::default();
        assert_eq!(disabled.port_for(&mut g, rng, u, PortRole::Source), None);

        let enabled = PortAllocator {
            enabled: true,
            reuse_chance: 1.0,
        };
        assert_eq!(enabled.port_for(&mut g, rng, h, PortRole::Target), None);
        assert_eq!(g.number_of_ports(), 0);
    }

    #[test]
    fn reuse_only_ports_of_the_same_role() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g = NestedGraph::new();
        let u = g.add_node(NestedGraph::ROOT, false);
        let v = g.add_node(NestedGraph::ROOT, false);

        let alloc = PortAllocator {
            enabled: true,
            reuse_chance: 1.0,
        };

        // no candidates yet: fresh ports
        let out = alloc.port_for(&mut g, rng, u, PortRole::Source);
        let inc = alloc.port_for(&mut g, rng, v, PortRole::Target);
        assert_eq!((out, inc), (Some(0), Some(1)));
        g.add_edge(u, v, out, inc);

        for _ in 0..10 {
            assert_eq!(alloc.port_for(&mut g, rng, u, PortRole::Source), Some(0));
            assert_eq!(alloc.port_for(&mut g, rng, v, PortRole::Target), Some(1));
        }

        // u's only port is a source port, a target endpoint needs a new one
        let fresh = alloc.port_for(&mut g, rng, u, PortRole::Target);
        assert_eq!(fresh, Some(2));
        assert_eq!(g.ports_of(u), &[0, 2]);
    }

    #[test]
    fn never_reuse_without_chance() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g = NestedGraph::new();
        let u = g.add_node(NestedGraph::ROOT, false);
        let v = g.add_node(NestedGraph::ROOT, false);
        let alloc = PortAllocator {
            enabled: true,
            reuse_chance: 0.0,
        };

        for i in 0..5 {
            let p = alloc.port_for(&mut g, rng, u, PortRole::Source);
            g.add_edge(u, v, p, None);
            assert_eq!(p, Some(i));
        }
        assert_eq!(g.ports_of(u).len(), 5);
    }
}
