use tracing::{debug, instrument};

use super::*;
use crate::error::Result;

/// Generates a [`NestedGraph`] according to validated [`GeneratorOptions`].
///
/// The generator holds no state besides its options, so one instance can serve any
/// number of runs; every run needs its own [`Rng`].
///
/// With `cross_hierarchy_edges` enabled, a [`GraphType::Any`] graph receives
/// a second round of random edges between all generated nodes of every level. The root
/// container is not part of that round and never becomes an edge endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGenerator {
    options: GeneratorOptions,
}

impl GraphGenerator {
    /// Validates and normalizes `options`.
    ///
    /// Fails if the options combine settings no topology builder can interpret,
    /// see [`GeneratorOptions::normalized`].
    pub fn new(options: &GeneratorOptions) -> Result<Self> {
        Ok(Self {
            options: options.normalized()?,
        })
    }

    /// Returns the normalized options used for every run
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Runs the generator once, drawing all randomness from `rng`
    #[instrument(
        skip_all,
        fields(graph_type = ?self.options.graph_type)
    )]
    pub fn generate<R: Rng>(&self, rng: &mut R) -> NestedGraph {
        let options = &self.options;
        let mut session = Session::new(options, rng);
        let hierarchy = HierarchyExpander::from_options(options);
        let root = NestedGraph::ROOT;

        match options.graph_type {
            GraphType::Any => self.generate_any(&mut session, &hierarchy),
            GraphType::Tree => {
                let builder = Tree::new(options.number_of_nodes)
                    .max_degree(options.max_degree)
                    .max_width(options.max_width);
                hierarchy.build(&mut session, &builder, root, 0);
            }
            GraphType::Biconnected => {
                let builder = Biconnected::new(options.number_of_nodes, options.number_of_edges);
                hierarchy.build(&mut session, &builder, root, 0);
            }
            GraphType::Triconnected => {
                let builder = Triconnected::with_random_split(options.number_of_nodes, session.rng());
                hierarchy.build(&mut session, &builder, root, 0);
            }
            GraphType::AcyclicNoTransitiveEdges => {
                let builder = Ante::new(options.number_of_nodes, options.number_of_edges)
                    .planar(options.planar)
                    .single_source(options.single_source);
                hierarchy.build(&mut session, &builder, root, 0);
            }
        }

        let mut graph = session.into_graph();
        if !options.isolated_nodes {
            prune_isolated_nodes(&mut graph);
        }

        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            ports = graph.number_of_ports(),
            "generated graph"
        );
        graph
    }

    fn generate_any<R: Rng>(&self, session: &mut Session<'_, R>, hierarchy: &HierarchyExpander) {
        let options = &self.options;
        let n = session
            .rng()
            .random_int(options.number_of_nodes_min, options.number_of_nodes_max);

        let builder = Any::new(n, self.edge_budget(session.rng(), n));
        debug!(n, budget = ?builder.budget(), "drew top-level size");
        hierarchy.build(session, &builder, NestedGraph::ROOT, 0);

        if options.cross_hierarchy_edges {
            let nodes = session
                .graph()
                .preorder(NestedGraph::ROOT)
                .skip(1)
                .collect_vec();
            let out_degrees = Any::out_degrees(builder.budget(), session, nodes.len() as NumNodes);
            let m = session.connect_randomly(&nodes, &out_degrees);
            debug!(nodes = nodes.len(), m, "linked nodes across the hierarchy");
        }
    }

    /// Derives the edge budget of an [`GraphType::Any`] graph with `n` nodes
    fn edge_budget<R: Rng>(&self, rng: &mut R, n: NumNodes) -> EdgeBudget {
        let options = &self.options;
        let n = n as f64;

        let vary = |rng: &mut R, value: f64, variance: f64| {
            if variance > 0.0 {
                value + rng.gaussian() * variance
            } else {
                value
            }
        };

        let m = match options.edge_determination {
            EdgeDetermination::OutgoingEdges => {
                return EdgeBudget::OutDegree {
                    min: options.min_outgoing_edges,
                    max: options.max_outgoing_edges,
                };
            }
            EdgeDetermination::GraphEdges => vary(
                rng,
                options.number_of_edges as f64,
                options.edges_variance as f64,
            )
            .round(),
            EdgeDetermination::Relative => {
                (vary(rng, options.edges_relative, options.edges_rel_variance) * n).round()
            }
            EdgeDetermination::Density => {
                (vary(rng, options.density, options.density_variance) * n * n).round()
            }
        };

        // saturating float-to-int cast, negative values become 0
        EdgeBudget::Total(m.max(0.0) as NumEdges)
    }
}

/// Generates one graph with the given options
pub fn generate<R: Rng>(options: &GeneratorOptions, rng: &mut R) -> Result<NestedGraph> {
    Ok(GraphGenerator::new(options)?.generate(rng))
}

/// Removes every top-level node without incident edges, together with its subtree.
///
/// Edges from a removed subtree to the rest of the graph are dropped as well, which may
/// isolate further top-level nodes; those are removed in the next round.
fn prune_isolated_nodes(graph: &mut NestedGraph) {
    let mut removed = 0;
    loop {
        let isolated = graph
            .children_of(NestedGraph::ROOT)
            .iter()
            .copied()
            .filter(|&c| graph.is_isolated(c))
            .collect_vec();
        if isolated.is_empty() {
            break;
        }

        removed += isolated.len();
        graph.remove_subtrees(&isolated);
    }

    debug!(removed, "pruned isolated top-level nodes");
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    use super::*;
    use crate::error::GeneratorError;

    fn run(options: &GeneratorOptions, seed: u64) -> NestedGraph {
        generate(options, &mut Pcg64Mcg::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::Tree)
            .edge_determination(EdgeDetermination::Density);
        assert!(matches!(
            GraphGenerator::new(&options),
            Err(GeneratorError::UnsupportedEdgeDetermination { .. })
        ));

        let options = GeneratorOptions::default()
            .number_of_nodes_min(10)
            .number_of_nodes_max(5);
        assert!(generate(&options, &mut Pcg64Mcg::seed_from_u64(3)).is_err());
    }

    #[test]
    fn any_graph_node_range() {
        let options = GeneratorOptions::default()
            .number_of_nodes_min(3)
            .number_of_nodes_max(8);
        for seed in 0..20 {
            let g = run(&options, seed);
            assert!((3..=8).contains(&g.children_of(NestedGraph::ROOT).len()));
            assert_eq!(g.number_of_nodes() as usize, g.children_of(NestedGraph::ROOT).len() + 1);
        }
    }

    #[rstest]
    #[case(EdgeDetermination::GraphEdges, 12)]
    #[case(EdgeDetermination::Relative, 15)]
    #[case(EdgeDetermination::Density, 10)]
    fn any_graph_edge_determination(#[case] mode: EdgeDetermination, #[case] expected: NumEdges) {
        let options = GeneratorOptions::default()
            .edge_determination(mode)
            .number_of_nodes_min(10)
            .number_of_nodes_max(10)
            .number_of_edges(12)
            .edges_relative(1.5)
            .density(0.1)
            .self_loops(true)
            .multi_edges(true);
        for seed in 0..10 {
            assert_eq!(run(&options, seed).number_of_edges(), expected);
        }
    }

    #[test]
    fn variances_never_produce_negative_budgets() {
        let generator = GraphGenerator::new(
            &GeneratorOptions::default()
                .edge_determination(EdgeDetermination::Density)
                .density(0.01)
                .density_variance(5.0),
        )
        .unwrap();
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let mut saw_zero = false;
        for _ in 0..100 {
            let EdgeBudget::Total(m) = generator.edge_budget(rng, 10) else {
                panic!("density yields a total budget");
            };
            saw_zero |= m == 0;
        }
        assert!(saw_zero);
    }

    #[rstest]
    #[case(GraphType::Tree)]
    #[case(GraphType::Biconnected)]
    #[case(GraphType::Triconnected)]
    #[case(GraphType::AcyclicNoTransitiveEdges)]
    fn top_level_invariants(#[case] graph_type: GraphType) {
        let options = GeneratorOptions::default()
            .graph_type(graph_type)
            .number_of_nodes(15)
            .number_of_edges(25);

        for seed in 0..10 {
            let g = run(&options, seed);
            let (level, _) = g.level(NestedGraph::ROOT);
            match graph_type {
                GraphType::Tree => {
                    assert_eq!(level.number_of_edges() + 1, level.number_of_nodes());
                    assert!(level.is_connected() && level.is_acyclic());
                }
                GraphType::Biconnected => assert!(level.is_biconnected()),
                GraphType::Triconnected => assert!(level.is_triconnected()),
                GraphType::AcyclicNoTransitiveEdges => {
                    assert!(level.is_acyclic() && !level.has_transitive_edges());
                }
                GraphType::Any => unreachable!(),
            }
        }
    }

    #[test]
    fn cross_hierarchy_edges_link_levels() {
        let options = GeneratorOptions::default()
            .number_of_nodes_min(8)
            .number_of_nodes_max(8)
            .number_of_edges(40)
            .enable_hierarchy(true)
            .hierarchy_chance(1.0)
            .max_hierarchy_level(1)
            .hierarchy_nodes_factor(0.5)
            .cross_hierarchy_edges(true);

        let mut crossing = 0;
        for seed in 0..10 {
            let g = run(&options, seed);
            assert!(g.number_of_edges() > 0);
            assert!(g.edges().all(|Edge(s, t)| s != NestedGraph::ROOT && t != NestedGraph::ROOT));
            crossing += g
                .edges()
                .filter(|&Edge(s, t)| g.parent_of(s) != g.parent_of(t))
                .count();
        }
        assert!(crossing > 0);
    }

    #[test]
    fn hierarchy_follows_graph_type() {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::Biconnected)
            .number_of_nodes(8)
            .number_of_edges(12)
            .enable_hierarchy(true)
            .hierarchy_chance(0.5)
            .max_hierarchy_level(2)
            .hierarchy_nodes_factor(1.0);

        for seed in 0..10 {
            let g = run(&options, seed);
            for u in g.preorder(NestedGraph::ROOT) {
                assert!(g.depth_of(u) <= 3);
                if g.has_children(u) {
                    assert!(g.children_of(u).len() >= 3);
                    assert!(g.level(u).0.is_biconnected());
                }
            }
        }
    }

    #[test]
    fn pruning_removes_linked_subtrees() {
        let options = GeneratorOptions::default()
            .number_of_nodes_min(30)
            .number_of_nodes_max(30)
            .number_of_edges(6)
            .isolated_nodes(false)
            .enable_hierarchy(true)
            .hierarchy_chance(0.5)
            .max_hierarchy_level(1)
            .cross_hierarchy_edges(true);

        let mut kept = 0;
        for seed in 0..20 {
            let g = run(&options, seed);
            for &c in g.children_of(NestedGraph::ROOT) {
                assert!(!g.is_isolated(c), "top-level node {c} is isolated");
            }
            kept += g.children_of(NestedGraph::ROOT).len();
        }
        assert!(kept > 0);
    }

    #[test]
    fn pruning_is_optional() {
        let options = GeneratorOptions::default()
            .number_of_nodes_min(30)
            .number_of_nodes_max(30)
            .number_of_edges(0);
        assert_eq!(run(&options, 3).children_of(NestedGraph::ROOT).len(), 30);
        assert!(run(&options.isolated_nodes(false), 3).children_of(NestedGraph::ROOT).is_empty());
    }
}
