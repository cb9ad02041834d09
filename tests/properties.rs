use nestgraphs::{
    algo::*,
    gens::{GraphGenerator, generate},
    options::*,
    prelude::*,
    random::RandomSource,
    repr::digest::GraphDigest,
};
use proptest::{prelude::*, sample::select};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn graph_type() -> impl Strategy<Value = GraphType> {
    select(vec![
        GraphType::Any,
        GraphType::Tree,
        GraphType::Biconnected,
        GraphType::Triconnected,
        GraphType::AcyclicNoTransitiveEdges,
    ])
}

fn run(options: &GeneratorOptions, seed: u64) -> NestedGraph {
    generate(options, &mut RandomSource::new(seed)).expect("options are valid")
}

#[test]
fn generator_is_reusable_across_runs() {
    init_logging();
    let generator = GraphGenerator::new(
        &GeneratorOptions::default()
            .graph_type(GraphType::Triconnected)
            .number_of_nodes(10),
    )
    .expect("options are valid");

    let a = generator.generate(&mut RandomSource::new(5));
    let b = generator.generate(&mut RandomSource::new(5));
    assert_eq!(a, b);
    assert_eq!(a.children_of(NestedGraph::ROOT).len(), 10);
}

#[test]
fn any_graph_reaches_satisfiable_edge_budget() {
    init_logging();
    let options = GeneratorOptions::default()
        .number_of_nodes_min(20)
        .number_of_nodes_max(20)
        .number_of_edges(15);
    for seed in 0..20 {
        assert_eq!(run(&options, seed).number_of_edges(), 15);
    }
}

#[test]
fn labels_are_per_run() {
    let options = GeneratorOptions::default().enable_ports(true);
    for seed in [1, 2] {
        let g = run(&options, seed);
        assert_eq!(g.label_of(NestedGraph::ROOT), None);
        let first = g.children_of(NestedGraph::ROOT)[0];
        assert_eq!(g.label_of(first).as_deref(), Some("N0"));
        assert_eq!(g.identifier_of(first).as_deref(), Some("n0"));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn equal_seeds_yield_equal_graphs(
        graph_type in graph_type(),
        seed in any::<u64>(),
        hierarchy_chance in 0.0..1.0f64,
        reuse in 0.0..1.0f64,
    ) {
        let options = GeneratorOptions::default()
            .graph_type(graph_type)
            .number_of_nodes(12)
            .enable_hierarchy(true)
            .hierarchy_chance(hierarchy_chance)
            .max_hierarchy_level(2)
            .enable_ports(true)
            .use_existing_ports_chance(reuse);
        let a = run(&options, seed);
        let b = run(&options, seed);
        prop_assert_eq!(a.digest_sha256(), b.digest_sha256());
    }

    #[test]
    fn any_graph_edge_count_is_bounded(
        seed in any::<u64>(),
        m in 0u32..40,
        cycles in any::<bool>(),
    ) {
        let options = GeneratorOptions::default()
            .number_of_nodes_min(2)
            .number_of_nodes_max(12)
            .number_of_edges(m)
            .cycles(cycles);
        let g = run(&options, seed);
        prop_assert!(g.number_of_edges() <= m);

        let (level, _) = g.level(NestedGraph::ROOT);
        if !cycles {
            prop_assert!(level.is_acyclic());
        }
        prop_assert!(level.vertices().all(|u| !level.has_self_loop(u)));
    }

    #[test]
    fn trees_are_trees(seed in any::<u64>(), n in 1u32..60, max_degree in 0u32..4) {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::Tree)
            .number_of_nodes(n)
            .max_degree(max_degree);
        let (level, _) = run(&options, seed).level(NestedGraph::ROOT);

        prop_assert_eq!(level.number_of_nodes(), n);
        prop_assert_eq!(level.number_of_edges() + 1, n);
        prop_assert!(level.is_connected());
        prop_assert!(level.is_acyclic());
    }

    #[test]
    fn biconnected_graphs_have_exact_sizes(seed in any::<u64>(), n in 3u32..40, extra in 0u32..30) {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::Biconnected)
            .number_of_nodes(n)
            .number_of_edges(n + extra);
        let (level, _) = run(&options, seed).level(NestedGraph::ROOT);

        prop_assert_eq!(level.number_of_nodes(), n);
        prop_assert_eq!(level.number_of_edges(), n + extra);
        prop_assert!(level.is_biconnected());
    }

    #[test]
    fn triconnected_graphs_are_triconnected(seed in any::<u64>(), n in 4u32..30) {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::Triconnected)
            .number_of_nodes(n);
        let (level, _) = run(&options, seed).level(NestedGraph::ROOT);

        prop_assert_eq!(level.number_of_nodes(), n);
        prop_assert!(level.is_triconnected());
    }

    #[test]
    fn layered_graphs_have_no_transitive_edges(
        seed in any::<u64>(),
        n in 1u32..60,
        m in 0u32..120,
        planar in any::<bool>(),
    ) {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::AcyclicNoTransitiveEdges)
            .number_of_nodes(n)
            .number_of_edges(m)
            .planar(planar);
        let (level, _) = run(&options, seed).level(NestedGraph::ROOT);

        prop_assert!(level.is_acyclic());
        prop_assert!(!level.has_transitive_edges());
    }

    #[test]
    fn no_hierarchy_without_levels(graph_type in graph_type(), seed in any::<u64>()) {
        let options = GeneratorOptions::default()
            .graph_type(graph_type)
            .enable_hierarchy(true)
            .hierarchy_chance(1.0)
            .max_hierarchy_level(0);
        let g = run(&options, seed);
        prop_assert!(g.children_of(NestedGraph::ROOT).iter().all(|&u| !g.has_children(u)));
    }

    #[test]
    fn pruning_leaves_no_isolated_top_level_nodes(
        graph_type in graph_type(),
        seed in any::<u64>(),
        m in 0u32..10,
    ) {
        let options = GeneratorOptions::default()
            .graph_type(graph_type)
            .number_of_nodes(15)
            .number_of_edges(m)
            .isolated_nodes(false);
        let g = run(&options, seed);
        for &u in g.children_of(NestedGraph::ROOT) {
            prop_assert!(!g.is_isolated(u));
        }
    }
}
