/// Every topology builder must produce reproducible graphs, respect the hierarchy
/// options and keep its structural invariant on every level of the hierarchy.
///
/// `$check` receives every extracted level (an `AdjArray`) with at least one node.
macro_rules! test_generator_invariants {
    ($env:ident, $graph_type:expr, $check:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::{
                algo::*, gens::*, options::*, prelude::*, repr::digest::GraphDigest,
            };
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            fn options() -> GeneratorOptions {
                GeneratorOptions::default()
                    .graph_type($graph_type)
                    .number_of_nodes(12)
                    .number_of_edges(20)
                    .number_of_nodes_min(8)
                    .number_of_nodes_max(12)
            }

            fn hierarchical() -> GeneratorOptions {
                options()
                    .enable_hierarchy(true)
                    .hierarchy_chance(0.4)
                    .hierarchy_nodes_factor(0.5)
                    .max_hierarchy_level(2)
            }

            fn run(options: &GeneratorOptions, seed: u64) -> NestedGraph {
                generate(options, &mut Pcg64Mcg::seed_from_u64(seed)).unwrap()
            }

            #[test]
            fn equal_seeds_equal_graphs() {
                let ported = hierarchical().enable_ports(true).use_existing_ports_chance(0.5);
                for config in [options(), ported] {
                    for seed in 0..5 {
                        let a = run(&config, seed);
                        let b = run(&config, seed);
                        assert_eq!(a.digest_sha256(), b.digest_sha256());
                        assert_eq!(a.edge_list(), b.edge_list());
                    }
                }
            }

            #[test]
            fn flat_without_hierarchy_levels() {
                let options = options()
                    .enable_hierarchy(true)
                    .hierarchy_chance(1.0)
                    .max_hierarchy_level(0);
                for seed in 0..5 {
                    let g = run(&options, seed);
                    for &u in g.children_of(NestedGraph::ROOT) {
                        assert!(!g.has_children(u));
                    }
                }
            }

            #[test]
            fn hierarchy_bound() {
                let options = hierarchical();
                let expander = HierarchyExpander::from_options(&options);
                for seed in 0..10 {
                    let g = run(&options, seed);
                    for u in g.preorder(NestedGraph::ROOT) {
                        assert!(g.depth_of(u) <= options.max_hierarchy_level + 1);
                        if u != NestedGraph::ROOT && g.has_children(u) {
                            assert!(!g.is_hypernode(u));
                            // seeds of biconnected and triconnected graphs may exceed the bound
                            assert!(g.children_of(u).len() as NumNodes <= expander.child_bound(12).max(4));
                        }
                    }
                }
            }

            #[test]
            fn invariant_on_every_level() {
                let check = $check;
                for seed in 0..10 {
                    let g = run(&hierarchical(), seed);
                    for u in g.preorder(NestedGraph::ROOT) {
                        if g.has_children(u) {
                            let (level, _) = g.level(u);
                            assert!(check(&level), "level inside {u} violates the invariant");
                        }
                    }
                }
            }

            #[test]
            fn no_isolated_top_level_nodes() {
                let options = hierarchical().isolated_nodes(false);
                for config in [options.clone(), options.cross_hierarchy_edges(true)] {
                    for seed in 0..10 {
                        let g = run(&config, seed);
                        for &c in g.children_of(NestedGraph::ROOT) {
                            assert!(!g.is_isolated(c), "top-level node {c} is isolated");
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_generator_invariants;
