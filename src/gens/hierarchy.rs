use tracing::debug;

use super::*;

/// Recursively nests subgraphs into the nodes created by a [`TopologyBuilder`].
///
/// After a builder has populated a container, every non-hypernode child is expanded
/// with probability `chance` as long as `level < max_level`. An expanded node receives
/// a subgraph of the same builder type with a node count drawn from `[1, bound]`
/// where `bound = max(1, round(nodes_factor · n))`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HierarchyExpander {
    pub chance: f64,
    pub nodes_factor: f64,
    pub max_level: u32,
}

impl HierarchyExpander {
    pub fn from_options(options: &GeneratorOptions) -> Self {
        Self {
            chance: options.hierarchy_chance,
            nodes_factor: options.hierarchy_nodes_factor,
            max_level: options.max_hierarchy_level,
        }
    }

    /// Returns the upper bound on the number of nodes nested into a node of a graph
    /// with `n` nodes
    pub fn child_bound(&self, n: NumNodes) -> NumNodes {
        ((self.nodes_factor * n as f64).round() as NumNodes).max(1)
    }

    /// Runs `builder` inside `parent` on hierarchy level `level` and expands the
    /// created nodes recursively
    pub fn build<B, R>(&self, session: &mut Session<'_, R>, builder: &B, parent: Node, level: u32)
    where
        B: TopologyBuilder,
        R: Rng,
    {
        builder.build(session, parent);

        if self.chance <= 0.0 || level >= self.max_level {
            return;
        }

        let created = session.graph().children_of(parent).to_vec();
        for u in created {
            if session.graph().is_hypernode(u) || !session.rng().chance(self.chance) {
                continue;
            }

            let bound = self.child_bound(builder.nodes());
            let nodes = session.rng().random_int(1, bound);
            debug!(container = u, level = level + 1, nodes, "nesting subgraph");

            self.build(session, &builder.nested(nodes), u, level + 1);
        }
    }
}
