use tracing::debug;

use super::*;
use crate::testing::test_generator_invariants;

/// How many edges an [`Any`] graph receives
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeBudget {
    /// `m` outgoing edges distributed uniformly at random over all nodes
    Total(NumEdges),
    /// An out-degree drawn uniformly from `[min, max]` per node
    OutDegree { min: u32, max: u32 },
}

/// Random graphs without structural guarantees besides the edge admission rules.
///
/// Creates `n` nodes, determines an out-degree per node from the [`EdgeBudget`] and
/// connects each node to that many random nodes of the same container. Rejected
/// candidates are dropped from the candidate buffer, so restrictive admission rules
/// result in fewer edges.
///
/// If cross-hierarchy edges are requested, connecting is left to the orchestrator
/// which links all nodes of the final hierarchy at once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Any {
    n: NumNodes,
    budget: EdgeBudget,
}

impl Any {
    pub fn new(n: NumNodes, budget: EdgeBudget) -> Self {
        Self { n, budget }
    }

    pub fn budget(&self) -> EdgeBudget {
        self.budget
    }

    /// Draws out-degrees for `n` nodes according to `budget`
    pub fn out_degrees<R: Rng>(
        budget: EdgeBudget,
        session: &mut Session<'_, R>,
        n: NumNodes,
    ) -> Vec<u32> {
        match budget {
            EdgeBudget::Total(m) => session.out_degrees_from_total(n, m),
            EdgeBudget::OutDegree { min, max } => session.out_degrees_from_range(n, min, max),
        }
    }
}

impl TopologyBuilder for Any {
    fn build<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node) {
        let nodes = session.create_nodes(parent, self.n);
        let out_degrees = Self::out_degrees(self.budget, session, self.n);

        if session.options().cross_hierarchy_edges {
            debug!(parent, n = self.n, budget = ?self.budget, "created nodes of any graph");
            return;
        }

        let m = session.connect_randomly(&nodes, &out_degrees);
        debug!(parent, n = self.n, budget = ?self.budget, m, "built any graph");
    }

    fn nodes(&self) -> NumNodes {
        self.n
    }

    fn nested(&self, nodes: NumNodes) -> Self {
        let budget = match self.budget {
            EdgeBudget::Total(m) => EdgeBudget::Total(scale_edge_budget(m, self.n, nodes)),
            out_degree => out_degree,
        };
        Self::new(nodes, budget)
    }
}

test_generator_invariants!(
    any_generator_invariants,
    GraphType::Any,
    |g: &AdjArray| {
        g.vertices().all(|u| !g.has_self_loop(u))
    }
);
