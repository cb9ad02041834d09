use tracing::trace;

use super::*;

/// Decides whether a candidate edge may be inserted into the current graph.
///
/// Each rule rejects a class of edges unless the corresponding flag allows it:
/// - `self_loops`: edges `(u, u)`,
/// - `multi_edges`: edges between nodes that are already adjacent in either direction,
/// - `cycles`: edges `(s, t)` where `t` already reaches `s` via outgoing edges.
///   With cycles forbidden, self-loops are rejected as well.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeAdmission {
    pub self_loops: bool,
    pub multi_edges: bool,
    pub cycles: bool,
}

impl Default for EdgeAdmission {
    fn default() -> Self {
        Self {
            self_loops: false,
            multi_edges: false,
            cycles: true,
        }
    }
}

impl EdgeAdmission {
    /// Takes the three rules from the options of a run
    pub fn from_options(options: &GeneratorOptions) -> Self {
        Self {
            self_loops: options.self_loops,
            multi_edges: options.multi_edges,
            cycles: options.cycles,
        }
    }

    /// Returns *true* if the edge `(source, target)` may be added to `graph`
    pub fn admit(&self, graph: &NestedGraph, source: Node, target: Node) -> bool {
        if !self.self_loops && source == target {
            trace!(source, target, "rejected self-loop");
            return false;
        }

        if !self.multi_edges && graph.are_adjacent(source, target) {
            trace!(source, target, "rejected multi-edge");
            return false;
        }

        if !self.cycles && graph.can_reach(target, source) {
            trace!(source, target, "rejected cycle");
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Root with children 1 -> 2 -> 3 and an isolated 4
    fn path() -> NestedGraph {
        let mut g = NestedGraph::new();
        let nodes = (0..4)
            .map(|_| g.add_node(NestedGraph::ROOT, false))
            .collect_vec();
        g.add_edge(nodes[0], nodes[1], None, None);
        g.add_edge(nodes[1], nodes[2], None, None);
        g
    }

    #[rstest]
    #[case(false, false, false, 1, 1, false)]
    #[case(true, false, true, 1, 1, true)]
    #[case(true, false, false, 1, 1, false)]
    #[case(false, false, true, 1, 2, false)]
    #[case(false, false, true, 2, 1, false)]
    #[case(false, true, true, 2, 1, true)]
    #[case(false, false, false, 3, 1, false)]
    #[case(false, false, true, 3, 1, true)]
    #[case(false, false, false, 1, 3, true)]
    #[case(false, false, false, 4, 1, true)]
    fn admission_rules(
        #[case] self_loops: bool,
        #[case] multi_edges: bool,
        #[case] cycles: bool,
        #[case] source: Node,
        #[case] target: Node,
        #[case] expected: bool,
    ) {
        let policy = EdgeAdmission {
            self_loops,
            multi_edges,
            cycles,
        };
        assert_eq!(policy.admit(&path(), source, target), expected);
    }

    #[test]
    fn reachability_terminates_on_cyclic_graphs() {
        let mut g = path();
        g.add_edge(3, 1, None, None);
        let policy = EdgeAdmission {
            self_loops: true,
            multi_edges: true,
            cycles: false,
        };
        assert!(policy.admit(&g, 2, 4));
        assert!(!policy.admit(&g, 3, 2));
        assert!(!policy.admit(&g, 1, 3));
    }
}
