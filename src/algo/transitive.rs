use super::*;

/// Detection of transitive edges in directed graphs.
///
/// An edge `(u, v)` is transitive if `v` is also reachable from `u` without using it,
/// i.e. via another out-edge of `u`. A parallel edge therefore makes both copies
/// transitive.
pub trait TransitiveEdges: Traversal {
    /// Returns all transitive edges; parallel transitive edges are reported once per copy
    fn transitive_edges(&self) -> Vec<Edge> {
        let mut result = Vec::new();
        for u in self.vertices() {
            let out = self.out_neighbors_of(u).collect_vec();
            for (i, &v) in out.iter().enumerate() {
                if u == v {
                    continue;
                }

                let bypassed = out
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .any(|(_, &w)| w == v || self.can_reach_avoiding(w, v, u));

                if bypassed {
                    result.push(Edge(u, v));
                }
            }
        }
        result
    }

    /// Returns *true* if the graph contains at least one transitive edge
    fn has_transitive_edges(&self) -> bool {
        !self.transitive_edges().is_empty()
    }

    /// Returns *true* if `v` is reachable from `w` on a directed path not visiting `avoid`
    fn can_reach_avoiding(&self, w: Node, v: Node, avoid: Node) -> bool {
        w != avoid
            && Bfs::new(self, w, EdgeDirection::Outgoing)
                .with_nodes_excluded([avoid])
                .is_node_reachable(v)
    }
}

impl<G: AdjacencyList> TransitiveEdges for G {}
