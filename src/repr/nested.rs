/*!
# Nested Graphs

[`NestedGraph`] is the output of the generator: a containment tree of nodes below a
single root container plus a list of directed edges whose endpoints may be any
non-root nodes of the tree, optionally attached to ports.

Nodes, ports and edges live in arenas and refer to each other by index:
- a node owns its children and its ports (by index),
- an edge is owned by the graph; each node additionally keeps the ids of its incident
  edges as an index that is only ever updated by the edge-editing methods below,
- a port is owned by exactly one node and keeps the ids of the edges attached to it.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::algo::Preorder;

/// Per-node data of a [`NestedGraph`]
#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    parent: Option<OptionalNode>,
    children: Vec<Node>,
    ports: Vec<Port>,
    out_edges: Vec<EdgeId>,
    in_edges: Vec<EdgeId>,
    hypernode: bool,
    ordinal: Option<u32>,
}

impl NodeData {
    fn new(parent: Option<Node>, hypernode: bool, ordinal: Option<u32>) -> Self {
        Self {
            parent: parent.and_then(OptionalNode::new),
            children: Vec::new(),
            ports: Vec::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            hypernode,
            ordinal,
        }
    }
}

/// Per-port data of a [`NestedGraph`]
#[derive(Debug, Clone, PartialEq, Eq)]
struct PortData {
    node: Node,
    edges: Vec<EdgeId>,
    ordinal: u32,
    attached: bool,
}

/// A hierarchical directed multigraph with ports.
///
/// Node `0` is always the root container ([`NestedGraph::ROOT`]); it carries no label,
/// no ports and never is an edge endpoint of a generated edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedGraph {
    nodes: Vec<NodeData>,
    ports: Vec<PortData>,
    edges: Vec<EdgeData>,
    next_node_ordinal: u32,
    next_port_ordinal: u32,
}

impl Default for NestedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NestedGraph {
    /// The root container of every nested graph
    pub const ROOT: Node = 0;

    /// Creates a graph consisting only of the root container
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(None, false, None)],
            ports: Vec::new(),
            edges: Vec::new(),
            next_node_ordinal: 0,
            next_port_ordinal: 0,
        }
    }

    /// Adds a new node as last child of `parent` and returns it.
    /// The node receives the next free label ordinal.
    /// ** Panics if `parent >= n` **
    pub fn add_node(&mut self, parent: Node, hypernode: bool) -> Node {
        assert!((parent as usize) < self.nodes.len());
        let u = self.nodes.len() as Node;
        let ordinal = self.next_node_ordinal;
        self.next_node_ordinal += 1;

        self.nodes
            .push(NodeData::new(Some(parent), hypernode, Some(ordinal)));
        self.nodes[parent as usize].children.push(u);
        u
    }

    /// Creates a new port on `u` and returns it
    /// ** Panics if `u >= n` **
    pub fn add_port(&mut self, u: Node) -> Port {
        let p = self.ports.len() as Port;
        let ordinal = self.next_port_ordinal;
        self.next_port_ordinal += 1;

        self.ports.push(PortData {
            node: u,
            edges: Vec::new(),
            ordinal,
            attached: true,
        });
        self.nodes[u as usize].ports.push(p);
        p
    }

    /// Removes the port from the port list of its node.
    /// Edges still referencing the port have to be re-attached by the caller.
    pub fn detach_port(&mut self, p: Port) {
        let port = &mut self.ports[p as usize];
        if !port.attached {
            return;
        }
        port.attached = false;
        let node = port.node;
        self.nodes[node as usize].ports.retain(|&q| q != p);
    }

    /// Adds the edge `source -> target` attached to the given ports and returns its id.
    /// ** Panics if `source >= n || target >= n` **
    pub fn add_edge(
        &mut self,
        source: Node,
        target: Node,
        source_port: Option<Port>,
        target_port: Option<Port>,
    ) -> EdgeId {
        let e = self.edges.len() as EdgeId;
        self.edges.push(EdgeData {
            endpoints: Edge(source, target),
            source_port,
            target_port,
        });

        self.nodes[source as usize].out_edges.push(e);
        self.nodes[target as usize].in_edges.push(e);
        if let Some(p) = source_port {
            self.ports[p as usize].edges.push(e);
        }
        if let Some(p) = target_port {
            self.ports[p as usize].edges.push(e);
        }
        e
    }

    /// Moves the source of edge `e` to `node`, attaching it to `port`
    /// ** Panics if `e >= m || node >= n` **
    pub fn set_edge_source(&mut self, e: EdgeId, node: Node, port: Option<Port>) {
        let EdgeData {
            endpoints: Edge(old, _),
            source_port: old_port,
            ..
        } = self.edges[e as usize];

        self.nodes[old as usize].out_edges.retain(|&f| f != e);
        self.nodes[node as usize].out_edges.push(e);
        self.reattach_port(e, old_port, port);

        let edge = &mut self.edges[e as usize];
        edge.endpoints.0 = node;
        edge.source_port = port;
    }

    /// Moves the target of edge `e` to `node`, attaching it to `port`
    /// ** Panics if `e >= m || node >= n` **
    pub fn set_edge_target(&mut self, e: EdgeId, node: Node, port: Option<Port>) {
        let EdgeData {
            endpoints: Edge(_, old),
            target_port: old_port,
            ..
        } = self.edges[e as usize];

        self.nodes[old as usize].in_edges.retain(|&f| f != e);
        self.nodes[node as usize].in_edges.push(e);
        self.reattach_port(e, old_port, port);

        let edge = &mut self.edges[e as usize];
        edge.endpoints.1 = node;
        edge.target_port = port;
    }

    fn reattach_port(&mut self, e: EdgeId, old: Option<Port>, new: Option<Port>) {
        if let Some(p) = old {
            let edges = &mut self.ports[p as usize].edges;
            if let Some(pos) = edges.iter().position(|&f| f == e) {
                edges.remove(pos);
            }
        }
        if let Some(p) = new {
            self.ports[p as usize].edges.push(e);
        }
    }

    /// Returns the edge with id `e`
    /// ** Panics if `e >= m` **
    pub fn edge(&self, e: EdgeId) -> &EdgeData {
        &self.edges[e as usize]
    }

    /// Returns all edges in insertion order; the position is the [`EdgeId`]
    pub fn edge_list(&self) -> &[EdgeData] {
        &self.edges
    }

    /// Returns the ids of edges leaving `u`
    pub fn out_edge_ids_of(&self, u: Node) -> &[EdgeId] {
        &self.nodes[u as usize].out_edges
    }

    /// Returns the ids of edges entering `u`
    pub fn in_edge_ids_of(&self, u: Node) -> &[EdgeId] {
        &self.nodes[u as usize].in_edges
    }

    /// Returns the parent container of `u` or `None` for the root
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.nodes[u as usize].parent.map(|p| p.get())
    }

    /// Returns the children of `u` in creation order
    pub fn children_of(&self, u: Node) -> &[Node] {
        &self.nodes[u as usize].children
    }

    /// Returns *true* if `u` contains a nested subgraph
    pub fn has_children(&self, u: Node) -> bool {
        !self.nodes[u as usize].children.is_empty()
    }

    /// Returns the number of containers between `u` and the root (root has depth 0)
    pub fn depth_of(&self, mut u: Node) -> u32 {
        let mut depth = 0;
        while let Some(p) = self.parent_of(u) {
            depth += 1;
            u = p;
        }
        depth
    }

    /// Returns *true* if `u` is `ancestor` or lies in its subtree
    pub fn is_in_subtree(&self, mut u: Node, ancestor: Node) -> bool {
        loop {
            if u == ancestor {
                return true;
            }
            match self.parent_of(u) {
                Some(p) => u = p,
                None => return false,
            }
        }
    }

    /// Returns *true* if `u` was created as a hypernode
    pub fn is_hypernode(&self, u: Node) -> bool {
        self.nodes[u as usize].hypernode
    }

    /// Returns the ports currently owned by `u`
    pub fn ports_of(&self, u: Node) -> &[Port] {
        &self.nodes[u as usize].ports
    }

    /// Returns the node owning port `p`
    pub fn port_node(&self, p: Port) -> Node {
        self.ports[p as usize].node
    }

    /// Returns the ids of all edges attached to port `p`
    pub fn port_edges(&self, p: Port) -> &[EdgeId] {
        &self.ports[p as usize].edges
    }

    /// Returns the number of ports currently owned by any node
    pub fn number_of_ports(&self) -> usize {
        self.ports.iter().filter(|p| p.attached).count()
    }

    /// Returns *true* if port `p` has at least one edge and every edge attached to it
    /// uses it in the given role
    pub fn port_used_only_as(&self, p: Port, role: PortRole) -> bool {
        let edges = self.port_edges(p);
        !edges.is_empty()
            && edges.iter().all(|&e| {
                let edge = self.edge(e);
                match role {
                    PortRole::Source => {
                        edge.source_port == Some(p) && edge.target_port != Some(p)
                    }
                    PortRole::Target => {
                        edge.target_port == Some(p) && edge.source_port != Some(p)
                    }
                }
            })
    }

    /// Returns the label `N<k>` of a generated node; `None` for the root
    pub fn label_of(&self, u: Node) -> Option<String> {
        self.nodes[u as usize].ordinal.map(|k| format!("N{k}"))
    }

    /// Returns the identifier `n<k>` of a generated node; `None` for the root
    pub fn identifier_of(&self, u: Node) -> Option<String> {
        self.nodes[u as usize].ordinal.map(|k| format!("n{k}"))
    }

    /// Returns the identifier `p<k>` of a port
    pub fn port_identifier(&self, p: Port) -> String {
        format!("p{}", self.ports[p as usize].ordinal)
    }

    /// Returns an iterator over `start` and all its descendants in pre-order
    pub fn preorder(&self, start: Node) -> Preorder<'_> {
        Preorder::new(self, start)
    }

    /// Extracts the subgraph induced by the children of `parent` into a flat [`AdjArray`].
    /// Returns the flat graph and, for each of its nodes, the node of `self` it represents.
    pub fn level(&self, parent: Node) -> (AdjArray, Vec<Node>) {
        let members = self.children_of(parent).to_vec();
        let local: FxHashMap<Node, Node> = members
            .iter()
            .enumerate()
            .map(|(i, &u)| (u, i as Node))
            .collect();

        let mut flat = AdjArray::new(members.len() as NumNodes);
        for (i, &u) in members.iter().enumerate() {
            for v in self.out_neighbors_of(u) {
                if let Some(&lv) = local.get(&v) {
                    flat.add_edge(i as Node, lv);
                }
            }
        }

        (flat, members)
    }

    /// Removes every node in `roots` together with its subtree, the ports of removed
    /// nodes and all edges with at least one removed endpoint. Ports of remaining nodes
    /// that were only used by removed edges are removed as well. Node, port and edge
    /// indices are compacted afterwards; relative orders are preserved.
    pub fn remove_subtrees(&mut self, roots: &[Node]) {
        if roots.is_empty() {
            return;
        }

        let mut removed = self.vertex_bitset_unset();
        for &r in roots {
            debug_assert_ne!(r, Self::ROOT);
            for u in self.preorder(r) {
                removed.insert(u as usize);
            }
        }

        // nodes
        let mut node_map = vec![INVALID_NODE; self.nodes.len()];
        let mut next = 0;
        for u in 0..self.nodes.len() {
            if !removed.contains(u) {
                node_map[u] = next;
                next += 1;
            }
        }

        // edges
        let mut edge_map = vec![EdgeId::MAX; self.edges.len()];
        let mut edges = Vec::with_capacity(self.edges.len());
        for (e, edge) in self.edges.iter().enumerate() {
            let Edge(s, t) = edge.endpoints;
            if removed.contains(s as usize) || removed.contains(t as usize) {
                continue;
            }
            edge_map[e] = edges.len() as EdgeId;
            edges.push(*edge);
        }

        let remap_edges = |ids: &[EdgeId]| {
            ids.iter()
                .map(|&e| edge_map[e as usize])
                .filter(|&e| e != EdgeId::MAX)
                .collect_vec()
        };

        // ports
        let mut port_map = vec![Port::MAX; self.ports.len()];
        let mut ports = Vec::with_capacity(self.ports.len());
        for (p, port) in self.ports.iter().enumerate() {
            if !port.attached || removed.contains(port.node as usize) {
                continue;
            }
            let edges = remap_edges(&port.edges);
            if edges.is_empty() && !port.edges.is_empty() {
                continue;
            }
            port_map[p] = ports.len() as Port;
            ports.push(PortData {
                node: node_map[port.node as usize],
                edges,
                ..port.clone()
            });
        }

        for edge in &mut edges {
            edge.endpoints = Edge(
                node_map[edge.source() as usize],
                node_map[edge.target() as usize],
            );
            edge.source_port = edge.source_port.map(|p| port_map[p as usize]);
            edge.target_port = edge.target_port.map(|p| port_map[p as usize]);
        }

        let nodes = std::mem::take(&mut self.nodes)
            .into_iter()
            .enumerate()
            .filter(|(u, _)| !removed.contains(*u))
            .map(|(_, mut data)| {
                data.parent = data
                    .parent
                    .and_then(|p| OptionalNode::new(node_map[p.get() as usize]));
                data.children = data
                    .children
                    .iter()
                    .filter(|&&c| !removed.contains(c as usize))
                    .map(|&c| node_map[c as usize])
                    .collect();
                data.ports = data
                    .ports
                    .iter()
                    .map(|&p| port_map[p as usize])
                    .filter(|&p| p != Port::MAX)
                    .collect();
                data.out_edges = remap_edges(&data.out_edges);
                data.in_edges = remap_edges(&data.in_edges);
                data
            })
            .collect();

        self.nodes = nodes;
        self.edges = edges;
        self.ports = ports;
    }
}

impl GraphNodeOrder for NestedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }
}

impl GraphEdgeOrder for NestedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for NestedGraph {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nodes[u as usize]
            .out_edges
            .iter()
            .map(|&e| self.edges[e as usize].target())
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nodes[u as usize]
            .in_edges
            .iter()
            .map(|&e| self.edges[e as usize].source())
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.nodes[u as usize].out_edges.len() as NumNodes
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.nodes[u as usize].in_edges.len() as NumNodes
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|e| e.endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NestedGraph {
        // root
        //  +- 1 -- 3, 4
        //  +- 2
        //  +- 5
        let mut g = NestedGraph::new();
        let a = g.add_node(NestedGraph::ROOT, false);
        let b = g.add_node(NestedGraph::ROOT, true);
        let c = g.add_node(a, false);
        let d = g.add_node(a, false);
        let e = g.add_node(NestedGraph::ROOT, false);
        assert_eq!([a, b, c, d, e], [1, 2, 3, 4, 5]);

        let p = g.add_port(c);
        let q = g.add_port(d);
        g.add_edge(c, d, Some(p), Some(q));
        g.add_edge(a, b, None, None);
        g
    }

    #[test]
    fn hierarchy_queries() {
        let g = sample();
        assert_eq!(g.children_of(NestedGraph::ROOT), &[1, 2, 5]);
        assert_eq!(g.children_of(1), &[3, 4]);
        assert_eq!(g.parent_of(3), Some(1));
        assert_eq!(g.parent_of(NestedGraph::ROOT), None);
        assert_eq!(g.depth_of(4), 2);
        assert!(g.is_in_subtree(4, 1));
        assert!(!g.is_in_subtree(5, 1));
        assert!(g.is_hypernode(2));
        assert_eq!(g.label_of(NestedGraph::ROOT), None);
        assert_eq!(g.label_of(1).as_deref(), Some("N0"));
        assert_eq!(g.identifier_of(5).as_deref(), Some("n4"));
        assert_eq!(g.port_identifier(1), "p1");
    }

    #[test]
    fn moving_endpoints_keeps_incidence_consistent() {
        let mut g = sample();
        let e = g.out_edge_ids_of(3)[0];

        let r = g.add_port(5);
        g.set_edge_target(e, 5, Some(r));

        assert_eq!(g.edge(e).endpoints, Edge(3, 5));
        assert!(g.in_edge_ids_of(4).is_empty());
        assert_eq!(g.in_edge_ids_of(5), &[e]);
        assert!(g.port_edges(1).is_empty());
        assert_eq!(g.port_edges(r), &[e]);
        assert!(g.port_used_only_as(r, PortRole::Target));
        assert!(!g.port_used_only_as(r, PortRole::Source));

        g.set_edge_source(e, 4, None);
        assert_eq!(g.edge(e).endpoints, Edge(4, 5));
        assert!(g.port_edges(0).is_empty());
        assert_eq!(g.out_degree_of(4), 1);
        assert_eq!(g.out_degree_of(3), 0);
    }

    #[test]
    fn level_extraction() {
        let g = sample();
        let (flat, members) = g.level(1);
        assert_eq!(members, vec![3, 4]);
        assert_eq!(flat.edges().collect_vec(), vec![Edge(0, 1)]);

        let (flat, members) = g.level(NestedGraph::ROOT);
        assert_eq!(members, vec![1, 2, 5]);
        assert_eq!(flat.edges().collect_vec(), vec![Edge(0, 1)]);
        assert!(flat.is_isolated(2));
    }

    #[test]
    fn removing_subtrees_compacts_indices() {
        let mut g = sample();
        g.add_node(5, false);
        g.detach_port(1);
        g.remove_subtrees(&[1, 2]);

        // root, old 5, old 6
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.children_of(NestedGraph::ROOT), &[1]);
        assert_eq!(g.children_of(1), &[2]);
        assert_eq!(g.parent_of(2), Some(1));
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.number_of_ports(), 0);
        assert_eq!(g.label_of(1).as_deref(), Some("N4"));
    }

    #[test]
    fn removing_subtrees_drops_crossing_edges() {
        let mut g = sample();
        // 5 -> 3 crosses into the subtree of 1, 5 keeps a port only that edge uses
        let p = g.add_port(5);
        let q = g.add_port(5);
        g.add_edge(5, 3, Some(p), None);
        g.add_edge(5, 2, Some(q), None);
        g.remove_subtrees(&[1]);

        // root, old 2, old 5
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.edges().collect_vec(), vec![Edge(2, 1)]);
        assert_eq!(g.out_edge_ids_of(2), &[0]);
        assert_eq!(g.in_edge_ids_of(1), &[0]);
        assert!(g.in_edge_ids_of(2).is_empty());

        assert_eq!(g.number_of_ports(), 1);
        assert_eq!(g.ports_of(2), &[0]);
        assert_eq!(g.port_node(0), 2);
        assert_eq!(g.port_edges(0), &[0]);
        assert_eq!(g.edge(0).source_port, Some(0));
    }
}
