use tracing::trace;

use super::*;

/// The state of one generation run: the graph under construction, the random source
/// and the normalized options.
///
/// All graph mutations of the topology builders go through a session so that node
/// creation (hypernode draws), edge admission and port assignment are applied
/// uniformly.
pub struct Session<'a, R: Rng> {
    graph: NestedGraph,
    rng: &'a mut R,
    options: &'a GeneratorOptions,
    admission: EdgeAdmission,
    ports: PortAllocator,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Starts a run on a graph consisting only of the root container.
    /// `options` are expected to be normalized.
    pub fn new(options: &'a GeneratorOptions, rng: &'a mut R) -> Self {
        Self {
            graph: NestedGraph::new(),
            rng,
            options,
            admission: EdgeAdmission::from_options(options),
            ports: PortAllocator::from_options(options),
        }
    }

    pub fn graph(&self) -> &NestedGraph {
        &self.graph
    }

    pub fn into_graph(self) -> NestedGraph {
        self.graph
    }

    pub fn options(&self) -> &GeneratorOptions {
        self.options
    }

    pub fn rng(&mut self) -> &mut R {
        self.rng
    }

    /// Creates a node inside `parent`; it becomes a hypernode with the configured chance
    pub fn create_node(&mut self, parent: Node) -> Node {
        let hypernode = self.rng.chance(self.options.hypernode_chance);
        self.graph.add_node(parent, hypernode)
    }

    /// Creates `n` unconnected nodes inside `parent`
    pub fn create_nodes(&mut self, parent: Node, n: NumNodes) -> Vec<Node> {
        (0..n).map(|_| self.create_node(parent)).collect()
    }

    /// Adds the edge `source -> target` unconditionally, assigning ports if enabled
    pub fn connect(&mut self, source: Node, target: Node) -> EdgeId {
        let source_port =
            self.ports
                .port_for(&mut self.graph, self.rng, source, PortRole::Source);
        let target_port =
            self.ports
                .port_for(&mut self.graph, self.rng, target, PortRole::Target);
        self.graph
            .add_edge(source, target, source_port, target_port)
    }

    /// Adds the edge `source -> target` if the admission rules of the run allow it.
    /// Returns *true* if the edge was added.
    pub fn connect_if_admitted(&mut self, source: Node, target: Node) -> bool {
        if self.admission.admit(&self.graph, source, target) {
            self.connect(source, target);
            true
        } else {
            false
        }
    }

    /// Moves the source of `e` to `node`.
    ///
    /// The old source port is removed from its node if `e` was its only edge;
    /// the moved endpoint gets a port on `node` via the port allocator.
    pub fn move_source(&mut self, e: EdgeId, node: Node) {
        if let Some(p) = self.graph.edge(e).source_port {
            self.detach_if_exclusive(p);
        }
        let port = self
            .ports
            .port_for(&mut self.graph, self.rng, node, PortRole::Source);
        self.graph.set_edge_source(e, node, port);
    }

    /// Moves the target of `e` to `node`, see [`Session::move_source`]
    pub fn move_target(&mut self, e: EdgeId, node: Node) {
        if let Some(p) = self.graph.edge(e).target_port {
            self.detach_if_exclusive(p);
        }
        let port = self
            .ports
            .port_for(&mut self.graph, self.rng, node, PortRole::Target);
        self.graph.set_edge_target(e, node, port);
    }

    fn detach_if_exclusive(&mut self, p: Port) {
        if self.graph.port_edges(p).len() == 1 {
            trace!(port = p, "detaching port of moved endpoint");
            self.graph.detach_port(p);
        }
    }

    /// Subdivides `e = (s, t)`: creates a node `w` next to `s`, adds `w -> t` and
    /// redirects `e` to `s -> w`. Returns `w` and the id of the new edge.
    pub fn split(&mut self, e: EdgeId) -> (Node, EdgeId) {
        let Edge(source, target) = self.graph.edge(e).endpoints;
        let parent = self.graph.parent_of(source).unwrap_or(NestedGraph::ROOT);

        let w = self.create_node(parent);
        let f = self.connect(w, target);
        self.move_target(e, w);
        (w, f)
    }

    /// Tries to add `number` admitted edges from `source` to random nodes of `targets`.
    ///
    /// A rejected target is swap-removed from the candidate buffer, so at most
    /// `number + targets.len()` candidates are drawn. Returns the number of added edges.
    pub fn connect_randomly_from(&mut self, source: Node, targets: &[Node], number: u32) -> u32 {
        let mut buffer = targets.to_vec();
        let mut added = 0;

        while added < number && !buffer.is_empty() {
            let i = self.rng.random_index(buffer.len());
            if self.connect_if_admitted(source, buffer[i]) {
                added += 1;
            } else {
                buffer.swap_remove(i);
            }
        }

        added
    }

    /// Connects every `nodes[i]` to `out_degrees[i]` random nodes of `nodes`.
    /// Returns the number of added edges.
    pub fn connect_randomly(&mut self, nodes: &[Node], out_degrees: &[u32]) -> u32 {
        debug_assert_eq!(nodes.len(), out_degrees.len());
        nodes
            .iter()
            .zip(out_degrees)
            .map(|(&u, &d)| self.connect_randomly_from(u, nodes, d))
            .sum()
    }

    /// Distributes `m` outgoing edges over `n` nodes by `m` uniform increments
    pub fn out_degrees_from_total(&mut self, n: NumNodes, m: NumEdges) -> Vec<u32> {
        let mut degrees = vec![0; n as usize];
        if n > 0 {
            for _ in 0..m {
                degrees[self.rng.random_index(n as usize)] += 1;
            }
        }
        degrees
    }

    /// Draws an out-degree uniformly from `[min, max]` for each of `n` nodes
    pub fn out_degrees_from_range(&mut self, n: NumNodes, min: u32, max: u32) -> Vec<u32> {
        (0..n).map(|_| self.rng.random_int(min, max)).collect()
    }
}
