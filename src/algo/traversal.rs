/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- [`Preorder`], the pre-order walk over the containment tree of a [`NestedGraph`],
- [`Bfs`], a breadth-first search over the edges of any [`AdjacencyList`],
  following either outgoing edges only or edges in both directions,
- [`TopoSearch`], a topological ordering of directed acyclic graphs,
- the [`Traversal`] trait exposing these as methods on graphs.
*/

use std::collections::VecDeque;

use super::*;

/// Pre-order iterator over a node and its descendants in the containment tree.
///
/// Children are visited in creation order; a container is yielded before its children.
pub struct Preorder<'a> {
    graph: &'a NestedGraph,
    stack: Vec<Node>,
}

impl<'a> Preorder<'a> {
    /// Starts a pre-order walk at `start`
    pub fn new(graph: &'a NestedGraph, start: Node) -> Self {
        Self {
            graph,
            stack: vec![start],
        }
    }
}

impl Iterator for Preorder<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        self.stack
            .extend(self.graph.children_of(u).iter().rev().copied());
        Some(u)
    }
}

/// Which edges a [`Bfs`] may traverse
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Only follow edges from source to target
    Outgoing,
    /// Follow edges in both directions
    Undirected,
}

/// Breadth-first search iterator.
///
/// Maintains a queue of discovered nodes and a set of visited nodes; every node
/// is yielded at most once, so the search terminates on cyclic graphs as well.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
    direction: EdgeDirection,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a search starting at `start`
    pub fn new(graph: &'a G, start: Node, direction: EdgeDirection) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.insert(start as usize);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
            direction,
        }
    }

    /// Creates a search without a start node; use [`Bfs::try_restart_at_unvisited`]
    /// to begin searching.
    pub fn unstarted(graph: &'a G, direction: EdgeDirection) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            queue: VecDeque::new(),
            direction,
        }
    }

    /// Marks `u` as visited so that the search never enters it.
    /// Has no effect on nodes that were already discovered.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u as usize);
    }

    /// Excludes all nodes of the iterator from the search, see [`Bfs::exclude_node`]
    pub fn with_nodes_excluded<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            self.exclude_node(u);
        }
        self
    }

    /// Restarts the search at the smallest node not visited yet.
    /// Returns *false* if every node has been visited (or excluded).
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        match self.visited.zeroes().next() {
            Some(u) => {
                self.visited.insert(u);
                self.queue.push_back(u as Node);
                true
            }
            None => false,
        }
    }

    /// Consumes the search and returns *true* if `u` is reached
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v == u)
    }

    fn discover(&mut self, v: Node) {
        if !self.visited.put(v as usize) {
            self.queue.push_back(v);
        }
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        let graph = self.graph;

        for v in graph.out_neighbors_of(u) {
            self.discover(v);
        }
        if self.direction == EdgeDirection::Undirected {
            for v in graph.in_neighbors_of(u) {
                self.discover(v);
            }
        }

        Some(u)
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses a variant of Kahn's algorithm:
/// - Initializes with all nodes of in-degree 0.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and pushes new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle is detected.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.vertices().map(|u| graph.in_degree_of(u)).collect_vec();
        let stack = in_degs
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| (d == 0).then_some(i as Node))
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

/// Provides convenient traversal methods (BFS, topological order, etc.)
pub trait Traversal: AdjacencyList {
    /// Returns an iterator over the nodes reachable from `start` via outgoing edges
    /// in **breadth-first search (BFS) order**.
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start, EdgeDirection::Outgoing)
    }

    /// Returns an iterator over the nodes reachable from `start` ignoring edge
    /// directions in **breadth-first search (BFS) order**.
    fn bfs_undirected(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start, EdgeDirection::Undirected)
    }

    /// Returns *true* if a directed path from `u` to `v` exists (`u` reaches itself)
    fn can_reach(&self, u: Node, v: Node) -> bool {
        self.bfs(u).is_node_reachable(v)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns `true` if the directed graph is **acyclic** (self-loops are cycles).
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preorder_visits_containers_before_children() {
        let mut g = NestedGraph::new();
        let a = g.add_node(NestedGraph::ROOT, false);
        let b = g.add_node(NestedGraph::ROOT, false);
        let c = g.add_node(a, false);
        let d = g.add_node(c, false);
        let e = g.add_node(a, false);

        assert_eq!(
            g.preorder(NestedGraph::ROOT).collect_vec(),
            vec![NestedGraph::ROOT, a, c, d, e, b]
        );
        assert_eq!(g.preorder(c).collect_vec(), vec![c, d]);
    }

    #[test]
    fn bfs_respects_direction_and_exclusions() {
        let g = AdjArray::from_edges(5, [(0, 1), (1, 2), (3, 2), (3, 4)]);

        assert_eq!(g.bfs(0).collect_vec(), vec![0, 1, 2]);
        assert_eq!(g.bfs_undirected(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert!(!g.can_reach(2, 0));
        assert!(g.can_reach(2, 2));
        assert!(
            !g.bfs_undirected(0)
                .with_nodes_excluded([2])
                .is_node_reachable(4)
        );
    }

    #[test]
    fn bfs_terminates_on_cycles() {
        let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0), (2, 2)]);
        assert_eq!(g.bfs(1).collect_vec(), vec![1, 2, 0]);
        assert!(g.can_reach(2, 1));
    }

    #[test]
    fn topological_order() {
        let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (0, 2), (3, 1)]);
        let order = g.topo_search().collect_vec();
        assert_eq!(order.len(), 4);

        let rank = |u: Node| order.iter().position(|&v| v == u);
        for Edge(u, v) in g.edges() {
            assert!(rank(u) < rank(v));
        }
        assert!(g.is_acyclic());

        assert!(!AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 1)]).is_acyclic());
        assert!(!AdjArray::from_edges(1, [(0, 0)]).is_acyclic());
    }
}
