/*!
Articulation points and vertex connectivity checks.

All functions operate on the underlying undirected graph: an edge `(u, v)` connects
`u` and `v` regardless of its direction, parallel edges are irrelevant.
*/

use super::*;

pub trait ArticulationPoint: Connectivity {
    /// Returns the articulation points of the connected component containing the
    /// smallest node
    fn compute_articulation_points(&self) -> NodeBitSet {
        ArticulationPointSearch::new(self).compute()
    }

    /// Returns the articulation points of the component containing the smallest node
    /// in increasing order
    fn articulation_points(&self) -> Vec<Node> {
        self.compute_articulation_points()
            .ones()
            .map(|u| u as Node)
            .collect()
    }

    /// Same as [`ArticulationPoint::compute_articulation_points`] on the graph without
    /// the nodes set in `visited`
    fn compute_articulation_points_with_visited(&self, visited: NodeBitSet) -> NodeBitSet {
        let mut ap = ArticulationPointSearch::new(self);
        ap.visited = visited;
        ap.compute()
    }

    /// Returns *true* if the graph is connected and stays connected after removing
    /// any single node
    fn is_biconnected(&self) -> bool {
        self.is_connected() && self.compute_articulation_points().is_clear()
    }

    /// Returns *true* if the graph is connected and stays connected after removing
    /// any two nodes. Graphs with fewer than `4` nodes are not triconnected.
    fn is_triconnected(&self) -> bool {
        if self.len() < 4 || !self.is_biconnected() {
            return false;
        }

        self.vertices().all(|u| {
            let mut visited = self.vertex_bitset_unset();
            visited.insert(u as usize);
            self.compute_articulation_points_with_visited(visited)
                .is_clear()
        })
    }
}

impl<G: AdjacencyList> ArticulationPoint for G {}

/// Hopcroft-Tarjan search for cut vertices via DFS numbers and low points
pub struct ArticulationPointSearch<'a, T>
where
    T: AdjacencyList,
{
    graph: &'a T,
    low_point: Vec<Node>,
    dfs_num: Vec<Node>,
    visited: NodeBitSet,
    articulation_points: NodeBitSet,
    current_dfs_num: Node,
    parent: Vec<Option<Node>>,
}

impl<'a, T> ArticulationPointSearch<'a, T>
where
    T: AdjacencyList,
{
    pub fn new(graph: &'a T) -> Self {
        let n = graph.len();
        Self {
            graph,
            low_point: vec![0; n],
            dfs_num: vec![0; n],
            visited: graph.vertex_bitset_unset(),
            parent: vec![None; n],
            articulation_points: graph.vertex_bitset_unset(),
            current_dfs_num: 0,
        }
    }

    /// Runs the search from the smallest unvisited node.
    /// Returns an empty set if all nodes are visited.
    pub fn compute(mut self) -> NodeBitSet {
        if let Some(start) = self.visited.zeroes().next() {
            self.search_from(start as Node);
        }
        self.articulation_points
    }

    fn enter(&mut self, u: Node) {
        self.visited.insert(u as usize);
        self.current_dfs_num += 1;
        self.dfs_num[u as usize] = self.current_dfs_num;
        self.low_point[u as usize] = self.current_dfs_num;
    }

    /// DFS with an explicit stack of `(node, remaining neighbors)` frames
    fn search_from(&mut self, start: Node) {
        let graph = self.graph;

        // counts number of tree neighbors of the start node
        let mut tree_neighbors = 0;
        self.enter(start);
        let mut stack = vec![(start, graph.neighbors_of(start))];

        loop {
            let Some((u, neighbors)) = stack.last_mut() else {
                break;
            };
            let u = *u;

            match neighbors.next() {
                // tree edge
                Some(v) if !self.visited.contains(v as usize) => {
                    if u == start {
                        tree_neighbors += 1;
                    }
                    self.parent[v as usize] = Some(u);
                    self.enter(v);
                    stack.push((v, graph.neighbors_of(v)));
                }
                // back edge, update value if v is not the parent
                Some(v) => {
                    if self.parent[u as usize] != Some(v) && self.dfs_num[v as usize] > 0 {
                        self.low_point[u as usize] =
                            self.low_point[u as usize].min(self.dfs_num[v as usize]);
                    }
                }
                None => {
                    stack.pop();
                    let Some(p) = self.parent[u as usize] else {
                        continue;
                    };
                    self.low_point[p as usize] =
                        self.low_point[p as usize].min(self.low_point[u as usize]);

                    if self.parent[p as usize].is_some()
                        && self.low_point[u as usize] >= self.dfs_num[p as usize]
                    {
                        self.articulation_points.insert(p as usize);
                    }
                }
            }
        }

        if tree_neighbors > 1 {
            self.articulation_points.insert(start as usize);
        }
    }
}
