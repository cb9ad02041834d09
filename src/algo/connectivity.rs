use std::iter::FusedIterator;

use super::*;

/// Connected components of the underlying undirected graph, i.e. edge directions
/// are ignored throughout this trait.
pub trait Connectivity: Traversal {
    /// Returns an iterator over the (weakly) connected components of the graph
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns an iterator over the (weakly) connected components of the graph
    /// after removing all nodes of `ignore`
    fn connected_components_exclude_nodes<I>(&self, ignore: I) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        ConnectedComponents::new(self).exclude_nodes(ignore)
    }

    /// Returns *true* if the graph has at most one (weakly) connected component.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none()
    }

    /// Returns *true* if the graph without the nodes of `ignore` has at most one
    /// (weakly) connected component
    fn is_connected_without<I>(&self, ignore: I) -> bool
    where
        I: IntoIterator<Item = Node>,
    {
        self.connected_components_exclude_nodes(ignore)
            .nth(1)
            .is_none()
    }
}

impl<G: AdjacencyList> Connectivity for G {}

/// Iterator over the connected components of a graph, each given as the list of its nodes
/// in BFS order starting from the smallest node.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Bfs<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        // the first call to `next` restarts at the smallest node not excluded
        Self {
            bfs: Bfs::unstarted(graph, EdgeDirection::Undirected),
        }
    }

    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        for u in exclude {
            self.bfs.exclude_node(u);
        }
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}
