/*!
# Graph Generators

This module contains the generation engine producing [`NestedGraph`]s.

A run is configured by [`GeneratorOptions`] and driven by a single [`Rng`]:

1. [`GraphGenerator::new`] validates and normalizes the options.
2. [`GraphGenerator::generate`] creates the root container, dispatches to the
   [`TopologyBuilder`] of the requested [`GraphType`], links nodes across the
   hierarchy if requested and prunes isolated top-level nodes.

```rust
use nestgraphs::{prelude::*, gens::*, options::*, random::RandomSource};

let options = GeneratorOptions::default()
    .graph_type(GraphType::Biconnected)
    .number_of_nodes(12)
    .number_of_edges(18);
let graph = GraphGenerator::new(&options)?.generate(&mut RandomSource::new(7));

assert_eq!(graph.children_of(NestedGraph::ROOT).len(), 12);
assert_eq!(graph.number_of_edges(), 18);
# Ok::<(), nestgraphs::error::GeneratorError>(())
```

The builders are usable on their own through a [`Session`], which bundles the graph
under construction with the random source and applies edge admission
([`EdgeAdmission`]) and port assignment ([`PortAllocator`]) uniformly.

Supported topologies:
- [`Any`]: random graphs with a total edge budget or per-node out-degrees
- [`Tree`]: random out-trees with optional degree and width bounds
- [`Biconnected`]: edge splits and additions starting from a triangle
- [`Triconnected`]: node splits starting from a 4-clique
- [`Ante`]: layered acyclic graphs without transitive edges
*/

use itertools::Itertools;
use rand::Rng;

use crate::{algo::*, options::*, prelude::*, random::RandomExt};

mod admission;
mod ante;
mod any;
mod biconnected;
mod generator;
mod hierarchy;
mod ports;
mod session;
mod substructures;
mod tree;
mod triconnected;

pub use admission::*;
pub use ante::*;
pub use any::*;
pub use biconnected::*;
pub use generator::*;
pub use hierarchy::*;
pub use ports::*;
pub use session::*;
pub use substructures::*;
pub use tree::*;
pub use triconnected::*;

/// A construction algorithm building one (sub)graph inside a container node.
///
/// Builders are plain configuration values; all state of a run lives in the [`Session`].
pub trait TopologyBuilder {
    /// Creates the nodes and edges of the subgraph as children of `parent`
    fn build<R: Rng>(&self, session: &mut Session<'_, R>, parent: Node);

    /// Returns the requested number of nodes
    fn nodes(&self) -> NumNodes;

    /// Returns the builder for a nested subgraph with `nodes` nodes inside one of the
    /// nodes created by `self`
    fn nested(&self, nodes: NumNodes) -> Self
    where
        Self: Sized;
}

/// Scales an edge budget of a graph with `n` nodes to a nested graph with `cn` nodes
/// such that the density `m / n²` is preserved. Returns `0` for `n = 0`.
pub fn scale_edge_budget(m: NumEdges, n: NumNodes, cn: NumNodes) -> NumEdges {
    if n == 0 {
        return 0;
    }
    let density = m as f64 / (n as f64 * n as f64);
    (density * cn as f64 * cn as f64).round() as NumEdges
}
