/*!
`nestgraphs` generates **random hierarchical directed graphs** for exercising layout
algorithms and graph tooling.

A generated graph is a [`NestedGraph`](crate::repr::NestedGraph): a containment tree of
nodes below a single root container, plus directed edges between arbitrary nodes of that
tree, optionally attached to ports. Every run is driven by one seeded random source, so
the same options and seed always yield the same graph.

# Graph types

- **Any**: random edges subject to self-loop / multi-edge / cycle rules
- **Tree**: random out-trees with optional degree and width bounds
- **Biconnected**: no single node disconnects the graph
- **Triconnected**: no pair of nodes disconnects the graph
- **Acyclic without transitive edges**: layered DAGs, optionally planar

With hierarchy enabled, nodes are expanded into nested subgraphs of the same type.

# Representation

We represent **nodes** as `u32` indices into the arena of a [`NestedGraph`](crate::repr::NestedGraph);
node `0` is the root container. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`
for the endpoints and [`EdgeData`] for the full record including ports.

Single levels of the hierarchy can be extracted into a flat
[`AdjArray`](crate::repr::AdjArray) on which the checks of [`algo`] run
(connectivity, biconnectivity, triconnectivity, acyclicity, transitive edges).

# Usage

- [`options`] holds the configuration of a run,
- [`gens`] contains the [`GraphGenerator`](crate::gens::GraphGenerator) and the individual topology builders,
- [`random`] provides the seeded random source,
- [`algo`] includes validation algorithms implemented as traits on the graphs,
- [`repr::digest`] computes `Sha256`-digests of generated graphs.

```rust
use nestgraphs::{prelude::*, gens::generate, options::*, random::RandomSource};

let options = GeneratorOptions::default()
    .graph_type(GraphType::Tree)
    .number_of_nodes(20)
    .max_degree(3);

let graph = generate(&options, &mut RandomSource::new(42))?;
assert_eq!(graph.children_of(NestedGraph::ROOT).len(), 20);
assert_eq!(graph.number_of_edges(), 19);
# Ok::<(), nestgraphs::error::GeneratorError>(())
```

In most use-cases, `use nestgraphs::{prelude::*, algo::*, gens::*, options::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod options;
pub mod port;
pub mod random;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;
pub use port::*;

/// `nestgraphs::prelude` includes definitions for nodes, edges and ports, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, port::*, repr::*};
}
