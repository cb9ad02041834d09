/*!
# Graph Algorithms

Validation algorithms for generated graphs. They run on any [`AdjacencyList`],
in particular on the flat levels extracted via [`NestedGraph::level`]:
```rust
use nestgraphs::{prelude::*, algo::*};

let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
assert!(g.is_biconnected());
assert!(!g.is_acyclic());
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod transitive;
mod traversal;
mod vertex_cuts;

use itertools::Itertools;

use crate::prelude::*;

pub use connectivity::*;
pub use transitive::*;
pub use traversal::*;
pub use vertex_cuts::*;
