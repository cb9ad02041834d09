/*!
# Graph Representations

- [`NestedGraph`]: the hierarchical graph with ports produced by the generators.
- [`AdjArray`]: a flat directed multigraph with in- and out-adjacency arrays, used for
  single levels extracted from a [`NestedGraph`] and by the algorithms in [`algo`](crate::algo).

[`digest`] computes hash digests of nested graphs, e.g. to compare two generation runs.
*/

use crate::{ops::*, *};

mod adj_array;
mod nested;

pub mod digest;

pub use adj_array::*;
pub use nested::*;
