/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of nested graphs.

The digest encodes, in index order:
- the number of nodes, ports and edges,
- the parent and hypernode flag of every node,
- the owner of every port,
- every edge with its endpoints and ports,

before feeding them into a cryptographic hash function. Two graphs with equal digests
are equal up to labels, which makes the digest a cheap oracle for reproducibility.

## Example
```
use nestgraphs::{prelude::*, repr::digest::GraphDigest};

let mut graph = NestedGraph::new();
let u = graph.add_node(NestedGraph::ROOT, false);
let v = graph.add_node(NestedGraph::ROOT, false);
graph.add_edge(u, v, None, None);

assert_eq!(graph.digest_sha256().len(), 64);
assert_ne!(graph.digest_sha256(), NestedGraph::new().digest_sha256());
```
*/

use std::fmt::LowerHex;

use sha2::digest::{Digest, Output};

use super::*;

/// Trait for computing a **canonical hash digest** of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

/// Encoding of a missing node/port
const NONE: u32 = u32::MAX;

impl GraphDigest for NestedGraph {
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut feed = |x: u32| hasher.update(x.to_le_bytes());

        let ports = (0..self.number_of_nodes())
            .flat_map(|u| self.ports_of(u).iter().map(move |&p| (u, p)))
            .collect::<Vec<_>>();

        feed(self.number_of_nodes());
        feed(ports.len() as u32);
        feed(self.number_of_edges());

        for u in self.vertices() {
            feed(self.parent_of(u).unwrap_or(NONE));
            feed(self.is_hypernode(u) as u32);
        }

        for (u, p) in ports {
            feed(u);
            feed(p);
        }

        for edge in self.edge_list() {
            feed(edge.source());
            feed(edge.target());
            feed(edge.source_port.unwrap_or(NONE));
            feed(edge.target_port.unwrap_or(NONE));
        }

        format!("{:x}", hasher.finalize())
    }
}
