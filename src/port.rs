/*!
# Ports

A port is a connection point owned by exactly one node. Edges may leave or enter a
node through a port; which role a port plays is derived from the edges attached to it.
*/

use std::fmt::Display;

/// Ports are indices into the port arena of a [`NestedGraph`](crate::repr::NestedGraph)
pub type Port = u32;

/// The role an edge endpoint plays at a port
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PortRole {
    /// The edge leaves its source node through the port
    Source,
    /// The edge enters its target node through the port
    Target,
}

impl PortRole {
    /// Returns the opposite role
    pub const fn opposite(self) -> Self {
        match self {
            PortRole::Source => PortRole::Target,
            PortRole::Target => PortRole::Source,
        }
    }
}

impl Display for PortRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortRole::Source => f.write_str("source"),
            PortRole::Target => f.write_str("target"),
        }
    }
}
