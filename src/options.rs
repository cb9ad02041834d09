/*!
# Generator Options

[`GeneratorOptions`] is the complete configuration of a generation run. It is a plain
value with public fields, a [`Default`] and one fluent setter per field:

```rust
use nestgraphs::options::*;

let options = GeneratorOptions::default()
    .graph_type(GraphType::Tree)
    .number_of_nodes(20)
    .max_degree(3);
assert_eq!(options.number_of_nodes, 20);
```

Before generation the options are passed through [`GeneratorOptions::normalized`],
which clamps numeric values into their valid ranges and rejects combinations no
topology builder can interpret.
*/

use tracing::trace;

use crate::error::{GeneratorError, Result};

/// The structural class of the generated graph
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum GraphType {
    /// Random graph with arbitrary structure, subject to the edge admission rules
    #[default]
    Any,
    /// Rooted out-tree, optionally bounded in degree and width
    Tree,
    /// Connected graph without cut vertices
    Biconnected,
    /// Graph that stays connected after removing any two nodes
    Triconnected,
    /// Layered acyclic graph without transitive edges
    AcyclicNoTransitiveEdges,
}

/// How the number of edges of an [`GraphType::Any`] graph is determined
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum EdgeDetermination {
    /// A total number of edges, optionally varied by a gaussian
    #[default]
    GraphEdges,
    /// A number of edges relative to the number of nodes
    Relative,
    /// A number of edges relative to the squared number of nodes
    Density,
    /// A random out-degree per node
    OutgoingEdges,
}

/// Configuration of a generation run; see the module documentation
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    pub graph_type: GraphType,
    pub edge_determination: EdgeDetermination,

    /// Lower bound on the number of nodes of [`GraphType::Any`] graphs
    pub number_of_nodes_min: u32,
    /// Upper bound on the number of nodes of [`GraphType::Any`] graphs
    pub number_of_nodes_max: u32,
    /// Number of nodes of all other graph types
    pub number_of_nodes: u32,

    pub number_of_edges: u32,
    pub edges_variance: u32,
    pub edges_relative: f64,
    pub edges_rel_variance: f64,
    pub density: f64,
    pub density_variance: f64,
    pub min_outgoing_edges: u32,
    pub max_outgoing_edges: u32,

    pub self_loops: bool,
    pub multi_edges: bool,
    pub cycles: bool,

    pub enable_hierarchy: bool,
    pub hierarchy_chance: f64,
    pub hierarchy_nodes_factor: f64,
    pub max_hierarchy_level: u32,
    pub cross_hierarchy_edges: bool,

    /// Keep top-level nodes without incident edges
    pub isolated_nodes: bool,

    pub enable_ports: bool,
    pub use_existing_ports_chance: f64,
    pub hypernode_chance: f64,

    /// Maximum out-degree of tree nodes, `0` is unbounded
    pub max_degree: u32,
    /// Maximum number of tree nodes per depth, `0` is unbounded
    pub max_width: u32,

    pub planar: bool,
    /// Acyclic graphs start with a layer consisting of a single source
    pub single_source: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            graph_type: GraphType::Any,
            edge_determination: EdgeDetermination::GraphEdges,
            number_of_nodes_min: 5,
            number_of_nodes_max: 10,
            number_of_nodes: 10,
            number_of_edges: 15,
            edges_variance: 0,
            edges_relative: 1.5,
            edges_rel_variance: 0.0,
            density: 0.1,
            density_variance: 0.0,
            min_outgoing_edges: 1,
            max_outgoing_edges: 3,
            self_loops: false,
            multi_edges: false,
            cycles: true,
            enable_hierarchy: false,
            hierarchy_chance: 0.0,
            hierarchy_nodes_factor: 0.5,
            max_hierarchy_level: 0,
            cross_hierarchy_edges: false,
            isolated_nodes: true,
            enable_ports: false,
            use_existing_ports_chance: 0.0,
            hypernode_chance: 0.0,
            max_degree: 0,
            max_width: 0,
            planar: false,
            single_source: false,
        }
    }
}

macro_rules! option_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        impl GeneratorOptions {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`")]
                #[must_use]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = value;
                    self
                }
            )*
        }
    };
}

option_setters!(
    graph_type: GraphType,
    edge_determination: EdgeDetermination,
    number_of_nodes_min: u32,
    number_of_nodes_max: u32,
    number_of_nodes: u32,
    number_of_edges: u32,
    edges_variance: u32,
    edges_relative: f64,
    edges_rel_variance: f64,
    density: f64,
    density_variance: f64,
    min_outgoing_edges: u32,
    max_outgoing_edges: u32,
    self_loops: bool,
    multi_edges: bool,
    cycles: bool,
    enable_hierarchy: bool,
    hierarchy_chance: f64,
    hierarchy_nodes_factor: f64,
    max_hierarchy_level: u32,
    cross_hierarchy_edges: bool,
    isolated_nodes: bool,
    enable_ports: bool,
    use_existing_ports_chance: f64,
    hypernode_chance: f64,
    max_degree: u32,
    max_width: u32,
    planar: bool,
    single_source: bool,
);

/// Clamps a probability into `[0, 1]`; NaN becomes `0`
fn clamp_chance(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Clamps a factor to be non-negative; NaN becomes `0`
fn clamp_non_negative(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.max(0.0) }
}

impl GeneratorOptions {
    /// Returns a copy with all numeric values clamped into their valid ranges.
    ///
    /// # Errors
    /// Fails if an edge determination other than [`EdgeDetermination::GraphEdges`]
    /// is requested for a graph type other than [`GraphType::Any`], or if the node
    /// or out-degree range of an [`GraphType::Any`] graph is empty.
    pub fn normalized(&self) -> Result<Self> {
        if self.graph_type != GraphType::Any
            && self.edge_determination != EdgeDetermination::GraphEdges
        {
            return Err(GeneratorError::UnsupportedEdgeDetermination {
                graph_type: self.graph_type,
                edge_determination: self.edge_determination,
            });
        }

        if self.graph_type == GraphType::Any {
            if self.number_of_nodes_min > self.number_of_nodes_max {
                return Err(GeneratorError::InvalidNodeRange {
                    min: self.number_of_nodes_min,
                    max: self.number_of_nodes_max,
                });
            }

            if self.edge_determination == EdgeDetermination::OutgoingEdges
                && self.min_outgoing_edges > self.max_outgoing_edges
            {
                return Err(GeneratorError::InvalidOutDegreeRange {
                    min: self.min_outgoing_edges,
                    max: self.max_outgoing_edges,
                });
            }
        }

        let mut options = self.clone();
        options.hierarchy_chance = if options.enable_hierarchy {
            clamp_chance(options.hierarchy_chance)
        } else {
            0.0
        };
        options.use_existing_ports_chance = clamp_chance(options.use_existing_ports_chance);
        options.hypernode_chance = clamp_chance(options.hypernode_chance);

        options.edges_relative = clamp_non_negative(options.edges_relative);
        options.edges_rel_variance = clamp_non_negative(options.edges_rel_variance);
        options.density = clamp_non_negative(options.density);
        options.density_variance = clamp_non_negative(options.density_variance);
        options.hierarchy_nodes_factor = clamp_non_negative(options.hierarchy_nodes_factor);

        if options != *self {
            trace!(?options, "normalized generator options");
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = GeneratorOptions::default();
        assert_eq!(options.normalized(), Ok(options));
    }

    #[test]
    fn setters_update_fields() {
        let options = GeneratorOptions::default()
            .graph_type(GraphType::AcyclicNoTransitiveEdges)
            .number_of_nodes(42)
            .planar(true)
            .single_source(true)
            .density(0.3);

        assert_eq!(options.graph_type, GraphType::AcyclicNoTransitiveEdges);
        assert_eq!(options.number_of_nodes, 42);
        assert!(options.planar && options.single_source);
        assert_eq!(options.density, 0.3);
    }

    #[test]
    fn chances_and_factors_are_clamped() {
        let options = GeneratorOptions::default()
            .enable_hierarchy(true)
            .hierarchy_chance(1.7)
            .use_existing_ports_chance(f64::NAN)
            .hypernode_chance(-0.5)
            .density(-1.0)
            .edges_rel_variance(f64::NAN)
            .hierarchy_nodes_factor(-2.0)
            .normalized()
            .unwrap();

        assert_eq!(options.hierarchy_chance, 1.0);
        assert_eq!(options.use_existing_ports_chance, 0.0);
        assert_eq!(options.hypernode_chance, 0.0);
        assert_eq!(options.density, 0.0);
        assert_eq!(options.edges_rel_variance, 0.0);
        assert_eq!(options.hierarchy_nodes_factor, 0.0);
    }

    #[test]
    fn disabled_hierarchy_forces_zero_chance() {
        let options = GeneratorOptions::default()
            .hierarchy_chance(0.8)
            .normalized()
            .unwrap();
        assert_eq!(options.hierarchy_chance, 0.0);
    }

    #[rstest]
    #[case(GraphType::Tree, EdgeDetermination::Relative)]
    #[case(GraphType::Biconnected, EdgeDetermination::Density)]
    #[case(GraphType::Triconnected, EdgeDetermination::OutgoingEdges)]
    #[case(GraphType::AcyclicNoTransitiveEdges, EdgeDetermination::Density)]
    fn edge_determination_only_for_any(
        #[case] graph_type: GraphType,
        #[case] edge_determination: EdgeDetermination,
    ) {
        let err = GeneratorOptions::default()
            .graph_type(graph_type)
            .edge_determination(edge_determination)
            .normalized()
            .unwrap_err();
        assert_eq!(
            err,
            GeneratorError::UnsupportedEdgeDetermination {
                graph_type,
                edge_determination
            }
        );

        assert!(
            GeneratorOptions::default()
                .graph_type(GraphType::Any)
                .edge_determination(edge_determination)
                .normalized()
                .is_ok()
        );
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let err = GeneratorOptions::default()
            .number_of_nodes_min(8)
            .number_of_nodes_max(3)
            .normalized()
            .unwrap_err();
        assert_eq!(err, GeneratorError::InvalidNodeRange { min: 8, max: 3 });

        let err = GeneratorOptions::default()
            .edge_determination(EdgeDetermination::OutgoingEdges)
            .min_outgoing_edges(4)
            .max_outgoing_edges(2)
            .normalized()
            .unwrap_err();
        assert_eq!(err, GeneratorError::InvalidOutDegreeRange { min: 4, max: 2 });

        // the node range is only used by `Any`
        assert!(
            GeneratorOptions::default()
                .graph_type(GraphType::Tree)
                .number_of_nodes_min(8)
                .number_of_nodes_max(3)
                .normalized()
                .is_ok()
        );
    }
}
