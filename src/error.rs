/*!
# Errors

Generation fails only for option sets no topology builder can interpret.
Everything else (unsatisfiable admission rules, negative derived counts, ...)
is resolved by clamping and yields a smaller graph instead of an error.
*/

use crate::options::{EdgeDetermination, GraphType};

/// Result type of all fallible operations of this crate.
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Errors returned while validating [`GeneratorOptions`](crate::options::GeneratorOptions).
///
/// Every variant describes an invalid configuration and is raised before the
/// generator mutates any graph.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GeneratorError {
    /// The edge determination mode is only interpreted by [`GraphType::Any`].
    #[error("edge determination {edge_determination:?} is not supported for graph type {graph_type:?}")]
    UnsupportedEdgeDetermination {
        /// The requested graph type.
        graph_type: GraphType,
        /// The requested edge determination mode.
        edge_determination: EdgeDetermination,
    },
    /// The node count range is empty.
    #[error("minimum number of nodes {min} exceeds maximum {max}")]
    InvalidNodeRange {
        /// Lower bound of the node count range.
        min: u32,
        /// Upper bound of the node count range.
        max: u32,
    },
    /// The out-degree range is empty.
    #[error("minimum number of outgoing edges {min} exceeds maximum {max}")]
    InvalidOutDegreeRange {
        /// Lower bound of the out-degree range.
        min: u32,
        /// Upper bound of the out-degree range.
        max: u32,
    },
}

impl GeneratorError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GeneratorErrorCode {
        match self {
            Self::UnsupportedEdgeDetermination { .. } => {
                GeneratorErrorCode::UnsupportedEdgeDetermination
            }
            Self::InvalidNodeRange { .. } => GeneratorErrorCode::InvalidNodeRange,
            Self::InvalidOutDegreeRange { .. } => GeneratorErrorCode::InvalidOutDegreeRange,
        }
    }

    /// Returns *true* if the error stems from an inconsistent option set.
    /// Currently this holds for every variant.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedEdgeDetermination { .. }
                | Self::InvalidNodeRange { .. }
                | Self::InvalidOutDegreeRange { .. }
        )
    }
}

/// Machine-readable error codes for [`GeneratorError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GeneratorErrorCode {
    /// The edge determination mode is only interpreted by [`GraphType::Any`].
    UnsupportedEdgeDetermination,
    /// The node count range is empty.
    InvalidNodeRange,
    /// The out-degree range is empty.
    InvalidOutDegreeRange,
}

impl GeneratorErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedEdgeDetermination => "GENERATOR_UNSUPPORTED_EDGE_DETERMINATION",
            Self::InvalidNodeRange => "GENERATOR_INVALID_NODE_RANGE",
            Self::InvalidOutDegreeRange => "GENERATOR_INVALID_OUT_DEGREE_RANGE",
        }
    }
}
