//! Error types shared by every graph operation.
//!
//! Failures fall into two kinds:
//!
//! - **Precondition violations**: the operation is only defined for acyclic
//!   or symmetric graphs (or, for export, bounded weights) and the input
//!   does not qualify. The caller must fix the
//!   input; retrying is pointless.
//! - **Invalid references**: a vertex id that is not part of the graph.
//!
//! Nothing is mutated in place, so a failed call never leaves partial state
//! behind.

use std::fmt;

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

// ---------------------------------------------------------------------------
// Operation names
// ---------------------------------------------------------------------------

/// The public operation that rejected its input.
///
/// Carried inside [`GraphError`] so messages name the call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Degree,
    Edges,
    Size,
    ToD3,
    IsCyclic,
    Ancestors,
    Descendants,
    TopologicalSort,
}

impl Operation {
    /// Stable snake_case name used in messages and machine output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Edges => "edges",
            Self::Size => "size",
            Self::ToD3 => "to_d3",
            Self::IsCyclic => "is_cyclic",
            Self::Ancestors => "ancestors",
            Self::Descendants => "descendants",
            Self::TopologicalSort => "topological_sort",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Machine-readable classification
// ---------------------------------------------------------------------------

/// Machine-readable codes for [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphErrorCode {
    UnknownVertex,
    DuplicateVertex,
    NotSquare,
    NotUndirected,
    Cyclic,
    TooManyLinks,
}

impl GraphErrorCode {
    /// Stable code identifier (`G####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownVertex => "G1001",
            Self::DuplicateVertex => "G1002",
            Self::NotSquare => "G1003",
            Self::NotUndirected => "G2001",
            Self::Cyclic => "G2002",
            Self::TooManyLinks => "G2003",
        }
    }

    /// Optional remediation hint for operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UnknownVertex => Some("Add the vertex before referencing it in an edge."),
            Self::DuplicateVertex => Some("Vertex ids must be unique."),
            Self::NotSquare => Some("Every row must have one weight per vertex."),
            Self::NotUndirected => {
                Some("Symmetrize the graph first, or run the operation in directed mode.")
            }
            Self::Cyclic => Some("Remove an edge from each cycle so the graph becomes acyclic."),
            Self::TooManyLinks => Some("Scale edge weights down before exporting to node-link JSON."),
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The two failure kinds a caller needs to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation is undefined for this input (cyclic or asymmetric graph).
    PreconditionViolation,
    /// A vertex id or matrix shape that does not describe the graph.
    InvalidReference,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from graph construction, mutation and analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A referenced vertex is not in the graph.
    #[error("unknown vertex '{vertex}'")]
    UnknownVertex {
        /// The id that failed to resolve.
        vertex: String,
    },

    /// A vertex id appears twice in a checked constructor.
    #[error("duplicate vertex '{vertex}'")]
    DuplicateVertex {
        /// The repeated id.
        vertex: String,
    },

    /// A matrix row does not have one weight per vertex.
    #[error("row {row} has {actual} weights, expected {expected}")]
    NotSquare {
        /// Zero-based row position.
        row: usize,
        /// The vertex count.
        expected: usize,
        /// The weights found in that row.
        actual: usize,
    },

    /// An undirected-mode operation received an asymmetric matrix.
    #[error("{operation}: expected undirected graph but got directed")]
    NotUndirected {
        /// The rejecting operation.
        operation: Operation,
    },

    /// An operation defined only on acyclic graphs received a cycle.
    #[error("{}", cyclic_message(.operation))]
    Cyclic {
        /// The rejecting operation.
        operation: Operation,
    },

    /// An edge weight needs more repeated links than node-link export allows.
    #[error("edge '{tail}' -> '{head}' needs more than {limit} links")]
    TooManyLinks {
        /// Edge origin.
        tail: String,
        /// Edge destination.
        head: String,
        /// The per-edge link limit.
        limit: usize,
    },
}

fn cyclic_message(operation: &Operation) -> String {
    match *operation {
        Operation::TopologicalSort => "cannot sort a cyclic graph".to_string(),
        other => format!("cannot compute {other} of a cyclic graph"),
    }
}

impl GraphError {
    pub(crate) fn unknown_vertex(vertex: impl Into<String>) -> Self {
        Self::UnknownVertex {
            vertex: vertex.into(),
        }
    }

    /// Return the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::DuplicateVertex { .. } => GraphErrorCode::DuplicateVertex,
            Self::NotSquare { .. } => GraphErrorCode::NotSquare,
            Self::NotUndirected { .. } => GraphErrorCode::NotUndirected,
            Self::Cyclic { .. } => GraphErrorCode::Cyclic,
            Self::TooManyLinks { .. } => GraphErrorCode::TooManyLinks,
        }
    }

    /// Classify this error into one of the two failure kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotUndirected { .. } | Self::Cyclic { .. } | Self::TooManyLinks { .. } => {
                ErrorKind::PreconditionViolation
            }
            Self::UnknownVertex { .. } | Self::DuplicateVertex { .. } | Self::NotSquare { .. } => {
                ErrorKind::InvalidReference
            }
        }
    }
}
