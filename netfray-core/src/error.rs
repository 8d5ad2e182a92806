//! Error types for the netfray core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction, generation, and analysis.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A size, probability, or other argument was outside its valid range.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// An operation referenced a node that is not present in the graph.
    #[error("node {node} is not present in the graph")]
    NodeNotFound {
        /// The missing node identifier.
        node: NodeId,
    },
    /// An operation that requires data was given none.
    #[error("{what} is empty")]
    EmptyInput {
        /// Name of the empty input.
        what: &'static str,
    },
    /// A node was about to become its own neighbour.
    #[error("node {node} cannot be its own neighbour")]
    SelfLoop {
        /// The node that listed itself.
        node: NodeId,
    },
    /// An undirected adjacency map listed an edge in one direction only.
    #[error("undirected edge {from} -> {to} has no matching {to} -> {from} entry")]
    AsymmetricEdge {
        /// Node whose set contains `to`.
        from: NodeId,
        /// Node whose set is missing `from`.
        to: NodeId,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("graph invariant violated: {invariant} (degree {degree}, bucket_count {bucket_count})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The degree that fell outside the bucket table.
        degree: usize,
        /// The number of degree buckets available.
        bucket_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A size, probability, or other argument was outside its valid range.
        InvalidArgument => InvalidArgument { .. } => "GRAPH_INVALID_ARGUMENT",
        /// An operation referenced a node that is not present in the graph.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND",
        /// An operation that requires data was given none.
        EmptyInput => EmptyInput { .. } => "GRAPH_EMPTY_INPUT",
        /// A node was about to become its own neighbour.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An undirected adjacency map listed an edge in one direction only.
        AsymmetricEdge => AsymmetricEdge { .. } => "GRAPH_ASYMMETRIC_EDGE",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "GRAPH_INVARIANT_VIOLATION",
    }
}

impl GraphError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
