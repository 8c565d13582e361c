//! Error handling for the arbor library.
//!
//! The error surface is deliberately small: duplicate insertion is not an
//! error (the operations are idempotent), lookups signal absence through
//! `Option`, and sequence exhaustion is `None` from `Iterator::next`. What
//! remains is the one failure a caller can actually provoke.

use thiserror::Error;

/// Errors produced by graph operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// An operation named a payload with no corresponding vertex.
    ///
    /// Returned by [`DiGraph::add_edge`](crate::DiGraph::add_edge) when
    /// either endpoint is missing (edges never create vertices) and by the
    /// traversal entry points when the start payload is unknown. The graph
    /// is left untouched in every case.
    #[error("vertex not found")]
    VertexNotFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
