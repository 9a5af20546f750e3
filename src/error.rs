//! Crate-wide error type.
//!
//! Every fallible operation in this crate returns [`Result`], so callers can
//! match on a single [`Error`] enum. Operations the graph contract defines as
//! safe no-ops (removing an absent vertex or edge, re-adding an existing one,
//! querying neighbors of an unknown vertex) do not produce errors at all.

use thiserror::Error;

/// The error type for graph mutation, sorting, and edge-list loading.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// `add_edge` referenced a vertex that is not part of the graph.
    ///
    /// The failing call performs no mutation: both endpoints are checked
    /// before any backing storage is touched.
    #[error("edge endpoints must be existing vertices")]
    MissingEndpoint,

    /// A topological ordering does not exist because the graph contains a
    /// cycle.
    ///
    /// This is reported instead of a truncated ordering and is never
    /// conflated with [`Error::MissingEndpoint`].
    #[error("the graph contains a cycle")]
    CycleDetected,

    /// The underlying edge-list source could not be read.
    ///
    /// Wraps the I/O error raised while opening or reading an edge-list
    /// file; loading stops at the failure and the error is propagated.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
