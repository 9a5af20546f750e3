//! # `polygraph` - Interchangeable Directed-Graph Representations
//!
//! A polymorphic directed-graph toolkit: one behavioral contract
//! ([`DirectedGraph`]) satisfied by three structurally different storage
//! strategies, plus algorithms written against the contract alone.
//!
//! ## Representations
//!
//! | Type | Storage | Strength | Weakness |
//! |------|---------|----------|----------|
//! | [`AdjacencyListGraph`] | vertex → neighbor set | Sparse graphs, \(O(1)\) mutation | \(O(E)\) vertex removal |
//! | [`AdjacencyMatrixGraph`] | square 0/1 matrix | \(O(1)\) edge queries | \(O(V^2)\) space and vertex removal |
//! | [`IncidenceMatrixGraph`] | vertex × edge ±1 matrix | Explicit edge identity | Most expensive mutation |
//!
//! All three grow their backing storage by capacity doubling, compact their
//! index spaces on removal, and agree on one structural contract: graphs
//! with identical vertex sets and identical per-vertex neighbor sets are
//! equal — and hash equal — regardless of representation or internal
//! layout.
//!
//! ## Contract Guarantees
//!
//! - **Endpoint integrity**: an edge can only connect existing vertices;
//!   violating this is a typed error, never silent insertion.
//! - **Idempotent insertion**: re-adding a vertex or edge is a no-op.
//! - **Total removal**: removing a vertex removes every incident edge, in
//!   both directions, and leaves index assignments compacted.
//! - **Snapshot queries**: `neighbors`/`vertices` hand out owned copies, so
//!   no caller-held value dangles across a compaction.
//!
//! ## Algorithms
//!
//! [`topological_sort`] implements Kahn's algorithm over the contract and
//! reports cyclic inputs as a distinct error instead of a truncated
//! ordering; [`is_acyclic`] wraps it as a predicate.
//!
//! ## Loading
//!
//! Graphs populate from plain-text edge lists (`start finish` per line)
//! via [`DirectedGraph::load_edges_from`]; see the trait docs for the
//! exact line-handling rules.
//!
//! ## Example
//!
//! ```rust
//! use polygraph::{AdjacencyListGraph, DirectedGraph, topological_sort};
//!
//! let mut graph = AdjacencyListGraph::new();
//! for task in ["deps", "build", "test", "release"] {
//!     graph.add_vertex(task);
//! }
//! graph.add_edge("deps", "build")?;
//! graph.add_edge("build", "test")?;
//! graph.add_edge("test", "release")?;
//!
//! let order = topological_sort(&graph)?;
//! assert_eq!(order.first(), Some(&"deps"));
//! assert_eq!(order.last(), Some(&"release"));
//! # Ok::<(), polygraph::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod algo;
pub mod error;
pub mod graph;
pub(crate) mod storage;

pub use algo::{is_acyclic, topological_sort};
pub use error::{Error, Result};
pub use graph::{
    AdjacencyListGraph, AdjacencyMatrixGraph, DirectedGraph, Edge, IncidenceMatrixGraph,
};
