//! Algorithms that consume the graph contract.

pub mod topo;

pub use topo::{is_acyclic, topological_sort};
