//! The behavioral contract shared by every graph representation.
//!
//! [`DirectedGraph`] is the single seam between storage strategies and
//! consumers: algorithms (such as [`crate::algo::topological_sort`]) and the
//! edge-list loader are written against it and never inspect backing state.
//! The contract also fixes the error semantics — which calls fail, and which
//! are defined as safe no-ops.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::error::Result;

/// A finite set of vertices and directed edges between known vertices.
///
/// Vertices are opaque values of type `V`; representations may rely only on
/// equality, hashing, and cloning. Every edge's endpoints must already exist
/// as vertices — [`DirectedGraph::add_edge`] enforces this with
/// [`crate::Error::MissingEndpoint`] rather than inserting silently.
///
/// # No-op calls
///
/// Removing an absent vertex or edge, re-adding an existing vertex or edge,
/// and querying neighbors of an unknown vertex are all defined as safe
/// no-ops, never errors.
///
/// # Snapshots, not views
///
/// [`DirectedGraph::neighbors`] and [`DirectedGraph::vertices`] return owned
/// snapshots. Matrix representations compact their index spaces on removal,
/// so a view derived from pre-removal indices could dangle; a snapshot can
/// be held across any sequence of mutations.
pub trait DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Adds a vertex, allocating backing storage for it.
    ///
    /// Idempotent: adding a vertex that is already present changes nothing.
    fn add_vertex(&mut self, vertex: V);

    /// Removes a vertex and every edge incident to it, as source or
    /// destination.
    ///
    /// No-op if the vertex is absent. Remaining index assignments are left
    /// compacted, with no gaps.
    fn remove_vertex(&mut self, vertex: &V);

    /// Adds the directed edge `start -> finish`.
    ///
    /// # Errors
    /// [`crate::Error::MissingEndpoint`] if either endpoint is not a known
    /// vertex; nothing is mutated in that case. Re-adding an existing edge
    /// is a no-op, not a duplicate.
    fn add_edge(&mut self, start: V, finish: V) -> Result<()>;

    /// Removes the directed edge `start -> finish`, if it exists.
    fn remove_edge(&mut self, start: &V, finish: &V);

    /// Returns a snapshot of `vertex`'s direct out-neighbors.
    ///
    /// Empty for a vertex with no outgoing edges — and for a vertex the
    /// graph does not contain at all.
    fn neighbors(&self, vertex: &V) -> IndexSet<V>;

    /// Returns a snapshot of the vertex set.
    ///
    /// Ordering is whatever the representation naturally offers; callers
    /// must not rely on it beyond iteration.
    fn vertices(&self) -> IndexSet<V>;

    /// Whether `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of directed edges.
    fn edge_count(&self) -> usize;

    /// Whether the edge `start -> finish` exists.
    ///
    /// The default goes through [`DirectedGraph::neighbors`]; matrix
    /// representations override it with a single cell probe.
    fn has_edge(&self, start: &V, finish: &V) -> bool {
        self.neighbors(start).contains(finish)
    }

    /// Populates the graph from a reader of edge-list lines.
    ///
    /// Each line holding exactly two whitespace-separated tokens is an edge
    /// `start finish`; both endpoints are inserted as vertices first, so a
    /// line can reference vertices the graph has never seen. Lines with any
    /// other token count are skipped silently, as are tokens that fail to
    /// parse as `V`.
    ///
    /// # Errors
    /// [`crate::Error::Io`] if the reader fails; whatever was loaded before
    /// the failure remains, so callers should treat the attempt as fatal.
    fn load_edges_from<R: BufRead>(&mut self, reader: R) -> Result<()>
    where
        V: FromStr,
        Self: Sized,
    {
        for line in reader.lines() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let (Some(first), Some(second), None) =
                (tokens.next(), tokens.next(), tokens.next())
            else {
                continue;
            };
            let (Ok(start), Ok(finish)) = (first.parse::<V>(), second.parse::<V>()) else {
                continue;
            };
            self.add_vertex(start.clone());
            self.add_vertex(finish.clone());
            self.add_edge(start, finish)?;
        }
        Ok(())
    }

    /// Opens `path` and populates the graph via
    /// [`DirectedGraph::load_edges_from`].
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path.
    ///
    /// # Errors
    /// [`crate::Error::Io`] if the file is missing or unreadable.
    fn load_edges_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()>
    where
        V: FromStr,
        Self: Sized,
    {
        let path = path.as_ref();
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "loading edge list");
        let file = File::open(path)?;
        self.load_edges_from(BufReader::new(file))
    }

    /// Structural equality across representations.
    ///
    /// Two graphs are structurally equal iff they have identical vertex
    /// sets and, for every vertex, identical neighbor sets — regardless of
    /// which representation holds them or how its indices are laid out.
    fn eq_by_structure<G>(&self, other: &G) -> bool
    where
        G: DirectedGraph<V> + ?Sized,
        Self: Sized,
    {
        let vertices = self.vertices();
        if vertices != other.vertices() {
            return false;
        }
        vertices
            .iter()
            .all(|v| self.neighbors(v) == other.neighbors(v))
    }
}

/// Order-independent structural hash.
///
/// All three representations delegate their `Hash` impls here, so graphs
/// that compare equal under the structural contract hash equal as well, no
/// matter the backing layout or the iteration order it happens to produce.
/// Per-vertex digests (vertex plus an order-independent sum over its
/// neighbor set) are combined with wrapping addition.
pub(crate) fn structural_hash<V, G>(graph: &G) -> u64
where
    V: Eq + Hash + Clone,
    G: DirectedGraph<V> + ?Sized,
{
    let mut total = 0u64;
    for vertex in graph.vertices() {
        let mut neighbor_sum = 0u64;
        for neighbor in graph.neighbors(&vertex) {
            neighbor_sum = neighbor_sum.wrapping_add(hash_one(&neighbor));
        }
        let mut digest = DefaultHasher::new();
        vertex.hash(&mut digest);
        digest.write_u64(neighbor_sum);
        total = total.wrapping_add(digest.finish());
    }
    total
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    #[test]
    fn structural_hash_ignores_insertion_order() {
        let mut forward = AdjacencyListGraph::new();
        forward.add_vertex("a");
        forward.add_vertex("b");
        forward.add_vertex("c");
        forward.add_edge("a", "b").unwrap();
        forward.add_edge("a", "c").unwrap();

        let mut backward = AdjacencyListGraph::new();
        backward.add_vertex("c");
        backward.add_vertex("b");
        backward.add_vertex("a");
        backward.add_edge("a", "c").unwrap();
        backward.add_edge("a", "b").unwrap();

        assert_eq!(structural_hash(&forward), structural_hash(&backward));
    }

    #[test]
    fn structural_hash_distinguishes_edge_direction() {
        let mut one = AdjacencyListGraph::new();
        one.add_vertex("a");
        one.add_vertex("b");
        one.add_edge("a", "b").unwrap();

        let mut other = AdjacencyListGraph::new();
        other.add_vertex("a");
        other.add_vertex("b");
        other.add_edge("b", "a").unwrap();

        assert_ne!(structural_hash(&one), structural_hash(&other));
    }
}
