//! A sparse directed graph backed by per-vertex neighbor sets.

use core::fmt;
use core::hash::{Hash, Hasher};

use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};
use crate::graph::contract::{structural_hash, DirectedGraph};

/// Adjacency-list representation: each vertex maps to an insertion-ordered
/// set of its out-neighbors.
///
/// The memory-efficient choice for sparse graphs. Keys are the vertices
/// themselves, so removal never needs index remapping — the cost of
/// removing a vertex is purging it from every remaining neighbor set.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) average | Inserts an empty neighbor set |
/// | `remove_vertex` | \(O(E)\) worst case | Scans every neighbor set |
/// | `add_edge` / `remove_edge` | \(O(1)\) average | Hash-set operations after existence checks |
/// | `neighbors` | \(O(\text{degree})\) | Lookup plus defensive copy |
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V> {
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V> AdjacencyListGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V> Default for AdjacencyListGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DirectedGraph<V> for AdjacencyListGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    fn remove_vertex(&mut self, vertex: &V) {
        if self.adjacency.shift_remove(vertex).is_none() {
            return;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(vertex);
        }
    }

    fn add_edge(&mut self, start: V, finish: V) -> Result<()> {
        if !self.adjacency.contains_key(&start) || !self.adjacency.contains_key(&finish) {
            return Err(Error::MissingEndpoint);
        }
        self.adjacency[&start].insert(finish);
        Ok(())
    }

    fn remove_edge(&mut self, start: &V, finish: &V) {
        if let Some(neighbors) = self.adjacency.get_mut(start) {
            neighbors.shift_remove(finish);
        }
    }

    fn neighbors(&self, vertex: &V) -> IndexSet<V> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    fn vertices(&self) -> IndexSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum()
    }

    fn has_edge(&self, start: &V, finish: &V) -> bool {
        self.adjacency
            .get(start)
            .is_some_and(|neighbors| neighbors.contains(finish))
    }
}

impl<V> PartialEq for AdjacencyListGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V> Eq for AdjacencyListGraph<V> where V: Eq + Hash + Clone {}

impl<V> Hash for AdjacencyListGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(structural_hash(self));
    }
}

impl<V> fmt::Display for AdjacencyListGraph<V>
where
    V: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AdjacencyListGraph {{")?;
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "  {vertex} -> [")?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}
