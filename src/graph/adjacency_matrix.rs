//! A dense directed graph backed by a square boolean matrix.

use core::fmt;
use core::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::graph::contract::{structural_hash, DirectedGraph};
use crate::storage::DenseMatrix;

const DEFAULT_CAPACITY: usize = 10;

/// Adjacency-matrix representation: vertices are assigned dense indices
/// into a square 0/1 matrix.
///
/// The vertex set's insertion order doubles as the index space — the
/// position of a vertex in the set is its matrix row and column. Removing a
/// vertex shifts every later row up and every later column left so the
/// active submatrix stays dense and index-contiguous; the set removal
/// performs the matching index reassignment.
///
/// Trades \(O(V^2)\) space regardless of sparsity for constant-time edge
/// queries.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Doubles matrix capacity when full |
/// | `remove_vertex` | \(O(V^2)\) | Row and column shift compaction |
/// | `add_edge` / `remove_edge` / `has_edge` | \(O(1)\) | Cell access after index lookup |
/// | `neighbors` | \(O(V)\) | Row scan |
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<V> {
    vertices: IndexSet<V>,
    matrix: DenseMatrix<bool>,
}

impl<V> AdjacencyMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty graph with the default capacity.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            matrix: DenseMatrix::with_capacity(DEFAULT_CAPACITY, DEFAULT_CAPACITY),
        }
    }
}

impl<V> Default for AdjacencyMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DirectedGraph<V> for AdjacencyMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, vertex: V) {
        if self.vertices.contains(&vertex) {
            return;
        }
        let needed = self.vertices.len() + 1;
        self.matrix.ensure_row_capacity(needed);
        self.matrix.ensure_col_capacity(needed);
        self.vertices.insert(vertex);
    }

    fn remove_vertex(&mut self, vertex: &V) {
        let Some(index) = self.vertices.get_index_of(vertex) else {
            return;
        };
        let count = self.vertices.len();
        self.matrix.remove_row(index, count, count);
        self.matrix.remove_col(index, count - 1, count);
        self.vertices.shift_remove_index(index);
    }

    fn add_edge(&mut self, start: V, finish: V) -> Result<()> {
        let (Some(row), Some(col)) = (
            self.vertices.get_index_of(&start),
            self.vertices.get_index_of(&finish),
        ) else {
            return Err(Error::MissingEndpoint);
        };
        self.matrix.set(row, col, true);
        Ok(())
    }

    fn remove_edge(&mut self, start: &V, finish: &V) {
        if let (Some(row), Some(col)) = (
            self.vertices.get_index_of(start),
            self.vertices.get_index_of(finish),
        ) {
            self.matrix.set(row, col, false);
        }
    }

    fn neighbors(&self, vertex: &V) -> IndexSet<V> {
        let Some(row) = self.vertices.get_index_of(vertex) else {
            return IndexSet::new();
        };
        (0..self.vertices.len())
            .filter(|&col| self.matrix.get(row, col))
            .filter_map(|col| self.vertices.get_index(col).cloned())
            .collect()
    }

    fn vertices(&self) -> IndexSet<V> {
        self.vertices.clone()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        let count = self.vertices.len();
        let mut edges = 0;
        for row in 0..count {
            for col in 0..count {
                if self.matrix.get(row, col) {
                    edges += 1;
                }
            }
        }
        edges
    }

    fn has_edge(&self, start: &V, finish: &V) -> bool {
        match (
            self.vertices.get_index_of(start),
            self.vertices.get_index_of(finish),
        ) {
            (Some(row), Some(col)) => self.matrix.get(row, col),
            _ => false,
        }
    }
}

impl<V> PartialEq for AdjacencyMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.eq_by_structure(other)
    }
}

impl<V> Eq for AdjacencyMatrixGraph<V> where V: Eq + Hash + Clone {}

impl<V> Hash for AdjacencyMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(structural_hash(self));
    }
}

impl<V> fmt::Display for AdjacencyMatrixGraph<V>
where
    V: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.vertices.len();
        writeln!(f, "AdjacencyMatrixGraph {{")?;
        for (row, vertex) in self.vertices.iter().enumerate() {
            write!(f, "  {vertex} -> [")?;
            for col in 0..count {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", u8::from(self.matrix.get(row, col)))?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_past_default_capacity_preserves_edges() {
        let mut graph = AdjacencyMatrixGraph::new();
        for i in 0..DEFAULT_CAPACITY {
            graph.add_vertex(i);
        }
        graph.add_edge(0, 9).unwrap();
        graph.add_edge(9, 0).unwrap();

        // Crossing the capacity boundary triggers the doubling reallocation.
        for i in DEFAULT_CAPACITY..DEFAULT_CAPACITY + 5 {
            graph.add_vertex(i);
        }

        assert_eq!(graph.vertex_count(), 15);
        assert!(graph.has_edge(&0, &9));
        assert!(graph.has_edge(&9, &0));
        assert!(!graph.has_edge(&0, &14));
    }

    #[test]
    fn remove_vertex_compacts_indices() {
        let mut graph = AdjacencyMatrixGraph::new();
        for v in ["a", "b", "c", "d"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("c", "d").unwrap();
        graph.add_edge("d", "a").unwrap();

        graph.remove_vertex(&"b");

        // Edges between survivors address the shifted rows/columns.
        assert!(graph.has_edge(&"a", &"c"));
        assert!(graph.has_edge(&"c", &"d"));
        assert!(graph.has_edge(&"d", &"a"));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn slot_reused_after_removal_is_clean() {
        let mut graph = AdjacencyMatrixGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("c", "a").unwrap();
        graph.add_edge("c", "b").unwrap();

        graph.remove_vertex(&"c");
        graph.add_vertex("z");

        // The recycled index slot must not leak c's old edges onto z.
        assert!(graph.neighbors(&"z").is_empty());
        assert!(graph.neighbors(&"a").is_empty());
        assert!(!graph.has_edge(&"z", &"a"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = AdjacencyMatrixGraph::new();
        graph.add_vertex("a");
        assert!(matches!(
            graph.add_edge("a", "b"),
            Err(Error::MissingEndpoint)
        ));
        assert!(matches!(
            graph.add_edge("b", "a"),
            Err(Error::MissingEndpoint)
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edge_insertion_is_idempotent() {
        let mut graph = AdjacencyMatrixGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "b").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighbors_scans_the_vertex_row() {
        let mut graph = AdjacencyMatrixGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("b", "c").unwrap();

        let neighbors = graph.neighbors(&"a");
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&"b"));
        assert!(neighbors.contains(&"c"));
        assert!(graph.neighbors(&"missing").is_empty());
    }

    #[test]
    fn equality_is_structural_not_layout() {
        let mut one = AdjacencyMatrixGraph::new();
        for v in ["a", "b", "c"] {
            one.add_vertex(v);
        }
        one.add_edge("a", "c").unwrap();

        // Same structure reached through a removal, so the index layout
        // differs.
        let mut two = AdjacencyMatrixGraph::new();
        for v in ["x", "a", "b", "c"] {
            two.add_vertex(v);
        }
        two.add_edge("a", "c").unwrap();
        two.remove_vertex(&"x");

        assert_eq!(one, two);
        assert_eq!(structural_hash(&one), structural_hash(&two));
    }
}
