//! A directed graph backed by a vertex × edge incidence matrix.

use core::fmt;
use core::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::graph::contract::{structural_hash, DirectedGraph};
use crate::graph::edge::Edge;
use crate::storage::DenseMatrix;

const DEFAULT_CAPACITY: usize = 10;

/// Incidence-matrix representation: rows are vertices, columns are edges,
/// and a stored edge `(s, f)` marks its column with `+1` at the source row
/// and `-1` at the destination row.
///
/// Two independent index spaces back this representation — the vertex set
/// (rows) and the edge set (columns) — each with its own capacity-doubling
/// growth. Removing an edge shifts every later column left across all
/// active rows; removing a vertex first removes its incident edges through
/// that column machinery and then shifts the rows. That makes this the most
/// expensive representation to mutate, kept as the cost/benefit
/// counterpoint to the other two.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | New row, grow row capacity if full |
/// | `add_edge` | \(O(1)\) amortized | New column after the duplicate check |
/// | `remove_edge` | \(O(V \cdot E)\) | Column shift across every row |
/// | `remove_vertex` | \(O(V \cdot E^2)\) worst case | Incident-edge removal, then row shift |
/// | `neighbors` | \(O(E)\) | Row scan mapping `+1` columns to destinations |
#[derive(Debug, Clone)]
pub struct IncidenceMatrixGraph<V> {
    vertices: IndexSet<V>,
    edges: IndexSet<Edge<V>>,
    matrix: DenseMatrix<i8>,
}

impl<V> IncidenceMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty graph with the default capacity on both axes.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexSet::new(),
            matrix: DenseMatrix::with_capacity(DEFAULT_CAPACITY, DEFAULT_CAPACITY),
        }
    }

    /// Removes the edge at column `col`, shifting later columns left and
    /// reindexing the edge set.
    fn remove_edge_column(&mut self, col: usize) {
        self.matrix
            .remove_col(col, self.vertices.len(), self.edges.len());
        self.edges.shift_remove_index(col);
    }
}

impl<V> Default for IncidenceMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DirectedGraph<V> for IncidenceMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, vertex: V) {
        if self.vertices.contains(&vertex) {
            return;
        }
        self.matrix.ensure_row_capacity(self.vertices.len() + 1);
        self.vertices.insert(vertex);
    }

    fn remove_vertex(&mut self, vertex: &V) {
        let Some(index) = self.vertices.get_index_of(vertex) else {
            return;
        };

        // Incident edges go first, in both directions, each through the
        // column-shift path so the edge index space stays gap-free.
        let incident: Vec<Edge<V>> = self
            .edges
            .iter()
            .filter(|edge| edge.start == *vertex || edge.finish == *vertex)
            .cloned()
            .collect();
        for edge in &incident {
            self.remove_edge(&edge.start, &edge.finish);
        }

        self.matrix
            .remove_row(index, self.vertices.len(), self.edges.len());
        self.vertices.shift_remove_index(index);
    }

    fn add_edge(&mut self, start: V, finish: V) -> Result<()> {
        let (Some(source_row), Some(dest_row)) = (
            self.vertices.get_index_of(&start),
            self.vertices.get_index_of(&finish),
        ) else {
            return Err(Error::MissingEndpoint);
        };

        let edge = Edge::new(start, finish);
        if self.edges.contains(&edge) {
            return Ok(());
        }

        let col = self.edges.len();
        self.matrix.ensure_col_capacity(col + 1);
        self.matrix.set(source_row, col, 1);
        self.matrix.set(dest_row, col, -1);
        self.edges.insert(edge);
        Ok(())
    }

    fn remove_edge(&mut self, start: &V, finish: &V) {
        let key = Edge::new(start.clone(), finish.clone());
        if let Some(col) = self.edges.get_index_of(&key) {
            self.remove_edge_column(col);
        }
    }

    fn neighbors(&self, vertex: &V) -> IndexSet<V> {
        let Some(row) = self.vertices.get_index_of(vertex) else {
            return IndexSet::new();
        };
        (0..self.edges.len())
            .filter(|&col| self.matrix.get(row, col) == 1)
            .filter_map(|col| self.edges.get_index(col).map(|edge| edge.finish.clone()))
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
        self.edges.len()
    }

    fn has_edge(&self, start: &V, finish: &V) -> bool {
        self.edges
            .contains(&Edge::new(start.clone(), finish.clone()))
    }
}

impl<V> PartialEq for IncidenceMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.eq_by_structure(other)
    }
}

impl<V> Eq for IncidenceMatrixGraph<V> where V: Eq + Hash + Clone {}

impl<V> Hash for IncidenceMatrixGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(structural_hash(self));
    }
}

impl<V> fmt::Display for IncidenceMatrixGraph<V>
where
    V: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IncidenceMatrixGraph {{")?;
        for (row, vertex) in self.vertices.iter().enumerate() {
            write!(f, "  {vertex} -> [")?;
            for col in 0..self.edges.len() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.matrix.get(row, col))?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}
