//! Topological ordering via Kahn's algorithm.
//!
//! The sorter consumes only the [`DirectedGraph`] contract, so it is
//! agnostic to the backing representation. It does not assume acyclicity;
//! a cycle surfaces as [`Error::CycleDetected`] instead of a truncated
//! ordering.

use core::hash::Hash;
use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::graph::DirectedGraph;

/// Computes a topological ordering of `graph` using Kahn's algorithm.
///
/// In-degrees are accumulated by iterating [`DirectedGraph::neighbors`]
/// over every vertex; a FIFO queue is seeded with the in-degree-0 vertices
/// and drained, decrementing successors as vertices are emitted. Vertices
/// of equal in-degree come out in FIFO discovery order, so representations
/// with different natural iteration orders may produce different — equally
/// valid — orderings.
///
/// # Errors
/// [`Error::CycleDetected`] if the graph contains a cycle. The empty graph
/// sorts to an empty ordering without error.
pub fn topological_sort<V, G>(graph: &G) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone,
    G: DirectedGraph<V> + ?Sized,
{
    let vertices = graph.vertices();

    let mut in_degree: IndexMap<V, usize> =
        vertices.iter().cloned().map(|v| (v, 0)).collect();
    for vertex in &vertices {
        for neighbor in graph.neighbors(vertex) {
            if let Some(degree) = in_degree.get_mut(&neighbor) {
                *degree += 1;
            }
        }
    }

    let mut queue: VecDeque<V> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(v, _)| v.clone())
        .collect();

    let mut order = Vec::with_capacity(vertices.len());
    while let Some(vertex) = queue.pop_front() {
        for neighbor in graph.neighbors(&vertex) {
            if let Some(degree) = in_degree.get_mut(&neighbor) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(neighbor);
                }
            }
        }
        order.push(vertex);
    }

    if order.len() != vertices.len() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sorted = order.len(),
            total = vertices.len(),
            "topological sort aborted, cycle present"
        );
        return Err(Error::CycleDetected);
    }
    Ok(order)
}

/// Whether `graph` is acyclic, by attempting a topological sort.
pub fn is_acyclic<V, G>(graph: &G) -> bool
where
    V: Eq + Hash + Clone,
    G: DirectedGraph<V> + ?Sized,
{
    topological_sort(graph).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    fn position<V: PartialEq>(order: &[V], vertex: &V) -> usize {
        order.iter().position(|v| v == vertex).unwrap()
    }

    #[test]
    fn diamond_respects_precedence() {
        let mut graph = AdjacencyListGraph::new();
        for v in ["a", "b", "c", "d"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("b", "d").unwrap();
        graph.add_edge("c", "d").unwrap();

        let order = topological_sort(&graph).unwrap();

        assert_eq!(order.len(), 4);
        assert!(position(&order, &"a") < position(&order, &"b"));
        assert!(position(&order, &"a") < position(&order, &"c"));
        assert!(position(&order, &"b") < position(&order, &"d"));
        assert!(position(&order, &"c") < position(&order, &"d"));
    }

    #[test]
    fn cycle_is_an_error_not_a_truncated_order() {
        let mut graph = AdjacencyListGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();
        graph.add_edge("c", "a").unwrap();

        assert!(matches!(
            topological_sort(&graph),
            Err(Error::CycleDetected)
        ));
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn empty_graph_sorts_to_empty_order() {
        let graph = AdjacencyListGraph::<&str>::new();
        assert_eq!(topological_sort(&graph).unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn disconnected_vertices_all_appear() {
        let mut graph = AdjacencyListGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }

        let order = topological_sort(&graph).unwrap();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn partial_cycle_still_fails() {
        // An acyclic prefix feeding a cycle: the sort must not return the
        // prefix alone.
        let mut graph = AdjacencyListGraph::new();
        for v in ["start", "a", "b"] {
            graph.add_vertex(v);
        }
        graph.add_edge("start", "a").unwrap();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "a").unwrap();

        assert!(matches!(
            topological_sort(&graph),
            Err(Error::CycleDetected)
        ));
    }
}
