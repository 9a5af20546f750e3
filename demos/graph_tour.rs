//! Walkthrough of the graph contract against one concrete representation.
//!
//! Run with `cargo run --example graph_tour`.

use anyhow::Result;
use polygraph::{topological_sort, DirectedGraph, IncidenceMatrixGraph};

fn main() -> Result<()> {
    println!("### 1. Create graph ###");
    let mut graph = IncidenceMatrixGraph::new();
    println!("Empty incidence-matrix graph created.\n");

    println!("### 2. Populate ###");
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.add_edge("A", "B")?;
    graph.add_edge("A", "C")?;
    graph.add_edge("B", "C")?;
    graph.add_edge("C", "D")?;
    println!("Vertices A..D, edges A->B, A->C, B->C, C->D.");
    println!("{graph}\n");

    println!("### 3. Query ###");
    println!("All vertices: {:?}", graph.vertices());
    println!("Neighbors of A: {:?}", graph.neighbors(&"A"));
    println!("Neighbors of C: {:?}\n", graph.neighbors(&"C"));

    println!("### 4. Remove edge A -> C ###");
    graph.remove_edge(&"A", &"C");
    println!("{graph}\n");

    println!("### 5. Remove vertex B ###");
    println!("Removing B also removes the edges touching it.");
    graph.remove_vertex(&"B");
    println!("{graph}\n");

    println!("### 6. Topological order ###");
    let order = topological_sort(&graph)?;
    println!("{order:?}");

    Ok(())
}
