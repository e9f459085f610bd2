//! Reversal, breadth-first search and the strong-connectivity test.

use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, VertexId};

/// Builds a graph like `graph` with every edge pointing the other way.
pub fn reverse(graph: &EdgeWeightedDigraph) -> EdgeWeightedDigraph {
    graph.reversed()
}

/// Breadth-first search of `graph` from `start`.
///
/// Leaves the reachability set in the `visited` flags and the hop-count tree
/// in `dist`/`edge_to`. `start` itself is reached through a zero-weight
/// self-loop at distance 0.
pub fn breadth_first_search(graph: &mut EdgeWeightedDigraph, start: VertexId) -> Result<()> {
    graph.reset();
    graph.visit(DirectedEdge::new(start, start, 0.0), 0.0)?;
    debug!(
        "bfs from {start} over {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut queue = VecDeque::from([start]);
    while let Some(vertex) = queue.pop_front() {
        let hops = graph.dist(vertex)? + 1.0;
        // Indexing keeps the adjacency borrow short; visits never add edges.
        for index in 0..graph.adjacent(vertex)?.len() {
            let edge = graph.adjacent(vertex)?[index];
            if !graph.is_visited(edge.to())? {
                graph.visit(edge, hops)?;
                queue.push_back(edge.to());
            }
        }
    }
    Ok(())
}

/// Vertices reached by a breadth-first search from `start`, in index order.
pub fn reachable_from(graph: &mut EdgeWeightedDigraph, start: VertexId) -> Result<Vec<VertexId>> {
    breadth_first_search(graph, start)?;
    let mut reached = Vec::new();
    for vertex in 0..graph.vertex_count() {
        if graph.is_visited(vertex)? {
            reached.push(vertex);
        }
    }
    Ok(reached)
}

fn all_visited(graph: &EdgeWeightedDigraph) -> Result<bool> {
    for vertex in 0..graph.vertex_count() {
        if !graph.is_visited(vertex)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether every vertex of `graph` reaches every other vertex.
///
/// Vertex 0 must reach all vertices in `graph` and in its reversal. A graph
/// without vertices is strongly connected.
pub fn is_strongly_connected(graph: &mut EdgeWeightedDigraph) -> Result<bool> {
    if graph.vertex_count() == 0 {
        return Ok(true);
    }

    breadth_first_search(graph, 0)?;
    if !all_visited(graph)? {
        return Ok(false);
    }

    let mut reversed = reverse(graph);
    breadth_first_search(&mut reversed, 0)?;
    all_visited(&reversed)
}
