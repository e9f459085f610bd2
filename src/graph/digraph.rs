//! Edge-weighted directed graph with per-vertex search state.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{DirectedEdge, VertexId};

/// Transient bookkeeping written by traversals.
///
/// All three vectors are sized to the vertex count of the owning graph.
#[derive(Clone, Debug)]
struct SearchState {
    visited: Vec<bool>,
    dist: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl SearchState {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            dist: vec![f64::INFINITY; vertex_count],
            edge_to: vec![None; vertex_count],
        }
    }
}

/// A sparse weighted digraph over the dense vertex range `0..vertex_count`.
///
/// Outgoing edges are kept per vertex in insertion order, which is also the
/// order traversals examine them in. The graph additionally owns the search
/// state (`visited`, `dist`, `edge_to`) that breadth-first search and
/// Dijkstra write to, so only one traversal may run on an instance at a time.
#[derive(Clone, Debug)]
pub struct EdgeWeightedDigraph {
    adjacency: Vec<Vec<DirectedEdge>>,
    edge_count: usize,
    search: SearchState,
}

impl EdgeWeightedDigraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
            search: SearchState::new(vertex_count),
        }
    }

    /// Like [`EdgeWeightedDigraph::new`] but for signed counts coming from
    /// untrusted input.
    pub fn try_with_vertex_count(vertex_count: i64) -> Result<Self> {
        if vertex_count < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "number of vertices must be nonnegative, got {vertex_count}"
            )));
        }
        Ok(Self::new(vertex_count as usize))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fails with [`GraphError::IndexOutOfRange`] unless `vertex` is in the graph.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: vertex,
                len: self.vertex_count(),
            })
        }
    }

    /// Appends `edge` to the adjacency list of its tail.
    ///
    /// Parallel edges and self-loops are accepted as is.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        self.check_vertex(edge.from())?;
        self.check_vertex(edge.to())?;
        self.adjacency[edge.from()].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn adjacent(&self, vertex: VertexId) -> Result<&[DirectedEdge]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// A graph over the same vertices with every edge pointing the other way.
    ///
    /// Reversed edges are appended in the order of [`EdgeWeightedDigraph::edges`].
    /// The search state of the copy is fresh.
    pub fn reversed(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for edge in self.edges() {
            reversed.adjacency[edge.to()].push(edge.reversed());
        }
        reversed.edge_count = self.edge_count;
        reversed
    }

    /// Every edge of the graph, grouped by tail vertex.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.adjacency.iter().flatten()
    }

    /// Clears the search state before a fresh traversal.
    pub fn reset(&mut self) {
        self.search.visited.fill(false);
        self.search.dist.fill(f64::INFINITY);
        self.search.edge_to.fill(None);
    }

    /// Marks the head of `edge` visited at `distance`, reached through `edge`.
    pub fn visit(&mut self, edge: DirectedEdge, distance: f64) -> Result<()> {
        let vertex = edge.to();
        self.check_vertex(vertex)?;
        self.search.visited[vertex] = true;
        self.search.dist[vertex] = distance;
        self.search.edge_to[vertex] = Some(edge);
        Ok(())
    }

    pub fn is_visited(&self, vertex: VertexId) -> Result<bool> {
        self.check_vertex(vertex)?;
        Ok(self.search.visited[vertex])
    }

    pub fn dist(&self, vertex: VertexId) -> Result<f64> {
        self.check_vertex(vertex)?;
        Ok(self.search.dist[vertex])
    }

    pub fn set_dist(&mut self, vertex: VertexId, dist: f64) -> Result<()> {
        self.check_vertex(vertex)?;
        self.search.dist[vertex] = dist;
        Ok(())
    }

    /// The edge last recorded as the way into `vertex`, if any.
    pub fn edge_to(&self, vertex: VertexId) -> Result<Option<DirectedEdge>> {
        self.check_vertex(vertex)?;
        Ok(self.search.edge_to[vertex])
    }

    /// Records `edge` as the way into its head vertex.
    pub fn set_edge_to(&mut self, edge: DirectedEdge) -> Result<()> {
        self.check_vertex(edge.to())?;
        self.search.edge_to[edge.to()] = Some(edge);
        Ok(())
    }

    /// Returns a string in DOT format representing the graph, with edge
    /// weights as labels.
    pub fn dot(&self) -> String {
        self.dot_with_labels(|vertex| vertex.to_string())
    }

    /// Same as [`EdgeWeightedDigraph::dot`] but names vertices with `label`.
    pub fn dot_with_labels<F>(&self, label: F) -> String
    where
        F: Fn(VertexId) -> String,
    {
        let mut dot = String::new();
        dot.push_str("digraph G {\n");
        for vertex in 0..self.vertex_count() {
            dot.push_str(&format!("    {vertex} [label={:?}];\n", label(vertex)));
        }
        for edge in self.edges() {
            dot.push_str(&format!(
                "    {} -> {} [label=\"{:.2}\"];\n",
                edge.from(),
                edge.to(),
                edge.weight()
            ));
        }
        dot.push('}');
        dot
    }
}

impl fmt::Display for EdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex}:")?;
            for edge in edges {
                write!(f, "  {edge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
