//! A module for representing weighted directed road graphs.

pub type VertexId = usize;

pub mod digraph;
pub mod edge;

pub use self::digraph::EdgeWeightedDigraph;
pub use self::edge::DirectedEdge;
