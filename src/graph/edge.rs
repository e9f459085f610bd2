//! Weighted directed edges.

use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::VertexId;

/// One weighted arc from `from` to `to`.
///
/// Edges are plain values: they are copied into adjacency lists, into the
/// `edge_to` search state and into returned paths. Two edges between the same
/// pair of vertices are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DirectedEdge {
    from: VertexId,
    to: VertexId,
    weight: f64,
}

impl DirectedEdge {
    /// Creates an edge without validating anything.
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Creates an edge from signed input, rejecting negative endpoints and
    /// weights that are NaN or negative.
    pub fn try_new(from: i64, to: i64, weight: f64) -> Result<Self> {
        if from < 0 || to < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "vertices must be nonnegative integers, got {from}->{to}"
            )));
        }
        if weight.is_nan() {
            return Err(GraphError::InvalidArgument("weight is NaN".to_string()));
        }
        if weight < 0.0 {
            return Err(GraphError::InvalidArgument(format!(
                "weight must be nonnegative, got {weight}"
            )));
        }

        Ok(Self::new(from as VertexId, to as VertexId, weight))
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The same arc pointing the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}
