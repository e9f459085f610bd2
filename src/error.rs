//! Error kinds shared by the graph engine.

use crate::graph::VertexId;

/// Errors raised by the graph, the indexed queue and the algorithms.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vertex {index} out of range for graph with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("priority queue underflow")]
    EmptyQueue,

    #[error("no path exists from {start} to {end}")]
    NoPathExists { start: VertexId, end: VertexId },
}

pub type Result<T> = std::result::Result<T, GraphError>;
