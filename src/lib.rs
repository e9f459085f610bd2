//! Shortest routes and connectivity checks over road networks.
//!
//! The engine lives in [`graph`], [`indexed_queue`] and [`algorithms`]. The
//! remaining modules read road network descriptions, answer their trip
//! requests and present the results.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod indexed_queue;
pub mod network;
pub mod planner;
pub mod report;
pub mod utils;

pub use error::{GraphError, Result};
