//! Road networks: named locations, road segments and trip requests.
//!
//! A [`RoadNetwork`] is what the input file describes. It knows nothing about
//! search; it only turns its segments into an [`EdgeWeightedDigraph`] weighted
//! by the metric a trip asks for.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, VertexId};

pub mod parser;

pub use self::parser::{ParseError, parse_network, read_network};

/// What a trip optimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Miles driven.
    Distance,
    /// Hours spent driving.
    Time,
}

impl Metric {
    /// Parses the `D`/`T` tag of a trip request.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "D" => Some(Metric::Distance),
            "T" => Some(Metric::Time),
            _ => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Time => write!(f, "time"),
        }
    }
}

/// A one-way road between two locations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: VertexId,
    pub end: VertexId,
    /// Length in miles.
    pub distance: f64,
    /// Speed limit in miles per hour, always positive.
    pub speed: f64,
}

impl Segment {
    /// The edge weight of this segment under `metric`.
    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Distance => self.distance,
            Metric::Time => self.distance / self.speed,
        }
    }

    pub fn edge(&self, metric: Metric) -> DirectedEdge {
        DirectedEdge::new(self.start, self.end, self.weight(metric))
    }
}

/// A request to route from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripRequest {
    pub start: VertexId,
    pub end: VertexId,
    pub metric: Metric,
}

impl fmt::Display for TripRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request going from {} to {} by {}",
            self.start, self.end, self.metric
        )
    }
}

/// Everything an input file describes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadNetwork {
    pub locations: Vec<String>,
    pub segments: Vec<Segment>,
    pub trips: Vec<TripRequest>,
}

impl RoadNetwork {
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn location(&self, vertex: VertexId) -> Option<&str> {
        self.locations.get(vertex).map(String::as_str)
    }

    /// The name of `vertex`, or `#vertex` if it has none.
    pub fn label(&self, vertex: VertexId) -> String {
        self.location(vertex)
            .map_or_else(|| format!("#{vertex}"), str::to_string)
    }

    /// Builds the road graph with one edge per segment, weighted by `metric`.
    pub fn make_graph(&self, metric: Metric) -> Result<EdgeWeightedDigraph> {
        let mut graph = EdgeWeightedDigraph::new(self.location_count());
        for segment in &self.segments {
            graph.add_edge(segment.edge(metric))?;
        }
        Ok(graph)
    }
}
