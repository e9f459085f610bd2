//! Parsing the line-oriented road network format.
//!
//! The input has three sections, each a count followed by that many lines:
//! location names, segments `start end distance speed`, and trip requests
//! `start end D|T`. Blank lines and lines starting with `#` are ignored.
//! Malformed segments are errors, malformed trip requests are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::GraphError;
use crate::graph::DirectedEdge;
use crate::network::{Metric, RoadNetwork, Segment, TripRequest};

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected end of input while reading {section}")]
    UnexpectedEnd { section: &'static str },

    #[error("line {line}: expected a count of {section}, found {text:?}")]
    InvalidCount {
        line: usize,
        section: &'static str,
        text: String,
    },

    #[error("line {line}: malformed segment {text:?}: {reason}")]
    MalformedSegment {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("line {line}: invalid segment: {source}")]
    InvalidSegment {
        line: usize,
        #[source]
        source: GraphError,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Data lines of the input with their 1-based line numbers.
struct DataLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> DataLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn next_line(&mut self, section: &'static str) -> Result<(usize, &'a str)> {
        self.lines
            .find(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
            .map(|(index, line)| (index + 1, line))
            .ok_or(ParseError::UnexpectedEnd { section })
    }

    fn next_count(&mut self, section: &'static str) -> Result<usize> {
        let (line, text) = self.next_line(section)?;
        text.trim().parse().map_err(|_| ParseError::InvalidCount {
            line,
            section,
            text: text.to_string(),
        })
    }
}

fn parse_segment(line: usize, text: &str, location_count: usize) -> Result<Segment> {
    let malformed = |reason: &str| ParseError::MalformedSegment {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[start, end, distance, speed] = fields.as_slice() else {
        return Err(malformed("expected `start end distance speed`"));
    };
    let start: i64 = start.parse().map_err(|_| malformed("start is not an integer"))?;
    let end: i64 = end.parse().map_err(|_| malformed("end is not an integer"))?;
    let distance: f64 = distance
        .parse()
        .map_err(|_| malformed("distance is not a number"))?;
    let speed: f64 = speed.parse().map_err(|_| malformed("speed is not a number"))?;

    let edge = DirectedEdge::try_new(start, end, distance)
        .map_err(|source| ParseError::InvalidSegment { line, source })?;
    for vertex in [edge.from(), edge.to()] {
        if vertex >= location_count {
            return Err(ParseError::InvalidSegment {
                line,
                source: GraphError::IndexOutOfRange {
                    index: vertex,
                    len: location_count,
                },
            });
        }
    }
    if speed.is_nan() || speed <= 0.0 {
        return Err(malformed("speed must be positive"));
    }

    Ok(Segment {
        start: edge.from(),
        end: edge.to(),
        distance,
        speed,
    })
}

fn parse_trip(text: &str, location_count: usize) -> Option<TripRequest> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[start, end, tag] = fields.as_slice() else {
        return None;
    };
    let start: usize = start.parse().ok()?;
    let end: usize = end.parse().ok()?;
    let metric = Metric::from_tag(tag)?;

    (start < location_count && end < location_count).then_some(TripRequest { start, end, metric })
}

/// Parses a whole road network description.
pub fn parse_network(input: &str) -> Result<RoadNetwork> {
    let mut lines = DataLines::new(input);
    let mut network = RoadNetwork::default();

    let location_count = lines.next_count("locations")?;
    for _ in 0..location_count {
        let (_, name) = lines.next_line("locations")?;
        network.locations.push(name.trim().to_string());
    }

    let segment_count = lines.next_count("segments")?;
    for _ in 0..segment_count {
        let (line, text) = lines.next_line("segments")?;
        network
            .segments
            .push(parse_segment(line, text, location_count)?);
    }

    let trip_count = lines.next_count("trips")?;
    for _ in 0..trip_count {
        let (line, text) = lines.next_line("trips")?;
        match parse_trip(text, location_count) {
            Some(trip) => network.trips.push(trip),
            None => warn!("line {line}: skipping malformed trip request {text:?}"),
        }
    }

    Ok(network)
}

/// Reads and parses the road network stored at `path`.
pub fn read_network<P: AsRef<Path>>(path: P) -> Result<RoadNetwork> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_network(&input)
}
