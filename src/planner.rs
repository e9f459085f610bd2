//! Solving the trip requests of a road network.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, info};

use crate::algorithms::{is_strongly_connected, path_weight, shortest_path};
use crate::config::PlannerConfig;
use crate::error::{GraphError, Result};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::network::{Metric, RoadNetwork, TripRequest};

/// The answer to one trip request.
#[derive(Clone, Debug, PartialEq)]
pub struct TripOutcome {
    pub request: TripRequest,
    /// Edges from start to end, `None` when the end cannot be reached.
    pub route: Option<Vec<DirectedEdge>>,
}

impl TripOutcome {
    pub fn is_reachable(&self) -> bool {
        self.route.is_some()
    }

    /// Total distance or time of the route.
    pub fn total(&self) -> Option<f64> {
        self.route.as_deref().map(path_weight)
    }
}

/// Outcomes of all trips plus optional connectivity facts per metric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanReport {
    pub outcomes: Vec<TripOutcome>,
    pub connectivity: Vec<(Metric, bool)>,
}

/// Answers trips over one network, building each metric's graph once.
pub struct Planner<'a> {
    network: &'a RoadNetwork,
    graphs: HashMap<Metric, EdgeWeightedDigraph>,
}

impl<'a> Planner<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self {
            network,
            graphs: HashMap::new(),
        }
    }

    /// The graph for `metric`, built on first use.
    pub fn graph(&mut self, metric: Metric) -> Result<&mut EdgeWeightedDigraph> {
        match self.graphs.entry(metric) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!("building {metric} graph");
                Ok(entry.insert(self.network.make_graph(metric)?))
            }
        }
    }

    pub fn solve(&mut self, request: TripRequest) -> Result<TripOutcome> {
        let graph = self.graph(request.metric)?;
        let route = match shortest_path(graph, request.start, request.end) {
            Ok(route) => Some(route),
            Err(GraphError::NoPathExists { .. }) => None,
            Err(err) => return Err(err),
        };
        Ok(TripOutcome { request, route })
    }

    pub fn is_strongly_connected(&mut self, metric: Metric) -> Result<bool> {
        is_strongly_connected(self.graph(metric)?)
    }
}

/// Solves every trip of `network` in input order.
pub fn solve_trips(network: &RoadNetwork, config: &PlannerConfig) -> Result<PlanReport> {
    let mut planner = Planner::new(network);
    let mut report = PlanReport::default();

    for &request in &network.trips {
        let outcome = planner.solve(request)?;
        match &outcome.route {
            Some(route) => info!("{request}: {} legs, total {}", route.len(), path_weight(route)),
            None => info!("{request}: unreachable"),
        }
        report.outcomes.push(outcome);
    }

    if config.check_connectivity {
        for metric in [Metric::Distance, Metric::Time] {
            let connected = planner.is_strongly_connected(metric)?;
            report.connectivity.push((metric, connected));
        }
    }

    Ok(report)
}
