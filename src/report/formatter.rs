use itertools::Itertools;
use serde::Serialize;
use tabled::{Table, settings::Style};

use super::{TripSummary, connectivity_line};
use crate::network::{Metric, RoadNetwork};
use crate::planner::PlanReport;

fn summaries(report: &PlanReport, network: &RoadNetwork) -> Vec<TripSummary> {
    report
        .outcomes
        .iter()
        .map(|outcome| TripSummary::new(outcome, network))
        .collect()
}

/// Summary table of all trips, using the tabled library.
pub fn format_table(report: &PlanReport, network: &RoadNetwork) -> String {
    let mut buffer = String::new();
    if !report.outcomes.is_empty() {
        let mut table = Table::new(summaries(report, network));
        table.with(Style::rounded());
        buffer.push_str(&table.to_string());
        buffer.push('\n');
    }
    for &(metric, connected) in &report.connectivity {
        buffer.push_str(&connectivity_line(metric, connected));
        buffer.push('\n');
    }
    buffer
}

/// One CSV row per trip with a header line.
pub fn format_csv(report: &PlanReport, network: &RoadNetwork) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for summary in summaries(report, network) {
        writer.serialize(summary)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush CSV output: {}", err.error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[derive(Serialize)]
struct LegRecord<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
}

#[derive(Serialize)]
struct TripRecord<'a> {
    from: &'a str,
    to: &'a str,
    metric: Metric,
    reachable: bool,
    total: Option<f64>,
    /// Location names along the route, start included.
    stops: String,
    legs: Vec<LegRecord<'a>>,
}

#[derive(Serialize)]
struct PlanRecord<'a> {
    trips: Vec<TripRecord<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    connectivity: Vec<(Metric, bool)>,
}

fn name(network: &RoadNetwork, vertex: usize) -> &str {
    network.location(vertex).unwrap_or("?")
}

/// Pretty-printed JSON with every leg of every trip.
pub fn format_json(report: &PlanReport, network: &RoadNetwork) -> anyhow::Result<String> {
    let trips = report
        .outcomes
        .iter()
        .map(|outcome| {
            let route = outcome.route.as_deref().unwrap_or_default();
            let start = outcome.request.start;
            let stops = std::iter::once(start)
                .chain(route.iter().map(|edge| edge.to()))
                .map(|vertex| name(network, vertex))
                .join(" -> ");
            TripRecord {
                from: name(network, start),
                to: name(network, outcome.request.end),
                metric: outcome.request.metric,
                reachable: outcome.is_reachable(),
                total: outcome.total(),
                stops: if outcome.is_reachable() { stops } else { String::new() },
                legs: route
                    .iter()
                    .map(|edge| LegRecord {
                        from: name(network, edge.from()),
                        to: name(network, edge.to()),
                        weight: edge.weight(),
                    })
                    .collect(),
            }
        })
        .collect();

    let plan = PlanRecord {
        trips,
        connectivity: report.connectivity.clone(),
    };
    Ok(serde_json::to_string_pretty(&plan)?)
}
