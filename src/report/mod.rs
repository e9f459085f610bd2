//! Presenting solved trips.

use serde::Serialize;
use tabled::Tabled;

use crate::config::OutputFormat;
use crate::network::{Metric, RoadNetwork};
use crate::planner::{PlanReport, TripOutcome};

pub mod formatter;
pub mod pretty_printing;

/// Formats hours as `H hrs M mins S secs`, to the nearest tenth of a second.
///
/// Hours are left out when zero, and so are minutes when both are zero.
pub fn format_hms(hours: f64) -> String {
    let tenths = (hours * 36_000.0).round().max(0.0) as u64;
    let whole_hours = tenths / 36_000;
    let minutes = tenths % 36_000 / 600;
    let seconds = (tenths % 600) as f64 / 10.0;

    if whole_hours == 0 && minutes == 0 {
        format!("{seconds:.1} secs")
    } else if whole_hours == 0 {
        format!("{minutes} mins {seconds:.1} secs")
    } else {
        format!("{whole_hours} hrs {minutes} mins {seconds:.1} secs")
    }
}

/// A weight in the unit of `metric`. Distances keep two decimals, like edges.
pub fn format_weight(weight: f64, metric: Metric) -> String {
    match metric {
        Metric::Distance => format!("{weight:.2} miles"),
        Metric::Time => format_hms(weight),
    }
}

fn display_total(total: &Option<f64>) -> String {
    match total {
        Some(total) => format!("{total:.3}"),
        None => "unreachable".to_string(),
    }
}

/// One row per trip, for tables and CSV.
#[derive(Clone, Debug, PartialEq, Serialize, Tabled)]
pub struct TripSummary {
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Metric")]
    pub metric: Metric,
    #[tabled(rename = "Legs")]
    pub legs: usize,
    #[tabled(rename = "Total", display_with = "display_total")]
    pub total: Option<f64>,
}

impl TripSummary {
    pub fn new(outcome: &TripOutcome, network: &RoadNetwork) -> Self {
        Self {
            from: network.label(outcome.request.start),
            to: network.label(outcome.request.end),
            metric: outcome.request.metric,
            legs: outcome.route.as_ref().map_or(0, Vec::len),
            total: outcome.total(),
        }
    }
}

/// `Distance graph is strongly connected` and the like.
pub fn connectivity_line(metric: Metric, connected: bool) -> String {
    let graph = match metric {
        Metric::Distance => "Distance",
        Metric::Time => "Time",
    };
    if connected {
        format!("{graph} graph is strongly connected")
    } else {
        format!("{graph} graph is not strongly connected")
    }
}

/// Renders a whole plan in the requested format.
pub fn render(
    report: &PlanReport,
    network: &RoadNetwork,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty_printing::format_plan(report, network, color)),
        OutputFormat::Table => Ok(formatter::format_table(report, network)),
        OutputFormat::Csv => formatter::format_csv(report, network),
        OutputFormat::Json => formatter::format_json(report, network),
    }
}
