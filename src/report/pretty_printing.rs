use colored::*;

use super::{connectivity_line, format_weight};
use crate::algorithms::path_weight;
use crate::network::{Metric, RoadNetwork};
use crate::planner::{PlanReport, TripOutcome};

fn paint(text: String, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(&text).to_string()
    } else {
        text
    }
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}

/// The turn-by-turn itinerary of one trip.
pub fn format_itinerary(outcome: &TripOutcome, network: &RoadNetwork, color: bool) -> String {
    let request = outcome.request;
    let from = network.label(request.start);
    let to = network.label(request.end);
    let mut buffer = String::new();

    let Some(route) = &outcome.route else {
        let line = format!("No route from {from} to {to}");
        push_line(&mut buffer, &paint(line, color, |s| s.red().bold()));
        return buffer;
    };

    let header = match request.metric {
        Metric::Distance => format!("Shortest distance from {from} to {to}"),
        Metric::Time => format!("Shortest driving time from {from} to {to}"),
    };
    push_line(&mut buffer, &paint(header, color, |s| s.bold()));
    push_line(&mut buffer, &format!("\tBegin at {from}"));
    for edge in route {
        push_line(
            &mut buffer,
            &format!(
                "\tContinue to {} ({})",
                network.label(edge.to()),
                format_weight(edge.weight(), request.metric)
            ),
        );
    }

    let total = format_weight(path_weight(route), request.metric);
    let footer = match request.metric {
        Metric::Distance => format!("Total distance: {total}"),
        Metric::Time => format!("Total time: {total}"),
    };
    push_line(&mut buffer, &paint(footer, color, |s| s.green()));
    buffer
}

/// Itineraries of every trip, followed by any connectivity results.
pub fn format_plan(report: &PlanReport, network: &RoadNetwork, color: bool) -> String {
    let mut buffer = String::new();
    for outcome in &report.outcomes {
        buffer.push_str(&format_itinerary(outcome, network, color));
    }
    for &(metric, connected) in &report.connectivity {
        buffer.push_str(&connectivity_line(metric, connected));
        buffer.push('\n');
    }
    buffer
}
