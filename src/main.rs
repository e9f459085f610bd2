//! Solves the trip requests of a road network file.
//!
//! This binary:
//! 1. Reads locations, road segments and trip requests from the input file
//! 2. Builds a distance or time weighted road graph per requested metric
//! 3. Finds the shortest route of every trip request
//! 4. Prints itineraries, a summary table, CSV or JSON

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use roadgraph::config::{OutputFormat, Overrides, PlannerConfig};
use roadgraph::network::read_network;
use roadgraph::planner::solve_trips;
use roadgraph::report::render;

/// CLI arguments for the trip solver
#[derive(Parser, Debug)]
#[command(author, version, about = "Find shortest road trips by distance or driving time", long_about = None)]
struct Args {
    /// Road network file with locations, segments and trip requests
    input: PathBuf,

    /// JSON file with planner settings
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also check whether the road graphs are strongly connected
    #[arg(long)]
    check_connectivity: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

impl Args {
    fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let overrides = Overrides {
            format: self.format,
            check_connectivity: self.check_connectivity,
            no_color: self.no_color,
            writes_file: self.output.is_some(),
        };
        PlannerConfig::resolve(self.config.as_ref(), overrides)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let config = args.planner_config()?;

    let network = read_network(&args.input)?;
    info!(
        "loaded {} locations, {} segments, {} trips from {:?}",
        network.location_count(),
        network.segments.len(),
        network.trips.len(),
        args.input
    );

    let report = solve_trips(&network, &config)?;
    let rendered = render(&report, &network, config.format, config.color)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("failed to write {path:?}"))?;
            info!("report written to {path:?}");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
