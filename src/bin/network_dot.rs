//! Exports a road network as a Graphviz digraph and reports whether it is
//! strongly connected.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use roadgraph::algorithms::is_strongly_connected;
use roadgraph::network::{Metric, read_network};
use roadgraph::report::connectivity_line;

/// CLI arguments for DOT export
#[derive(Parser, Debug)]
#[command(author, version, about = "Export a road network as a DOT graph", long_about = None)]
struct Args {
    /// Road network file
    input: PathBuf,

    /// Which weight to put on the edges
    #[arg(short = 'm', long, value_enum, default_value = "distance")]
    metric: Metric,

    /// Output DOT file path, stdout when absent
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let network = read_network(&args.input)?;
    let mut graph = network.make_graph(args.metric)?;
    info!(
        "{} graph with {} vertices and {} edges",
        args.metric,
        graph.vertex_count(),
        graph.edge_count()
    );

    let dot = graph.dot_with_labels(|vertex| network.label(vertex));
    match &args.output {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("failed to create {path:?}"))?;
            writeln!(file, "{dot}")?;
        }
        None => println!("{dot}"),
    }

    let connected = is_strongly_connected(&mut graph)?;
    eprintln!("{}", connectivity_line(args.metric, connected));
    Ok(())
}
