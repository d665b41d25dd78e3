use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::{LevelFilter, info};
use relief::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Chooses supply sites for a road network, lists roads without a backup and plans the
/// delivery tour through all sites.
#[derive(StructOpt)]
#[structopt(name = "relief-planner")]
struct Opts {
    /// City file (`City: Neighbor(distance), ...`); read from stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Check first whether this many supply sites suffice
    #[structopt(short = "k", long)]
    budget: Option<NumNodes>,

    /// Start of the delivery tour (case-insensitive); defaults to the first city
    #[structopt(short, long)]
    start: Option<String>,

    /// Writes the minimum supply sites to this file, one city per line
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Print the plan as JSON
    #[structopt(long)]
    json: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_graph(path: &Option<PathBuf>) -> anyhow::Result<CityGraph> {
    if let Some(path) = path {
        Ok(CityGraph::try_read_cities_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(CityGraph::try_read_cities(stdin)?)
    }
}

fn write_supplies(plan: &DisasterPlan, graph: &CityGraph, path: &Path) -> anyhow::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    plan.supplies.write_names(graph, writer)
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let mut graph = load_graph(&opts.instance)?;
    info!(
        "Read {} cities and {} roads",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    let options = PlanOptions {
        budget: opts.budget,
        start: opts.start,
    };
    let plan = DisasterPlan::compute(&mut graph, &options)?;

    if let Some(path) = &opts.output {
        write_supplies(&plan, &graph, path)?;
    }

    let report = plan.report(&graph);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
