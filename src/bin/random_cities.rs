use std::path::PathBuf;

use log::{LevelFilter, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use relief::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Generates a random G(n,p) road network in the city file format
#[derive(Debug, StructOpt)]
#[structopt(name = "random-cities")]
struct Opt {
    /// Number of cities
    #[structopt(short, long)]
    nodes: NumNodes,

    /// Probability of each road
    #[structopt(short, long, default_value = "0.3")]
    prob: f64,

    /// Road lengths are drawn from 1 to this value
    #[structopt(short = "w", long, default_value = "10")]
    max_weight: Weight,

    /// Seed of the random generator; random if omitted
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Destination file; stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    anyhow::ensure!(
        (0.0..=1.0).contains(&opt.prob),
        "probability must be within [0, 1], got {}",
        opt.prob
    );
    anyhow::ensure!(opt.max_weight > 0, "roads must have a positive length");

    let seed = opt.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!("Seed {seed}");
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let graph = CityGraph::random_gnp(&mut rng, opt.nodes, opt.prob, opt.max_weight);
    info!(
        "Generated {} cities and {} roads",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    match &opt.output {
        Some(path) => graph.try_write_cities_file(path)?,
        None => graph.try_write_cities(std::io::stdout().lock())?,
    }

    Ok(())
}
