use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_cvrp::config::RunConfig;
use u_cvrp::pipeline;
use u_cvrp::solver::{FirstSolutionStrategy, LocalSearchMetaheuristic, LocalSearchSolver};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// JSON problem file (defaults to the built-in 32-node instance)
    #[arg(short, long)]
    problem: Option<PathBuf>,

    /// Search time limit in seconds
    #[arg(short, long)]
    time_limit: Option<f64>,

    /// AUTOMATIC, PATH_CHEAPEST_ARC or SAVINGS
    #[arg(long)]
    first_solution: Option<FirstSolutionStrategy>,

    /// AUTOMATIC, GREEDY_DESCENT, GUIDED_LOCAL_SEARCH, SIMULATED_ANNEALING, TABU_SEARCH or
    /// OBJECTIVE_TABU_SEARCH
    #[arg(short, long)]
    metaheuristic: Option<LocalSearchMetaheuristic>,

    /// Seed for randomized metaheuristics
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many improvement iterations
    #[arg(long)]
    iteration_limit: Option<u64>,

    /// Log search progress at debug level only
    #[arg(long)]
    no_search_log: bool,

    /// Where to write the route chart
    #[arg(long, default_value = "routes.svg")]
    plot: PathBuf,

    /// Skip the route chart
    #[arg(long)]
    no_plot: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let start = Instant::now();
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("u_cvrp={level}"))),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.problem {
        Some(path) => RunConfig::from_file(path)?,
        None => {
            info!("No problem file given, using the built-in instance");
            RunConfig::demo()
        }
    };

    let search = &mut config.search;
    if let Some(secs) = cli.time_limit {
        search.time_limit = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("invalid time limit: {secs}"))?;
    }
    if let Some(strategy) = cli.first_solution {
        search.first_solution_strategy = strategy;
    }
    if let Some(metaheuristic) = cli.metaheuristic {
        search.local_search_metaheuristic = metaheuristic;
    }
    if let Some(seed) = cli.seed {
        search.seed = seed;
    }
    if let Some(limit) = cli.iteration_limit {
        search.iteration_limit = Some(limit);
    }
    if cli.no_search_log {
        search.log_search = false;
    }

    let plot = (!cli.no_plot).then_some(cli.plot.as_path());
    let mut out = io::stdout().lock();
    pipeline::run(&config, &LocalSearchSolver, &mut out, plot)?;

    writeln!(out, "{}", start.elapsed().as_secs_f64())?;
    Ok(())
}
