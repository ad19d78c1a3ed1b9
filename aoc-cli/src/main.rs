//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::{Command, Config, InputSource};
use error::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let result = Config::from_args(args).and_then(|config| {
        init_logging(config.verbosity);
        run(config)
    });
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: Config) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;

    match &config.command {
        Command::List => {
            for info in registry.iter_info() {
                println!("{}", output::format_info(&info));
            }
            Ok(())
        }
        Command::Solve { year, day, input } => {
            solve(&registry, *year, *day, input, config.timings)
        }
    }
}

/// Construct the solver, then print both answers
///
/// Both parts are solved before anything is printed, so a failure leaves no partial output.
fn solve(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    input: &InputSource,
    timings: bool,
) -> Result<(), CliError> {
    let text = input.load()?;
    tracing::info!(year, day, bytes = text.len(), "loaded input");

    let solver = registry.create_solver(year, day, &text)?;
    let results = [1, 2]
        .into_iter()
        .map(|part| solver.solve(part).map(|result| (part, result)))
        .collect::<Result<Vec<_>, _>>()?;

    for (part, result) in &results {
        println!("{}", output::format_answer(*part, result));
    }
    if timings {
        println!("{}", output::format_timings(&*solver, &results));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
