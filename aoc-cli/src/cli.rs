//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solver", version)]
pub struct Args {
    /// Puzzle year
    #[arg(short, long, default_value_t = 2020)]
    pub year: u16,

    /// Puzzle day
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=25),
        required_unless_present = "list"
    )]
    pub day: Option<u8>,

    /// Read the puzzle input from a file
    #[arg(short, long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// Inline puzzle input, one argument per line
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,

    /// Only register solvers carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// List registered solvers and exit
    #[arg(long)]
    pub list: bool,

    /// Print parse and solve durations after the answers
    #[arg(long)]
    pub timings: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
