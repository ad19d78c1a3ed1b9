//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk (`~` already expanded)
    File(PathBuf),
    /// Trailing command-line arguments joined with newlines
    Inline(String),
    /// Standard input
    Stdin,
}

/// What the run should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every registered solver and exit
    List,
    /// Solve one puzzle
    Solve {
        year: u16,
        day: u8,
        input: InputSource,
    },
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    /// Tags every registered solver must carry
    pub tags: Vec<String>,
    /// Print durations after the answers
    pub timings: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let command = if args.list {
            Command::List
        } else {
            let day = args
                .day
                .ok_or_else(|| CliError::Config("a day is required".to_string()))?;
            let input = match (args.input_file, args.input.is_empty()) {
                (Some(path), true) => InputSource::File(expand_tilde(&path)),
                (Some(_), false) => {
                    return Err(CliError::Config(
                        "give either an input file or inline input, not both".to_string(),
                    ));
                }
                (None, false) => InputSource::Inline(args.input.join("\n")),
                (None, true) => InputSource::Stdin,
            };
            Command::Solve {
                year: args.year,
                day,
                input,
            }
        };

        Ok(Config {
            command,
            tags: args.tags,
            timings: args.timings,
            verbosity: args.verbose,
        })
    }
}

impl InputSource {
    /// Load the full input text
    pub fn load(&self) -> Result<String, CliError> {
        match self {
            InputSource::File(path) => Ok(std::fs::read_to_string(path)?),
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
