//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solver error (lookup, parse or solve failure)
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error while loading the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<aoc_solver::SolveError> for CliError {
    fn from(err: aoc_solver::SolveError) -> Self {
        CliError::Solver(err.into())
    }
}
