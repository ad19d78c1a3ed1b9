//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::DaySolver;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A constructed solver for one year-day problem
///
/// Holds the solver (which owns its parsed input) together with parse timing.
pub struct SolverInstance<S: DaySolver> {
    year: u16,
    day: u8,
    solver: S,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: DaySolver> SolverInstance<S> {
    /// Create a new solver instance by parsing input
    ///
    /// Records parse timing internally.
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed and created instance with timing
    /// * `Err(ParseError)` - Parsing failed; no instance exists
    pub fn new(year: u16, day: u8, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let solver = S::from_input(input)?;
        let parse_end = Utc::now();
        debug!(
            year,
            day,
            micros = (parse_end - parse_start).num_microseconds(),
            "parsed input"
        );

        Ok(Self {
            year,
            day,
            solver,
            parse_start,
            parse_end,
        })
    }

    /// The underlying solver
    pub fn solver(&self) -> &S {
        &self.solver
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///
///     let result = solver.solve(2)?;
///     println!("Part 2: {} (took {:?})", result.answer, result.duration());
///
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is not 1 or 2, or solving failed
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: DaySolver> DynSolver for SolverInstance<S> {
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = self.solver.solve_part(part)?;
        let solve_end = Utc::now();
        debug!(
            year = self.year,
            day = self.day,
            part,
            micros = (solve_end - solve_start).num_microseconds(),
            "solved part"
        );

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }
}

/// Parse `input` into a boxed [`SolverInstance`] of `S`
///
/// This is the factory shape stored in the registry.
pub fn instantiate<S: DaySolver>(
    year: u16,
    day: u8,
    input: &str,
) -> Result<Box<dyn DynSolver>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}
