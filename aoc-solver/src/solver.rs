//! The day-solver contract

use crate::error::{ParseError, SolveError};
use crate::input::SolverInput;

/// Core trait that all daily solvers implement
///
/// A solver is built once from its structured input and owns it; both parts are
/// computed from that immutable state. The input shape ([`Single`](crate::Single),
/// [`Elements`](crate::Elements) or [`WithHeader`](crate::WithHeader)) decides how the
/// raw text is decomposed before [`new`](DaySolver::new) sees it.
///
/// # Example
///
/// ```
/// use aoc_solver::{DaySolver, Elements, ParseError, SolveError};
///
/// struct Day1 {
///     numbers: Vec<i32>,
/// }
///
/// impl DaySolver for Day1 {
///     type Input = Elements<i32>;
///
///     fn new(input: Self::Input) -> Result<Self, ParseError> {
///         Ok(Day1 { numbers: input.into_inner() })
///     }
///
///     fn solve_part1(&self) -> Result<String, SolveError> {
///         Ok(self.numbers.iter().sum::<i32>().to_string())
///     }
///
///     fn solve_part2(&self) -> Result<String, SolveError> {
///         Ok(self.numbers.iter().product::<i32>().to_string())
///     }
/// }
///
/// let solver = Day1::from_input("1\n2\n3\n").unwrap();
/// assert_eq!(solver.solve_part1().unwrap(), "6");
/// assert_eq!(solver.solve_part2().unwrap(), "6");
/// ```
pub trait DaySolver: Sized + 'static {
    /// How the raw input text decomposes
    type Input: SolverInput;

    /// Build the solver from decomposed input
    ///
    /// Use this for cross-element validation that single elements cannot express.
    fn new(input: Self::Input) -> Result<Self, ParseError>;

    fn solve_part1(&self) -> Result<String, SolveError>;

    fn solve_part2(&self) -> Result<String, SolveError>;

    /// Decompose raw text and build the solver
    fn from_input(input: &str) -> Result<Self, ParseError> {
        Self::new(Self::Input::decompose(input)?)
    }

    /// Dispatch a part number; only parts 1 and 2 exist
    fn solve_part(&self, part: u8) -> Result<String, SolveError> {
        match part {
            1 => self.solve_part1(),
            2 => self.solve_part2(),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}
