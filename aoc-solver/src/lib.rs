//! Advent of Code Solver Library
//!
//! A small framework for turning raw puzzle text into typed values and running daily
//! solvers through one uniform interface.
//!
//! # Overview
//!
//! This library provides:
//! - A [`Cursor`] with explicit, non-backtracking consumption primitives
//! - The [`Parseable`] protocol with conformances for integers, characters, lines,
//!   rows of [`Glyph`]s and raw-value enums
//! - Input shapes ([`Single`], [`Elements`], [`WithHeader`]) that decompose raw text
//! - The [`DaySolver`] contract and its type-erased [`DynSolver`] form with timing
//! - A (year, day) registry fed by `#[derive(AutoRegisterSolver)]` plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     Cursor, DaySolver, Elements, ParseError, Parseable, RegistryBuilder, SolveError,
//! };
//!
//! struct Move {
//!     dx: i32,
//!     dy: i32,
//! }
//!
//! impl Parseable for Move {
//!     fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
//!         let dx = cursor.consume_integer()?;
//!         cursor.expect_literal(",")?;
//!         let dy = cursor.consume_integer()?;
//!         Ok(Move { dx, dy })
//!     }
//!
//!     fn render(&self) -> String {
//!         format!("{},{}", self.dx, self.dy)
//!     }
//! }
//!
//! struct Walk(Vec<Move>);
//!
//! impl DaySolver for Walk {
//!     type Input = Elements<Move>;
//!
//!     fn new(input: Self::Input) -> Result<Self, ParseError> {
//!         Ok(Walk(input.into_inner()))
//!     }
//!
//!     fn solve_part1(&self) -> Result<String, SolveError> {
//!         Ok(self.0.iter().map(|m| m.dx).sum::<i32>().to_string())
//!     }
//!
//!     fn solve_part2(&self) -> Result<String, SolveError> {
//!         Ok(self.0.iter().map(|m| m.dy).sum::<i32>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Walk>(2023, 1).unwrap().build();
//! let solver = registry.create_solver(2023, 1, "1,2\n-3,4\n").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "-2");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Parsing
//!
//! The cursor never skips anything on its own; separators are consumed explicitly.
//! Alternation is done at the call site with [`Cursor::checkpoint`] and
//! [`Cursor::rewind`].
//!
//! ## Plugin System and Derive Macros
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers automatically:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1Solver { /* ... */ }
//! ```
//!
//! Use `#[derive(RawValueEnum)]` for enums backed by a character, word or integer:
//! ```ignore
//! #[derive(RawValueEnum)]
//! enum Square {
//!     #[raw = '.']
//!     Open,
//!     #[raw = '#']
//!     Tree,
//! }
//! ```

extern crate self as aoc_solver;

mod cursor;
mod error;
mod input;
mod instance;
mod parse;
mod registry;
mod solver;

// Re-export public API
pub use cursor::{Checkpoint, Cursor, NEWLINES};
pub use error::{ParseError, ParseErrorKind, RegistrationError, SolveError, SolverError};
pub use input::{BlankLine, Comma, Elements, Newline, Separator, Single, SolverInput, WithHeader};
pub use instance::{DynSolver, SolveResult, SolverInstance, instantiate};
pub use parse::{
    Glyph, Parseable, RawToken, RawValue, is_word_char, parse_raw_value, render_lines,
    render_raw_value,
};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegistryBuilder, SolverFactoryFn,
    SolverPlugin, SolverRegistry,
};
pub use solver::DaySolver;

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AutoRegisterSolver, RawValueEnum};
