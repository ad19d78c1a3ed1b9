//! Advent of Code puzzle solutions with automatic registration
//!
//! [`utils`] holds the generic containers the daily puzzles share: a row-major grid with
//! rigid transforms, fixed-arity points, memoization of recursive functions and a few
//! sequence helpers.
//!
//! [`solutions`] holds the puzzles, organized by year. Each solver uses the
//! `AutoRegisterSolver` derive macro, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find them.

pub mod utils;

#[cfg(feature = "solutions")]
pub mod solutions;
