//! Memoization Combinators
//!
//! Result caching for pure functions, including self-recursive ones.
//!
//! A recursive function is written against an explicit `recurse` continuation instead of
//! calling itself by name. [`Memoized::recursive`] supplies a continuation that goes back
//! through the cache, so every repeated input is served from the cache, however deep in
//! the recursion it shows up.
//!
//! # Cache Scope
//!
//! Each constructed [`Memoized`] owns one private, unbounded cache. Functions that must
//! share results (mutually recursive helpers) have to be expressed through the same
//! wrapper, for example by adding a discriminant to the input.
//!
//! # Warning: Cycle Behavior
//!
//! **There is no cycle detection.** If `f(x)` eventually recurses into `f(x)` again the
//! recursion never terminates and the stack overflows.
//!
//! # Example: Recursive
//!
//! ```rust
//! use aoc_solutions::utils::memo::Memoized;
//!
//! let fibonacci = Memoized::recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
//!     if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
//! });
//!
//! assert_eq!(fibonacci.get(90), 2_880_067_194_370_816_120);
//! assert_eq!(fibonacci.cache_len(), 91);
//! ```
//!
//! # Example: Two Arguments
//!
//! ```rust
//! use aoc_solutions::utils::memo::memoize_recursive2;
//!
//! let paths = memoize_recursive2(|recurse: &dyn Fn(u32, u32) -> u64, row: u32, col: u32| {
//!     if row == 0 || col == 0 { 1 } else { recurse(row - 1, col) + recurse(row, col - 1) }
//! });
//!
//! assert_eq!(paths.call2(4, 4), 70);
//! ```

mod cache;

pub use cache::{Memoized, memoize, memoize_recursive2};
