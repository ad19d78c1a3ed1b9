//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, instantiate};
use crate::solver::DaySolver;
use tracing::{debug, trace};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function creating a solver instance from raw input
pub type SolverFactoryFn = fn(u16, u8, &str) -> Result<Box<dyn DynSolver>, ParseError>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Tags attached at registration
    pub tags: &'static [&'static str],
}

struct SolverFactoryEntry {
    factory: SolverFactoryFn,
    tags: &'static [&'static str],
}

/// Plugin information for automatic solver registration
///
/// Normally submitted by `#[derive(AutoRegisterSolver)]`, but can be written by hand.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{DaySolver, ParseError, SolveError, Single, SolverPlugin, instantiate};
///
/// struct Day1(u32);
///
/// impl DaySolver for Day1 {
///     type Input = Single<u32>;
///
///     fn new(input: Self::Input) -> Result<Self, ParseError> {
///         Ok(Day1(input.into_inner()))
///     }
///
///     fn solve_part1(&self) -> Result<String, SolveError> {
///         Ok(self.0.to_string())
///     }
///
///     fn solve_part2(&self) -> Result<String, SolveError> {
///         Ok((self.0 * 2).to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         tags: &["easy"],
///         factory: instantiate::<Day1>,
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Optional tags for filtering (e.g., "easy", "grid", "memo")
    pub tags: &'static [&'static str],
    /// Creates the solver from raw input
    pub factory: SolverFactoryFn,
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Builder for constructing a [`SolverRegistry`] with fluent API
///
/// Registration is validated eagerly: out-of-range year/day pairs and duplicates are
/// rejected, so the built registry is a plain read-only table.
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a concrete solver type for a specific year and day
    pub fn register<S: DaySolver>(self, year: u16, day: u8) -> Result<Self, RegistrationError> {
        self.register_factory(year, day, &[], instantiate::<S>)
    }

    /// Register a factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Year/day out of range or already registered
    pub fn register_factory(
        mut self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
        factory: SolverFactoryFn,
    ) -> Result<Self, RegistrationError> {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        trace!(year, day, ?tags, "registering solver");
        self.entries[index] = Some(SolverFactoryEntry { factory, tags });
        Ok(self)
    }

    /// Register all collected solver plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        let mut count = 0usize;
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self =
                    self.register_factory(plugin.year, plugin.day, plugin.tags, plugin.factory)?;
                count += 1;
            }
        }
        debug!(count, "registered solver plugins");
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable (year, day) lookup table of solver factories
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        input: &str,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(year, day, input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered factories, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    tags: e.tags,
                }
            })
        })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i))
            .is_some_and(Option::is_some)
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::input::Elements;
    use chrono::TimeDelta;

    struct Sum(Vec<i64>);

    impl DaySolver for Sum {
        type Input = Elements<i64>;

        fn new(input: Self::Input) -> Result<Self, ParseError> {
            Ok(Sum(input.into_inner()))
        }

        fn solve_part1(&self) -> Result<String, SolveError> {
            Ok(self.0.iter().sum::<i64>().to_string())
        }

        fn solve_part2(&self) -> Result<String, SolveError> {
            Ok(self.0.iter().max().copied().unwrap_or_default().to_string())
        }
    }

    #[test]
    fn test_index_round_trip() {
        for year in [2015u16, 2020, 2034] {
            for day in [1u8, 13, 25] {
                let index = calc_index(year, day).unwrap();
                assert_eq!(from_index(index), (year, day));
            }
        }
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2020, 0), None);
        assert_eq!(calc_index(2020, 26), None);
    }

    #[test]
    fn test_register_and_solve() {
        let registry = RegistryBuilder::new()
            .register::<Sum>(2020, 1)
            .unwrap()
            .build();

        assert!(registry.contains(2020, 1));
        assert_eq!(registry.len(), 1);

        let solver = registry.create_solver(2020, 1, "1\n5\n3\n").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "9");
        assert_eq!(solver.solve(2).unwrap().answer, "5");
        assert!(matches!(
            solver.solve(3),
            Err(SolveError::PartOutOfRange(3))
        ));
        assert!(solver.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_duplicate_registration() {
        let result = RegistryBuilder::new()
            .register::<Sum>(2020, 1)
            .unwrap()
            .register::<Sum>(2020, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2020, 1))
        ));
    }

    #[test]
    fn test_out_of_range_registration() {
        let result = RegistryBuilder::new().register::<Sum>(2040, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2040, 1))
        ));
    }

    #[test]
    fn test_lookup_failures() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create_solver(2020, 1, ""),
            Err(SolverError::NotFound(2020, 1))
        ));
        assert!(matches!(
            registry.create_solver(1999, 1, ""),
            Err(SolverError::InvalidYearDay(1999, 1))
        ));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let registry = RegistryBuilder::new()
            .register::<Sum>(2020, 1)
            .unwrap()
            .build();
        assert!(matches!(
            registry.create_solver(2020, 1, "1\nnope\n"),
            Err(SolverError::ParseError(ParseError::Element { index: 1, .. }))
        ));
    }

    #[test]
    fn test_iter_info_is_ordered() {
        let registry = RegistryBuilder::new()
            .register_factory(2020, 5, &["b"], instantiate::<Sum>)
            .unwrap()
            .register_factory(2019, 9, &["a"], instantiate::<Sum>)
            .unwrap()
            .build();
        let info: Vec<_> = registry.iter_info().map(|i| (i.year, i.day, i.tags)).collect();
        assert_eq!(info, vec![(2019, 9, &["a"][..]), (2020, 5, &["b"][..])]);
    }
}
