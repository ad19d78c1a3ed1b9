use aoc_solver::{DaySolver, Elements, ParseError, SolveError};
use aoc_solver_macros::AutoRegisterSolver;

use crate::utils::memo::Memoized;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2019, day = 1, tags = ["fuel", "memo"])]
pub struct Solver {
    masses: Vec<i64>,
}

impl DaySolver for Solver {
    type Input = Elements<i64>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Self {
            masses: input.into_inner(),
        })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        Ok(self.masses.iter().map(|&mass| fuel(mass)).sum::<i64>().to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        // One cache entry per intermediate fuel mass
        let total_fuel = Memoized::recursive(|recurse: &dyn Fn(i64) -> i64, mass: i64| {
            let base = fuel(mass);
            if base > 0 { base + recurse(base) } else { 0 }
        });

        Ok(self
            .masses
            .iter()
            .map(|&mass| total_fuel.get(mass))
            .sum::<i64>()
            .to_string())
    }
}

/// Mass divided by three, rounded down, minus two; never negative
fn fuel(mass: i64) -> i64 {
    (mass / 3 - 2).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "12\n14\n1969\n100756\n";

    #[test]
    fn test_fuel_for_mass() {
        assert_eq!(fuel(12), 2);
        assert_eq!(fuel(14), 2);
        assert_eq!(fuel(1969), 654);
        assert_eq!(fuel(100756), 33583);
        assert_eq!(fuel(2), 0);
    }

    #[test]
    fn test_part1() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part1().unwrap(), "34241");
    }

    #[test]
    fn test_part2_counts_fuel_for_fuel() {
        for (mass, expected) in [("14", "2"), ("1969", "966"), ("100756", "50346")] {
            let solver = Solver::from_input(mass).unwrap();
            assert_eq!(solver.solve_part2().unwrap(), expected);
        }
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part2().unwrap(), "51316");
    }
}
