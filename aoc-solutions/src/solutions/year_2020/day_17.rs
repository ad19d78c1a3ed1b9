use aoc_solver::{DaySolver, Elements, ParseError, SolveError};
use aoc_solver_macros::{AutoRegisterSolver, RawValueEnum};
use itertools::iproduct;
use std::collections::HashSet;
use std::hash::Hash;

use crate::utils::point::{Point2, Point3, Point4};
use crate::utils::seq::count_occurrences;

const CYCLES: usize = 6;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 17, tags = ["lattice", "simulation"])]
pub struct Solver {
    /// Active cubes of the initial slice
    active: Vec<Point2<i64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
pub enum Cube {
    #[raw = '.']
    Inactive,
    #[raw = '#']
    Active,
}

fn neighbours3(p: Point3<i64>) -> impl Iterator<Item = Point3<i64>> {
    iproduct!(-1..=1, -1..=1, -1..=1)
        .filter(|&delta| delta != (0, 0, 0))
        .map(move |(dx, dy, dz)| Point3::new(p.x + dx, p.y + dy, p.z + dz))
}

fn neighbours4(p: Point4<i64>) -> impl Iterator<Item = Point4<i64>> {
    iproduct!(-1..=1, -1..=1, -1..=1, -1..=1)
        .filter(|&delta| delta != (0, 0, 0, 0))
        .map(move |(dx, dy, dz, dw)| Point4::new(p.x + dx, p.y + dy, p.z + dz, p.w + dw))
}

/// One Conway step over a sparse set of active points
///
/// A point is active next cycle if it has exactly three active neighbours, or two and is
/// already active.
fn cycle<P, N>(active: &HashSet<P>, neighbours: impl Fn(P) -> N) -> HashSet<P>
where
    P: Copy + Eq + Hash,
    N: Iterator<Item = P>,
{
    count_occurrences(active.iter().flat_map(|&p| neighbours(p)))
        .into_iter()
        .filter(|(p, count)| *count == 3 || (*count == 2 && active.contains(p)))
        .map(|(p, _)| p)
        .collect()
}

fn run<P, N>(initial: HashSet<P>, neighbours: impl Fn(P) -> N) -> usize
where
    P: Copy + Eq + Hash,
    N: Iterator<Item = P>,
{
    (0..CYCLES)
        .fold(initial, |active, _| cycle(&active, &neighbours))
        .len()
}

impl DaySolver for Solver {
    type Input = Elements<Vec<Cube>>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        let mut active = Vec::new();
        for (y, row) in (0i64..).zip(input.iter()) {
            for (x, cube) in (0i64..).zip(row) {
                if *cube == Cube::Active {
                    active.push(Point2::new(x, y));
                }
            }
        }
        Ok(Self { active })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        let initial: HashSet<_> = self.active.iter().map(|p| Point3::new(p.x, p.y, 0)).collect();
        Ok(run(initial, neighbours3).to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        let initial: HashSet<_> = self
            .active
            .iter()
            .map(|p| Point4::new(p.x, p.y, 0, 0))
            .collect();
        Ok(run(initial, neighbours4).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ".#.\n..#\n###\n";

    #[test]
    fn test_neighbour_counts() {
        assert_eq!(neighbours3(Point3::zero()).count(), 26);
        assert_eq!(neighbours4(Point4::zero()).count(), 80);
        assert!(neighbours3(Point3::zero()).all(|p| p != Point3::zero()));
    }

    #[test]
    fn test_first_cycle() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.active.len(), 5);
        let initial: HashSet<_> = solver
            .active
            .iter()
            .map(|p| Point3::new(p.x, p.y, 0))
            .collect();
        assert_eq!(cycle(&initial, neighbours3).len(), 11);
    }

    #[test]
    fn test_part1() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part1().unwrap(), "112");
    }

    #[test]
    fn test_part2() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part2().unwrap(), "848");
    }
}
