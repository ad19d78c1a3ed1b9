use aoc_solver::{DaySolver, Elements, ParseError, SolveError};
use aoc_solver_macros::{AutoRegisterSolver, RawValueEnum};

use crate::utils::matrix::{Matrix2, Position};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 11, tags = ["grid", "simulation"])]
pub struct Solver {
    layout: Matrix2<Seat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
pub enum Seat {
    #[raw = '.']
    Floor,
    #[raw = 'L']
    Empty,
    #[raw = '#']
    Occupied,
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One step from `position`, or `None` when it leaves the grid
fn step(
    layout: &Matrix2<Seat>,
    (row, column): Position,
    (dr, dc): (isize, isize),
) -> Option<Position> {
    let next = (row.checked_add_signed(dr)?, column.checked_add_signed(dc)?);
    layout.contains(next).then_some(next)
}

/// Occupied seats among the eight adjacent squares
fn adjacent_occupied(layout: &Matrix2<Seat>, position: Position) -> usize {
    DIRECTIONS
        .iter()
        .filter_map(|&direction| step(layout, position, direction))
        .filter(|&next| layout[next] == Seat::Occupied)
        .count()
}

/// Occupied seats at the first seat visible in each of the eight directions
fn visible_occupied(layout: &Matrix2<Seat>, position: Position) -> usize {
    DIRECTIONS
        .iter()
        .filter_map(|&direction| {
            let mut current = position;
            loop {
                current = step(layout, current, direction)?;
                match layout[current] {
                    Seat::Floor => continue,
                    seat => return Some(seat),
                }
            }
        })
        .filter(|&seat| seat == Seat::Occupied)
        .count()
}

/// Apply the seating rules until nothing changes, then count occupied seats
fn settle(
    initial: &Matrix2<Seat>,
    occupied_around: fn(&Matrix2<Seat>, Position) -> usize,
    tolerance: usize,
) -> usize {
    let mut layout = initial.clone();
    let mut rounds = 0;
    loop {
        let next = layout.positions().fold(layout.clone(), |mut next, position| {
            next[position] = match layout[position] {
                Seat::Empty if occupied_around(&layout, position) == 0 => Seat::Occupied,
                Seat::Occupied if occupied_around(&layout, position) >= tolerance => Seat::Empty,
                seat => seat,
            };
            next
        });
        if next == layout {
            tracing::debug!(rounds, "seating settled");
            return layout.iter().filter(|&&seat| seat == Seat::Occupied).count();
        }
        layout = next;
        rounds += 1;
    }
}

impl DaySolver for Solver {
    type Input = Elements<Vec<Seat>>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        let layout = Matrix2::from_rows(input.into_inner())?;
        Ok(Self { layout })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        Ok(settle(&self.layout, adjacent_occupied, 4).to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        Ok(settle(&self.layout, visible_occupied, 5).to_string())
    }
}
