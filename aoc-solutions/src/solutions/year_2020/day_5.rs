use aoc_solver::{Cursor, DaySolver, Elements, ParseError, Parseable, SolveError};
use aoc_solver_macros::{AutoRegisterSolver, RawValueEnum};

use crate::utils::seq::range_by_key;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 5, tags = ["binary"])]
pub struct Solver {
    seats: Vec<Seat>,
}

/// A boarding pass, `FBFBBFFRLR`, decoded to its ten-bit seat id
///
/// The seven row letters are the high bits and the three column letters the low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    id: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
enum RowHalf {
    #[raw = 'F']
    Front,
    #[raw = 'B']
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
enum ColumnHalf {
    #[raw = 'L']
    Left,
    #[raw = 'R']
    Right,
}

const ROW_BITS: std::ops::Range<u16> = 3..10;
const COLUMN_BITS: std::ops::Range<u16> = 0..3;

impl Seat {
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn row(&self) -> u16 {
        self.id >> COLUMN_BITS.end
    }

    pub fn column(&self) -> u16 {
        self.id & ((1 << COLUMN_BITS.end) - 1)
    }

    fn bit(&self, position: u16) -> bool {
        (self.id >> position) & 1 == 1
    }
}

impl Parseable for Seat {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let mut id = 0;
        for position in ROW_BITS.rev() {
            if cursor.parse::<RowHalf>()? == RowHalf::Back {
                id |= 1 << position;
            }
        }
        for position in COLUMN_BITS.rev() {
            if cursor.parse::<ColumnHalf>()? == ColumnHalf::Right {
                id |= 1 << position;
            }
        }
        Ok(Self { id })
    }

    fn render(&self) -> String {
        let row = ROW_BITS.rev().map(|position| {
            let half = if self.bit(position) { RowHalf::Back } else { RowHalf::Front };
            half.render()
        });
        let column = COLUMN_BITS.rev().map(|position| {
            let half = if self.bit(position) { ColumnHalf::Right } else { ColumnHalf::Left };
            half.render()
        });
        row.chain(column).collect()
    }
}

impl DaySolver for Solver {
    type Input = Elements<Seat>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Self {
            seats: input.into_inner(),
        })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        self.seats
            .iter()
            .map(Seat::id)
            .max()
            .map(|id| id.to_string())
            .ok_or_else(|| SolveError::NoSolution("no boarding passes".to_string()))
    }

    /// The only free seat whose two neighbours are both taken
    fn solve_part2(&self) -> Result<String, SolveError> {
        let taken: std::collections::HashSet<u16> = self.seats.iter().map(Seat::id).collect();
        let range = range_by_key(&self.seats, Seat::id)
            .ok_or_else(|| SolveError::NoSolution("no boarding passes".to_string()))?;
        range
            .filter(|id| !taken.contains(id))
            .find(|&id| taken.contains(&(id - 1)) && taken.contains(&(id + 1)))
            .map(|id| id.to_string())
            .ok_or_else(|| {
                SolveError::NoSolution("every seat between the passes is taken".to_string())
            })
    }
}
