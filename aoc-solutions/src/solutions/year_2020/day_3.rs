use aoc_solver::{DaySolver, Elements, ParseError, SolveError};
use aoc_solver_macros::{AutoRegisterSolver, RawValueEnum};

use crate::utils::matrix::Matrix2;
use crate::utils::seq::wrap_into;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 3, tags = ["grid"])]
pub struct Solver {
    map: Matrix2<Square>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
pub enum Square {
    #[raw = '.']
    Open,
    #[raw = '#']
    Tree,
}

impl Solver {
    /// Trees hit going `right, down` per step from the top-left corner
    ///
    /// The map repeats endlessly to the right.
    fn trees_on_slope(&self, right: usize, down: usize) -> usize {
        (0..self.map.row_count())
            .step_by(down)
            .enumerate()
            .filter(|&(step, row)| {
                let column = wrap_into(step * right, 0..self.map.row_length());
                self.map[(row, column)] == Square::Tree
            })
            .count()
    }
}

impl DaySolver for Solver {
    type Input = Elements<Vec<Square>>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        let map = Matrix2::from_rows(input.into_inner())?;
        Ok(Self { map })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        Ok(self.trees_on_slope(3, 1).to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        let product: usize = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)]
            .into_iter()
            .map(|(right, down)| self.trees_on_slope(right, down))
            .product();
        Ok(product.to_string())
    }
}
