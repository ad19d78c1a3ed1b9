//! Row-major 2D matrix with rigid geometric transforms

use aoc_solver::ParseError;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Errors raised when the element layout is not rectangular
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Row length must be greater than zero")]
    InvalidDimension,
    #[error("{count} elements cannot be split into rows of {row_length}")]
    InvalidElementCount { count: usize, row_length: usize },
    #[error("Row {row} has {found} elements, expected {expected}")]
    NotGridShaped {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Matrix needs at least one row")]
    Empty,
}

impl From<MatrixError> for ParseError {
    fn from(err: MatrixError) -> Self {
        ParseError::Malformed(err.to_string())
    }
}

/// A `(row, column)` position
pub type Position = (usize, usize);

/// A rectangular grid stored as one flat row-major vector
///
/// Every row has exactly `row_length` elements and there is at least one row. Position
/// `(row, column)` lives at index `row * row_length + column`.
///
/// # Example
///
/// ```
/// use aoc_solutions::utils::matrix::Matrix2;
///
/// let m = Matrix2::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
/// let rotated = m.rotated_clockwise();
/// assert_eq!(rotated.row(0), &['c', 'a']);
/// assert_eq!(rotated.row(1), &['d', 'b']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix2<T> {
    elements: Vec<T>,
    row_length: usize,
}

impl<T> Matrix2<T> {
    /// Build from a flat row-major vector
    ///
    /// Fails on a zero row length, an empty vector, or a length that is not a multiple of
    /// the row length.
    pub fn from_vec(elements: Vec<T>, row_length: usize) -> Result<Self, MatrixError> {
        if row_length == 0 {
            return Err(MatrixError::InvalidDimension);
        }
        if elements.is_empty() {
            return Err(MatrixError::Empty);
        }
        if elements.len() % row_length != 0 {
            return Err(MatrixError::InvalidElementCount {
                count: elements.len(),
                row_length,
            });
        }
        Ok(Self {
            elements,
            row_length,
        })
    }

    /// Build from nested rows, which must all have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let expected = rows.first().ok_or(MatrixError::Empty)?.len();
        if expected == 0 {
            return Err(MatrixError::InvalidDimension);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(MatrixError::NotGridShaped {
                row,
                expected,
                found,
            });
        }
        Ok(Self {
            elements: rows.into_iter().flatten().collect(),
            row_length: expected,
        })
    }

    pub fn row_length(&self) -> usize {
        self.row_length
    }

    pub fn row_count(&self) -> usize {
        self.elements.len() / self.row_length
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Linear index of a position; does not check bounds
    #[inline]
    pub fn index_of(&self, (row, column): Position) -> usize {
        row * self.row_length + column
    }

    /// Position of a linear index
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        (index / self.row_length, index % self.row_length)
    }

    pub fn contains(&self, (row, column): Position) -> bool {
        row < self.row_count() && column < self.row_length
    }

    /// Checked access
    pub fn get(&self, position: Position) -> Option<&T> {
        if self.contains(position) {
            self.elements.get(self.index_of(position))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        if self.contains(position) {
            let index = self.index_of(position);
            self.elements.get_mut(index)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.row_length;
        &self.elements[start..start + self.row_length]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.elements.chunks_exact(self.row_length)
    }

    /// Strided view of one column, top to bottom
    pub fn column(&self, column: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(column < self.row_length, "column {column} out of range");
        self.elements.iter().skip(column).step_by(self.row_length)
    }

    pub fn columns(&self) -> impl Iterator<Item = impl Iterator<Item = &T> + '_> + '_ {
        (0..self.row_length).map(move |column| self.column(column))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let row_length = self.row_length;
        (0..self.elements.len()).map(move |i| (i / row_length, i % row_length))
    }

    /// Elements together with their positions, in row-major order
    pub fn indexed(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions().zip(self.elements.iter())
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix2<U> {
        Matrix2 {
            elements: self.elements.iter().map(f).collect(),
            row_length: self.row_length,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> Matrix2<T> {
    fn gather(&self, row_length: usize, positions: impl Iterator<Item = Position>) -> Self {
        Matrix2 {
            elements: positions.map(|p| self[p].clone()).collect(),
            row_length,
        }
    }

    /// Columns read bottom-to-top become rows
    pub fn rotated_clockwise(&self) -> Self {
        let rows = self.row_count();
        let positions = (0..self.row_length)
            .flat_map(move |column| (0..rows).rev().map(move |row| (row, column)));
        self.gather(rows, positions)
    }

    /// Columns from last to first, read top-to-bottom, become rows
    pub fn rotated_counter_clockwise(&self) -> Self {
        let rows = self.row_count();
        let positions = (0..self.row_length)
            .rev()
            .flat_map(move |column| (0..rows).map(move |row| (row, column)));
        self.gather(rows, positions)
    }

    /// Each row reversed, and the row order reversed
    pub fn rotated_180(&self) -> Self {
        Matrix2 {
            elements: self.elements.iter().rev().cloned().collect(),
            row_length: self.row_length,
        }
    }

    /// Each row reversed
    pub fn flipped_horizontally(&self) -> Self {
        Matrix2 {
            elements: self
                .rows()
                .flat_map(|row| row.iter().rev().cloned())
                .collect(),
            row_length: self.row_length,
        }
    }

    /// Row order reversed
    pub fn flipped_vertically(&self) -> Self {
        Matrix2 {
            elements: self.rows().rev().flatten().cloned().collect(),
            row_length: self.row_length,
        }
    }

    /// All 8 rigid orientations: the four rotations, then the same four flipped
    pub fn orientations(&self) -> [Self; 8] {
        let quarter = self.rotated_clockwise();
        let half = self.rotated_180();
        let three_quarters = self.rotated_counter_clockwise();
        let flipped = [
            self.flipped_horizontally(),
            quarter.flipped_horizontally(),
            half.flipped_horizontally(),
            three_quarters.flipped_horizontally(),
        ];
        let [f0, f1, f2, f3] = flipped;
        [self.clone(), quarter, half, three_quarters, f0, f1, f2, f3]
    }
}

impl<T: Display> Matrix2<T> {
    /// Render with the given separators between columns and rows
    pub fn render(&self, column_separator: &str, row_separator: &str) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(column_separator)
            })
            .collect::<Vec<_>>()
            .join(row_separator)
    }
}

impl<T: Display> Display for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("", "\n"))
    }
}

impl<T> Index<Position> for Matrix2<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        assert!(position.1 < self.row_length, "column {} out of range", position.1);
        &self.elements[self.index_of(position)]
    }
}

impl<T> IndexMut<Position> for Matrix2<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        assert!(position.1 < self.row_length, "column {} out of range", position.1);
        let index = self.index_of(position);
        &mut self.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a Matrix2<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn letters() -> Matrix2<char> {
        Matrix2::from_rows(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]).unwrap()
    }

    fn to_rows<T: Clone>(m: &Matrix2<T>) -> Vec<Vec<T>> {
        m.rows().map(<[T]>::to_vec).collect()
    }

    #[test]
    fn test_square_rotation() {
        let m = Matrix2::from_rows(vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();
        assert_eq!(
            to_rows(&m.rotated_clockwise()),
            vec![vec!["c", "a"], vec!["d", "b"]]
        );
        assert_eq!(
            to_rows(&m.rotated_counter_clockwise()),
            vec![vec!["b", "d"], vec!["a", "c"]]
        );
    }

    #[test]
    fn test_rectangular_rotation_swaps_shape() {
        let rotated = letters().rotated_clockwise();
        assert_eq!(rotated.row_count(), 3);
        assert_eq!(rotated.row_length(), 2);
        assert_eq!(to_rows(&rotated), vec![vec!['d', 'a'], vec!['e', 'b'], vec!['f', 'c']]);
    }

    #[test]
    fn test_flips() {
        let m = letters();
        assert_eq!(m.flipped_horizontally().to_string(), "cba\nfed");
        assert_eq!(m.flipped_vertically().to_string(), "def\nabc");
        assert_eq!(m.rotated_180().to_string(), "fed\ncba");
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(Matrix2::from_vec(vec![1, 2, 3], 0), Err(MatrixError::InvalidDimension));
        assert_eq!(
            Matrix2::from_vec(vec![1, 2, 3], 2),
            Err(MatrixError::InvalidElementCount {
                count: 3,
                row_length: 2
            })
        );
        assert_eq!(Matrix2::<u8>::from_vec(vec![], 2), Err(MatrixError::Empty));
        assert_eq!(Matrix2::<u8>::from_rows(vec![]), Err(MatrixError::Empty));
        assert_eq!(
            Matrix2::<u8>::from_rows(vec![vec![]]),
            Err(MatrixError::InvalidDimension)
        );
        assert_eq!(
            Matrix2::from_rows(vec![vec![1, 2], vec![3]]),
            Err(MatrixError::NotGridShaped {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_matrix_error_is_structural_parse_error() {
        let err: ParseError = MatrixError::Empty.into();
        assert_eq!(err.kind(), aoc_solver::ParseErrorKind::Structure);
    }

    #[test]
    fn test_indexing_and_positions() {
        let mut m = letters();
        assert_eq!(m[(1, 2)], 'f');
        assert_eq!(m.index_of((1, 2)), 5);
        assert_eq!(m.position_of(4), (1, 1));
        assert_eq!(m.get((2, 0)), None);
        assert_eq!(m.get((0, 3)), None);
        m[(0, 0)] = 'z';
        assert_eq!(m.row(0), &['z', 'b', 'c']);
        assert_eq!(m.column(1).copied().collect::<String>(), "be");
        assert_eq!(m.columns().count(), 3);
        assert_eq!(m.positions().last(), Some((1, 2)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_column_traps() {
        let m = letters();
        let _value = m[(0, 3)];
    }

    #[test]
    fn test_orientations_are_distinct_for_asymmetric_grid() {
        let m = Matrix2::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let orientations = m.orientations();
        for (i, a) in orientations.iter().enumerate() {
            for b in &orientations[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_render() {
        let m = Matrix2::from_vec(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(m.render(" ", "; "), "1 2; 3 4");
    }

    fn grid() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, columns)| {
            prop::collection::vec(prop::collection::vec(any::<u8>(), columns), rows)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_rows_inverse(rows in grid()) {
            let m = Matrix2::from_rows(rows.clone()).unwrap();
            prop_assert_eq!(to_rows(&m), rows);
        }

        #[test]
        fn prop_rotation_inverse(rows in grid()) {
            let m = Matrix2::from_rows(rows).unwrap();
            prop_assert_eq!(m.rotated_clockwise().rotated_counter_clockwise(), m.clone());
            prop_assert_eq!(m.rotated_counter_clockwise().rotated_clockwise(), m);
        }

        #[test]
        fn prop_half_turn_is_both_flips(rows in grid()) {
            let m = Matrix2::from_rows(rows).unwrap();
            prop_assert_eq!(m.rotated_180(), m.flipped_horizontally().flipped_vertically());
            prop_assert_eq!(m.rotated_180(), m.rotated_clockwise().rotated_clockwise());
        }

        #[test]
        fn prop_group_closure(rows in grid()) {
            let m = Matrix2::from_rows(rows).unwrap();
            let four = m
                .rotated_clockwise()
                .rotated_clockwise()
                .rotated_clockwise()
                .rotated_clockwise();
            prop_assert_eq!(&four, &m);
            prop_assert_eq!(m.flipped_horizontally().flipped_horizontally(), m.clone());
            prop_assert_eq!(m.flipped_vertically().flipped_vertically(), m);
        }
    }
}
