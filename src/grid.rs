use std::ops::{AddAssign, Index, SubAssign};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::GridError;
use crate::query::RangeQuery;

/// A `(row, col)` coordinate into a grid.
pub type GridPos = (usize, usize);

/// A rectangular numeric matrix, immutable once built.
///
/// Elements are stored flat in row-major order and addressed with
/// `(row, col)` tuples. Rows and columns are both at least 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Build a grid from borrowed rows, copying the contents.
    ///
    /// Fails with [`GridError::InvalidShape`] if the input has no rows,
    /// no columns, or rows of unequal length.
    pub fn from_rows(matrix: &[Vec<T>]) -> Result<Self, GridError> {
        if matrix.is_empty() || matrix[0].is_empty() {
            return Err(GridError::InvalidShape);
        }
        if !matrix.iter().map(|row| row.len()).all_equal() {
            return Err(GridError::InvalidShape);
        }
        Ok(Self {
            rows: matrix.len(),
            cols: matrix[0].len(),
            data: matrix.iter().flat_map(|row| row.iter().copied()).collect(),
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All elements in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Copy + Zero + AddAssign> Grid<T> {
    /// Running totals along each row: cell `(r, c)` holds the sum of the
    /// elements `(r, 0 ..= c)`.
    pub fn row_prefix_sums(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(self.cols) {
            let mut running = T::zero();
            for &value in row {
                running += value;
                data.push(running);
            }
        }
        Self { rows: self.rows, cols: self.cols, data }
    }

    /// Running totals down each column: cell `(r, c)` holds the sum of the
    /// elements `(0 ..= r, c)`.
    ///
    /// Applied on top of [`Grid::row_prefix_sums`] this yields the
    /// summed-area table: every cell becomes the total of the rectangle
    /// from `(0, 0)` to that cell.
    pub fn col_prefix_sums(&self) -> Self {
        let mut data = self.data.clone();
        for r in 1..self.rows {
            for c in 0..self.cols {
                let above = data[(r - 1) * self.cols + c];
                data[r * self.cols + c] += above;
            }
        }
        Self { rows: self.rows, cols: self.cols, data }
    }

    /// Guarded lookup backing the prefix-sum formulas: an absent index on
    /// either axis stands for the sum of an empty prefix and reads as zero.
    ///
    /// This is the only place that convention lives; callers pass
    /// `index.checked_sub(1)` and the formulas stay free of edge branches.
    #[inline(always)]
    pub(crate) fn value_or_zero(&self, row: Option<usize>, col: Option<usize>) -> T {
        match (row, col) {
            (Some(r), Some(c)) => self[(r, c)],
            _ => T::zero(),
        }
    }
}

impl<T: Copy + Zero + AddAssign + SubAssign> Grid<T> {
    /// Build a query for the inclusive rectangle `top_left ..= bottom_right`.
    ///
    /// Fails with [`GridError::OutOfRange`] if either corner falls outside
    /// the grid, or [`GridError::InvertedRange`] if `top_left` exceeds
    /// `bottom_right` on either axis.
    pub fn in_range(
        &self,
        top_left: GridPos,
        bottom_right: GridPos,
    ) -> Result<RangeQuery<'_, T>, GridError> {
        for (row, col) in [top_left, bottom_right] {
            if row >= self.rows || col >= self.cols {
                return Err(GridError::OutOfRange {
                    row,
                    col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        if top_left.0 > bottom_right.0 || top_left.1 > bottom_right.1 {
            return Err(GridError::InvertedRange { top_left, bottom_right });
        }
        Ok(RangeQuery::new(self, top_left, bottom_right))
    }
}

impl<T> Index<GridPos> for Grid<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (r, c): GridPos) -> &T {
        &self.data[self.cols * r + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_dimensions_and_elements() {
        let grid = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[(0, 0)], 1);
        assert_eq!(grid[(1, 2)], 6);
        assert_eq!(grid.values().sum::<i32>(), 21);
    }

    #[test]
    fn rejects_empty_and_jagged_input() {
        assert_eq!(Grid::<i32>::from_rows(&[]), Err(GridError::InvalidShape));
        assert_eq!(Grid::<i32>::from_rows(&[vec![], vec![]]), Err(GridError::InvalidShape));
        assert_eq!(
            Grid::from_rows(&[vec![1, 2], vec![3]]),
            Err(GridError::InvalidShape)
        );
    }

    #[test]
    fn construction_copies_the_input() {
        let mut rows = vec![vec![1, 2], vec![3, 4]];
        let grid = Grid::from_rows(&rows).unwrap();
        rows[0][0] = 99;
        assert_eq!(grid[(0, 0)], 1);
    }

    #[test]
    fn row_prefix_sums_accumulate_along_rows() {
        let grid = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let prefix = grid.row_prefix_sums();
        assert_eq!(prefix[(0, 0)], 1);
        assert_eq!(prefix[(0, 2)], 6);
        assert_eq!(prefix[(1, 0)], 4);
        assert_eq!(prefix[(1, 2)], 15);
    }

    #[test]
    fn col_prefix_sums_accumulate_down_columns() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let prefix = grid.col_prefix_sums();
        assert_eq!(prefix[(0, 1)], 2);
        assert_eq!(prefix[(1, 0)], 4);
        assert_eq!(prefix[(2, 1)], 12);
    }

    #[test]
    fn chained_prefix_sums_form_the_summed_area_table() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let table = grid.row_prefix_sums().col_prefix_sums();
        assert_eq!(table[(0, 0)], 1);
        assert_eq!(table[(0, 1)], 3);
        assert_eq!(table[(1, 0)], 4);
        assert_eq!(table[(1, 1)], 10);
    }

    #[test]
    fn value_or_zero_treats_missing_indices_as_empty_prefix() {
        let grid = Grid::from_rows(&[vec![7, 8], vec![9, 10]]).unwrap();
        assert_eq!(grid.value_or_zero(Some(1), Some(1)), 10);
        assert_eq!(grid.value_or_zero(None, Some(1)), 0);
        assert_eq!(grid.value_or_zero(Some(1), None), 0);
        assert_eq!(grid.value_or_zero(None, None), 0);
    }

    #[test]
    fn in_range_rejects_corners_outside_the_grid() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert!(matches!(
            grid.in_range((0, 0), (2, 1)),
            Err(GridError::OutOfRange { row: 2, col: 1, rows: 2, cols: 2 })
        ));
        assert!(matches!(
            grid.in_range((0, 5), (1, 1)),
            Err(GridError::OutOfRange { col: 5, .. })
        ));
    }

    #[test]
    fn in_range_rejects_inverted_corners() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert!(matches!(
            grid.in_range((1, 0), (0, 1)),
            Err(GridError::InvertedRange { .. })
        ));
        assert!(matches!(
            grid.in_range((0, 1), (1, 0)),
            Err(GridError::InvertedRange { .. })
        ));
    }
}
