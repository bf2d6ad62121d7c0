use std::ops::{AddAssign, SubAssign};

use num_traits::Zero;

use crate::grid::{Grid, GridPos};

/// A single range-sum query over an inclusive rectangle of a [`Grid`].
///
/// Construction precomputes the row-prefix and summed-area tables, after
/// which any of the three strategies can be asked for the answer. All
/// three return the same sum; they differ only in how much of the
/// precomputed state they exploit.
pub struct RangeQuery<'g, T> {
    grid: &'g Grid<T>,
    top_left: GridPos,
    bottom_right: GridPos,
    row_prefix: Grid<T>,
    full_prefix: Grid<T>,
}

impl<'g, T: Copy + Zero + AddAssign + SubAssign> RangeQuery<'g, T> {
    /// Corners must already be validated against the grid; [`Grid::in_range`]
    /// is the only constructor path.
    pub(crate) fn new(grid: &'g Grid<T>, top_left: GridPos, bottom_right: GridPos) -> Self {
        let row_prefix = grid.row_prefix_sums();
        let full_prefix = row_prefix.col_prefix_sums();
        Self { grid, top_left, bottom_right, row_prefix, full_prefix }
    }

    /// O(area of the rectangle). Walks the raw grid; needs no precomputed
    /// state and serves as the oracle for the other two strategies.
    pub fn brute_force_solution(&self) -> T {
        let mut sum = T::zero();
        for row in self.top_left.0..=self.bottom_right.0 {
            for col in self.top_left.1..=self.bottom_right.1 {
                sum += self.grid[(row, col)];
            }
        }
        sum
    }

    /// O(rows of the rectangle). Each row's contribution is a 1-D range
    /// sum on that row's running totals: the prefix at the right edge
    /// minus the prefix just left of the rectangle.
    pub fn better_solution(&self) -> T {
        let left = self.top_left.1.checked_sub(1);
        let mut sum = T::zero();
        for row in self.top_left.0..=self.bottom_right.0 {
            sum += self.row_prefix[(row, self.bottom_right.1)];
            sum -= self.row_prefix.value_or_zero(Some(row), left);
        }
        sum
    }

    /// O(1). Inclusion-exclusion on the summed-area table: start from the
    /// total down to the bottom-right corner, remove the strip above the
    /// rectangle and the strip to its left, then add back their overlap,
    /// which was removed twice.
    pub fn optimal_solution(&self) -> T {
        let above = self.top_left.0.checked_sub(1);
        let left = self.top_left.1.checked_sub(1);
        let (br_row, br_col) = self.bottom_right;

        let mut sum = self.full_prefix[(br_row, br_col)];
        sum -= self.full_prefix.value_or_zero(above, Some(br_col));
        sum -= self.full_prefix.value_or_zero(Some(br_row), left);
        sum += self.full_prefix.value_or_zero(above, left);
        sum
    }
}
