//! Pivot search and row/column swaps.

use super::AugmentedSystem;
use crate::trace::trace;

impl AugmentedSystem {
    /// Find a non-zero pivot for diagonal step `k`.
    ///
    /// Search order: the diagonal cell, then column `k` below it, then row
    /// `k` to the right (constants excluded), then the rest of the remaining
    /// sub-matrix row by row. `None` means the remaining coefficients are
    /// all zero.
    pub(super) fn find_pivot(&self, k: usize) -> Option<(usize, usize)> {
        let rows = self.rows;
        let vars = self.variable_count();

        let below = (k..rows).map(move |row| (row, k));
        let right = (k + 1..vars).map(move |col| (k, col));
        let rest = (k + 1..rows).flat_map(move |row| (k + 1..vars).map(move |col| (row, col)));

        below
            .chain(right)
            .chain(rest)
            .find(|&(row, col)| !self.cell(row, col).is_zero())
    }

    /// Move the cell at `(row, col)` onto the diagonal `(k, k)`.
    pub(super) fn bring_to_diagonal(&mut self, k: usize, row: usize, col: usize) {
        if row != k {
            trace!("step {k}: swap rows {k} and {row}");
            self.swap_rows(k, row);
        }
        if col != k {
            trace!("step {k}: swap columns {k} and {col}");
            self.swap_columns(k, col);
        }
    }

    pub(super) fn swap_rows(&mut self, a: usize, b: usize) {
        for col in 0..self.cols {
            let (i, j) = (self.index(a, col), self.index(b, col));
            self.cells.swap(i, j);
        }
    }

    /// Swap two variable columns across every row and record the swap.
    pub(super) fn swap_columns(&mut self, a: usize, b: usize) {
        for row in 0..self.rows {
            let (i, j) = (self.index(row, a), self.index(row, b));
            self.cells.swap(i, j);
        }
        self.column_order.swap(a, b);
    }
}
