//! Forward elimination and back-substitution.

use super::AugmentedSystem;
use crate::complex::Complex;
use crate::trace::trace;

impl AugmentedSystem {
    /// Reduce the grid to row-echelon form with a leading one in every pivot
    /// row. Stops at the first step with no non-zero pivot left.
    pub(super) fn forward_eliminate(&mut self) {
        let steps = self.rows.min(self.variable_count());

        for k in 0..steps {
            let Some((row, col)) = self.find_pivot(k) else {
                trace!("step {k}: no pivot left, rank {k}");
                break;
            };
            trace!("step {k}: pivot {} at ({row}, {col})", self.cell(row, col));

            self.bring_to_diagonal(k, row, col);
            self.normalize_pivot_row(k);
            self.eliminate_below(k);
        }
    }

    /// Divide row `k` by its diagonal cell, constants included.
    fn normalize_pivot_row(&mut self, k: usize) {
        let pivot = self.cell(k, k);
        for col in k + 1..self.cols {
            let cell = self.cell_mut(k, col);
            *cell = cell.divide(pivot);
        }
        *self.cell_mut(k, k) = Complex::ONE;
    }

    /// Zero column `k` in every row below the pivot row.
    fn eliminate_below(&mut self, k: usize) {
        for row in k + 1..self.rows {
            let factor = self.cell(row, k);
            if factor.is_zero() {
                continue;
            }
            for col in k + 1..self.cols {
                let delta = factor.multiply(self.cell(k, col));
                *self.cell_mut(row, col) -= delta;
            }
            *self.cell_mut(row, k) = Complex::ZERO;
        }
    }

    /// Clear the coefficients above each pivot, bottom-up, so the constants
    /// column holds the solution.
    ///
    /// Only valid once classification found a unique solution, which
    /// guarantees a pivot at every diagonal position.
    pub(super) fn back_substitute(&mut self) {
        let constants = self.constants_col();
        debug_assert!(self.rows >= self.variable_count());

        for row in (1..self.variable_count()).rev() {
            let value = self.constant(row);
            for above in 0..row {
                let delta = self.cell(above, row).multiply(value);
                *self.cell_mut(above, constants) -= delta;
                *self.cell_mut(above, row) = Complex::ZERO;
            }
        }
    }
}
