//! Augmented-matrix solver.
//!
//! `solve` runs three phases over the grid in place:
//!
//! 1. forward elimination with full pivoting (`eliminate`)
//! 2. solvability classification (`classify`)
//! 3. back-substitution (`eliminate`)
//!
//! Column swaps change which variable a column holds, so the grid carries a
//! `column_order` record and the solution vector is reported in the
//! caller's original variable order.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod classify;
mod eliminate;
mod pivot;
mod solution;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

use std::fmt;

use complex_solver_parser::SystemInput;

use crate::complex::Complex;
use crate::error::{SolveError, SolveResult};
use crate::trace::trace;

pub use solution::Solution;

/// Row-major augmented matrix: `rows` equations, `cols - 1` variables and a
/// trailing constants column.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSystem {
    rows: usize,
    cols: usize,
    cells: Vec<Complex>,
    /// `column_order[c]` is the original variable whose coefficients live in column `c`.
    column_order: Vec<usize>,
}

impl AugmentedSystem {
    /// Build a system from row-major cells.
    ///
    /// `cols` counts the constants column, so a system in `n` variables has
    /// `cols == n + 1`.
    pub fn new(rows: usize, cols: usize, cells: Vec<Complex>) -> SolveResult<Self> {
        if cols == 0 {
            return Err(SolveError::MissingConstantsColumn);
        }
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if cells.len() != expected {
            return Err(SolveError::DimensionMismatch {
                rows,
                cols,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            cells,
            column_order: (0..cols - 1).collect(),
        })
    }

    /// Build a system from parsed input.
    pub fn from_input(input: SystemInput) -> SolveResult<Self> {
        let cols = input.cols();
        let cells = input.cells.into_iter().map(Complex::from).collect();
        Self::new(input.equations, cols, cells)
    }

    /// Number of equations
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, constants included
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn variable_count(&self) -> usize {
        self.cols - 1
    }

    /// Current column-to-variable mapping
    pub fn column_order(&self) -> &[usize] {
        &self.column_order
    }

    /// Cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Complex> {
        (row < self.rows && col < self.cols).then(|| self.cell(row, col))
    }

    /// Run elimination, classification and back-substitution.
    ///
    /// The grid is left in its reduced form, so calling `solve` again gives
    /// the same answer.
    pub fn solve(&mut self) -> Solution {
        self.forward_eliminate();

        if let Some(verdict) = self.classify() {
            trace!("verdict: {verdict:?}");
            return verdict;
        }

        self.back_substitute();
        let values = self.variables();
        trace!("verdict: unique, {} value(s)", values.len());
        Solution::Unique(values)
    }

    /// `solve` rendered as output text.
    pub fn solution_text(&mut self) -> String {
        self.solve().to_string()
    }

    /// Constants column mapped back to the original variable order.
    ///
    /// After a successful `solve` this is the solution vector. Variables
    /// whose column has no row are reported as zero.
    pub fn variables(&self) -> Vec<Complex> {
        let mut values = vec![Complex::ZERO; self.variable_count()];
        for (col, &variable) in self.column_order.iter().enumerate().take(self.rows) {
            values[variable] = self.constant(col);
        }
        values
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> Complex {
        self.cells[self.index(row, col)]
    }

    #[inline]
    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Complex {
        let index = self.index(row, col);
        &mut self.cells[index]
    }

    #[inline]
    fn constants_col(&self) -> usize {
        self.cols - 1
    }

    #[inline]
    fn constant(&self, row: usize) -> Complex {
        self.cell(row, self.constants_col())
    }

    /// Coefficient cells of `row` (constants column excluded)
    fn coefficients(&self, row: usize) -> &[Complex] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.variable_count()]
    }
}

impl fmt::Display for AugmentedSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let cells: Vec<String> = row.iter().map(|cell| format!("{cell:>10}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
