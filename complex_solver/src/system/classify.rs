//! Solvability classification of a reduced grid.

use super::{AugmentedSystem, Solution};

impl AugmentedSystem {
    /// Verdict for a grid in row-echelon form, or `None` when the solution
    /// is unique. Reads the grid only.
    pub fn classify(&self) -> Option<Solution> {
        if self.is_inconsistent() {
            Some(Solution::NoSolution)
        } else if self.is_underdetermined() {
            Some(Solution::InfiniteSolutions)
        } else {
            None
        }
    }

    /// The last row with a non-zero constant reads `0 = c`.
    fn is_inconsistent(&self) -> bool {
        (0..self.rows)
            .rev()
            .find(|&row| !self.constant(row).is_zero())
            .is_some_and(|row| self.coefficients(row).iter().all(|c| c.is_zero()))
    }

    /// Fewer significant equations than variables.
    fn is_underdetermined(&self) -> bool {
        self.significant_equations() < self.variable_count()
    }

    /// Rows with at least one non-zero coefficient
    pub fn significant_equations(&self) -> usize {
        (0..self.rows)
            .filter(|&row| self.coefficients(row).iter().any(|c| !c.is_zero()))
            .count()
    }
}
