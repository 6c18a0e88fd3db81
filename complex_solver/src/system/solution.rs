//! Outcome of solving a system.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::complex::Complex;

pub const NO_SOLUTIONS: &str = "No solutions";
pub const INFINITE_SOLUTIONS: &str = "Infinitely many solutions";

/// What `solve` found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Solution {
    /// One value per variable, in the caller's variable order
    Unique(Vec<Complex>),
    /// The system is inconsistent
    NoSolution,
    /// The system is under-determined
    InfiniteSolutions,
}

impl Solution {
    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique(_))
    }

    /// Solution vector, if unique
    pub fn values(&self) -> Option<&[Complex]> {
        match self {
            Solution::Unique(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for Solution {
    /// One value per line for a unique solution, the fixed verdict text
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(values) => values.iter().try_for_each(|v| writeln!(f, "{v}")),
            Solution::NoSolution => f.write_str(NO_SOLUTIONS),
            Solution::InfiniteSolutions => f.write_str(INFINITE_SOLUTIONS),
        }
    }
}
