// Prevent accidental debug output in library code.
// CLI binaries (bin/) may use eprintln!() for user-facing error messages.
#![deny(clippy::print_stderr)]

//! complex_solver
//!
//! Solves systems of linear equations with complex coefficients by Gaussian
//! elimination with full pivoting, and reports either the unique solution
//! vector or one of the verdicts "No solutions" / "Infinitely many
//! solutions".
//!
//! # Example
//!
//! ```
//! use complex_solver::{solve_source, Complex, Solution};
//!
//! // x + y = 2, 2x - y = 1
//! let solution = solve_source("2 2\n1 1 2\n2 -1 1\n").unwrap();
//! assert_eq!(solution, Solution::Unique(vec![Complex::ONE, Complex::ONE]));
//! assert_eq!(solution.to_string(), "1.0\n1.0\n");
//! ```

// Core modules
pub mod complex;
pub mod error;
pub mod formatting;
pub mod system;

// Command-line configuration and the read/solve/write pipeline
pub mod config;
pub mod pipeline;

// Debug tracing (debug builds only)
pub(crate) mod trace;

pub use complex::Complex;
pub use config::{Command, ConfigError, OutputFormat, RunConfig, TRACE_ENV};
pub use error::{SolveError, SolveResult};
pub use formatting::format_float;
pub use pipeline::{build_system, render, run, solve_file, solve_source};
pub use system::{AugmentedSystem, Solution};

// The front end is re-exported so callers need only one dependency.
pub use complex_solver_parser as parser;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
