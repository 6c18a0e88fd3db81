//! Errors surfaced by the solver pipeline.
//!
//! Unsolvable systems are not errors; they come back as
//! [`Solution::NoSolution`](crate::Solution::NoSolution) or
//! [`Solution::InfiniteSolutions`](crate::Solution::InfiniteSolutions).

use std::io;
use std::path::PathBuf;

use complex_solver_parser::ParseError;
use thiserror::Error;

/// Solver error type
#[derive(Debug, Error)]
pub enum SolveError {
    /// Input text could not be read as a system
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),

    /// Cell count does not match the declared shape
    #[error(
        "DimensionMismatch: a {rows}x{cols} augmented matrix needs {expected} cells, got {found}"
    )]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    /// A matrix without even the constants column
    #[error("DimensionMismatch: augmented matrix has no constants column")]
    MissingConstantsColumn,

    /// Reading the input or writing the result failed
    #[error("IOError: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON rendering failed
    #[error("JSONError: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolveError {
    /// Create an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SolveError::Io {
            path: path.into(),
            source,
        }
    }

    /// Source line with a caret marker for parse errors, empty otherwise
    pub fn format_with_context(&self, source: &str) -> String {
        match self {
            SolveError::Parse(err) => err.format_with_context(source),
            _ => String::new(),
        }
    }
}

/// Result type alias for solver operations
pub type SolveResult<T> = Result<T, SolveError>;
