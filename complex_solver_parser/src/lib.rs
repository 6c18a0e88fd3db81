//! complex_solver_parser
//!
//! Front end for the complex linear equation solver: splits the input into
//! whitespace-delimited tokens, classifies complex number literals, and reads
//! the `variables equations cells...` stream into a [`SystemInput`].
//!
//! # Example
//!
//! ```
//! use complex_solver_parser::{parse_input, ComplexLiteral};
//!
//! let input = parse_input("1 1\n2i 4").unwrap();
//! assert_eq!(input.variables, 1);
//! assert_eq!(input.cells[0], ComplexLiteral::new(0.0, 2.0));
//! ```

pub mod error;
pub mod lexer;
pub mod literal;
pub mod reader;
pub mod span;
pub mod token;

// Re-exports
pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, Lexer, SpannedToken};
pub use literal::{classify_literal, parse_literal, ComplexLiteral, LiteralShape};
pub use reader::{parse_input, SystemInput};
pub use span::{SourceMap, Span};
pub use token::Token;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
