//! Parse error types

use crate::span::Span;
use thiserror::Error;

/// Parse error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that does not match any of the complex literal shapes
    #[error("invalid number literal '{literal}' at {span:?}")]
    InvalidNumber { literal: String, span: Span },

    /// A variable or equation count that is not a non-negative integer
    #[error("invalid {what} '{literal}' at {span:?}, expected a non-negative integer")]
    InvalidCount {
        what: &'static str,
        literal: String,
        span: Span,
    },

    /// Input ended before every expected token was read
    #[error("unexpected end of input at {span:?}, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    /// Lexer error
    #[error("unrecognized token at {span:?}")]
    LexerError { span: Span },
}

impl ParseError {
    /// Get the span of the error
    pub fn span(&self) -> &Span {
        match self {
            ParseError::InvalidNumber { span, .. } => span,
            ParseError::InvalidCount { span, .. } => span,
            ParseError::UnexpectedEof { span, .. } => span,
            ParseError::LexerError { span } => span,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(literal: impl Into<String>, span: Span) -> Self {
        ParseError::InvalidNumber {
            literal: literal.into(),
            span,
        }
    }

    /// Create an unexpected EOF error
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedEof {
            expected: expected.into(),
            span,
        }
    }

    /// Format error with source context
    ///
    /// Returns a string showing the source line with an error marker.
    pub fn format_with_context(&self, source: &str) -> String {
        let span = self.span();
        let lines: Vec<&str> = source.lines().collect();
        let line_idx = span.start_line.saturating_sub(1);

        // Offsets-only spans and EOF past the last line have nothing to show.
        if span.start_line == 0 || line_idx >= lines.len() {
            return String::new();
        }

        let line = lines[line_idx];
        let col = span.start_column.saturating_sub(1);
        let len = if span.start_line == span.end_line {
            span.end_column.saturating_sub(span.start_column).max(1)
        } else {
            1
        };

        let spaces = " ".repeat(col);
        let marker = "^".repeat(len.min(line.len().saturating_sub(col)).max(1));

        format!(
            "  {} | {}\n  {} | {}{}",
            span.start_line,
            line,
            " ".repeat(span.start_line.to_string().len()),
            spaces,
            marker
        )
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
