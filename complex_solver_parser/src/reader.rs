//! Reader for the solver's token stream
//!
//! The input is `variables equations` followed by
//! `equations * (variables + 1)` complex literals in row-major order. Each
//! row lists the coefficients and then the constant. Tokens past the last
//! expected literal are left unread.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, SpannedToken};
use crate::literal::{parse_literal, ComplexLiteral};

/// A system as read from the input, before any solving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInput {
    /// Number of unknowns
    pub variables: usize,
    /// Number of equations (rows)
    pub equations: usize,
    /// Row-major augmented matrix, `equations * (variables + 1)` cells
    pub cells: Vec<ComplexLiteral>,
}

impl SystemInput {
    /// Columns of the augmented matrix (variables plus the constants column)
    pub fn cols(&self) -> usize {
        self.variables + 1
    }
}

/// Read a complete system from source text
pub fn parse_input(source: &str) -> ParseResult<SystemInput> {
    let mut lexer = Lexer::new(source);

    let variables = read_count(&mut lexer, "variable count")?;
    let equations = read_count(&mut lexer, "equation count")?;

    let too_large = || ParseError::InvalidCount {
        what: "system size",
        literal: format!("{equations}x{variables}"),
        span: lexer.eof_span(),
    };
    let cols = variables.checked_add(1).ok_or_else(too_large)?;
    let expected = equations.checked_mul(cols).ok_or_else(too_large)?;

    // Every literal takes at least one byte, so the source length bounds the
    // allocation even when the header claims an enormous system.
    let mut cells = Vec::with_capacity(expected.min(source.len()));
    for index in 0..expected {
        let token = next_word(&mut lexer, || {
            format!(
                "coefficient {} of {} (row {}, column {})",
                index + 1,
                expected,
                index / cols + 1,
                index % cols + 1
            )
        })?;
        cells.push(parse_literal(token.text, token.span)?);
    }

    Ok(SystemInput {
        variables,
        equations,
        cells,
    })
}

fn next_word<'a>(
    lexer: &mut Lexer<'a>,
    expected: impl FnOnce() -> String,
) -> ParseResult<SpannedToken<'a>> {
    match lexer.next_token() {
        Some(token) => token,
        None => Err(ParseError::unexpected_eof(expected(), lexer.eof_span())),
    }
}

fn read_count(lexer: &mut Lexer<'_>, what: &'static str) -> ParseResult<usize> {
    let token = next_word(lexer, || what.to_string())?;
    // `usize::from_str` accepts a leading `+`, matching the literal grammar.
    token
        .text
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidCount {
            what,
            literal: token.text.to_string(),
            span: token.span,
        })
}
