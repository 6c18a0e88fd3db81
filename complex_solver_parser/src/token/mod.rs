//! Token definitions for the solver input lexer
//!
//! The input is a plain whitespace-delimited stream, so there is exactly one
//! token kind. Numeric meaning is assigned later by the literal classifier
//! and the input reader.


use logos::Logos;

/// Input tokens
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// A maximal run of non-whitespace characters
    #[regex(r"[^\s]+")]
    Word,
}
