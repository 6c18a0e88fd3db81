//! Lexer for solver input
//!
//! Wraps the logos-generated lexer with span tracking and one-token
//! lookahead.

use logos::Logos;

use crate::error::ParseError;
use crate::span::{SourceMap, Span};
use crate::token::Token;

/// A token with its span
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> SpannedToken<'a> {
    pub fn new(token: Token, span: Span, text: &'a str) -> Self {
        Self { token, span, text }
    }
}

/// Input lexer
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    source_map: SourceMap,
    /// Peeked token (for lookahead)
    peeked: Option<Result<SpannedToken<'a>, ParseError>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            source_map: SourceMap::new(source),
            peeked: None,
        }
    }

    /// Get the source text
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the source map
    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Span pointing just past the last byte of the source
    pub fn eof_span(&self) -> Span {
        self.source_map.eof_span(self.source.len())
    }

    /// Peek at the next token without consuming it
    pub fn peek(&mut self) -> Option<&Result<SpannedToken<'a>, ParseError>> {
        if self.peeked.is_none() {
            self.peeked = self.next_token_internal();
        }
        self.peeked.as_ref()
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<Result<SpannedToken<'a>, ParseError>> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.next_token_internal()
    }

    fn next_token_internal(&mut self) -> Option<Result<SpannedToken<'a>, ParseError>> {
        let result = self.inner.next()?;
        let range = self.inner.span();
        let span = self.source_map.span(range.start, range.end);

        match result {
            Ok(token) => Some(Ok(SpannedToken::new(token, span, self.inner.slice()))),
            Err(()) => Some(Err(ParseError::LexerError { span })),
        }
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.inner.span().end)
            .field("peeked", &self.peeked)
            .finish_non_exhaustive()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<SpannedToken<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize source text into a vector of spanned tokens
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken<'_>, ParseError>> {
    Lexer::new(source).collect()
}
