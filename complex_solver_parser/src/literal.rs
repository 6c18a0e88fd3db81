//! Complex number literals
//!
//! A literal has exactly one of three shapes:
//!
//! - real: `[+-]? digits ('.' digits?)?`, e.g. `3`, `-2.5`
//! - imaginary: `[+-]? digits? ('.' digits?)? 'i'`, e.g. `4i`, `-i`, `.5i`
//! - combined: a real literal immediately followed by a signed imaginary
//!   literal, e.g. `3+4i`, `5-i`
//!
//! The real part of a combined literal always ends in a digit, so the split
//! point is the first digit that is directly followed by `+` or `-`.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::span::Span;

/// Which of the three literal forms a token has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralShape {
    Real,
    Imaginary,
    Combined,
}

/// Parsed value of a complex literal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexLiteral {
    pub real: f64,
    pub imaginary: f64,
}

impl ComplexLiteral {
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Parse a standalone literal (the span covers the text itself)
    pub fn parse(text: &str) -> ParseResult<Self> {
        parse_literal(text, Span::from_offsets(0, text.len()))
    }
}

/// Classify `text` into one of the literal shapes, or `None` if malformed.
pub fn classify_literal(text: &str) -> Option<LiteralShape> {
    if is_imaginary(text) {
        Some(LiteralShape::Imaginary)
    } else if is_real(text) {
        Some(LiteralShape::Real)
    } else {
        split_combined(text).map(|_| LiteralShape::Combined)
    }
}

/// Parse a complex literal found at `span`.
pub fn parse_literal(text: &str, span: Span) -> ParseResult<ComplexLiteral> {
    let invalid = || ParseError::invalid_number(text, span);

    match classify_literal(text).ok_or_else(invalid)? {
        LiteralShape::Real => {
            let real = parse_float(text).ok_or_else(invalid)?;
            Ok(ComplexLiteral::new(real, 0.0))
        }
        LiteralShape::Imaginary => {
            let imaginary = parse_imaginary(text).ok_or_else(invalid)?;
            Ok(ComplexLiteral::new(0.0, imaginary))
        }
        LiteralShape::Combined => {
            let (re, im) = split_combined(text).ok_or_else(invalid)?;
            let real = parse_float(re).ok_or_else(invalid)?;
            let imaginary = parse_imaginary(im).ok_or_else(invalid)?;
            Ok(ComplexLiteral::new(real, imaginary))
        }
    }
}

fn skip_sign(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b'+' | b'-') => pos + 1,
        _ => pos,
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Scan an unsigned `digits? ('.' digits?)?` body starting at `pos`.
/// Returns the end position and the number of digits seen.
fn scan_number(bytes: &[u8], pos: usize) -> (usize, usize) {
    let int_end = skip_digits(bytes, pos);
    let mut digits = int_end - pos;
    let mut end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    (end, digits)
}

fn is_real(text: &str) -> bool {
    let bytes = text.as_bytes();
    let start = skip_sign(bytes, 0);
    let int_end = skip_digits(bytes, start);
    if int_end == start {
        return false;
    }
    let (end, _) = scan_number(bytes, start);
    end == bytes.len()
}

fn is_imaginary(text: &str) -> bool {
    let bytes = text.as_bytes();
    let Some((&b'i', body)) = bytes.split_last() else {
        return false;
    };
    let start = skip_sign(body, 0);
    let (end, digits) = scan_number(body, start);
    // A bare `.` is not a number: `.i` is rejected, `i` alone is fine.
    end == body.len() && (digits > 0 || end == start)
}

fn split_combined(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let split = bytes
        .windows(2)
        .position(|w| w[0].is_ascii_digit() && matches!(w[1], b'+' | b'-'))?
        + 1;
    let (re, im) = text.split_at(split);
    (is_real(re) && is_imaginary(im)).then_some((re, im))
}

fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Value of an imaginary literal; a bare `i` with an optional sign is ±1.
fn parse_imaginary(text: &str) -> Option<f64> {
    let body = text.strip_suffix('i')?;
    match body {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => parse_float(body),
    }
}
