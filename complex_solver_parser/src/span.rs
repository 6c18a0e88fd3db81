//! Span information for source locations
//!
//! Every token read from the input keeps its byte range and line/column so
//! errors can point at the offending literal.

use serde::{Deserialize, Serialize};

/// Represents a span in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset start (0-indexed)
    pub start: usize,
    /// Byte offset end (exclusive)
    pub end: usize,
    /// Line number (1-indexed)
    pub start_line: usize,
    /// Line number (1-indexed)
    pub end_line: usize,
    /// Column (1-indexed, in bytes)
    pub start_column: usize,
    /// Column (1-indexed, in bytes)
    pub end_column: usize,
}

impl Span {
    /// Create a new span
    pub fn new(
        start: usize,
        end: usize,
        start_line: usize,
        end_line: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start,
            end,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }

    /// Create a span from byte offsets only (no line/column information)
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Line start table used to turn byte offsets into line/column pairs
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    /// Create a new source map from source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1));
        Self { line_starts }
    }

    /// Get line and column for a byte offset (both 1-indexed)
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        (line + 1, offset - line_start + 1)
    }

    /// Create a span with line/column information
    pub fn span(&self, start: usize, end: usize) -> Span {
        let (start_line, start_column) = self.line_col(start);
        let (end_line, end_column) = self.line_col(end);
        Span {
            start,
            end,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }

    /// Span covering the very end of the source
    pub fn eof_span(&self, source_len: usize) -> Span {
        self.span(source_len, source_len)
    }
}
