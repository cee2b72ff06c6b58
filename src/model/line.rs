//! Lines and pages of tokens.

use super::Token;

/// A visually contiguous row of tokens inferred from y-proximity.
///
/// Tokens are kept in discovery order; the formatter sorts them by x.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Tokens in discovery order
    pub tokens: Vec<Token>,
}

impl Line {
    /// Create a line from tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Space-joined token texts, trimmed.
    pub fn raw_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the line has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The only token, if the line has exactly one.
    pub fn single_token(&self) -> Option<&Token> {
        match self.tokens.as_slice() {
            [token] => Some(token),
            _ => None,
        }
    }

    /// Baseline of the first discovered token.
    pub fn y(&self) -> Option<f32> {
        self.tokens.first().map(|t| t.y)
    }
}

/// Lines of one page in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,
    /// Lines in the order they were grouped
    pub lines: Vec<Line>,
}

impl Page {
    /// Create a page from lines.
    pub fn new(number: u32, lines: Vec<Line>) -> Self {
        Self { number, lines }
    }

    /// Total number of tokens on the page.
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// Number of tokens carrying a link.
    pub fn linked_token_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|l| l.tokens.iter())
            .filter(|t| t.is_linked())
            .count()
    }
}
