//! Line grouping by vertical proximity.

use crate::model::{Line, Token};

/// Group tokens into lines in a single pass over discovery order.
///
/// A new line starts whenever a token's baseline differs from the previous
/// token's baseline by more than `threshold`. Tokens are not reordered: the
/// content source already emits fragments of one visual row together.
pub fn group_lines(tokens: Vec<Token>, threshold: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut last_y: Option<f32> = None;

    for token in tokens {
        let starts_line = match last_y {
            None => true,
            Some(y) => (token.y - y).abs() > threshold,
        };

        if starts_line && !current.is_empty() {
            lines.push(Line::new(std::mem::take(&mut current)));
        }

        last_y = Some(token.y);
        current.push(token);
    }

    if !current.is_empty() {
        lines.push(Line::new(current));
    }

    log::debug!("Grouped tokens into {} lines", lines.len());
    lines
}
