//! Spacing reconstruction and inline styling of a line.

use std::cmp::Ordering;

use crate::model::{Line, Token};
use crate::style::{StyleTag, Styler};

use super::LayoutOptions;

const SPACE: &str = " ";
const TAB: &str = "\t";

/// Renders lines into single strings, rebuilding spacing from geometry.
pub struct LineFormatter<'a> {
    options: LayoutOptions,
    styler: &'a dyn Styler,
}

impl<'a> LineFormatter<'a> {
    /// Create a formatter.
    pub fn new(options: LayoutOptions, styler: &'a dyn Styler) -> Self {
        Self { options, styler }
    }

    /// Format a line.
    ///
    /// Tokens are sorted by x (ties keep discovery order). The gap between a
    /// token and the estimated end of the previous one decides the separator;
    /// the end is estimated as `x + chars * char_width`.
    pub fn format(&self, line: &Line) -> String {
        self.format_with(line, |_| false)
    }

    /// Format a line, leaving tokens selected by `unbolded` without inline
    /// bold. Links are still styled.
    pub fn format_with<F>(&self, line: &Line, unbolded: F) -> String
    where
        F: Fn(&Token) -> bool,
    {
        let mut tokens: Vec<&Token> = line.tokens.iter().collect();
        tokens.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        let mut out = String::new();
        let mut last_x = 0.0_f32;

        for token in tokens {
            out.push_str(self.separator(token.x - last_x));
            out.push_str(&self.display_text(token, !unbolded(token)));
            last_x = token.x + token.char_len() as f32 * self.options.char_width;
        }

        out.trim().to_string()
    }

    /// Separator for a horizontal gap.
    pub fn separator(&self, gap: f32) -> &'static str {
        if gap > self.options.tab_gap {
            TAB
        } else if gap > self.options.space_gap {
            SPACE
        } else {
            ""
        }
    }

    /// Token text with inline styling applied.
    fn display_text(&self, token: &Token, allow_bold: bool) -> String {
        match &token.link_url {
            Some(url) => self
                .styler
                .hyperlink(&self.styler.paint(&token.text, StyleTag::Link), url),
            None if allow_bold && token.is_bold() => self.styler.paint(&token.text, StyleTag::Bold),
            None => token.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyler;

    struct Markup;

    impl Styler for Markup {
        fn paint(&self, text: &str, tag: StyleTag) -> String {
            format!("<{}>{}</{}>", tag, text, tag)
        }

        fn hyperlink(&self, text: &str, url: &str) -> String {
            format!("[{}]({})", text, url)
        }
    }

    fn tok(text: &str, x: f32) -> Token {
        Token::new(text, x, 100.0, "Helvetica")
    }

    fn plain(line: &Line) -> String {
        LineFormatter::new(LayoutOptions::default(), &PlainStyler).format(line)
    }

    #[test]
    fn test_sorts_by_x() {
        let line = Line::new(vec![tok("World", 100.0), tok("Hello", 50.0)]);
        assert_eq!(plain(&line), "Hello\tWorld");
    }

    #[test]
    fn test_gap_thresholds() {
        // "ab" ends at 10 + 2*5 = 20.
        let glued = Line::new(vec![tok("ab", 10.0), tok("c", 25.0)]);
        assert_eq!(plain(&glued), "abc");

        let spaced = Line::new(vec![tok("ab", 10.0), tok("c", 25.5)]);
        assert_eq!(plain(&spaced), "ab c");

        let tabbed = Line::new(vec![tok("ab", 10.0), tok("c", 30.5)]);
        assert_eq!(plain(&tabbed), "ab\tc");
    }

    #[test]
    fn test_leading_separator_is_trimmed() {
        let line = Line::new(vec![tok("Indented", 300.0)]);
        assert_eq!(plain(&line), "Indented");
    }

    #[test]
    fn test_overlapping_tokens_are_glued() {
        let line = Line::new(vec![tok("Java", 10.0), tok("Script", 20.0)]);
        assert_eq!(plain(&line), "JavaScript");
    }

    #[test]
    fn test_stable_on_equal_x() {
        let line = Line::new(vec![tok("first", 10.0), tok("second", 10.0)]);
        assert_eq!(plain(&line), "firstsecond");
    }

    #[test]
    fn test_reformatting_output_is_identity() {
        let line = Line::new(vec![tok("Go", 0.0), tok("Rust", 40.0), tok("Zig", 90.0)]);
        let once = plain(&line);
        let again = plain(&Line::new(vec![tok(&once, 0.0)]));
        assert_eq!(once, again);
    }

    #[test]
    fn test_bold_and_link_styling() {
        let line = Line::new(vec![
            Token::new("Jane", 0.0, 100.0, "Inter-Bold"),
            Token::new("site", 40.0, 100.0, "Inter-Bold").with_link("https://jane.dev"),
            Token::new("plain", 80.0, 100.0, "Inter-Regular"),
        ]);
        let formatted = LineFormatter::new(LayoutOptions::default(), &Markup).format(&line);
        assert_eq!(
            formatted,
            "<bold>Jane</bold>\t[<link>site</link>](https://jane.dev)\tplain"
        );
    }

    #[test]
    fn test_format_with_skips_selected_bold() {
        let line = Line::new(vec![
            Token::new("Tools:", 0.0, 100.0, "Inter-Bold"),
            Token::new("Git", 40.0, 100.0, "Inter-Bold"),
            Token::new("repo", 80.0, 100.0, "Inter-Bold").with_link("https://git.dev"),
        ]);
        let formatted = LineFormatter::new(LayoutOptions::default(), &Markup)
            .format_with(&line, |token| token.text != "Git");
        assert_eq!(
            formatted,
            "Tools: <bold>Git</bold>\t[<link>repo</link>](https://git.dev)"
        );
    }
}
