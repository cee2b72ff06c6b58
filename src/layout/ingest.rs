//! Token ingestion: raw fragments to tokens.

use unicode_normalization::UnicodeNormalization;

use crate::model::{Fragment, Token};

/// Convert fragments into tokens, dropping fragments with blank text.
///
/// Order is preserved. With `normalize` set, text is NFKC-normalized so that
/// ligature glyphs (`ﬁ`, `ﬂ`) become plain letters.
pub fn ingest(fragments: &[Fragment], normalize: bool) -> Vec<Token> {
    fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .map(|f| {
            let text = if normalize {
                f.text.nfkc().collect::<String>()
            } else {
                f.text.clone()
            };
            Token::new(text, f.x(), f.y(), f.font_name.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_fragments() {
        let fragments = vec![
            Fragment::new("Jane", 10.0, 700.0, "F1"),
            Fragment::new("   ", 30.0, 700.0, "F1"),
            Fragment::new("", 40.0, 700.0, "F1"),
            Fragment::new("Doe", 50.0, 700.0, "F2"),
        ];
        let tokens = ingest(&fragments, false);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Jane");
        assert_eq!(tokens[1].text, "Doe");
        assert_eq!(tokens[1].x, 50.0);
        assert_eq!(tokens[1].font_name, "F2");
    }

    #[test]
    fn test_keeps_surrounding_whitespace() {
        let tokens = ingest(&[Fragment::new(" Rust ", 0.0, 0.0, "F1")], false);
        assert_eq!(tokens[0].text, " Rust ");
    }

    #[test]
    fn test_normalization_expands_ligatures() {
        let fragments = vec![Fragment::new("Pro\u{FB01}cient", 0.0, 0.0, "F1")];
        assert_eq!(ingest(&fragments, true)[0].text, "Proficient");
        assert_eq!(ingest(&fragments, false)[0].text, "Pro\u{FB01}cient");
    }
}
