//! Tokens: fragments that survived ingestion.

/// Font name markers that denote a bold-class weight.
const BOLD_MARKERS: [&str; 4] = ["bold", "medium", "semibold", "heavy"];

/// A positioned text fragment with font metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline)
    pub y: f32,
    /// Font name (e.g., "Inter-SemiBold")
    pub font_name: String,
    /// URL of the link annotation covering this token, if any
    pub link_url: Option<String>,
}

impl Token {
    /// Create a new token without a link.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_name: font_name.into(),
            link_url: None,
        }
    }

    /// Return this token with a link attached.
    pub fn with_link(self, url: impl Into<String>) -> Self {
        Self {
            link_url: Some(url.into()),
            ..self
        }
    }

    /// Whether the font appears to be bold-class.
    pub fn is_bold(&self) -> bool {
        is_bold_font(&self.font_name)
    }

    /// Whether a link annotation covers this token.
    pub fn is_linked(&self) -> bool {
        self.link_url.is_some()
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Check a font name for a bold/medium/semibold/heavy weight, ignoring case.
pub fn is_bold_font(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    BOLD_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_font_detection() {
        assert!(is_bold_font("Helvetica-Bold"));
        assert!(is_bold_font("ABCDEF+Inter-SemiBold"));
        assert!(is_bold_font("Roboto-Medium"));
        assert!(is_bold_font("Avenir-HEAVY"));
        assert!(!is_bold_font("Helvetica"));
        assert!(!is_bold_font("Georgia-Italic"));
    }

    #[test]
    fn test_with_link_keeps_fields() {
        let token = Token::new("GitHub", 72.0, 650.0, "F1").with_link("https://github.com/me");
        assert_eq!(token.text, "GitHub");
        assert_eq!(token.x, 72.0);
        assert!(token.is_linked());
        assert_eq!(token.link_url.as_deref(), Some("https://github.com/me"));
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(Token::new("Café", 0.0, 0.0, "F1").char_len(), 4);
    }
}
