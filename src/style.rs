//! Styling seam between the engine and the presentation layer.
//!
//! The engine decides *which* style a piece of text gets; a [`Styler`]
//! decides what that looks like. The library ships [`PlainStyler`], which
//! leaves text untouched. Terminal styling lives in the CLI.

/// Presentation style attached to emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Section headers and role/company titles
    Header,
    /// First line of an education entry, project titles
    SubheaderTitle,
    /// Second line of an education entry
    SubheaderMuted,
    /// Bold-font tokens and skill category labels
    Bold,
    /// Tech-stack lists
    MutedItalic,
    /// Linked tokens
    Link,
}

impl StyleTag {
    /// Stable lowercase name, used by markup and logs.
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Header => "header",
            StyleTag::SubheaderTitle => "subheader-title",
            StyleTag::SubheaderMuted => "subheader-muted",
            StyleTag::Bold => "bold",
            StyleTag::MutedItalic => "muted-italic",
            StyleTag::Link => "link",
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns (text, style) pairs into rendered strings.
pub trait Styler {
    /// Apply a style to text.
    fn paint(&self, text: &str, tag: StyleTag) -> String;

    /// Make already-painted text clickable.
    fn hyperlink(&self, text: &str, url: &str) -> String;
}

/// A styler that returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _tag: StyleTag) -> String {
        text.to_string()
    }

    fn hyperlink(&self, text: &str, _url: &str) -> String {
        text.to_string()
    }
}
