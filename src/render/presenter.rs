//! Presentation calls emitted by the classifier.
//!
//! The classifier never writes output itself. It drives a [`Presenter`],
//! which either collects the calls ([`Vec<RenderEvent>`]) or prints them.
//!
//! # Example
//!
//! ```
//! use unresume::render::{Presenter, RenderEvent};
//! use unresume::{PlainStyler, StyleTag};
//!
//! let mut events: Vec<RenderEvent> = Vec::new();
//! events.emit_styled("EXPERIENCE", StyleTag::Header);
//! events.emit_blank();
//! events.emit("Shipped things");
//!
//! let lines: Vec<String> = events.iter().map(|e| e.render(&PlainStyler)).collect();
//! assert_eq!(lines, vec!["EXPERIENCE", "", "Shipped things"]);
//! ```

use crate::style::{StyleTag, Styler};

/// Receiver of presentation calls.
pub trait Presenter {
    /// Emit an already formatted line.
    fn emit(&mut self, text: &str);

    /// Emit a line to be painted with a style.
    fn emit_styled(&mut self, text: &str, tag: StyleTag);

    /// Emit an empty line.
    fn emit_blank(&mut self);
}

/// One recorded presentation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Formatted text, possibly with inline styling already applied
    Text(String),

    /// Text to be painted as a whole
    Styled {
        /// Line text
        text: String,
        /// Style to paint it with
        tag: StyleTag,
    },

    /// Empty line
    Blank,
}

impl RenderEvent {
    /// Render this event as a single output line.
    pub fn render(&self, styler: &dyn Styler) -> String {
        match self {
            RenderEvent::Text(text) => text.clone(),
            RenderEvent::Styled { text, tag } => styler.paint(text, *tag),
            RenderEvent::Blank => String::new(),
        }
    }

    /// The style tag, for styled events.
    pub fn tag(&self) -> Option<StyleTag> {
        match self {
            RenderEvent::Styled { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// The unpainted text of the event.
    pub fn text(&self) -> &str {
        match self {
            RenderEvent::Text(text) | RenderEvent::Styled { text, .. } => text,
            RenderEvent::Blank => "",
        }
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, RenderEvent::Blank)
    }
}

impl Presenter for Vec<RenderEvent> {
    fn emit(&mut self, text: &str) {
        self.push(RenderEvent::Text(text.to_string()));
    }

    fn emit_styled(&mut self, text: &str, tag: StyleTag) {
        self.push(RenderEvent::Styled {
            text: text.to_string(),
            tag,
        });
    }

    fn emit_blank(&mut self) {
        self.push(RenderEvent::Blank);
    }
}

/// Render events into newline-terminated text.
pub fn render_events(events: &[RenderEvent], styler: &dyn Styler) -> String {
    let mut output = String::new();
    for event in events {
        output.push_str(&event.render(styler));
        output.push('\n');
    }
    output
}
