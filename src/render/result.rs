//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::classify::ClassifierCounts;
use crate::model::Page;
use crate::style::Styler;

use super::presenter::{render_events, RenderEvent};

/// Result of rendering a document into collected events.
#[derive(Debug, Clone, Default)]
pub struct RenderResult {
    /// Presentation calls in output order
    pub events: Vec<RenderEvent>,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(events: Vec<RenderEvent>, stats: RenderStats) -> Self {
        Self { events, stats }
    }

    /// Render the events as newline-terminated text.
    pub fn to_text(&self, styler: &dyn Styler) -> String {
        render_events(&self.events, styler)
    }

    /// Number of output lines.
    pub fn line_count(&self) -> usize {
        self.events.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Pages processed
    pub pages: u32,

    /// Tokens that survived ingestion
    pub tokens: usize,

    /// Lines classified
    pub lines: usize,

    /// Tokens carrying a link
    pub linked_tokens: usize,

    /// Section headers recognized
    pub section_headers: usize,

    /// Education lines dropped without a partner
    pub dropped_education_lines: usize,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a reconstructed page.
    pub fn record_page(&mut self, page: &Page) {
        self.pages += 1;
        self.tokens += page.token_count();
        self.linked_tokens += page.linked_token_count();
    }

    /// Take over the classifier's counters.
    pub fn absorb(&mut self, counts: ClassifierCounts) {
        self.lines = counts.lines;
        self.section_headers = counts.section_headers;
        self.dropped_education_lines = counts.dropped_education_lines;
    }
}
