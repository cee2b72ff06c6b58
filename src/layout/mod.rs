//! Layout reconstruction: fragments to tokens to lines.
//!
//! # Pipeline
//!
//! ```text
//! PageContent  ->  Token[]  ->  Token[] (linked)  ->  Line[]  ->  String per line
//!                  ingest       overlay_links         group_lines  LineFormatter
//! ```
//!
//! Every stage is a pure transformation; none of them can fail. Bad geometry
//! degrades grouping and spacing, it never aborts a page.

mod formatter;
mod grouper;
mod ingest;
mod links;
mod options;

pub use formatter::LineFormatter;
pub use grouper::group_lines;
pub use ingest::ingest;
pub use links::{find_link, overlay_links};
pub use options::LayoutOptions;

use crate::model::{Page, PageContent};

/// Builds [`Page`]s of lines from raw page content.
#[derive(Debug, Clone, Default)]
pub struct LayoutAnalyzer {
    options: LayoutOptions,
    normalize_unicode: bool,
}

impl LayoutAnalyzer {
    /// Create a layout analyzer.
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            normalize_unicode: false,
        }
    }

    /// Enable or disable NFKC normalization of token text.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// The thresholds in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Reconstruct the lines of one page.
    pub fn analyze(&self, content: &PageContent) -> Page {
        let tokens = ingest(&content.fragments, self.normalize_unicode);
        log::debug!(
            "Page {}: {} of {} fragments kept, {} link annotations",
            content.number,
            tokens.len(),
            content.fragments.len(),
            content.links.len()
        );

        let tokens = overlay_links(tokens, &content.links);
        let lines = group_lines(tokens, self.options.line_threshold);
        Page::new(content.number, lines)
    }
}
