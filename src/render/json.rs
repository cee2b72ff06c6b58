//! JSON dumps of extracted page content.
//!
//! Used to inspect what a content source produced (fragment positions,
//! font names, link rectangles) when calibrating layout thresholds.

use crate::error::{Error, Result};
use crate::model::PageContent;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize raw page content to JSON.
pub fn to_json(pages: &[PageContent], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(pages),
        JsonFormat::Compact => serde_json::to_string(pages),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
