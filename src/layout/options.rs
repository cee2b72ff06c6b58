//! Geometry thresholds for line grouping and spacing reconstruction.

/// Layout thresholds, in content-stream units.
///
/// The defaults are the values output is calibrated against. They exist as
/// options so they can be tuned with `unresume dump`, not to be changed
/// casually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Maximum baseline distance between tokens on the same line
    pub line_threshold: f32,

    /// Gap above which a single space is inserted
    pub space_gap: f32,

    /// Gap above which a tab is inserted
    pub tab_gap: f32,

    /// Assumed advance per character; no glyph metrics are available
    pub char_width: f32,
}

impl LayoutOptions {
    /// Create layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line grouping threshold.
    pub fn with_line_threshold(mut self, threshold: f32) -> Self {
        self.line_threshold = threshold;
        self
    }

    /// Set the space and tab gap thresholds.
    pub fn with_gaps(mut self, space_gap: f32, tab_gap: f32) -> Self {
        self.space_gap = space_gap;
        self.tab_gap = tab_gap;
        self
    }

    /// Set the per-character advance.
    pub fn with_char_width(mut self, width: f32) -> Self {
        self.char_width = width;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_threshold: 5.0,
            space_gap: 5.0,
            tab_gap: 10.0,
            char_width: 5.0,
        }
    }
}
