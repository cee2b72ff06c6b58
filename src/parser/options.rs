//! Extraction options.

use crate::render::PageSelection;

/// Options for reading page content from a source.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Page selection (which pages to read)
    pub pages: PageSelection,

    /// How far extraction may run ahead of classification
    pub prefetch: Prefetch,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (pages that fail to extract are rendered empty).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set the prefetch strategy.
    pub fn with_prefetch(mut self, prefetch: Prefetch) -> Self {
        self.prefetch = prefetch;
        self
    }

    /// Extract one page at a time.
    pub fn sequential(mut self) -> Self {
        self.prefetch = Prefetch::Sequential;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            pages: PageSelection::All,
            prefetch: Prefetch::Sequential,
        }
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the document on the first page that fails
    #[default]
    Strict,
    /// Log the failure and treat the page as empty
    Lenient,
}

/// Extraction strategy. Classification is always serial and in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prefetch {
    /// Extract a page, classify it, move on
    #[default]
    Sequential,
    /// Extract all selected pages in parallel first
    Parallel,
    /// Extract on a background thread, a bounded number of pages ahead
    Pipelined {
        /// Pages buffered between extraction and classification
        depth: usize,
    },
}

impl Prefetch {
    /// Pipelined extraction with a small buffer.
    pub fn pipelined() -> Self {
        Prefetch::Pipelined { depth: 2 }
    }
}
