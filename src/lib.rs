//! # unresume
//!
//! Layout reconstruction and section classification for PDF resumes.
//!
//! A resume PDF carries no structure, only positioned text runs and link
//! rectangles. This library rebuilds reading lines from the geometry,
//! restores word spacing and inline bold/link styling, and classifies every
//! line by the resume section it belongs to (education, experience,
//! projects, skills) so that it can be presented with the right style.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::PlainStyler;
//!
//! fn main() -> unresume::Result<()> {
//!     let text = unresume::to_text("resume.pdf")?;
//!     print!("{}", text);
//!
//!     // Or drive the pipeline yourself
//!     let result = unresume::Unresume::new()
//!         .lenient()
//!         .render_file("resume.pdf")?;
//!     println!("{} section headers", result.stats.section_headers);
//!     print!("{}", result.to_text(&PlainStyler));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ContentSource -> layout (tokens, links, lines) -> SectionClassifier -> Presenter
//! ```
//!
//! Output styling goes through the [`Styler`] trait; the library ships only
//! the identity [`PlainStyler`].

pub mod classify;
pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use classify::{ClassifierOptions, Section, SectionClassifier};
pub use detect::{detect_header_from_bytes, detect_header_from_path, is_pdf, PdfHeader};
pub use error::{Error, Result};
pub use layout::{LayoutAnalyzer, LayoutOptions, LineFormatter};
pub use model::{Fragment, Line, LinkAnnotation, Page, PageContent, Token};
pub use parser::{ContentSource, ErrorMode, MemorySource, ParseOptions, PdfParser, Prefetch};
pub use render::{
    JsonFormat, PageSelection, Presenter, RenderEvent, RenderOptions, RenderResult, RenderStats,
    Renderer,
};
pub use style::{PlainStyler, StyleTag, Styler};

use std::io::Read;
use std::path::Path;

/// Render a resume PDF into collected events with default options.
///
/// # Example
///
/// ```no_run
/// let result = unresume::render_file("resume.pdf").unwrap();
/// println!("Pages: {}", result.stats.pages);
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<RenderResult> {
    Unresume::new().render_file(path)
}

/// Render a resume PDF to unstyled text.
///
/// # Example
///
/// ```no_run
/// let text = unresume::to_text("resume.pdf").unwrap();
/// std::fs::write("resume.txt", text).unwrap();
/// ```
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(render_file(path)?.to_text(&PlainStyler))
}

/// Builder for rendering resumes.
///
/// # Example
///
/// ```no_run
/// use unresume::{LayoutOptions, PageSelection, PlainStyler, Unresume};
///
/// let result = Unresume::new()
///     .with_layout(LayoutOptions::default().with_line_threshold(3.0))
///     .with_pages(PageSelection::Range(1..=2))
///     .parallel()
///     .render_file("resume.pdf")?;
/// print!("{}", result.to_text(&PlainStyler));
/// # Ok::<(), unresume::Error>(())
/// ```
pub struct Unresume<'a> {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    styler: &'a dyn Styler,
}

impl<'a> Unresume<'a> {
    /// Create a new builder with unstyled inline output.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            styler: &PlainStyler,
        }
    }

    /// Style inline bold and link text with the given styler.
    pub fn with_styler(mut self, styler: &'a dyn Styler) -> Self {
        self.styler = styler;
        self
    }

    /// Render pages that fail to extract as empty instead of aborting.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Extract pages in parallel ahead of classification.
    pub fn parallel(mut self) -> Self {
        self.parse_options = self.parse_options.with_prefetch(Prefetch::Parallel);
        self
    }

    /// Set the prefetch strategy.
    pub fn with_prefetch(mut self, prefetch: Prefetch) -> Self {
        self.parse_options = self.parse_options.with_prefetch(prefetch);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Set layout thresholds.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.render_options = self.render_options.with_layout(layout);
        self
    }

    /// Set classification thresholds.
    pub fn with_classifier(mut self, classifier: ClassifierOptions) -> Self {
        self.render_options = self.render_options.with_classifier(classifier);
        self
    }

    /// Apply NFKC normalization to token text.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.render_options = self.render_options.with_normalization(normalize);
        self
    }

    /// Render a PDF file.
    pub fn render_file<P: AsRef<Path>>(self, path: P) -> Result<RenderResult> {
        let parser = PdfParser::open_with_options(path, self.parse_options.clone())?;
        self.render_source(&parser)
    }

    /// Render a PDF from bytes.
    pub fn render_bytes(self, data: &[u8]) -> Result<RenderResult> {
        let parser = PdfParser::from_bytes_with_options(data, self.parse_options.clone())?;
        self.render_source(&parser)
    }

    /// Render a PDF from a reader.
    pub fn render_reader<R: Read>(self, reader: R) -> Result<RenderResult> {
        let parser = PdfParser::from_reader_with_options(reader, self.parse_options.clone())?;
        self.render_source(&parser)
    }

    /// Render any content source.
    pub fn render_source<S>(self, source: &S) -> Result<RenderResult>
    where
        S: ContentSource + Sync + ?Sized,
    {
        Renderer::new(self.render_options, self.styler).collect(source, &self.parse_options)
    }
}

impl Default for Unresume<'_> {
    fn default() -> Self {
        Self::new()
    }
}
