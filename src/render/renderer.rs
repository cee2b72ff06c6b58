//! The document driver: content source to presenter.

use crate::classify::SectionClassifier;
use crate::error::Result;
use crate::layout::LayoutAnalyzer;
use crate::model::PageContent;
use crate::parser::{for_each_page, ContentSource, ParseOptions};
use crate::style::Styler;

use super::presenter::{Presenter, RenderEvent};
use super::result::{RenderResult, RenderStats};
use super::RenderOptions;

/// Runs the layout and classification pipeline over a whole document.
///
/// Pages are reconstructed and classified strictly in page order, with one
/// classifier instance for the whole document.
pub struct Renderer<'a> {
    options: RenderOptions,
    styler: &'a dyn Styler,
}

impl<'a> Renderer<'a> {
    /// Create a renderer. The styler is used for inline (bold, link) styling.
    pub fn new(options: RenderOptions, styler: &'a dyn Styler) -> Self {
        Self { options, styler }
    }

    /// Render the selected pages of a source into a presenter.
    pub fn render_source<S>(
        &self,
        source: &S,
        parse_options: &ParseOptions,
        presenter: &mut dyn Presenter,
    ) -> Result<RenderStats>
    where
        S: ContentSource + Sync + ?Sized,
    {
        let analyzer = self.analyzer();
        let mut classifier = self.classifier();
        let mut stats = RenderStats::new();

        for_each_page(source, parse_options, |content| {
            let page = analyzer.analyze(&content);
            stats.record_page(&page);
            classifier.classify_page(&page, &mut *presenter);
        })?;

        stats.absorb(classifier.finish());
        log::info!(
            "Rendered {} page(s): {} lines, {} section headers",
            stats.pages,
            stats.lines,
            stats.section_headers
        );
        Ok(stats)
    }

    /// Render pages already in memory, in the order given.
    pub fn render_pages(&self, pages: &[PageContent], presenter: &mut dyn Presenter) -> RenderStats {
        let analyzer = self.analyzer();
        let mut classifier = self.classifier();
        let mut stats = RenderStats::new();

        for content in pages {
            let page = analyzer.analyze(content);
            stats.record_page(&page);
            classifier.classify_page(&page, presenter);
        }

        stats.absorb(classifier.finish());
        stats
    }

    /// Render a source into collected events.
    pub fn collect<S>(&self, source: &S, parse_options: &ParseOptions) -> Result<RenderResult>
    where
        S: ContentSource + Sync + ?Sized,
    {
        let mut events: Vec<RenderEvent> = Vec::new();
        let stats = self.render_source(source, parse_options, &mut events)?;
        Ok(RenderResult::new(events, stats))
    }

    fn analyzer(&self) -> LayoutAnalyzer {
        LayoutAnalyzer::new(self.options.layout).with_normalization(self.options.normalize_unicode)
    }

    fn classifier(&self) -> SectionClassifier<'a> {
        SectionClassifier::new(self.options.classifier, self.options.layout, self.styler)
    }
}
