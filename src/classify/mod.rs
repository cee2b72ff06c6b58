//! Section classification of reconstructed lines.
//!
//! A [`SectionClassifier`] walks the lines of a document page by page,
//! assigns every line a [`LineRole`] and drives a
//! [`Presenter`](crate::render::Presenter) accordingly. One classifier
//! instance spans the whole document: a section that starts on page 1 keeps
//! applying on page 2.
//!
//! Role decisions are pure ([`rules`]); this module only applies them.

mod options;
pub mod rules;
mod state;

pub use options::ClassifierOptions;
pub use rules::{classify_line, LineContext, LineRole};
pub use state::{ClassifierState, Section};

use crate::layout::{LayoutOptions, LineFormatter};
use crate::model::{Line, Page};
use crate::render::Presenter;
use crate::style::{StyleTag, Styler};

/// Indentation of the second line of an education entry.
const EDUCATION_DETAIL_INDENT: &str = "  ";

/// Counters gathered while classifying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierCounts {
    /// Lines classified
    pub lines: usize,
    /// Section headers seen
    pub section_headers: usize,
    /// Education lines discarded without a partner
    pub dropped_education_lines: usize,
}

/// Stateful line classifier.
pub struct SectionClassifier<'a> {
    options: ClassifierOptions,
    formatter: LineFormatter<'a>,
    styler: &'a dyn Styler,
    state: ClassifierState,
    counts: ClassifierCounts,
}

impl<'a> SectionClassifier<'a> {
    /// Create a classifier for one document.
    pub fn new(
        options: ClassifierOptions,
        layout: LayoutOptions,
        styler: &'a dyn Styler,
    ) -> Self {
        Self {
            options,
            formatter: LineFormatter::new(layout, styler),
            styler,
            state: ClassifierState::new(),
            counts: ClassifierCounts::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// Counters so far.
    pub fn counts(&self) -> ClassifierCounts {
        self.counts
    }

    /// Classify every line of a page, in order.
    pub fn classify_page(&mut self, page: &Page, presenter: &mut dyn Presenter) {
        self.state.begin_page();

        let raws: Vec<String> = page.lines.iter().map(Line::raw_text).collect();
        for (index, line) in page.lines.iter().enumerate() {
            let ctx = LineContext {
                line,
                raw: &raws[index],
                index,
                next_raw: raws.get(index + 1).map(String::as_str),
            };
            let role = classify_line(&ctx, &self.state, &self.options);
            log::debug!(
                "Page {} line {} [{:?}] {:?}: {:?}",
                page.number,
                index,
                self.state.section,
                role,
                ctx.raw
            );
            self.apply(role, &ctx, presenter);
        }
    }

    /// Finish the document. A pending education line is dropped, never
    /// emitted on its own. Returns the final counters.
    pub fn finish(mut self) -> ClassifierCounts {
        let pending = self.state.education_buffer.len();
        if pending > 0 {
            log::warn!(
                "Dropping {} unpaired education line(s) at end of document",
                pending
            );
            self.counts.dropped_education_lines += pending;
        }
        self.counts
    }

    fn apply(&mut self, role: LineRole, ctx: &LineContext<'_>, presenter: &mut dyn Presenter) {
        self.counts.lines += 1;

        match role {
            LineRole::SectionHeader(section) => {
                let dropped = self.state.enter_section(section);
                if dropped > 0 {
                    log::warn!(
                        "Dropping {} unpaired education line(s) before {:?}",
                        dropped,
                        ctx.raw
                    );
                    self.counts.dropped_education_lines += dropped;
                }
                self.counts.section_headers += 1;
                presenter.emit_styled(ctx.raw, StyleTag::Header);
            }
            LineRole::EducationPart => {
                let formatted = self.formatter.format(ctx.line);
                if let Some((title, detail)) = self.state.push_education(formatted) {
                    presenter.emit_styled(&title, StyleTag::SubheaderTitle);
                    presenter.emit_styled(
                        &format!("{}{}", EDUCATION_DETAIL_INDENT, detail),
                        StyleTag::SubheaderMuted,
                    );
                }
            }
            LineRole::RoleTitle => {
                presenter.emit_blank();
                presenter.emit_styled(ctx.raw, StyleTag::Header);
            }
            LineRole::ProjectTitle => {
                self.state.last_project_title = Some(ctx.index);
                presenter.emit_blank();
                presenter.emit_styled(ctx.raw, StyleTag::SubheaderTitle);
            }
            LineRole::TechStack => {
                presenter.emit_styled(&self.formatter.format(ctx.line), StyleTag::MutedItalic);
            }
            LineRole::ProjectBody { separator_after } => {
                presenter.emit(&self.formatter.format(ctx.line));
                if separator_after {
                    presenter.emit_blank();
                }
            }
            LineRole::SkillCategory(label) => {
                let formatted = self
                    .formatter
                    .format_with(ctx.line, |token| overlaps_label(&token.text, label));
                presenter.emit(&self.highlight_label(&formatted, label));
            }
            LineRole::ProjectLink | LineRole::Verification | LineRole::Body => {
                presenter.emit(&self.formatter.format(ctx.line));
            }
        }
    }

    /// Re-style a category label (colon excluded) inside a formatted line.
    ///
    /// If inline styling split the label, the line is returned unchanged.
    fn highlight_label(&self, formatted: &str, label: &str) -> String {
        let name = label.trim_end_matches(':');
        let styled = format!("{}:", self.styler.paint(name, StyleTag::Bold));
        formatted.replacen(label, &styled, 1)
    }
}

/// Whether a token holds the label or a piece of it. Such tokens get their
/// bold from the label highlight, never from the font.
fn overlaps_label(text: &str, label: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && (label.contains(text) || text.contains(label))
}
