//! Pure line-role predicates.
//!
//! Nothing here touches classifier state; [`classify_line`] reads a snapshot
//! of it and returns the role. Predicates are evaluated in a fixed priority
//! and every one of them is total over arbitrary text.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Line;

use super::{ClassifierOptions, ClassifierState, Section};

/// Header keywords, matched as a case-insensitive prefix of the raw text.
pub const SECTION_KEYWORDS: [&str; 5] = [
    "education",
    "experience",
    "projects",
    "skills",
    "certifications",
];

/// Skill category labels re-styled in place.
pub const CATEGORY_LABELS: [&str; 6] = [
    "Programming Languages:",
    "Frameworks/Libraries:",
    "Tools:",
    "Cloud/DevOps:",
    "Technological Concepts:",
    "Soft Skills:",
];

fn project_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z0-9\s\-():]+$").expect("project title pattern"))
}

fn tech_stack_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z,\s]+$").expect("tech stack pattern"))
}

/// Role assigned to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Starts a new section
    SectionHeader(Section),
    /// One half of an education entry
    EducationPart,
    /// Single bold short line in the experience section
    RoleTitle,
    /// Uppercase project heading
    ProjectTitle,
    /// Repository link inside a project
    ProjectLink,
    /// Comma-separated technologies
    TechStack,
    /// Any other project line
    ProjectBody {
        /// Next line is a project title
        separator_after: bool,
    },
    /// Line carrying a skill category label
    SkillCategory(&'static str),
    /// Credential verification link
    Verification,
    /// Everything else
    Body,
}

/// A line together with the neighbourhood the rules may look at.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// The line being classified
    pub line: &'a Line,
    /// Its raw text
    pub raw: &'a str,
    /// Index within the page
    pub index: usize,
    /// Raw text of the next line on the same page
    pub next_raw: Option<&'a str>,
}

/// Decide the role of a line.
pub fn classify_line(
    ctx: &LineContext<'_>,
    state: &ClassifierState,
    options: &ClassifierOptions,
) -> LineRole {
    if let Some(section) = section_header(ctx.raw) {
        return LineRole::SectionHeader(section);
    }

    match state.section {
        Section::Education => LineRole::EducationPart,
        Section::Experience => {
            if is_role_title(ctx.line, ctx.raw, options) {
                LineRole::RoleTitle
            } else {
                LineRole::Body
            }
        }
        Section::Projects => {
            if is_project_title(ctx.raw, options) && !state.follows_project_title(ctx.index) {
                LineRole::ProjectTitle
            } else if ctx.raw.contains("github.com") {
                LineRole::ProjectLink
            } else if is_tech_stack(ctx.raw, options) {
                LineRole::TechStack
            } else {
                let separator_after = ctx
                    .next_raw
                    .map(|next| is_project_title(next, options))
                    .unwrap_or(false);
                LineRole::ProjectBody { separator_after }
            }
        }
        Section::Skills | Section::None => {
            if let Some(label) = category_label(ctx.raw) {
                LineRole::SkillCategory(label)
            } else if is_verification(ctx.raw) {
                LineRole::Verification
            } else {
                LineRole::Body
            }
        }
    }
}

/// Section selected by a header line, if the line is one.
pub fn section_header(raw: &str) -> Option<Section> {
    let lower = raw.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|keyword| lower.starts_with(*keyword))
        .map(|keyword| Section::from_keyword(keyword))
}

/// Single bold-class token with a short raw text.
pub fn is_role_title(line: &Line, raw: &str, options: &ClassifierOptions) -> bool {
    line.single_token()
        .map(|token| token.is_bold() && raw.chars().count() < options.role_title_max_chars)
        .unwrap_or(false)
}

/// Uppercase letters, digits, whitespace, hyphens, parentheses and colons,
/// longer than the minimum.
pub fn is_project_title(raw: &str, options: &ClassifierOptions) -> bool {
    raw.chars().count() > options.project_title_min_chars && project_title_re().is_match(raw)
}

/// Letters, commas and whitespace only, shorter than the maximum.
pub fn is_tech_stack(raw: &str, options: &ClassifierOptions) -> bool {
    raw.chars().count() < options.tech_stack_max_chars && tech_stack_re().is_match(raw)
}

/// First category label contained in the raw text.
pub fn category_label(raw: &str) -> Option<&'static str> {
    CATEGORY_LABELS.iter().copied().find(|label| raw.contains(label))
}

/// Credential verification lines mention "verify".
pub fn is_verification(raw: &str) -> bool {
    raw.to_lowercase().contains("verify")
}
