//! Section state carried across lines and pages.

/// Top-level resume section established by a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before any header, and after a certifications header
    #[default]
    None,
    Education,
    Experience,
    Projects,
    Skills,
}

impl Section {
    /// Section selected by a header keyword. Certifications has no dedicated
    /// handling and maps to [`Section::None`].
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "education" => Section::Education,
            "experience" => Section::Experience,
            "projects" => Section::Projects,
            "skills" => Section::Skills,
            _ => Section::None,
        }
    }
}

/// Mutable classifier state.
///
/// `section` and `education_buffer` persist across pages; only a section
/// header changes them. `last_project_title` is a line index and is cleared
/// at every page boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierState {
    /// Current section
    pub section: Section,

    /// Pending education lines (never more than one between calls)
    pub education_buffer: Vec<String>,

    /// Index of the last project title on the current page
    pub last_project_title: Option<usize>,
}

impl ClassifierState {
    /// Fresh state at the start of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new section, discarding any pending education line.
    ///
    /// Returns the number of discarded lines.
    pub fn enter_section(&mut self, section: Section) -> usize {
        let dropped = self.education_buffer.len();
        self.education_buffer.clear();
        self.section = section;
        dropped
    }

    /// Push an education line; returns the pair once two lines are buffered.
    pub fn push_education(&mut self, formatted: String) -> Option<(String, String)> {
        self.education_buffer.push(formatted);
        if self.education_buffer.len() < 2 {
            return None;
        }

        let mut drained = self.education_buffer.drain(..);
        let title = drained.next().unwrap_or_default();
        let detail = drained.next().unwrap_or_default();
        Some((title, detail))
    }

    /// Reset page-scoped fields.
    pub fn begin_page(&mut self) {
        self.last_project_title = None;
    }

    /// Whether the line at `index` directly follows a project title.
    pub fn follows_project_title(&self, index: usize) -> bool {
        matches!(self.last_project_title, Some(last) if last + 1 == index)
    }
}
