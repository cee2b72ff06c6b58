//! Length limits used by the line-role heuristics.

/// Classifier thresholds, in characters of a line's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Experience-section role titles must be shorter than this
    pub role_title_max_chars: usize,

    /// Tech-stack lines must be shorter than this
    pub tech_stack_max_chars: usize,

    /// Project titles must be longer than this
    pub project_title_min_chars: usize,
}

impl ClassifierOptions {
    /// Create classifier options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role title limit.
    pub fn with_role_title_max(mut self, chars: usize) -> Self {
        self.role_title_max_chars = chars;
        self
    }

    /// Set the tech-stack limit.
    pub fn with_tech_stack_max(mut self, chars: usize) -> Self {
        self.tech_stack_max_chars = chars;
        self
    }

    /// Set the project title minimum.
    pub fn with_project_title_min(mut self, chars: usize) -> Self {
        self.project_title_min_chars = chars;
        self
    }
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            role_title_max_chars: 40,
            tech_stack_max_chars: 100,
            project_title_min_chars: 5,
        }
    }
}
