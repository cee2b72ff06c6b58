//! Raw page content as delivered by a content source.

use serde::{Deserialize, Serialize};

/// A positioned text fragment exactly as the content source reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Text shown by one string-showing operation
    pub text: String,

    /// Text rendering matrix `[a, b, c, d, e, f]`; `e` and `f` are the origin
    pub transform: [f32; 6],

    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl Fragment {
    /// Create a fragment with an identity transform translated to `(x, y)`.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            transform: [1.0, 0.0, 0.0, 1.0, x, y],
            font_name: font_name.into(),
        }
    }

    /// Create a fragment with an explicit transform.
    pub fn with_transform(
        text: impl Into<String>,
        transform: [f32; 6],
        font_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            transform,
            font_name: font_name.into(),
        }
    }

    /// Horizontal origin.
    pub fn x(&self) -> f32 {
        self.transform[4]
    }

    /// Vertical origin (baseline).
    pub fn y(&self) -> f32 {
        self.transform[5]
    }
}

/// A clickable region pointing at a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAnnotation {
    /// `[x1, y1, x2, y2]` with `x1 <= x2` and `y1 <= y2`
    pub rect: [f32; 4],

    /// Target URL
    pub url: String,
}

impl LinkAnnotation {
    /// Create a link annotation. Corners may be given in any order.
    pub fn new(rect: [f32; 4], url: impl Into<String>) -> Self {
        let [ax, ay, bx, by] = rect;
        Self {
            rect: [ax.min(bx), ay.min(by), ax.max(bx), ay.max(by)],
            url: url.into(),
        }
    }

    /// Inclusive point containment.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let [x1, y1, x2, y2] = self.rect;
        x1 <= x && x <= x2 && y1 <= y && y <= y2
    }
}

/// Everything a content source yields for a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text fragments in content-stream order
    pub fragments: Vec<Fragment>,

    /// Link annotations in annotation-array order
    pub links: Vec<LinkAnnotation>,
}

impl PageContent {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Append a fragment.
    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Append a link annotation.
    pub fn with_link(mut self, link: LinkAnnotation) -> Self {
        self.links.push(link);
        self
    }

    /// Check if the page carries no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
