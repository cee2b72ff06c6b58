//! Data model shared by the extraction, layout and classification stages.
//!
//! Raw [`PageContent`] comes from a content source; the layout stage turns it
//! into [`Token`]s and [`Line`]s that the classifier walks.

mod fragment;
mod line;
mod token;

pub use fragment::{Fragment, LinkAnnotation, PageContent};
pub use line::{Line, Page};
pub use token::{is_bold_font, Token};
