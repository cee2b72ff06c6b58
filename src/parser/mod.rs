//! Page content extraction.
//!
//! A [`ContentSource`] hands out one page of positioned text fragments and
//! link annotations at a time. [`PdfParser`] reads them from a PDF with
//! lopdf; [`MemorySource`] serves pages built in memory.

mod annotations;
mod content;
mod options;
mod pdf_parser;
mod source;

pub use options::{ErrorMode, ParseOptions, Prefetch};
pub use pdf_parser::PdfParser;
pub use source::{for_each_page, selected_pages, ContentSource, MemorySource};
