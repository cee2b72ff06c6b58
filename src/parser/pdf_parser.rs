//! PDF content source using lopdf.

use std::io::Read;
use std::path::Path;

use lopdf::{Document as LopdfDocument, ObjectId};

use crate::detect::{detect_header_from_bytes, detect_header_from_path};
use crate::error::{Error, Result};
use crate::model::PageContent;

use super::annotations::page_links;
use super::content::ContentWalker;
use super::options::ParseOptions;
use super::source::{selected_pages, ContentSource};

/// PDF document parser.
pub struct PdfParser {
    doc: LopdfDocument,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a PDF
        let header = detect_header_from_path(path)?;
        log::debug!("Opening {} ({})", path.display(), header);

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::with_document(doc, options)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_header_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::with_document(doc, options)
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn with_document(doc: LopdfDocument, options: ParseOptions) -> Result<Self> {
        if doc.is_encrypted() {
            // No decryption support in lopdf 0.34.
            log::warn!("Encrypted PDF, text extraction is not supported");
            return Err(Error::Encrypted);
        }
        log::debug!(
            "Loaded PDF {} with {} page(s)",
            doc.version,
            doc.get_pages().len()
        );
        Ok(Self { doc, options })
    }

    /// The options this parser was created with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Page numbers included by the parser's page selection.
    pub fn page_numbers(&self) -> Vec<u32> {
        selected_pages(self.page_count(), &self.options.pages)
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Positioned text fragments and link annotations of one page.
    pub fn page_content(&self, number: u32) -> Result<PageContent> {
        let page_id = self.page_id(number)?;

        let fragments = ContentWalker::new(&self.doc)
            .page_fragments(page_id)
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", number, e)))?;
        let links = page_links(&self.doc, page_id);

        log::debug!(
            "Page {}: {} fragments, {} links",
            number,
            fragments.len(),
            links.len()
        );

        Ok(PageContent {
            number,
            fragments,
            links,
        })
    }

    fn page_id(&self, number: u32) -> Result<ObjectId> {
        let pages = self.doc.get_pages();
        pages
            .get(&number)
            .copied()
            .ok_or(Error::PageOutOfRange(number, pages.len() as u32))
    }
}

impl ContentSource for PdfParser {
    fn page_count(&self) -> u32 {
        PdfParser::page_count(self)
    }

    fn page_content(&self, number: u32) -> Result<PageContent> {
        PdfParser::page_content(self, number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        assert!(matches!(
            PdfParser::from_bytes(b"PK\x03\x04 not a pdf"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_rejects_truncated_pdf() {
        assert!(PdfParser::from_bytes(b"%PDF-1.7\n%%EOF").is_err());
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            PdfParser::open("/nonexistent/resume.pdf"),
            Err(Error::Io(_))
        ));
    }
}
