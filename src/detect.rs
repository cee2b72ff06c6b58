//! Source document checks performed before any page is read.
//!
//! A resume that is missing, unreadable or not a PDF is rejected here, so the
//! layout engine never starts on a document it cannot finish.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Some generators prepend junk before the header; readers accept it within
/// the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Header information of a PDF source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
    /// Byte offset of the `%PDF-` marker
    pub offset: usize,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Read the header of a file on disk.
///
/// Fails with [`Error::Io`] if the file cannot be opened, and with
/// [`Error::UnknownFormat`] if no PDF header is present.
pub fn detect_header_from_path<P: AsRef<Path>>(path: P) -> Result<PdfHeader> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(HEADER_SEARCH_WINDOW);
    file.take(HEADER_SEARCH_WINDOW as u64).read_to_end(&mut head)?;
    detect_header_from_bytes(&head)
}

/// Locate and validate the `%PDF-x.y` header in a byte prefix.
pub fn detect_header_from_bytes(data: &[u8]) -> Result<PdfHeader> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let offset = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version_start = offset + PDF_MAGIC.len();
    let version = data
        .get(version_start..version_start + 3)
        .map(|v| String::from_utf8_lossy(v).to_string())
        .ok_or(Error::UnknownFormat)?;

    match version.as_bytes() {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(PdfHeader { version, offset })
        }
        _ => Err(Error::UnsupportedVersion(version)),
    }
}

/// Check if a file looks like a PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_header_from_path(path).is_ok()
}
