//! The content-source seam and page fetching strategies.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::PageContent;
use crate::render::PageSelection;

use super::options::{ErrorMode, ParseOptions, Prefetch};

/// Supplies raw positioned text and link annotations, one page at a time.
pub trait ContentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Content of a page (1-indexed).
    fn page_content(&self, number: u32) -> Result<PageContent>;
}

/// A content source backed by pages already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<PageContent>,
}

impl MemorySource {
    /// Create a source from pages; page numbers are reassigned by position.
    pub fn new(pages: Vec<PageContent>) -> Self {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, page)| PageContent {
                number: i as u32 + 1,
                ..page
            })
            .collect();
        Self { pages }
    }

    /// Append a page.
    pub fn push(&mut self, page: PageContent) {
        let number = self.pages.len() as u32 + 1;
        self.pages.push(PageContent { number, ..page });
    }
}

impl ContentSource for MemorySource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_content(&self, number: u32) -> Result<PageContent> {
        number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i as usize))
            .cloned()
            .ok_or(Error::PageOutOfRange(number, self.page_count()))
    }
}

/// Page numbers of a source that a selection includes, in document order.
pub fn selected_pages(page_count: u32, selection: &PageSelection) -> Vec<u32> {
    (1..=page_count).filter(|n| selection.includes(*n)).collect()
}

/// Fetch the selected pages and hand them to `visit` strictly in page order.
///
/// Extraction may run ahead according to [`ParseOptions::prefetch`]; `visit`
/// always runs on the calling thread, one page at a time.
pub fn for_each_page<S, F>(source: &S, options: &ParseOptions, mut visit: F) -> Result<()>
where
    S: ContentSource + Sync + ?Sized,
    F: FnMut(PageContent),
{
    let numbers = selected_pages(source.page_count(), &options.pages);
    log::debug!(
        "Fetching {} page(s) with {:?} prefetch",
        numbers.len(),
        options.prefetch
    );

    match options.prefetch {
        Prefetch::Sequential => {
            for number in numbers {
                visit(settle(number, source.page_content(number), options.error_mode)?);
            }
        }
        Prefetch::Parallel => {
            let fetched: Vec<Result<PageContent>> = numbers
                .par_iter()
                .map(|number| source.page_content(*number))
                .collect();
            for (number, result) in numbers.into_iter().zip(fetched) {
                visit(settle(number, result, options.error_mode)?);
            }
        }
        Prefetch::Pipelined { depth } => {
            let (tx, rx) = crossbeam_channel::bounded::<(u32, Result<PageContent>)>(depth.max(1));
            std::thread::scope(|scope| -> Result<()> {
                // Owned here so an early return closes the channel and
                // unblocks the producer before the scope joins it.
                let rx = rx;
                scope.spawn(move || {
                    for number in numbers {
                        // A closed channel means the consumer stopped early.
                        if tx.send((number, source.page_content(number))).is_err() {
                            break;
                        }
                    }
                });

                for (number, result) in rx.iter() {
                    visit(settle(number, result, options.error_mode)?);
                }
                Ok(())
            })?;
        }
    }

    Ok(())
}

/// Apply the error mode to one page's extraction result.
fn settle(number: u32, result: Result<PageContent>, mode: ErrorMode) -> Result<PageContent> {
    match result {
        Ok(content) => Ok(content),
        Err(e) if mode == ErrorMode::Lenient => {
            log::warn!("Failed to extract page {}: {}", number, e);
            Ok(PageContent::new(number))
        }
        Err(e) => Err(e),
    }
}
