//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline processes each page.
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a terminal progress bar, a log, or a GUI without the
//! library knowing anything about how the host application communicates.
//! Pages are processed strictly sequentially, so no method is ever invoked
//! concurrently; the `Send + Sync` bound exists only so callbacks can be
//! shared as `Arc` across config clones.

use std::sync::Arc;

/// Called by the conversion pipeline as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after the document is opened, before any page is read.
    ///
    /// # Arguments
    /// * `total_pages` — number of pages that will be processed
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called just before extraction begins for a page.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    fn on_page_start(&self, page_num: usize, total_pages: usize) {
        let _ = (page_num, total_pages);
    }

    /// Called when a page has been processed, with or without text.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages
    /// * `text_len`    — byte length of the extracted text (0 for a textless page)
    /// * `used_ocr`    — whether the text came from OCR rather than the text layer
    fn on_page_complete(&self, page_num: usize, total_pages: usize, text_len: usize, used_ocr: bool) {
        let _ = (page_num, total_pages, text_len, used_ocr);
    }

    /// Called once after all pages have been processed.
    ///
    /// # Arguments
    /// * `total_pages`     — total pages in the document
    /// * `pages_with_text` — pages that produced non-empty text
    fn on_conversion_complete(&self, total_pages: usize, pages_with_text: usize) {
        let _ = (total_pages, pages_with_text);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;
