//! pdfium-backed implementation of [`PageTextSource`].
//!
//! The first three cascade methods come from pdfium's three views of the
//! same page text (full layer, segment layout, individual text objects).
//! The raw fourth method decodes the content stream independently through
//! lopdf, which catches pages whose pdfium text layer is empty but whose
//! stream still carries Tj/TJ operators.

use crate::error::PdfMarkError;
use crate::pipeline::extract::PageTextSource;
use crate::pipeline::render;
use image::DynamicImage;
use pdfium_render::prelude::*;

/// A single page exposed to the extraction cascade.
///
/// `page_number` is 1-based (lopdf's page numbering); `page_index` is the
/// 0-based pdfium index.
pub struct PdfiumPageSource<'a> {
    page: &'a PdfPage<'a>,
    raw_doc: Option<&'a lopdf::Document>,
    page_index: usize,
}

impl<'a> PdfiumPageSource<'a> {
    pub fn new(
        page: &'a PdfPage<'a>,
        raw_doc: Option<&'a lopdf::Document>,
        page_index: usize,
    ) -> Self {
        Self {
            page,
            raw_doc,
            page_index,
        }
    }
}

impl PageTextSource for PdfiumPageSource<'_> {
    fn plain_text(&self) -> Option<String> {
        let text = self.page.text().ok()?;
        Some(text.all())
    }

    fn blocks(&self) -> Option<Vec<String>> {
        let text = self.page.text().ok()?;
        let blocks: Vec<String> = text
            .segments()
            .iter()
            .map(|segment| segment.text())
            .collect();
        Some(blocks)
    }

    fn structured_lines(&self) -> Option<Vec<Vec<String>>> {
        // Each positioned text object is one run of glyphs; treat it as a
        // single-span line and let the cascade's joining do the rest.
        let lines: Vec<Vec<String>> = self
            .page
            .objects()
            .iter()
            .filter_map(|object| object.as_text_object().map(|t| vec![t.text()]))
            .collect();
        Some(lines)
    }

    fn raw_lines(&self) -> Result<Vec<Vec<String>>, PdfMarkError> {
        let Some(doc) = self.raw_doc else {
            return Ok(vec![]);
        };
        let page_number = (self.page_index + 1) as u32;
        let text = doc
            .extract_text(&[page_number])
            .map_err(|e| PdfMarkError::TextExtraction {
                page: self.page_index + 1,
                detail: e.to_string(),
            })?;
        Ok(text.lines().map(|l| vec![l.to_string()]).collect())
    }

    fn render(&self, zoom: f32) -> Result<DynamicImage, PdfMarkError> {
        render::render_page(self.page, self.page_index, zoom)
    }
}
