//! Output types produced by a conversion run.

/// Extraction result for a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// 1-indexed page number.
    pub page_number: usize,
    /// Extracted text after noise filtering, or empty if the page yielded
    /// nothing through any extraction method.
    pub text: String,
    /// Whether the text came from OCR rather than the PDF text layer.
    pub used_ocr: bool,
}

impl PageResult {
    /// True if the page produced any usable text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Aggregate statistics for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Total pages in the document.
    pub total_pages: usize,
    /// Pages that produced non-empty text.
    pub pages_with_text: usize,
    /// Pages whose text came from OCR.
    pub ocr_pages: usize,
    /// Whether a usable OCR binary was found for this run.
    pub ocr_available: bool,
    /// Wall-clock duration of the whole conversion in milliseconds.
    pub total_duration_ms: u64,
}

/// Complete result of a conversion.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The assembled Markdown document.
    pub markdown: String,
    /// Per-page results in ascending page order, one entry per input page.
    pub pages: Vec<PageResult>,
    /// Run statistics.
    pub stats: ConversionStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_text_ignores_whitespace() {
        let p = PageResult {
            page_number: 1,
            text: "  \n ".into(),
            used_ocr: false,
        };
        assert!(!p.has_text());

        let p = PageResult {
            page_number: 2,
            text: "Hello".into(),
            used_ocr: false,
        };
        assert!(p.has_text());
    }
}
