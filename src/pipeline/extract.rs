//! Per-page text-extraction cascade.
//!
//! Five extraction methods are tried in order, each only when every previous
//! one produced no usable text:
//!
//! 1. plain text layer, filtered line by line
//! 2. block layout text, restricted artifact check
//! 3. structured object text (spans joined with spaces)
//! 4. raw content-stream decode (fallible; failures are swallowed)
//! 5. OCR on a rasterised page image
//!
//! OCR is expensive, so it only runs on page 1 as a probe. If page 1 yields
//! OCR text, the document is treated as image-based and OCR stays on for all
//! remaining textless pages. The caller threads that decision through an
//! explicit `&mut bool` so the data flow stays visible in the page loop.

use crate::config::ConversionConfig;
use crate::error::PdfMarkError;
use crate::pipeline::filter::{is_content_block, is_content_line};
use crate::pipeline::ocr::OcrEngine;
use image::DynamicImage;
use tracing::{debug, info, warn};

/// The page-level text representations a PDF backend must provide.
///
/// Splitting extraction behind this trait keeps the cascade logic free of
/// pdfium types so it can be exercised with in-memory mocks.
pub trait PageTextSource {
    /// Full plain-text layer of the page, if the backend can produce one.
    fn plain_text(&self) -> Option<String>;

    /// Layout blocks of the page (paragraph-level chunks).
    fn blocks(&self) -> Option<Vec<String>>;

    /// Structured text: lines, each a list of spans.
    fn structured_lines(&self) -> Option<Vec<Vec<String>>>;

    /// Raw glyph-level decode of the content stream, same shape as
    /// [`structured_lines`](Self::structured_lines). Unlike the others this
    /// is genuinely fallible (malformed streams, unsupported encodings).
    fn raw_lines(&self) -> Result<Vec<Vec<String>>, PdfMarkError>;

    /// Rasterise the page at the given linear zoom for OCR input.
    fn render(&self, zoom: f32) -> Result<DynamicImage, PdfMarkError>;
}

/// Result of extracting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub text: String,
    pub used_ocr: bool,
}

impl PageOutcome {
    fn from_layer(text: String) -> Self {
        Self {
            text,
            used_ocr: false,
        }
    }

    fn empty() -> Self {
        Self {
            text: String::new(),
            used_ocr: false,
        }
    }
}

/// Run the extraction cascade for one page.
///
/// `page_index` is 0-based. `force_ocr` carries the document-wide OCR
/// decision across pages: it enters true when the caller forces OCR and is
/// set true by this function when OCR on page 1 succeeds.
pub fn extract_page(
    source: &dyn PageTextSource,
    page_index: usize,
    ocr: Option<&dyn OcrEngine>,
    force_ocr: &mut bool,
    config: &ConversionConfig,
) -> PageOutcome {
    // Method 1: plain text, aggressive per-line filter.
    if let Some(text) = source.plain_text() {
        let filtered = filter_lines(&text);
        if !filtered.is_empty() {
            return PageOutcome::from_layer(filtered);
        }
    }

    // Method 2: block layout, restricted check.
    if let Some(blocks) = source.blocks() {
        let joined = join_blocks(&blocks);
        if !joined.is_empty() {
            return PageOutcome::from_layer(joined);
        }
    }

    // Method 3: structured object text.
    if let Some(lines) = source.structured_lines() {
        let joined = join_span_lines(&lines);
        if !joined.is_empty() {
            return PageOutcome::from_layer(joined);
        }
    }

    // Method 4: raw content-stream decode. A failure here means the stream
    // is malformed, which for this page is indistinguishable from "no text".
    match source.raw_lines() {
        Ok(lines) => {
            let joined = join_span_lines(&lines);
            if !joined.is_empty() {
                return PageOutcome::from_layer(joined);
            }
        }
        Err(e) => {
            debug!("raw decode failed for page {}: {e}", page_index + 1);
        }
    }

    // Method 5: OCR. Page 1 always probes; later pages only once the probe
    // (or the caller) has turned OCR on.
    let Some(engine) = ocr else {
        return PageOutcome::empty();
    };
    if !(*force_ocr || page_index == 0) {
        return PageOutcome::empty();
    }

    if page_index % 10 == 0 {
        info!("processing page {} with OCR", page_index + 1);
    }

    let image = match source.render(config.ocr_zoom) {
        Ok(image) => image,
        Err(e) => {
            warn!("failed to rasterise page {} for OCR: {e}", page_index + 1);
            return PageOutcome::empty();
        }
    };

    match engine.recognize(&image) {
        Ok(text) if !text.trim().is_empty() => {
            if page_index == 0 {
                info!("page 1 is image-based; enabling OCR for remaining pages");
                *force_ocr = true;
            }
            PageOutcome {
                text: text.trim().to_string(),
                used_ocr: true,
            }
        }
        Ok(_) => PageOutcome::empty(),
        Err(e) => {
            warn!("OCR failed for page {}: {e}", page_index + 1);
            PageOutcome::empty()
        }
    }
}

/// Apply the per-line noise filter and rejoin surviving lines.
fn filter_lines(text: &str) -> String {
    text.lines()
        .filter(|l| is_content_line(l))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim blocks, drop artifacts, rejoin.
fn join_blocks(blocks: &[String]) -> String {
    blocks
        .iter()
        .map(|b| b.trim())
        .filter(|b| is_content_block(b))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join each line's spans with single spaces, then treat the joined lines
/// like blocks.
fn join_span_lines(lines: &[Vec<String>]) -> String {
    lines
        .iter()
        .map(|spans| {
            spans
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|l| is_content_block(l))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrError;
    use std::cell::RefCell;

    /// Records which methods the cascade touched.
    #[derive(Default)]
    struct MockSource {
        plain: Option<String>,
        blocks: Option<Vec<String>>,
        structured: Option<Vec<Vec<String>>>,
        raw: Option<Result<Vec<Vec<String>>, String>>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl PageTextSource for MockSource {
        fn plain_text(&self) -> Option<String> {
            self.calls.borrow_mut().push("plain");
            self.plain.clone()
        }

        fn blocks(&self) -> Option<Vec<String>> {
            self.calls.borrow_mut().push("blocks");
            self.blocks.clone()
        }

        fn structured_lines(&self) -> Option<Vec<Vec<String>>> {
            self.calls.borrow_mut().push("structured");
            self.structured.clone()
        }

        fn raw_lines(&self) -> Result<Vec<Vec<String>>, PdfMarkError> {
            self.calls.borrow_mut().push("raw");
            match self.raw.clone() {
                Some(Ok(lines)) => Ok(lines),
                Some(Err(detail)) => Err(PdfMarkError::TextExtraction { page: 1, detail }),
                None => Ok(vec![]),
            }
        }

        fn render(&self, _zoom: f32) -> Result<DynamicImage, PdfMarkError> {
            self.calls.borrow_mut().push("render");
            Ok(DynamicImage::new_rgb8(2, 2))
        }
    }

    struct MockOcr {
        result: Result<String, ()>,
    }

    impl OcrEngine for MockOcr {
        fn recognize(&self, _image: &DynamicImage) -> Result<String, OcrError> {
            match &self.result {
                Ok(s) => Ok(s.clone()),
                Err(()) => Err(OcrError::Recognition {
                    detail: "mock failure".into(),
                }),
            }
        }
    }

    fn config() -> ConversionConfig {
        ConversionConfig::default()
    }

    #[test]
    fn plain_text_short_circuits() {
        let source = MockSource {
            plain: Some("Hello World".into()),
            ..Default::default()
        };
        let mut force = false;
        let out = extract_page(&source, 0, None, &mut force, &config());
        assert_eq!(out.text, "Hello World");
        assert!(!out.used_ocr);
        assert_eq!(*source.calls.borrow(), vec!["plain"]);
    }

    #[test]
    fn noise_only_plain_text_falls_through_to_blocks() {
        let source = MockSource {
            plain: Some("<image: DeviceRGB>\nwidth: 595\n".into()),
            blocks: Some(vec!["Real paragraph".into(), "ICCBased junk".into()]),
            ..Default::default()
        };
        let mut force = false;
        let out = extract_page(&source, 0, None, &mut force, &config());
        assert_eq!(out.text, "Real paragraph");
        assert_eq!(*source.calls.borrow(), vec!["plain", "blocks"]);
    }

    #[test]
    fn structured_spans_joined_with_spaces() {
        let source = MockSource {
            structured: Some(vec![
                vec!["Hello".into(), "World".into()],
                vec!["second".into(), "line".into()],
            ]),
            ..Default::default()
        };
        let mut force = false;
        let out = extract_page(&source, 2, None, &mut force, &config());
        assert_eq!(out.text, "Hello World\nsecond line");
    }

    #[test]
    fn raw_failure_is_swallowed() {
        let source = MockSource {
            raw: Some(Err("bad stream".into())),
            ..Default::default()
        };
        let mut force = false;
        let out = extract_page(&source, 3, None, &mut force, &config());
        assert_eq!(out.text, "");
        assert!(!out.used_ocr);
        assert_eq!(
            *source.calls.borrow(),
            vec!["plain", "blocks", "structured", "raw"]
        );
    }

    #[test]
    fn ocr_probes_first_page_and_enables_itself() {
        let ocr = MockOcr {
            result: Ok("scanned text".into()),
        };
        let source = MockSource::default();
        let mut force = false;

        let out = extract_page(&source, 0, Some(&ocr), &mut force, &config());
        assert_eq!(out.text, "scanned text");
        assert!(out.used_ocr);
        assert!(force, "page-1 OCR success must enable OCR for later pages");

        // A later textless page now reaches OCR because the flag is set.
        let source2 = MockSource::default();
        let out2 = extract_page(&source2, 5, Some(&ocr), &mut force, &config());
        assert!(out2.used_ocr);
        assert!(source2.calls.borrow().contains(&"render"));
    }

    #[test]
    fn ocr_skipped_on_later_pages_without_trigger() {
        let ocr = MockOcr {
            result: Ok("should not appear".into()),
        };
        let source = MockSource::default();
        let mut force = false;
        let out = extract_page(&source, 4, Some(&ocr), &mut force, &config());
        assert_eq!(out.text, "");
        assert!(!source.calls.borrow().contains(&"render"));
    }

    #[test]
    fn failed_page_one_ocr_leaves_flag_off() {
        let ocr = MockOcr { result: Err(()) };
        let source = MockSource::default();
        let mut force = false;
        let out = extract_page(&source, 0, Some(&ocr), &mut force, &config());
        assert_eq!(out.text, "");
        assert!(!force);
    }

    #[test]
    fn no_engine_means_no_render() {
        let source = MockSource::default();
        let mut force = true;
        let out = extract_page(&source, 0, None, &mut force, &config());
        assert_eq!(out.text, "");
        assert!(!source.calls.borrow().contains(&"render"));
    }

    #[test]
    fn text_layer_beats_forced_ocr() {
        let ocr = MockOcr {
            result: Ok("ocr text".into()),
        };
        let source = MockSource {
            plain: Some("layer text".into()),
            ..Default::default()
        };
        let mut force = true;
        let out = extract_page(&source, 0, Some(&ocr), &mut force, &config());
        assert_eq!(out.text, "layer text");
        assert!(!out.used_ocr);
    }
}
