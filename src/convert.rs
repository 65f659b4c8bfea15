//! Conversion entry points.
//!
//! [`convert`] opens a document, runs the extraction cascade over every page
//! in order, and assembles the Markdown result in memory. [`convert_to_file`]
//! additionally writes the result atomically.
//!
//! Pages are processed strictly sequentially: the OCR probe on page 1
//! decides whether later textless pages get OCR at all, so page order is
//! part of the semantics, not an implementation detail.

use crate::config::ConversionConfig;
use crate::error::PdfMarkError;
use crate::output::{ConversionOutput, ConversionStats, PageResult};
use crate::pipeline::extract::{extract_page, PageOutcome};
use crate::pipeline::ocr::{OcrEngine, TesseractOcr};
use crate::pipeline::source::PdfiumPageSource;
use crate::pipeline::{input, markdown};
use pdfium_render::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert a PDF file to Markdown.
///
/// This is the primary entry point for the library.
///
/// # Returns
/// `Ok(ConversionOutput)` on success, even when some or all pages produced
/// no text (check `output.stats.pages_with_text`).
///
/// # Errors
/// Returns `Err(PdfMarkError)` only for fatal errors: missing or non-PDF
/// input, an unusable pdfium library, or a document that cannot be opened.
/// Per-page extraction and OCR failures degrade to empty page text.
pub fn convert(
    input_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, PdfMarkError> {
    let total_start = Instant::now();
    let input_path = input_path.as_ref();
    info!("starting conversion: {}", input_path.display());

    // ── Step 1: Validate input ───────────────────────────────────────────
    // Runs before any pdfium binding so path errors stay path errors.
    let pdf_path = input::resolve_input(input_path)?;

    // ── Step 2: Bind pdfium and open the document ────────────────────────
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_file(&pdf_path, config.password.as_deref())
        .map_err(|e| map_load_error(e, &pdf_path, config.password.is_some()))?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    // ── Step 3: Best-effort raw-stream handle ────────────────────────────
    // lopdf backs the fourth cascade method only; a document it cannot
    // parse simply skips that method.
    let raw_doc = match lopdf::Document::load(&pdf_path) {
        Ok(doc) => Some(doc),
        Err(e) => {
            debug!("raw content-stream decoding unavailable: {e}");
            None
        }
    };

    // ── Step 4: Probe OCR once per run ───────────────────────────────────
    let ocr = TesseractOcr::detect(&config.ocr_languages, &config.ocr_fallback_language);
    let ocr_available = ocr.is_some();
    if !ocr_available {
        warn!("tesseract not found on PATH; image-based pages will have no text");
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(total_pages);
    }

    // ── Step 5: Sequential page loop ─────────────────────────────────────
    let mut force_ocr = config.force_ocr;
    let mut page_results: Vec<PageResult> = Vec::with_capacity(total_pages);

    for (page_index, page) in pages.iter().enumerate() {
        let page_number = page_index + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_start(page_number, total_pages);
        }

        let source = PdfiumPageSource::new(&page, raw_doc.as_ref(), page_index);
        let PageOutcome { text, used_ocr } = extract_page(
            &source,
            page_index,
            ocr.as_ref().map(|e| e as &dyn OcrEngine),
            &mut force_ocr,
            config,
        );

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(page_number, total_pages, text.len(), used_ocr);
        }

        page_results.push(PageResult {
            page_number,
            text,
            used_ocr,
        });
    }

    // ── Step 6: Assemble document ────────────────────────────────────────
    let title = pdf_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();
    let markdown = markdown::render_document(&title, &page_results);

    // ── Step 7: Compute stats ────────────────────────────────────────────
    let pages_with_text = page_results.iter().filter(|p| p.has_text()).count();
    let ocr_pages = page_results.iter().filter(|p| p.used_ocr).count();

    let stats = ConversionStats {
        total_pages,
        pages_with_text,
        ocr_pages,
        ocr_available,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    if ocr_pages > 0 {
        info!("OCR supplied text for {ocr_pages} page(s)");
    }
    if pages_with_text == 0 && !ocr_available {
        warn!(
            "no text extracted from any page; the document may be scanned.\n\
             Install tesseract (e.g. `apt install tesseract-ocr`) and re-run."
        );
    }
    info!(
        "conversion complete: {}/{} pages with text, {}ms total",
        pages_with_text, total_pages, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total_pages, pages_with_text);
    }

    Ok(ConversionOutput {
        markdown,
        pages: page_results,
        stats,
    })
}

/// Convert a PDF and write the Markdown to a file.
///
/// Uses an atomic write (temp file + rename) so a crash mid-write never
/// leaves a truncated output file. An existing file at `output_path` is
/// overwritten.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, PdfMarkError> {
    let output = convert(input_path, config)?;
    let path = output_path.as_ref();

    let write_err = |e: std::io::Error| PdfMarkError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    fs::write(&tmp_path, &output.markdown).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)?;

    info!("wrote {}", path.display());
    Ok(output)
}

/// Derive the default output path for an input PDF.
///
/// Re-exported at the crate root; see [`input::derive_output_path`].
pub fn derive_output_path(input: &Path) -> std::path::PathBuf {
    input::derive_output_path(input)
}

/// Bind to a pdfium shared library: current directory first, then the
/// system library path.
fn bind_pdfium() -> Result<Pdfium, PdfMarkError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| PdfMarkError::PdfiumBindingFailed(format!("{:?}", e)))
}

/// Map a pdfium document-open error onto the password/corrupt taxonomy.
fn map_load_error(e: PdfiumError, path: &Path, had_password: bool) -> PdfMarkError {
    let err_str = format!("{:?}", e);
    if err_str.contains("Password") || err_str.contains("password") {
        if had_password {
            PdfMarkError::WrongPassword {
                path: path.to_path_buf(),
            }
        } else {
            PdfMarkError::PasswordRequired {
                path: path.to_path_buf(),
            }
        }
    } else {
        PdfMarkError::CorruptPdf {
            path: path.to_path_buf(),
            detail: err_str,
        }
    }
}
