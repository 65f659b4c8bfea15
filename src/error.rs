//! Error types for the pdfmark library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`PdfMarkError`] — **Fatal**: the conversion cannot proceed at all
//!   (bad input path, wrong extension, corrupt document, unwritable output).
//!   Returned as `Err(PdfMarkError)` from the top-level `convert*` functions.
//!
//! * [`OcrError`] — **Non-fatal**: one OCR attempt on one page failed
//!   (missing language pack, tesseract exited non-zero). The cascade logs a
//!   warning, records the page as textless, and the conversion continues.
//!
//! Per-page extraction failures never escalate to document-level failure;
//! only pre-flight validation and the open/extract/write bracket abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdfmark library.
///
/// Page-level OCR failures use [`OcrError`] and are handled inside the
/// extraction cascade rather than propagated here.
#[derive(Debug, Error)]
pub enum PdfMarkError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// The input path does not carry the expected `.pdf` extension.
    #[error("Input file must be a PDF: '{path}'")]
    InvalidInput { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// Text extraction failed for a specific page.
    ///
    /// Only surfaced through the fallible [`PageTextSource`] methods; the
    /// cascade swallows it as "no text produced".
    ///
    /// [`PageTextSource`]: crate::pipeline::extract::PageTextSource
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtraction { page: usize, detail: String },

    /// Rasterising a page for OCR input failed.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Place libpdfium in the current directory or install it system-wide.\n\
Prebuilt binaries: https://github.com/bblanchon/pdfium-binaries/releases\n"
    )]
    PdfiumBindingFailed(String),
}

/// A non-fatal OCR failure for a single page.
///
/// Returned by [`crate::pipeline::ocr::OcrEngine::recognize`] after both the
/// primary language pair and the fallback language have been attempted. The
/// cascade treats the page as textless; the overall conversion continues.
#[derive(Debug, Error)]
pub enum OcrError {
    /// Temp-file plumbing around the tesseract call failed.
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered page image could not be encoded to PNG.
    #[error("Failed to encode page image for OCR: {detail}")]
    ImageEncode { detail: String },

    /// tesseract ran but exited non-zero (e.g. missing language pack).
    #[error("Text recognition failed: {detail}")]
    Recognition { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = PdfMarkError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/missing.pdf"), "got: {msg}");
        assert!(msg.contains("not found"));
    }

    #[test]
    fn invalid_input_display() {
        let e = PdfMarkError::InvalidInput {
            path: PathBuf::from("notes.txt"),
        };
        assert!(e.to_string().contains("must be a PDF"));
    }

    #[test]
    fn text_extraction_display_names_page() {
        let e = PdfMarkError::TextExtraction {
            page: 7,
            detail: "unsupported encoding".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 7"));
        assert!(msg.contains("unsupported encoding"));
    }

    #[test]
    fn output_write_failed_preserves_source() {
        use std::error::Error as _;
        let e = PdfMarkError::OutputWriteFailed {
            path: PathBuf::from("out.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("out.md"));
        assert!(e.source().is_some());
    }

    #[test]
    fn ocr_recognition_display() {
        let e = OcrError::Recognition {
            detail: "Error opening data file kor.traineddata".into(),
        };
        assert!(e.to_string().contains("kor.traineddata"));
    }
}
