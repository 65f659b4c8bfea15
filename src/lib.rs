//! # pdfmark
//!
//! Convert PDF documents to Markdown, with OCR fallback for scanned pages.
//!
//! ## Why this crate?
//!
//! Most PDFs carry a text layer that simple extraction recovers cheaply. But
//! real document collections are messy: some pages expose text only through
//! block layout or individual text objects, some only through a raw decode of
//! the content stream, and scanned documents have no text layer at all. This
//! crate tries each representation in turn, cheapest first, and falls back to
//! OCR (via an external `tesseract` binary) only when every text-layer route
//! comes up empty.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path, derive output path
//!  ├─ 2. Extract  per-page cascade:
//!  │              plain text → blocks → text objects → raw stream → OCR
//!  ├─ 3. Filter   drop embedded image/metadata noise lines
//!  └─ 4. Output   assembled Markdown with one `## Page N` section per page
//! ```
//!
//! OCR is probed on page 1 only: if page 1 turns out to be image-based, OCR
//! stays enabled for every later textless page; otherwise later pages skip
//! the expensive render-and-recognise step entirely.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdfmark::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert("document.pdf", &config)?;
//!     println!("{}", output.markdown);
//!     eprintln!(
//!         "{}/{} pages with text",
//!         output.stats.pages_with_text, output.stats.total_pages
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Requirements
//!
//! - A pdfium shared library, either in the current directory or installed
//!   system-wide (prebuilt binaries: <https://github.com/bblanchon/pdfium-binaries>).
//! - Optionally, `tesseract` on PATH for OCR of scanned pages. Without it,
//!   image-based pages produce a placeholder section instead of text.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfmark` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdfmark = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_to_file, derive_output_path};
pub use error::{OcrError, PdfMarkError};
pub use output::{ConversionOutput, ConversionStats, PageResult};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
