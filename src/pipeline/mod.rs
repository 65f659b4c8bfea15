//! Pipeline stages for PDF-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different OCR engine) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ markdown
//! (path)    (cascade)   (assembly)
//!              │
//!              ├── source  (pdfium / lopdf text representations)
//!              ├── filter  (noise-line rejection)
//!              ├── render  (page rasterisation)
//!              └── ocr     (tesseract subprocess)
//! ```
//!
//! 1. [`input`]    — validate the user-supplied path, derive the output path
//! 2. [`extract`]  — per-page extraction cascade over a [`extract::PageTextSource`]
//! 3. [`source`]   — pdfium-backed source, plus lopdf for raw content streams
//! 4. [`filter`]   — reject embedded image/metadata noise lines
//! 5. [`render`]   — rasterise a page when OCR needs an image
//! 6. [`ocr`]      — drive the external tesseract binary
//! 7. [`markdown`] — assemble per-page results into one Markdown document

pub mod extract;
pub mod filter;
pub mod input;
pub mod markdown;
pub mod ocr;
pub mod render;
pub mod source;
