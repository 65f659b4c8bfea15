//! Input validation and output-path derivation.
//!
//! Validation runs before any PDF engine is bound so that a typo'd path
//! fails fast with a clear message instead of a library-loading error.

use crate::error::PdfMarkError;
use std::path::{Path, PathBuf};

/// Validate that `path` points at an existing `.pdf` file.
///
/// Returns the path unchanged on success. The extension check is
/// case-insensitive (`.PDF` is accepted).
pub fn resolve_input(path: &Path) -> Result<PathBuf, PdfMarkError> {
    if !path.exists() {
        return Err(PdfMarkError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(PdfMarkError::InvalidInput {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// Derive the default output path for an input PDF: the file stem with a
/// `.md` extension, relative to the current working directory.
///
/// `docs/report.pdf` becomes `report.md` in the directory the tool was run
/// from, not next to the input.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{stem}.md"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_rejected() {
        let err = resolve_input(Path::new("/nonexistent/file.pdf")).unwrap_err();
        assert!(matches!(err, PdfMarkError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();
        let err = resolve_input(&path).unwrap_err();
        assert!(matches!(err, PdfMarkError::InvalidInput { .. }));
    }

    #[test]
    fn uppercase_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SCAN.PDF");
        fs::write(&path, "%PDF-1.4").unwrap();
        assert_eq!(resolve_input(&path).unwrap(), path);
    }

    #[test]
    fn output_path_is_stem_relative_to_cwd() {
        assert_eq!(
            derive_output_path(Path::new("docs/report.pdf")),
            PathBuf::from("report.md")
        );
        assert_eq!(
            derive_output_path(Path::new("/abs/path/scan.PDF")),
            PathBuf::from("scan.md")
        );
    }
}
