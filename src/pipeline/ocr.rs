//! OCR via the external `tesseract` binary.
//!
//! OCR is deliberately not linked in: tesseract's C++ API is a heavy build
//! dependency and the subprocess boundary keeps its crashes out of our
//! address space. The rendered page is written as a PNG to a temp directory
//! and tesseract prints recognised text to stdout.

use crate::error::OcrError;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// A text-recognition engine operating on rasterised page images.
///
/// Trait seam so the extraction cascade can be unit-tested with a mock
/// engine and so alternative backends can be slotted in.
pub trait OcrEngine {
    /// Recognise text in the image. The returned string is trimmed.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

/// [`OcrEngine`] backed by the `tesseract` command-line binary.
///
/// Recognition runs with the configured language pair first (documents in
/// the expected domain are mixed Korean/English, hence the `kor+eng`
/// default); any failure triggers one retry with the single fallback
/// language before giving up on the page.
pub struct TesseractOcr {
    command: PathBuf,
    languages: String,
    fallback_language: String,
}

impl TesseractOcr {
    /// Probe PATH for a tesseract binary.
    ///
    /// Returns `None` when the binary is absent; the conversion then runs
    /// without OCR and textless pages get the placeholder section.
    pub fn detect(languages: &str, fallback_language: &str) -> Option<Self> {
        match which::which("tesseract") {
            Ok(command) => {
                debug!("found tesseract at {}", command.display());
                Some(Self {
                    command,
                    languages: languages.to_string(),
                    fallback_language: fallback_language.to_string(),
                })
            }
            Err(_) => None,
        }
    }

    #[cfg(test)]
    fn with_command(command: impl Into<PathBuf>, languages: &str, fallback: &str) -> Self {
        Self {
            command: command.into(),
            languages: languages.to_string(),
            fallback_language: fallback.to_string(),
        }
    }

    fn run(&self, image_path: &Path, language: &str) -> Result<String, OcrError> {
        // `stdout` as the output base makes tesseract print to stdout.
        // PSM 1: automatic page segmentation with orientation detection,
        // the right mode for whole scanned pages.
        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .arg("--psm")
            .arg("1")
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition {
                detail: format!(
                    "tesseract exited with {} (lang {language}): {}",
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let dir = tempfile::tempdir()?;
        let image_path = dir.path().join("page.png");
        image
            .save(&image_path)
            .map_err(|e| OcrError::ImageEncode {
                detail: e.to_string(),
            })?;

        match self.run(&image_path, &self.languages) {
            Ok(text) => Ok(text),
            Err(primary_err) => {
                warn!(
                    "OCR with '{}' failed ({primary_err}), retrying with '{}'",
                    self.languages, self.fallback_language
                );
                self.run(&image_path, &self.fallback_language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_fails_both_attempts() {
        let engine = TesseractOcr::with_command(
            "/nonexistent/tesseract-binary-for-test",
            "kor+eng",
            "eng",
        );
        let image = DynamicImage::new_rgb8(4, 4);
        let err = engine.recognize(&image).unwrap_err();
        assert!(matches!(err, OcrError::Io(_)), "got: {err:?}");
    }

    #[test]
    fn detect_returns_none_without_binary() {
        // The probe looks for "tesseract" specifically; simulate its absence
        // by checking the contract through `which` on a bogus name.
        assert!(which::which("definitely-not-a-real-ocr-binary").is_err());
    }
}
