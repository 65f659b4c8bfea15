//! Configuration types for PDF-to-Markdown conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Callers set only what they care about
//! and rely on documented defaults for the rest.

use crate::error::PdfMarkError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Configuration for a PDF-to-Markdown conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdfmark::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .force_ocr(true)
///     .ocr_languages("deu+eng")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Run OCR on every page regardless of whether a text layer exists.
    /// Default: false.
    ///
    /// Without this flag OCR is only attempted on pages that produced no
    /// text through any extraction method, and only once page 1 has shown
    /// the document to be image-based.
    pub force_ocr: bool,

    /// Language pair passed to tesseract via `-l`. Default: "kor+eng".
    ///
    /// Multi-language packs are joined with `+`. If recognition with this
    /// value fails (typically a missing traineddata file), the engine
    /// retries once with [`ocr_fallback_language`](Self::ocr_fallback_language).
    pub ocr_languages: String,

    /// Single language used for the retry after a failed primary attempt.
    /// Default: "eng".
    pub ocr_fallback_language: String,

    /// Linear zoom factor applied when rasterising a page for OCR.
    /// Range: 1.0–4.0. Default: 2.0 (≈144 DPI).
    ///
    /// 2.0 keeps 10 pt body text readable for tesseract without producing
    /// oversized intermediate images.
    pub ocr_zoom: f32,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Optional per-page progress callback.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            force_ocr: false,
            ocr_languages: "kor+eng".to_string(),
            ocr_fallback_language: "eng".to_string(),
            ocr_zoom: 2.0,
            password: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("force_ocr", &self.force_ocr)
            .field("ocr_languages", &self.ocr_languages)
            .field("ocr_fallback_language", &self.ocr_fallback_language)
            .field("ocr_zoom", &self.ocr_zoom)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn force_ocr(mut self, v: bool) -> Self {
        self.config.force_ocr = v;
        self
    }

    pub fn ocr_languages(mut self, langs: impl Into<String>) -> Self {
        self.config.ocr_languages = langs.into();
        self
    }

    pub fn ocr_fallback_language(mut self, lang: impl Into<String>) -> Self {
        self.config.ocr_fallback_language = lang.into();
        self
    }

    pub fn ocr_zoom(mut self, zoom: f32) -> Self {
        self.config.ocr_zoom = zoom.clamp(1.0, 4.0);
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, PdfMarkError> {
        let c = &self.config;
        if c.ocr_languages.trim().is_empty() {
            return Err(PdfMarkError::InvalidConfig(
                "OCR language list must not be empty".into(),
            ));
        }
        if c.ocr_fallback_language.trim().is_empty() {
            return Err(PdfMarkError::InvalidConfig(
                "OCR fallback language must not be empty".into(),
            ));
        }
        if !(1.0..=4.0).contains(&c.ocr_zoom) {
            return Err(PdfMarkError::InvalidConfig(format!(
                "OCR zoom must be 1.0–4.0, got {}",
                c.ocr_zoom
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ConversionConfig::default();
        assert!(!c.force_ocr);
        assert_eq!(c.ocr_languages, "kor+eng");
        assert_eq!(c.ocr_fallback_language, "eng");
        assert_eq!(c.ocr_zoom, 2.0);
        assert!(c.password.is_none());
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let c = ConversionConfig::builder()
            .force_ocr(true)
            .ocr_languages("deu")
            .ocr_fallback_language("fra")
            .ocr_zoom(3.0)
            .password("secret")
            .build()
            .unwrap();
        assert!(c.force_ocr);
        assert_eq!(c.ocr_languages, "deu");
        assert_eq!(c.ocr_fallback_language, "fra");
        assert_eq!(c.ocr_zoom, 3.0);
        assert_eq!(c.password.as_deref(), Some("secret"));
    }

    #[test]
    fn zoom_is_clamped() {
        let c = ConversionConfig::builder().ocr_zoom(10.0).build().unwrap();
        assert_eq!(c.ocr_zoom, 4.0);
        let c = ConversionConfig::builder().ocr_zoom(0.1).build().unwrap();
        assert_eq!(c.ocr_zoom, 1.0);
    }

    #[test]
    fn empty_language_list_rejected() {
        let err = ConversionConfig::builder()
            .ocr_languages("  ")
            .build()
            .unwrap_err();
        assert!(matches!(err, PdfMarkError::InvalidConfig(_)));
    }

    #[test]
    fn debug_redacts_password() {
        let c = ConversionConfig::builder()
            .password("hunter2")
            .build()
            .unwrap();
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("redacted"));
    }
}
