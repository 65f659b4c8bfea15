//! Page rasterisation: render a PDF page to a `DynamicImage` via pdfium.
//!
//! Only needed when OCR runs, so rendering is on-demand per page and the
//! bitmap is dropped as soon as recognition finishes. Sizing is zoom-based
//! rather than DPI-based: a linear zoom of 2.0 over the page's point size
//! lands around 144 DPI, plenty for tesseract on ordinary body text.

use crate::error::PdfMarkError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::debug;

/// Rasterise one page at the given linear zoom.
pub fn render_page(
    page: &PdfPage<'_>,
    page_index: usize,
    zoom: f32,
) -> Result<DynamicImage, PdfMarkError> {
    let target_width = (page.width().value * zoom) as i32;
    let max_height = (page.height().value * zoom) as i32;

    let render_config = PdfRenderConfig::new()
        .set_target_width(target_width.max(1))
        .set_maximum_height(max_height.max(1));

    let bitmap =
        page.render_with_config(&render_config)
            .map_err(|e| PdfMarkError::RenderFailed {
                page: page_index + 1,
                detail: format!("{:?}", e),
            })?;

    let image = bitmap.as_image();
    debug!(
        "rendered page {} at zoom {zoom} → {}x{} px",
        page_index + 1,
        image.width(),
        image.height()
    );

    Ok(image)
}
