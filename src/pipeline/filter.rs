//! Noise filtering for extracted page text.
//!
//! PDF text layers frequently leak extraction artifacts: inline image
//! references (`<image: DeviceRGB, width: 595, height: 842, bpc: 8>`),
//! colour-profile names (`ICCBased`), and bare dimension fragments. These
//! rules drop them so only human-authored content reaches the output.
//!
//! Two tiers exist on purpose. [`is_content_line`] is the aggressive per-line
//! filter used on plain-text extraction, where artifacts appear as standalone
//! lines. [`is_content_block`] is a restricted check for block/structured/raw
//! extraction, where `width:`/`height:` can be legitimate content (CSS
//! snippets, form labels) and only unambiguous artifacts are rejected.

/// Decide whether a plain-text line is real content.
///
/// The line is trimmed first. Rejected when it:
/// - starts with `<image:` or `image:`
/// - contains `ICCBased`, `width:`, or `height:`
/// - is empty
pub fn is_content_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    if line.starts_with("<image:") || line.starts_with("image:") {
        return false;
    }
    if line.contains("ICCBased") || line.contains("width:") || line.contains("height:") {
        return false;
    }
    true
}

/// Restricted artifact check for block-level text.
///
/// Rejects only whitespace-only text, text starting with `<image:`, or text
/// containing `ICCBased`. Everything else passes.
pub fn is_content_block(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    if text.starts_with("<image:") {
        return false;
    }
    if text.contains("ICCBased") {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_filter_rejects_artifacts() {
        let rejected = [
            "",
            "   ",
            "<image: DeviceRGB, width: 595, height: 842, bpc: 8>",
            "image: DeviceGray",
            "  <image: xref 12>",
            "profile ICCBased stream",
            "width: 595",
            "page height: 842px",
        ];
        for line in rejected {
            assert!(!is_content_line(line), "should reject: {line:?}");
        }
    }

    #[test]
    fn line_filter_keeps_content() {
        let kept = [
            "Hello World",
            "  indented paragraph text  ",
            "The image shows a cat.", // "image" not at line start
            "Widths vary by font.",   // "width" without colon
        ];
        for line in kept {
            assert!(is_content_line(line), "should keep: {line:?}");
        }
    }

    #[test]
    fn block_filter_is_restricted() {
        assert!(!is_content_block(""));
        assert!(!is_content_block("  \n "));
        assert!(!is_content_block("<image: DeviceRGB>"));
        assert!(!is_content_block("stream uses ICCBased profile"));

        // Passes the restricted check even though the line filter would not.
        assert!(is_content_block("width: 595"));
        assert!(is_content_block("height: 842"));
        assert!(is_content_block("image: embedded")); // bare prefix only rejected per-line
        assert!(is_content_block("Regular paragraph"));
    }
}
