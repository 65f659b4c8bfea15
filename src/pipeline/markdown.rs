//! Markdown document assembly.
//!
//! Pure functions from per-page results to the final document string.
//! Given the same inputs the output is byte-identical; no timestamps,
//! environment data, or iteration-order dependence.

use crate::output::PageResult;

/// Placeholder emitted for a page that produced no text.
pub const NO_TEXT_PLACEHOLDER: &str =
    "*[No text content on this page - may be image-based PDF]*";

/// Assemble the full Markdown document.
///
/// Layout: `# <title>`, a horizontal rule, then one `## Page N` section per
/// page in ascending order, containing the cleaned page text or
/// [`NO_TEXT_PLACEHOLDER`].
pub fn render_document(title: &str, pages: &[PageResult]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(pages.len() * 3 + 2);
    parts.push(format!("# {title}\n"));
    parts.push("---\n".to_string());

    for page in pages {
        parts.push(format!("\n## Page {}\n", page.page_number));
        let cleaned = clean_page_text(&page.text);
        if cleaned.is_empty() {
            parts.push(NO_TEXT_PLACEHOLDER.to_string());
        } else {
            parts.push(cleaned);
        }
        parts.push("\n".to_string());
    }

    parts.join("\n")
}

/// Normalise page text for output: trim each line, drop blank lines,
/// preserve the original line order.
pub fn clean_page_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
