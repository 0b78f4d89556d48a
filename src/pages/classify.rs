use super::catalog::Page;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A run of two or more line breaks separated only by horizontal whitespace.
#[allow(clippy::expect_used)]
static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[ \t]*\r?\n)+").expect("valid blank-line regex"));

/// No known page marker occurs in the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("response does not match any known page")]
pub struct ClassificationError;

/// The excerpt markers of a page were not found in its body.
///
/// Carries the whole collapsed body so the failure report still has evidence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("diagnostic markers for page '{page}' not found ({missing} missing)")]
pub struct ExtractionError {
    pub page: Page,
    pub missing: &'static str,
    pub body: String,
}

/// Identify `body` against `pages`, first match wins.
pub fn classify(body: &str, pages: &[Page]) -> Result<Page, ClassificationError> {
    pages
        .iter()
        .copied()
        .find(|page| body.contains(page.descriptor().title_marker))
        .ok_or(ClassificationError)
}

/// Identify `body` against the full catalog.
pub fn identify(body: &str) -> Result<Page, ClassificationError> {
    classify(body, &Page::ALL)
}

/// Collapse every run of blank lines down to a single empty line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n\n").into_owned()
}

/// Cut the diagnostic excerpt for `page` out of `body`.
///
/// The excerpt starts at the first `extract_start` and stops before the first
/// `extract_end` found at or after it.
pub fn extract_diagnostic(body: &str, page: Page) -> Result<String, ExtractionError> {
    let descriptor = page.descriptor();
    let (start_marker, end_marker) = match (descriptor.extract_start, descriptor.extract_end) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => (start, end),
        _ => return Ok(collapse_blank_lines(body)),
    };

    let missing = |marker: &'static str| ExtractionError {
        page,
        missing: marker,
        body: collapse_blank_lines(body),
    };

    let start = body.find(start_marker).ok_or_else(|| missing(start_marker))?;
    let end = body[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .ok_or_else(|| missing(end_marker))?;

    Ok(collapse_blank_lines(&body[start..end]))
}
