//! Blind positional fallback.
//!
//! Takes the Nth `.htlgb` value element on the page, with no semantic
//! anchor at all. If the layout shifts this silently returns whatever
//! text now sits at that index. Last resort only.

use super::dom::{trimmed_text, Document};
use super::VALUE_PATTERN;
use scraper::Selector;

/// Zero-based index of the value element that held the version in
/// observed page layouts. Layout-dependent; retune here if the page
/// drifts.
pub const POSITIONAL_VALUE_INDEX: usize = 6;

/// Extract the value element at [`POSITIONAL_VALUE_INDEX`].
pub fn extract(doc: &Document) -> Option<String> {
    extract_at(doc, POSITIONAL_VALUE_INDEX)
}

/// Same lookup at an explicit index.
pub fn extract_at(doc: &Document, index: usize) -> Option<String> {
    let sel = Selector::parse(VALUE_PATTERN).unwrap();
    let el = doc.select_all(&sel).into_iter().nth(index)?;
    let text = trimmed_text(&el);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
