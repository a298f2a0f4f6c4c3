//! Labeled-field extraction from the rendered layout.
//!
//! The mobile Play Store page renders app metadata as `div.hAyfc`
//! blocks pairing a `.BgcNfc` label with an `.htlgb` value. Less
//! stable than JSON-LD, more stable than blind positional indexing.

use super::dom::{trimmed_text, Document};
use super::VALUE_PATTERN;
use scraper::Selector;

/// Known English phrasings of the version label, matched exactly.
const VERSION_LABELS: [&str; 2] = ["Current Version", "Current version"];

/// Extract the value of the first block whose label means "version".
///
/// A matched block with an empty value does not stop the scan; later
/// blocks may still carry the version.
pub fn extract(doc: &Document) -> Option<String> {
    let block_sel = Selector::parse("div.hAyfc").unwrap();
    let label_sel = Selector::parse(".BgcNfc").unwrap();
    let value_sel = Selector::parse(VALUE_PATTERN).unwrap();

    for block in doc.select_all(&block_sel) {
        let label = match block.select(&label_sel).next() {
            Some(el) => trimmed_text(&el),
            None => continue,
        };
        if label.is_empty() || !label_matches(&label) {
            continue;
        }
        if let Some(value_el) = block.select(&value_sel).next() {
            let value = trimmed_text(&value_el);
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

/// Exact English label match, with a locale-tolerant substring fallback.
fn label_matches(label: &str) -> bool {
    VERSION_LABELS.contains(&label) || label.to_lowercase().contains("version")
}
