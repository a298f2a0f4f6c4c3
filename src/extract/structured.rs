//! JSON-LD extraction.
//!
//! The Play Store embeds `application/ld+json` blocks describing the
//! app. `softwareVersion` is the closest thing to a stable contract
//! the page offers, so this strategy runs first in the chain.

use super::dom::Document;
use scraper::Selector;
use serde_json::Value;

/// Version-bearing field names, checked in order within a record.
const VERSION_FIELDS: [&str; 2] = ["softwareVersion", "version"];

/// Extract a version from JSON-LD blocks, first hit in document order.
///
/// Malformed blocks are skipped; one broken block must not abort the
/// search through the rest.
pub fn extract(doc: &Document) -> Option<String> {
    let sel = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
    for element in doc.select_all(&sel) {
        let text = element.inner_html();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let value: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("skipping malformed JSON-LD block: {e}");
                continue;
            }
        };
        for record in candidate_records(&value) {
            for field in VERSION_FIELDS {
                if let Some(v) = record.get(field).and_then(|v| v.as_str()) {
                    let v = v.trim();
                    if !v.is_empty() {
                        return Some(v.to_string());
                    }
                }
            }
        }
    }
    None
}

/// Normalize a parsed JSON-LD value into a flat candidate sequence.
///
/// A block may hold a single object, an array of objects, or an object
/// wrapping an `@graph` array.
fn candidate_records(value: &Value) -> Vec<&Value> {
    if let Some(arr) = value.as_array() {
        arr.iter().collect()
    } else if let Some(graph) = value.get("@graph").and_then(|g| g.as_array()) {
        graph.iter().collect()
    } else {
        vec![value]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(jsonld: &str) -> String {
        format!(
            r#"<html><head>
            <script type="application/ld+json">{jsonld}</script>
            </head><body></body></html>"#
        )
    }

    #[test]
    fn test_software_version_field() {
        let html = page(r#"{"@type": "SoftwareApplication", "softwareVersion": "4.2.0"}"#);
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc).as_deref(), Some("4.2.0"));
    }

    #[test]
    fn test_generic_version_field() {
        let html = page(r#"{"@type": "SoftwareApplication", "version": "1.0.3"}"#);
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc).as_deref(), Some("1.0.3"));
    }

    #[test]
    fn test_software_version_preferred_within_record() {
        let html = page(r#"{"softwareVersion": "2.0.0", "version": "9.9.9"}"#);
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc).as_deref(), Some("2.0.0"));
    }

    #[test]
    fn test_array_of_records() {
        let html = page(
            r#"[{"@type": "Organization", "name": "Acme"},
                {"@type": "SoftwareApplication", "softwareVersion": "7.1"}]"#,
        );
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc).as_deref(), Some("7.1"));
    }

    #[test]
    fn test_graph_wrapper() {
        let html = page(
            r#"{"@context": "https://schema.org",
                "@graph": [{"@type": "WebSite"},
                           {"@type": "SoftwareApplication", "softwareVersion": "3.3"}]}"#,
        );
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc).as_deref(), Some("3.3"));
    }

    #[test]
    fn test_malformed_block_skipped() {
        let html = r#"<html><head>
            <script type="application/ld+json">{not valid json}</script>
            <script type="application/ld+json">{"softwareVersion": "5.5.5"}</script>
            </head><body></body></html>"#;
        let doc = Document::parse(html);
        assert_eq!(extract(&doc).as_deref(), Some("5.5.5"));
    }

    #[test]
    fn test_empty_and_whitespace_values_skipped() {
        let html = page(r#"[{"softwareVersion": "   "}, {"version": "1.2"}]"#);
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc).as_deref(), Some("1.2"));
    }

    #[test]
    fn test_absent_when_no_version_anywhere() {
        let html = page(r#"{"@type": "Organization", "name": "Acme"}"#);
        let doc = Document::parse(&html);
        assert_eq!(extract(&doc), None);
    }

    #[test]
    fn test_absent_without_jsonld() {
        let doc = Document::parse("<html><body><p>no metadata</p></body></html>");
        assert_eq!(extract(&doc), None);
    }
}
