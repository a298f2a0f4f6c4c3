//! Three-tier version extraction over a fetched Play Store page.
//!
//! Strategies run in decreasing order of structural reliability:
//! JSON-LD metadata, then labeled layout blocks, then a blind
//! positional index. The first non-empty hit wins; partial signals
//! are never combined across strategies.

pub mod dom;
pub mod label;
pub mod positional;
pub mod structured;

use crate::error::LookupError;
use crate::fetch::PlayFetcher;
use dom::Document;
use serde::Serialize;

/// CSS pattern of a value sub-element in the rendered layout, shared
/// by the label and positional strategies.
pub(crate) const VALUE_PATTERN: &str = ".htlgb";

/// Sentinel the Play Store shows when the version differs per device.
const VARIES_SENTINEL: &str = "Varies with device";

/// Placeholder returned in place of the sentinel.
const VARIES_PLACEHOLDER: &str = "0.0.0";

/// A resolved lookup.
#[derive(Debug, Clone, Serialize)]
pub struct Lookup {
    #[serde(rename = "bundleId")]
    pub bundle_id: String,
    pub version: String,
}

/// Ordered extraction chain; index 0 is tried first.
const STRATEGIES: [fn(&Document) -> Option<String>; 3] =
    [structured::extract, label::extract, positional::extract];

/// Run the extraction chain over a fetched page body.
///
/// Parses the document once, short-circuits on the first strategy that
/// yields a value, and applies sentinel normalization to the result.
pub fn extract_version(html: &str) -> Result<String, LookupError> {
    let doc = Document::parse(html);
    let raw = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&doc))
        .ok_or(LookupError::ParseFailed)?;
    Ok(normalize(raw))
}

/// Rewrite the device-variance sentinel to the fixed placeholder.
fn normalize(raw: String) -> String {
    if raw == VARIES_SENTINEL {
        VARIES_PLACEHOLDER.to_string()
    } else {
        raw
    }
}

/// Fetch a package's details page and extract its published version.
///
/// The single await is the outbound GET; extraction is synchronous, so
/// dropping the returned future cancels the in-flight request with no
/// cleanup obligations.
pub async fn lookup(fetcher: &PlayFetcher, package_id: &str) -> Result<Lookup, LookupError> {
    let html = fetcher.fetch(package_id).await?;
    let version = extract_version(&html)?;
    Ok(Lookup {
        bundle_id: package_id.to_string(),
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"<html><head>
        <script type="application/ld+json">
        {"@type": "SoftwareApplication", "softwareVersion": "3.0.0"}
        </script>
        </head><body>
        <div class="hAyfc"><div class="BgcNfc">Current Version</div>
        <span class="htlgb">2.0.0</span></div>
        </body></html>"#;

    #[test]
    fn test_structured_data_wins_over_label() {
        assert_eq!(extract_version(FULL_PAGE).unwrap(), "3.0.0");
    }

    #[test]
    fn test_label_wins_over_positional() {
        let html = r#"<html><body>
            <span class="htlgb">a</span><span class="htlgb">b</span>
            <span class="htlgb">c</span><span class="htlgb">d</span>
            <span class="htlgb">e</span><span class="htlgb">f</span>
            <span class="htlgb">6.6.6</span>
            <div class="hAyfc"><div class="BgcNfc">Current Version</div>
            <span class="htlgb">1.2.3</span></div>
            </body></html>"#;
        assert_eq!(extract_version(html).unwrap(), "1.2.3");
    }

    #[test]
    fn test_positional_as_last_resort() {
        let html = r#"<html><body>
            <span class="htlgb">a</span><span class="htlgb">b</span>
            <span class="htlgb">c</span><span class="htlgb">d</span>
            <span class="htlgb">e</span><span class="htlgb">f</span>
            <span class="htlgb">9.9.9</span>
            </body></html>"#;
        assert_eq!(extract_version(html).unwrap(), "9.9.9");
    }

    #[test]
    fn test_sentinel_normalized() {
        let html = r#"<html><head>
            <script type="application/ld+json">
            {"softwareVersion": "Varies with device"}
            </script></head><body></body></html>"#;
        assert_eq!(extract_version(html).unwrap(), "0.0.0");
    }

    #[test]
    fn test_parse_failed_when_no_signal() {
        let html = "<html><body><p>nothing to see</p></body></html>";
        assert!(matches!(
            extract_version(html),
            Err(LookupError::ParseFailed)
        ));
    }

    #[test]
    fn test_idempotent_over_same_document() {
        let first = extract_version(FULL_PAGE).unwrap();
        let second = extract_version(FULL_PAGE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_leaves_ordinary_versions_alone() {
        assert_eq!(normalize("1.2.3".to_string()), "1.2.3");
        assert_eq!(normalize(VARIES_SENTINEL.to_string()), "0.0.0");
    }
}
