//! Minimal parsed-document wrapper over `scraper`.
//!
//! Exposes just what the extraction strategies need: find-all by CSS
//! pattern and trimmed text. Descendant lookup within a matched
//! element goes through [`scraper::ElementRef::select`].

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page. Not `Send`; parse and consume it synchronously
/// after the fetch await completes so lookup futures stay `Send`.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML string into a document tree.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements matching a CSS selector, in document order.
    pub fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html.select(selector).collect()
    }
}

/// Element text with fragments joined by spaces, trimmed.
pub fn trimmed_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
