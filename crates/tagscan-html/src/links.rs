//! Hyperlink extraction.
//!
//! Anchors are matched by a dedicated pattern over the raw text; the tag
//! tokenizer and the balance state of the document play no part.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `<a` + whitespace, the first `href="..."` of the opening tag, then the
/// shortest body up to `</a>`.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s+[^>]*?href="([^"]*)"[^>]*>(.*?)</a>"#)
        .expect("ANCHOR_RE: hardcoded regex is valid")
});

/// A hyperlink found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkRecord {
    /// Anchor body with whitespace runs collapsed to one space and trimmed.
    /// Markup inside the anchor is kept as written.
    pub text: String,
    /// The `href` value exactly as written (no entity decoding).
    pub url: String,
}

impl LinkRecord {
    /// Create a link record.
    #[must_use]
    pub fn new(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
        }
    }
}

/// Extract every `<a href="...">...</a>` of `html`, in document order.
///
/// Matching is ASCII case-insensitive and spans line breaks. Anchors without
/// a double-quoted `href` produce nothing. Duplicates are kept.
#[must_use]
pub fn extract_links(html: &str) -> Vec<LinkRecord> {
    ANCHOR_RE
        .captures_iter(html)
        .map(|caps| LinkRecord {
            text: collapse_whitespace(caps.get(2).map_or("", |m| m.as_str())),
            url: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        })
        .collect()
}

/// Replace every whitespace run with a single space and trim both ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
