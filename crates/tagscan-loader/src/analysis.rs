use std::collections::BTreeMap;

use serde::Serialize;
use tagscan_html::{
    BalanceVerdict, ImageRecord, LinkRecord, check_balance, extract_images, extract_links,
    tokenize,
};

use crate::source::LoadedDocument;

/// Tags whose counts are reported for every document.
pub const REPORTED_TAGS: [&str; 11] = [
    "a", "img", "br", "div", "li", "ul", "p", "span", "table", "td", "tr",
];

/// How many times a tag was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Lower-case tag name.
    pub name: String,
    /// Number of opening tags seen.
    pub count: usize,
}

/// Everything tagscan reports about one document.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Human-readable source name.
    pub source: String,
    /// Prefix for the list files.
    pub stem: String,
    /// Links, in document order.
    pub links: Vec<LinkRecord>,
    /// Images, in document order.
    pub images: Vec<ImageRecord>,
    /// Tag balance verdict.
    pub balance: BalanceVerdict,
    /// Counts for [`REPORTED_TAGS`], in that order.
    pub tag_counts: Vec<TagCount>,
}

impl Analysis {
    /// Whether the document's tags are balanced.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.balance.is_balanced()
    }
}

/// Analyze a loaded document.
#[must_use]
pub fn analyze(document: &LoadedDocument) -> Analysis {
    let html = &document.html;
    let counts = count_opening_tags(html);
    let tag_counts = REPORTED_TAGS
        .iter()
        .map(|&name| TagCount {
            name: name.to_string(),
            count: counts.get(name).copied().unwrap_or(0),
        })
        .collect();

    Analysis {
        source: document.source.label(),
        stem: document.source.output_stem(),
        links: extract_links(html),
        images: extract_images(html),
        balance: check_balance(html),
        tag_counts,
    }
}

/// Count opening tags by name.
///
/// Counts come from the tag stream, not from a tree: an element closed
/// implicitly still counts once, a stray closing tag not at all.
#[must_use]
pub fn count_opening_tags(html: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in tokenize(html).filter(|event| !event.is_closing) {
        *counts.entry(event.name).or_insert(0) += 1;
    }
    counts
}
