//! Image extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `<img` + whitespace, then attribute text up to the first `>`. A trailing
/// `/` is not part of the captured attributes.
static IMG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<img\s+([^>]*?)/?>").expect("IMG_RE: hardcoded regex is valid")
});

static SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src="([^"]*)""#).expect("SRC_RE: hardcoded regex is valid")
});

static ALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)alt="([^"]*)""#).expect("ALT_RE: hardcoded regex is valid")
});

/// An image found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageRecord {
    /// The `src` value as written, or empty when absent.
    pub src: String,
    /// The `alt` value as written, or empty when absent.
    pub alt: String,
}

impl ImageRecord {
    /// Create an image record.
    #[must_use]
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }
}

/// Extract every `<img ...>` of `html`, in document order.
///
/// `src` and `alt` are looked up independently inside the tag's attribute
/// text; each must be double-quoted to be found. A bare `<img>` has no
/// attribute text and produces nothing.
#[must_use]
pub fn extract_images(html: &str) -> Vec<ImageRecord> {
    IMG_RE
        .captures_iter(html)
        .map(|caps| {
            let attributes = caps.get(1).map_or("", |m| m.as_str());
            ImageRecord {
                src: quoted_value(&SRC_RE, attributes),
                alt: quoted_value(&ALT_RE, attributes),
            }
        })
        .collect()
}

fn quoted_value(pattern: &Regex, attributes: &str) -> String {
    pattern
        .captures(attributes)
        .and_then(|caps| caps.get(1))
        .map_or_else(String::new, |m| m.as_str().to_string())
}
