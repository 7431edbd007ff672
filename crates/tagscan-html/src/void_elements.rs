//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//!
//! "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
//! source, track, wbr"
//!
//! `param` is obsolete in the living standard but is still written without a
//! closing tag in the wild, so it stays in the table.

/// Tag names that never take a closing tag, sorted.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `name` is a void element. ASCII case-insensitive.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(name))
}
