//! Integration tests for the tag tokenizer.

use tagscan_html::{TagEvent, tokenize};

/// Helper to tokenize a string and collect the events
fn events(input: &str) -> Vec<TagEvent> {
    tokenize(input).collect()
}

#[test]
fn test_plain_text_has_no_events() {
    assert!(events("Hello, world").is_empty());
    assert!(events("").is_empty());
}

#[test]
fn test_start_and_end_tag() {
    assert_eq!(
        events("<div>text</div>"),
        vec![TagEvent::open("div"), TagEvent::close("div")]
    );
}

#[test]
fn test_names_are_lowercased() {
    assert_eq!(
        events("<DIV><SpAn></SPAN></Div>"),
        vec![
            TagEvent::open("div"),
            TagEvent::open("span"),
            TagEvent::close("span"),
            TagEvent::close("div"),
        ]
    );
}

#[test]
fn test_attributes_are_discarded() {
    let tokens = events(r#"<a href="x.html" class='big' disabled>"#);
    assert_eq!(tokens, vec![TagEvent::open("a")]);
}

#[test]
fn test_self_closing_slash_is_not_closing() {
    assert_eq!(events("<br/>"), vec![TagEvent::open("br")]);
    assert_eq!(events("<br />"), vec![TagEvent::open("br")]);
}

#[test]
fn test_whitespace_around_slash() {
    assert_eq!(events("< / p >"), vec![TagEvent::close("p")]);
    assert_eq!(events("<  p>"), vec![TagEvent::open("p")]);
}

#[test]
fn test_name_is_alphanumeric_run() {
    assert_eq!(events("<h1>"), vec![TagEvent::open("h1")]);
    // The name stops at the first non-alphanumeric character.
    assert_eq!(events("<my-widget>"), vec![TagEvent::open("my")]);
}

#[test]
fn test_doctype_and_comments_are_skipped() {
    assert!(events("<!DOCTYPE html>").is_empty());
    assert!(events("<!-- note -->").is_empty());
    assert!(events("<?xml version=\"1.0\"?>").is_empty());
}

#[test]
fn test_tags_inside_comments_are_still_seen() {
    assert_eq!(events("<!-- <b> -->"), vec![TagEvent::open("b")]);
}

#[test]
fn test_unterminated_tag_is_dropped() {
    assert_eq!(events("<p>text<div class="), vec![TagEvent::open("p")]);
}

#[test]
fn test_stray_less_than_signs() {
    assert_eq!(events("<<p>"), vec![TagEvent::open("p")]);
    assert!(events("<>").is_empty());
    assert!(events("<//p>").is_empty());
    assert!(events("1 <= 2 and 3 > 2").is_empty());
}

#[test]
fn test_comparison_in_text_is_a_tag() {
    // Whitespace may follow '<', so "< b <p>" reads as a tag named "b".
    assert_eq!(events("a < b <p>"), vec![TagEvent::open("b")]);
}

#[test]
fn test_less_than_inside_tag_body() {
    // Everything up to the first '>' belongs to the first tag.
    assert_eq!(events("<p <b>"), vec![TagEvent::open("p")]);
}

#[test]
fn test_greater_than_inside_attribute_ends_tag() {
    let tokens = events(r#"<a title="x>y">z</a>"#);
    assert_eq!(tokens, vec![TagEvent::open("a"), TagEvent::close("a")]);
}

#[test]
fn test_tag_spanning_lines() {
    assert_eq!(
        events("<div\n  class=\"x\"\n>"),
        vec![TagEvent::open("div")]
    );
}

#[test]
fn test_tokenizer_is_lazy() {
    let mut tokenizer = tokenize("<a><b><c>");
    assert_eq!(tokenizer.next(), Some(TagEvent::open("a")));
    assert_eq!(tokenizer.next(), Some(TagEvent::open("b")));
    assert_eq!(tokenizer.next(), Some(TagEvent::open("c")));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_event_display() {
    assert_eq!(TagEvent::open("div").to_string(), "<div>");
    assert_eq!(TagEvent::close("div").to_string(), "</div>");
}

#[test]
fn test_event_is_void() {
    assert!(TagEvent::open("br").is_void());
    assert!(TagEvent::close("IMG").is_void());
    assert!(!TagEvent::open("div").is_void());
}
