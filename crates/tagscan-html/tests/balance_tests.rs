//! Integration tests for the balance verifier.

use tagscan_html::{BalanceVerdict, TagEvent, check_balance, check_events, is_balanced};

#[test]
fn test_nested_tags_balanced() {
    assert!(is_balanced("<div><p>text</p></div>"));
}

#[test]
fn test_crossed_tags_unbalanced() {
    assert!(!is_balanced("<div><p>text</div></p>"));
}

#[test]
fn test_void_tag_without_close() {
    assert!(is_balanced("<br><div>x</div>"));
}

#[test]
fn test_empty_and_text_only_documents() {
    assert!(is_balanced(""));
    assert!(is_balanced("just some text"));
    assert!(is_balanced("<!DOCTYPE html>"));
}

#[test]
fn test_unclosed_tag() {
    assert_eq!(
        check_balance("<html><body><p>hi</body>"),
        BalanceVerdict::UnexpectedClose {
            found: "body".to_string(),
            expected: Some("p".to_string()),
        }
    );
    assert_eq!(
        check_balance("<ul><li>one"),
        BalanceVerdict::Unclosed {
            open: vec!["ul".to_string(), "li".to_string()],
        }
    );
}

#[test]
fn test_close_with_nothing_open() {
    assert_eq!(
        check_balance("</div>"),
        BalanceVerdict::UnexpectedClose {
            found: "div".to_string(),
            expected: None,
        }
    );
}

#[test]
fn test_strict_lifo_does_not_search_deeper() {
    // </div> matches an open tag, but not the top one.
    assert!(!is_balanced("<div><span></div>"));
}

#[test]
fn test_void_tags_never_affect_verdict() {
    assert!(is_balanced("<p><br></p>"));
    assert!(is_balanced("<p><br/></p>"));
    assert!(is_balanced("<p></br></p>"));
    assert!(is_balanced("</img><meta charset=\"utf-8\"><link rel=\"x\">"));
    assert!(!is_balanced("<p><hr><input></div>"));
}

#[test]
fn test_case_insensitive_matching() {
    assert!(is_balanced("<DIV><p>x</P></div>"));
}

#[test]
fn test_attributes_do_not_matter() {
    assert!(is_balanced(r#"<div id="a" class="b"><a href="/x">x</a></div>"#));
}

#[test]
fn test_full_page() {
    let html = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Test</title>
    <link rel="stylesheet" href="style.css">
  </head>
  <body>
    <!-- navigation -->
    <ul>
      <li><a href="/">Home</a></li>
      <li><a href="/about">About</a></li>
    </ul>
    <img src="logo.png" alt="Logo">
    <table><tr><td>1</td><td>2</td></tr></table>
  </body>
</html>
"#;
    assert!(is_balanced(html));
}

#[test]
fn test_check_events_directly() {
    let events = vec![
        TagEvent::open("a"),
        TagEvent::open("br"),
        TagEvent::close("a"),
    ];
    assert_eq!(check_events(events), BalanceVerdict::Balanced);
}

#[test]
fn test_verdict_display() {
    assert_eq!(BalanceVerdict::Balanced.to_string(), "balanced");
    assert_eq!(
        check_balance("<div><p></div>").to_string(),
        "unexpected </div> while <p> is open"
    );
    assert_eq!(
        check_balance("</p>").to_string(),
        "unexpected </p> with no open tag"
    );
    assert_eq!(
        check_balance("<div><span>").to_string(),
        "unclosed <div> <span>"
    );
}

#[test]
fn test_deep_nesting() {
    let depth = 10_000;
    let html = format!("{}{}", "<div>".repeat(depth), "</div>".repeat(depth));
    assert!(is_balanced(&html));
    assert!(!is_balanced(&html[..html.len() - "</div>".len()]));
}
