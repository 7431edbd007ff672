//! Tag balance verification.
//!
//! A single left-to-right pass over the tag stream with a stack of open tag
//! names:
//! - void elements are skipped, whether opening or closing
//! - an opening tag pushes its name
//! - a closing tag must match the top of the stack exactly, which is popped
//!
//! The document is balanced when the stream ends with an empty stack.

use core::fmt;

use serde::Serialize;

use crate::tokenizer::{TagEvent, tokenize};

/// The outcome of a balance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum BalanceVerdict {
    /// Every non-void tag was closed in LIFO order.
    Balanced,
    /// A closing tag did not match the most recently opened tag.
    UnexpectedClose {
        /// Name of the offending closing tag.
        found: String,
        /// The innermost open tag at that point, `None` if nothing was open.
        expected: Option<String>,
    },
    /// Input ended with tags still open.
    Unclosed {
        /// The open tags, outermost first.
        open: Vec<String>,
    },
}

impl BalanceVerdict {
    /// Whether the verdict is [`BalanceVerdict::Balanced`].
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }
}

impl fmt::Display for BalanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::UnexpectedClose {
                found,
                expected: Some(expected),
            } => write!(f, "unexpected </{found}> while <{expected}> is open"),
            Self::UnexpectedClose {
                found,
                expected: None,
            } => write!(f, "unexpected </{found}> with no open tag"),
            Self::Unclosed { open } => {
                let tags: Vec<String> = open.iter().map(|name| format!("<{name}>")).collect();
                write!(f, "unclosed {}", tags.join(" "))
            }
        }
    }
}

/// Check whether the tags of `html` are properly nested and closed.
#[must_use]
pub fn is_balanced(html: &str) -> bool {
    check_balance(html).is_balanced()
}

/// Check the tags of `html` and describe the first violation, if any.
#[must_use]
pub fn check_balance(html: &str) -> BalanceVerdict {
    check_events(tokenize(html))
}

/// Run the balance check over an already tokenized tag stream.
///
/// Stops at the first closing tag that does not match.
#[must_use]
pub fn check_events<I>(events: I) -> BalanceVerdict
where
    I: IntoIterator<Item = TagEvent>,
{
    let mut open_tags: Vec<String> = Vec::new();

    for event in events {
        if event.is_void() {
            continue;
        }
        if !event.is_closing {
            open_tags.push(event.name);
            continue;
        }
        if open_tags.last().is_some_and(|top| *top == event.name) {
            let _ = open_tags.pop();
        } else {
            return BalanceVerdict::UnexpectedClose {
                found: event.name,
                expected: open_tags.pop(),
            };
        }
    }

    if open_tags.is_empty() {
        BalanceVerdict::Balanced
    } else {
        BalanceVerdict::Unclosed { open: open_tags }
    }
}
