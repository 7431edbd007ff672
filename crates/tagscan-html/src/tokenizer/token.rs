use core::fmt;

use serde::Serialize;

use crate::void_elements::is_void_element;

/// One `<...>` construct recognized by the tag tokenizer.
///
/// Attribute text is not kept; only whether the tag closes and its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TagEvent {
    /// Set when a `/` follows the `<` (whitespace around it allowed).
    pub is_closing: bool,
    /// Tag name, ASCII lower-cased.
    pub name: String,
}

impl TagEvent {
    /// An opening tag event. The name is lower-cased.
    #[must_use]
    pub fn open(name: &str) -> Self {
        Self {
            is_closing: false,
            name: name.to_ascii_lowercase(),
        }
    }

    /// A closing tag event. The name is lower-cased.
    #[must_use]
    pub fn close(name: &str) -> Self {
        Self {
            is_closing: true,
            name: name.to_ascii_lowercase(),
        }
    }

    /// Whether the tag names a void element (`br`, `img`, ...).
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }
}

impl fmt::Display for TagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_closing {
            write!(f, "</{}>", self.name)
        } else {
            write!(f, "<{}>", self.name)
        }
    }
}
