//! Generic tag tokenizer.
//!
//! Recognizes `<`, optional whitespace, an optional `/`, optional whitespace,
//! an ASCII alphanumeric tag name, then anything up to the next `>`. Text
//! between tags, comments and doctypes produce no events.

/// Graphviz rendering of the tokenizer automaton.
pub mod automaton;
/// States, input classes and the transition function.
pub mod state_machine;
/// Tag events produced by the tokenizer.
pub mod token;

pub use state_machine::{Action, InputClass, TagTokenizer, TokenizerState, transition};
pub use token::TagEvent;

/// Tokenize `html` lazily into [`TagEvent`]s, in document order.
#[must_use]
pub fn tokenize(html: &str) -> TagTokenizer<'_> {
    TagTokenizer::new(html)
}
