use core::iter::FusedIterator;
use core::str::Chars;

use strum_macros::{Display, EnumIter};

use super::token::TagEvent;

/// The tokenizer state machine. Text is skipped in `Data`; every other state
/// is somewhere inside a candidate tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TokenizerState {
    /// Outside any tag.
    Data,
    /// After `<`, skipping whitespace, before a `/` or the tag name.
    TagOpen,
    /// After `</`, skipping whitespace, before the tag name.
    EndTagOpen,
    /// Consuming the alphanumeric tag name.
    TagName,
    /// After the name, skipping attribute text up to `>`.
    TagBody,
}

/// The character classes the transition function distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InputClass {
    /// `<`
    #[strum(to_string = "'<'")]
    LessThanSign,
    /// `/`
    #[strum(to_string = "'/'")]
    Solidus,
    /// `>`
    #[strum(to_string = "'>'")]
    GreaterThanSign,
    /// `[A-Za-z0-9]`
    #[strum(to_string = "[A-Za-z0-9]")]
    Alphanumeric,
    /// Any Unicode whitespace.
    #[strum(to_string = "whitespace")]
    Whitespace,
    /// Everything else.
    #[strum(to_string = "other")]
    Other,
}

impl InputClass {
    /// Classify a single character.
    #[must_use]
    pub fn of(c: char) -> Self {
        match c {
            '<' => Self::LessThanSign,
            '/' => Self::Solidus,
            '>' => Self::GreaterThanSign,
            c if c.is_ascii_alphanumeric() => Self::Alphanumeric,
            c if c.is_whitespace() => Self::Whitespace,
            _ => Self::Other,
        }
    }
}

/// What the tokenizer does with the current character on a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Action {
    /// Nothing.
    #[strum(to_string = "skip")]
    Ignore,
    /// Start a fresh candidate tag.
    #[strum(to_string = "begin")]
    BeginTag,
    /// Mark the candidate tag as a closing tag.
    #[strum(to_string = "closing")]
    MarkClosing,
    /// Append the (lower-cased) character to the tag name.
    #[strum(to_string = "append")]
    AppendName,
    /// Emit the candidate tag.
    #[strum(to_string = "emit")]
    Emit,
    /// Abandon the candidate and process the character again in the new state.
    #[strum(to_string = "reconsume")]
    Reconsume,
}

/// The transition function of the tag automaton.
///
/// A candidate that cannot become a tag is abandoned by reconsuming the
/// offending character in `Data`. Only whitespace and a single `/` can have
/// been consumed since the `<` at that point, so scanning effectively resumes
/// right after the `<`.
#[must_use]
pub const fn transition(state: TokenizerState, class: InputClass) -> (TokenizerState, Action) {
    match (state, class) {
        (TokenizerState::Data, InputClass::LessThanSign) => {
            (TokenizerState::TagOpen, Action::BeginTag)
        }
        (TokenizerState::TagOpen, InputClass::Solidus) => {
            (TokenizerState::EndTagOpen, Action::MarkClosing)
        }
        (
            TokenizerState::TagOpen | TokenizerState::EndTagOpen | TokenizerState::TagName,
            InputClass::Alphanumeric,
        ) => (TokenizerState::TagName, Action::AppendName),
        (TokenizerState::TagName | TokenizerState::TagBody, InputClass::GreaterThanSign) => {
            (TokenizerState::Data, Action::Emit)
        }
        (TokenizerState::TagOpen | TokenizerState::EndTagOpen, InputClass::Whitespace)
        | (TokenizerState::Data | TokenizerState::TagBody, _) => (state, Action::Ignore),
        (TokenizerState::TagOpen | TokenizerState::EndTagOpen, _) => {
            (TokenizerState::Data, Action::Reconsume)
        }
        (TokenizerState::TagName, _) => (TokenizerState::TagBody, Action::Ignore),
    }
}

/// Lazy tag tokenizer over a borrowed document.
///
/// Drives [`transition`] one character at a time and yields a [`TagEvent`]
/// whenever a candidate tag reaches its `>`. A candidate still open at end of
/// input is dropped.
#[derive(Debug, Clone)]
pub struct TagTokenizer<'a> {
    input: Chars<'a>,
    state: TokenizerState,
    // "Reconsume in the Data state" parks the character here.
    reconsume: Option<char>,
    is_closing: bool,
    name: String,
}

impl<'a> TagTokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars(),
            state: TokenizerState::Data,
            reconsume: None,
            is_closing: false,
            name: String::new(),
        }
    }

    /// The state the automaton is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }
}

impl Iterator for TagTokenizer<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        loop {
            let c = self.reconsume.take().or_else(|| self.input.next())?;
            let (next_state, action) = transition(self.state, InputClass::of(c));
            self.state = next_state;
            match action {
                Action::Ignore => {}
                Action::BeginTag => {
                    self.is_closing = false;
                    self.name.clear();
                }
                Action::MarkClosing => self.is_closing = true,
                Action::AppendName => self.name.push(c.to_ascii_lowercase()),
                Action::Reconsume => self.reconsume = Some(c),
                Action::Emit => {
                    return Some(TagEvent {
                        is_closing: self.is_closing,
                        name: core::mem::take(&mut self.name),
                    });
                }
            }
        }
    }
}

impl FusedIterator for TagTokenizer<'_> {}
