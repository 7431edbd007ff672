//! Tag scanning and tag balance checking for tagscan.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag Tokenizer** - a small finite-state machine that yields one
//!   [`TagEvent`] per `<name ...>` or `</name ...>` construct, skipping text
//! - **Void-Element Table** - the tags that never take a closing tag
//! - **Link Extractor** - `(text, url)` pairs from `<a href="...">...</a>`
//! - **Image Extractor** - `(src, alt)` pairs from `<img ...>`
//! - **Balance Verifier** - stack discipline over the tag stream
//!
//! Every operation is a pure function over a borrowed `&str`. None of them
//! can fail: input that does not match the expected shapes is skipped.
//!
//! # Not Implemented
//!
//! - Tree construction
//! - Character reference decoding in attribute values
//! - Script/style raw text handling (tags inside them are scanned as usual)

/// Stack-based tag balance verification.
pub mod balance;
/// Image (`<img>`) extraction.
pub mod images;
/// Hyperlink (`<a href>`) extraction.
pub mod links;
/// Generic tag tokenizer.
pub mod tokenizer;
/// Void element table.
pub mod void_elements;

pub use balance::{BalanceVerdict, check_balance, check_events, is_balanced};
pub use images::{ImageRecord, extract_images};
pub use links::{LinkRecord, extract_links};
pub use tokenizer::{TagEvent, TagTokenizer, tokenize};
pub use void_elements::{VOID_ELEMENTS, is_void_element};
