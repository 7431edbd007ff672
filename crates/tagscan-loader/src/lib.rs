//! Document loading and analysis for tagscan.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - read a file, fetch a URL or take inline HTML
//! - **Directory Expansion** - turn a directory into its sorted `*.html` files
//! - **Analysis** - run the tagscan-html operations and count tags
//! - **List Output** - write `<stem>_links.txt` and `<stem>_images.txt`

/// Link/image/balance analysis of a loaded document.
pub mod analysis;
/// Writing link and image lists to disk.
pub mod output;
/// Document sources and loading.
pub mod source;

pub use analysis::{Analysis, REPORTED_TAGS, TagCount, analyze, count_opening_tags};
pub use output::{ListFiles, write_lists};
pub use source::{DocumentSource, LoadError, LoadedDocument, collect_html_files, load_document};
