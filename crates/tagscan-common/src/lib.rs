//! Common utilities for tagscan.
//!
//! This crate provides shared infrastructure used by the loader and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for recoverable problems
//! - **Networking** - blocking HTTP GET for fetching documents

pub mod net;
pub mod warning;
