use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::Url;
use tagscan_common::net::{FetchError, FetchOptions, fetch_text};
use thiserror::Error;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A local file.
    File(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
    /// HTML passed directly, e.g. on the command line.
    Inline(String),
}

impl DocumentSource {
    /// Classify a command-line argument: URLs by scheme, anything else is a path.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Human-readable name of the source.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
            Self::Inline(_) => "<inline>".to_string(),
        }
    }

    /// Prefix for the list files written for this source.
    ///
    /// Files use their stem (`page.html` → `page`). URLs use the host, with
    /// the port appended after an underscore (`localhost:8080` →
    /// `localhost_8080`).
    #[must_use]
    pub fn output_stem(&self) -> String {
        match self {
            Self::File(path) => path.file_stem().map_or_else(
                || "document".to_string(),
                |stem| stem.to_string_lossy().into_owned(),
            ),
            Self::Url(url) => url_stem(url),
            Self::Inline(_) => "inline".to_string(),
        }
    }
}

fn url_stem(url: &str) -> String {
    let host = Url::parse(url).ok().and_then(|parsed| {
        let host = parsed.host_str()?.to_string();
        Some(match parsed.port() {
            Some(port) => format!("{host}_{port}"),
            None => host,
        })
    });
    host.unwrap_or_else(|| {
        url.chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect()
    })
}

/// A document's source together with its text.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Where the text came from.
    pub source: DocumentSource,
    /// The HTML text.
    pub html: String,
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a file.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Failed to list a directory.
    #[error("failed to list '{}': {source}", .path.display())]
    ReadDir {
        /// The directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Failed to fetch a URL.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Load a document from a file, a URL or inline text.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if a file cannot be read as UTF-8 text, or
/// [`LoadError::Fetch`] if a URL cannot be fetched.
pub fn load_document(
    source: DocumentSource,
    options: &FetchOptions,
) -> Result<LoadedDocument, LoadError> {
    let html = match &source {
        DocumentSource::File(path) => fs::read_to_string(path).map_err(|e| LoadError::Read {
            path: path.clone(),
            source: e,
        })?,
        DocumentSource::Url(url) => fetch_text(url, options)?,
        DocumentSource::Inline(html) => html.clone(),
    };
    Ok(LoadedDocument { source, html })
}

/// Expand `path` into the HTML files to process.
///
/// A directory yields its `*.html` files (extension compared ASCII
/// case-insensitively, no recursion) sorted by path. Anything else is
/// returned as-is.
///
/// # Errors
///
/// Returns [`LoadError::ReadDir`] if the directory cannot be listed.
pub fn collect_html_files(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let read_dir_error = |e| LoadError::ReadDir {
        path: path.to_path_buf(),
        source: e,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(read_dir_error)? {
        let entry_path = entry.map_err(read_dir_error)?.path();
        let is_html = entry_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        if is_html && entry_path.is_file() {
            files.push(entry_path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_stem() {
        assert_eq!(url_stem("https://www.example.org"), "www.example.org");
        assert_eq!(url_stem("http://localhost:8080/a/b"), "localhost_8080");
        assert_eq!(url_stem("https://example.org:443/"), "example.org");
    }

    #[test]
    fn test_url_stem_fallback() {
        assert_eq!(url_stem("http://"), "http___");
    }
}
