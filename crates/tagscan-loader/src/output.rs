use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::Analysis;

/// Paths of the list files written for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFiles {
    /// `<stem>_links.txt`, one URL per line.
    pub links: PathBuf,
    /// `<stem>_images.txt`, one image source per line.
    pub images: PathBuf,
}

/// Write the link URLs and image sources of `analysis` into `dir`.
///
/// `dir` is created if missing. Existing files are overwritten.
///
/// # Errors
///
/// Returns an I/O error if the directory or either file cannot be written.
pub fn write_lists(dir: &Path, analysis: &Analysis) -> io::Result<ListFiles> {
    fs::create_dir_all(dir)?;

    let files = ListFiles {
        links: dir.join(format!("{}_links.txt", analysis.stem)),
        images: dir.join(format!("{}_images.txt", analysis.stem)),
    };
    write_list(&files.links, analysis.links.iter().map(|link| link.url.as_str()))?;
    write_list(&files.images, analysis.images.iter().map(|image| image.src.as_str()))?;
    Ok(files)
}

fn write_list<'a>(path: &Path, items: impl Iterator<Item = &'a str>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        writeln!(writer, "{item}")?;
    }
    writer.flush()
}
