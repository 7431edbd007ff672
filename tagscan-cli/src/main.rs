//! tagscan CLI - link/image extraction and tag balance checking
//!
//! Usage:
//!   tagscan                         Process every *.html file in the current directory
//!   tagscan -f page.html            Process one file
//!   tagscan -f pages/               Process every *.html file in a directory
//!   tagscan -u https://example.org  Fetch and process a web page
//!   tagscan --html '<p>hi</p>'      Process an inline document
//!   tagscan -g                      Print the tag tokenizer automaton as Graphviz DOT
//!
//! For every document, `<stem>_links.txt` and `<stem>_images.txt` are written
//! to the output directory unless `--no-write` is given.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, ValueEnum, value_parser};
use owo_colors::OwoColorize;
use serde_json::json;
use tagscan_common::net::FetchOptions;
use tagscan_common::warning::warn_once;
use tagscan_html::tokenizer::automaton;
use tagscan_html::tokenize;
use tagscan_loader::{
    Analysis, DocumentSource, ListFiles, LoadedDocument, analyze, collect_html_files,
    load_document, write_lists,
};

#[derive(Parser, Debug)]
#[command(
    name = "tagscan",
    version,
    about = "Extract links and images from HTML and check that its tags are balanced"
)]
struct Cli {
    #[command(flatten)]
    input: Input,

    /// Directory for the `<stem>_links.txt` and `<stem>_images.txt` files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print the tag event stream of each document
    #[arg(long)]
    tokens: bool,

    /// Do not write link/image list files
    #[arg(long)]
    no_write: bool,

    /// HTTP timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        value_parser = value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct Input {
    /// HTML file, or directory whose *.html files are processed
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Web page to fetch and process
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Process this HTML text directly
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the tag tokenizer automaton as Graphviz DOT and exit
    #[arg(short, long)]
    graph: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable report
    Text,
    /// One JSON object per document
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    if cli.input.graph {
        write!(out, "{}", automaton::to_dot())?;
        return Ok(());
    }

    let sources = collect_sources(&cli.input)?;
    if sources.is_empty() {
        warn_once("CLI", "no HTML files found to process");
        return Ok(());
    }
    run(&cli, sources, &mut out)
}

/// Load, analyze and report every source in order. A document that cannot be
/// loaded is a warning; the run fails only when none of them could be.
fn run<W: Write>(cli: &Cli, sources: Vec<DocumentSource>, out: &mut W) -> Result<()> {
    let options = FetchOptions::default().with_timeout(Duration::from_secs(cli.timeout));
    let total = sources.len();
    let mut failed = 0;
    for source in sources {
        match load_document(source, &options) {
            Ok(document) => process(cli, &document, out)?,
            Err(e) => {
                warn_once("Loader", &e.to_string());
                failed += 1;
            }
        }
    }

    if failed == total {
        bail!("none of the {total} document(s) could be loaded");
    }
    Ok(())
}

/// Turn the input flags into the list of documents to process.
fn collect_sources(input: &Input) -> Result<Vec<DocumentSource>> {
    if let Some(url) = &input.url {
        return Ok(vec![DocumentSource::Url(url.clone())]);
    }
    if let Some(html) = &input.html {
        return Ok(vec![DocumentSource::Inline(html.clone())]);
    }

    let root = input.file.clone().unwrap_or_else(|| PathBuf::from("."));
    let files = collect_html_files(&root)
        .with_context(|| format!("cannot collect HTML files from '{}'", root.display()))?;
    Ok(files.into_iter().map(DocumentSource::File).collect())
}

fn process<W: Write>(cli: &Cli, document: &LoadedDocument, out: &mut W) -> Result<()> {
    let analysis = analyze(document);

    let files = if cli.no_write {
        None
    } else {
        let files = write_lists(&cli.output_dir, &analysis).with_context(|| {
            format!(
                "failed to write lists for '{}' to '{}'",
                analysis.source,
                cli.output_dir.display()
            )
        })?;
        Some(files)
    };

    let html = cli.tokens.then_some(document.html.as_str());
    match cli.format {
        Format::Text => print_report(out, &analysis, files.as_ref(), html)?,
        Format::Json => print_json(out, &analysis, files.as_ref(), html)?,
    }
    Ok(())
}

fn print_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    files: Option<&ListFiles>,
    tokens_of: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "{} '{}':", "Processed".bold(), analysis.source)?;

    let destination = |path: Option<&PathBuf>| {
        path.map_or_else(String::new, |p| format!(" -> {}", p.display()))
    };
    writeln!(
        out,
        "- {} links{}",
        analysis.links.len(),
        destination(files.map(|f| &f.links))
    )?;
    writeln!(
        out,
        "- {} images{}",
        analysis.images.len(),
        destination(files.map(|f| &f.images))
    )?;

    if analysis.is_balanced() {
        writeln!(out, "- Balanced: {}", "yes".green())?;
    } else {
        writeln!(out, "- Balanced: {} ({})", "no".red(), analysis.balance)?;
    }

    writeln!(out, "- Tag statistics:")?;
    for tag in &analysis.tag_counts {
        writeln!(out, "  {}: {}", tag.name, tag.count)?;
    }

    if let Some(html) = tokens_of {
        let events: Vec<_> = tokenize(html).collect();
        writeln!(out, "- Tag events ({}):", events.len())?;
        for (i, event) in events.iter().enumerate() {
            writeln!(out, "  {i:4}: {event}")?;
        }
    }
    writeln!(out)
}

fn print_json<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    files: Option<&ListFiles>,
    tokens_of: Option<&str>,
) -> Result<()> {
    let mut report = serde_json::to_value(analysis).context("failed to serialize analysis")?;
    if let Some(object) = report.as_object_mut() {
        if let Some(files) = files {
            let _ = object.insert(
                "links_file".to_string(),
                json!(files.links.display().to_string()),
            );
            let _ = object.insert(
                "images_file".to_string(),
                json!(files.images.display().to_string()),
            );
        }
        if let Some(html) = tokens_of {
            let events: Vec<String> = tokenize(html).map(|event| event.to_string()).collect();
            let _ = object.insert("tokens".to_string(), json!(events));
        }
    }
    writeln!(out, "{report}")?;
    Ok(())
}
