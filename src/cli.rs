//! Command-line interface

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::cookie::{write_export, ExportFormat};
use crate::session::ExtractionSession;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Cookie JSON file to load on startup
    pub file: Option<PathBuf>,

    /// Domain pattern to pre-fill
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Directory for config and logs (default: ~/.cookie-extractor)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter cookies without starting the terminal UI
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Regular expression matched case-insensitively against each domain
    #[arg(short, long)]
    pub pattern: String,

    /// Cookie JSON file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the export here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Single-line JSON instead of indented
    #[arg(long)]
    pub compact: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

/// Run parse → filter → export on cookie text. Returns the JSON and the
/// number of cookies in it.
pub fn extract_text(
    text: String,
    pattern: &str,
    format: ExportFormat,
) -> crate::cookie::Result<(String, usize)> {
    let mut session = ExtractionSession::new().with_export_format(format);
    session.load_text(text);
    let matched = session.extract(pattern)?;
    let json = session.export_json()?;
    Ok((json, matched))
}

/// Headless `extract`: read from `--input` or stdin, write to `--output` or
/// `out`.
pub fn run_extract(
    args: &ExtractArgs,
    format: ExportFormat,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let text = match &args.input {
        Some(path) => crate::cookie::read_cookie_file(path)?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read cookie text from stdin")?;
            text
        }
    };

    let (json, matched) = extract_text(text, &args.pattern, format)?;
    tracing::info!(pattern = %args.pattern, matched, "Extracted cookies");

    match &args.output {
        Some(path) => write_export(path, &json)?,
        None => {
            out.write_all(json.as_bytes())
                .context("Failed to write export")?;
            out.flush()?;
        }
    }

    Ok(matched)
}
