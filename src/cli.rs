//! Command-line surface for `rosparse`.
//!
//! `rosparse <log file path>` reads the file, parses every line as a batch
//! and prints the entries that matched. Rejected lines are dropped silently
//! unless `--report-failures` is set. A missing or non-file path, or any
//! other unparseable command line, prints the usage line and exits 0.

use anyhow::{bail, Context};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use rosparse_core::config::{Config, OutputConfig, OutputFormat};
use rosparse_core::{LogEntry, LogStore, MalformedLine, FIELD_KEYS};

const DEFAULT_PROGRAM: &str = "rosparse";

#[derive(Debug, Parser)]
#[command(name = "rosparse", about = "Parse ROS 2 console log lines into fields")]
pub struct Cli {
    /// Path to the log file.
    #[arg(value_name = "LOG_FILE")]
    pub path: Option<PathBuf>,

    /// Output format (overrides `output.format` in config.toml).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Prefix each plain field with its name, e.g. `node_name=talker`.
    #[arg(long)]
    pub labels: bool,

    /// List the line numbers that did not parse on stderr.
    #[arg(long)]
    pub report_failures: bool,

    /// Read configuration from this file instead of ~/.config/rosparse/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long)]
    pub debug: bool,

    /// Arguments after the log file are accepted and ignored.
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Why the command line could not name a log file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInvocation {
    #[error("no log file path given")]
    MissingPath,
    #[error("{} is not an existing file", .0.display())]
    NotAFile(PathBuf),
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Parse the command line.
///
/// `Ok(None)` means the arguments were unusable and the caller should print
/// the usage line. Help requests come back as `Err` so clap can print them.
pub fn parse_args<I, T>(args: I) -> Result<Option<Cli>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Err(err)
        }
        Err(_) => Ok(None),
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let path = match resolve_path(cli.path.as_deref()) {
        Ok(path) => path,
        Err(reason) => {
            tracing::debug!(%reason, "invalid invocation");
            print_usage();
            return Ok(());
        }
    };

    let output = output_settings(&cli)?;
    tracing::debug!(path = %path.display(), format = %output.format, "parsing log file");

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut store = LogStore::new();
    let results = store.parse_many(split_lines(&content));

    let mut out = BufWriter::new(io::stdout().lock());
    render(&store, &output, &mut out)?;
    out.flush()?;

    if output.report_failures {
        report_failures(&results, &mut io::stderr().lock())?;
    }
    Ok(())
}

/// Accept only a path that names an existing regular file.
pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf, InvalidInvocation> {
    let path = path.ok_or(InvalidInvocation::MissingPath)?;
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(InvalidInvocation::NotAFile(path.to_path_buf()))
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <log file path>")
}

/// Print the usage line for the running program to stdout.
pub fn print_usage() {
    println!("{}", usage(&program_name()));
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// Split on `\n`, `\r\n` and a lone `\r`, the way universal-newline text
/// reads do. A terminator at the very end does not start an extra line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(|c| c == '\r' || c == '\n') {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Config file and environment first, then command-line flags on top.
fn output_settings(cli: &Cli) -> anyhow::Result<OutputConfig> {
    let config = match &cli.config {
        Some(path) if !path.is_file() => bail!("config file {} does not exist", path.display()),
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => Config::load()?,
    };

    let mut output = config.output;
    if let Some(format) = cli.format {
        output.format = format.into();
    }
    output.labels |= cli.labels;
    output.report_failures |= cli.report_failures;
    Ok(output)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Write every stored entry to `w` in the configured format.
pub fn render<W: Write>(store: &LogStore, output: &OutputConfig, w: &mut W) -> io::Result<()> {
    match output.format {
        OutputFormat::Plain => {
            for fields in store.entries_as_sequences() {
                for (key, value) in FIELD_KEYS.iter().zip(&fields) {
                    if output.labels {
                        write!(w, "{key}={value} ")?;
                    } else {
                        write!(w, "{value} ")?;
                    }
                }
                writeln!(w)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, &store.entries_as_mappings())?;
            writeln!(w)?;
        }
        OutputFormat::Jsonl => {
            for mapping in store.entries_as_mappings() {
                serde_json::to_writer(&mut *w, &mapping)?;
                writeln!(w)?;
            }
        }
    }
    Ok(())
}

/// One `line N: ...` row per `None` slot, numbered from 1.
pub fn report_failures<W: Write>(results: &[Option<LogEntry>], w: &mut W) -> io::Result<()> {
    for (idx, _) in results.iter().enumerate().filter(|(_, r)| r.is_none()) {
        writeln!(w, "line {}: {}", idx + 1, MalformedLine)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
