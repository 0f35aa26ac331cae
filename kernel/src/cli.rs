//! Command line front end: read two files, diff them, print the result.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use crate::diff::{DiffAlgorithm, DiffConfig, MyersDiff};
use crate::encoding::{Granularity, SymbolTable, tokenize};
use crate::infrastructure::config::Settings;
use crate::render::{OutputFormat, escape_control, render};

/// Compare two files with the Myers O(ND) algorithm.
#[derive(Debug, Parser)]
#[command(name = "snakediff", version, about)]
pub struct Cli {
    /// Original file.
    pub old: PathBuf,

    /// Modified file.
    pub new: PathBuf,

    /// Configuration file (TOML, JSON or YAML).
    #[arg(long, env = "SNAKEDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Strip leading and trailing whitespace before comparing.
    #[arg(long)]
    pub trim_space: bool,

    /// Treat every run of whitespace as a single space.
    #[arg(short = 'b', long)]
    pub ignore_space: bool,

    /// Compare case-insensitively.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Compare character by character instead of line by line.
    #[arg(long)]
    pub chars: bool,

    /// Report changes where the search placed them, without shifting them
    /// behind equal context.
    #[arg(long)]
    pub no_shift: bool,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overrides configuration values with the flags given on the command
    /// line. Flags can only switch features on.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        let encoding = &mut settings.encoding;
        encoding.trim_space |= self.trim_space;
        encoding.ignore_space |= self.ignore_space;
        encoding.ignore_case |= self.ignore_case;
        if self.chars {
            encoding.granularity = Granularity::Chars;
        }
        if self.no_shift {
            settings.diff.shift_boundaries = false;
        }
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        match self.verbose {
            0 => {}
            1 => settings.telemetry.log_level = "debug".to_string(),
            _ => settings.telemetry.log_level = "trace".to_string(),
        }
    }
}

/// Whether the compared inputs differ, mapped to `diff(1)` exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    /// No differences.
    Same,
    /// At least one operation was emitted.
    Different,
}

impl DiffStatus {
    /// Process exit code: 0 when equal, 1 when different.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Same => 0,
            Self::Different => 1,
        }
    }
}

/// Diffs the two files named by `cli` and writes the rendered script to
/// `out`.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the output cannot be
/// written.
pub fn run(cli: &Cli, settings: &Settings, out: &mut impl Write) -> Result<DiffStatus> {
    let text_a = std::fs::read_to_string(&cli.old)
        .with_context(|| format!("Failed to read {}", cli.old.display()))?;
    let text_b = std::fs::read_to_string(&cli.new)
        .with_context(|| format!("Failed to read {}", cli.new.display()))?;

    let options = settings.encoding.text_options();
    let mut table = SymbolTable::new();
    let codes_a = table.encode(&text_a, &options);
    let codes_b = table.encode(&text_b, &options);

    let algo = MyersDiff::with_config(DiffConfig::from(&settings.diff));
    let ops = algo.diff(&codes_a, &codes_b);
    info!(
        old = %cli.old.display(),
        new = %cli.new.display(),
        operations = ops.len(),
        "compared files"
    );

    let (tokens_a, tokens_b) = display_tokens(&text_a, &text_b, options.granularity);
    let rendered = render(settings.output.format, &ops, &tokens_a, &tokens_b)
        .context("Failed to render diff")?;

    if settings.output.format == OutputFormat::Json {
        writeln!(out, "{rendered}")?;
    } else {
        write!(out, "{rendered}")?;
    }

    Ok(if ops.is_empty() {
        DiffStatus::Same
    } else {
        DiffStatus::Different
    })
}

/// Tokens as they are printed; character tokens get control characters
/// escaped so that a changed line break does not split a record.
fn display_tokens(
    text_a: &str,
    text_b: &str,
    granularity: Granularity,
) -> (Vec<String>, Vec<String>) {
    let tokens_a = tokenize(text_a, granularity);
    let tokens_b = tokenize(text_b, granularity);
    match granularity {
        Granularity::Lines => (tokens_a, tokens_b),
        Granularity::Chars => (
            tokens_a.iter().map(|t| escape_control(t)).collect(),
            tokens_b.iter().map(|t| escape_control(t)).collect(),
        ),
    }
}
