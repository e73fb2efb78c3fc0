//! sqlbench - SQL formatting from the command line
//!
//! Formats SQL files (or stdin) with the parameter-protecting formatter.
//! `{NAME[...]}` placeholders survive byte-identical, so formatting a query
//! template never corrupts its parameters.

use anyhow::{Context, Result, bail};
use clap::Parser;
use sqlbench_format::{FormatterConfig, SqlFormatter};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sqlbench",
    version,
    about = "Format SQL, preserving {NAME[...]} parameter placeholders"
)]
struct Cli {
    /// SQL files to format; reads stdin when omitted
    files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(long, conflicts_with = "check")]
    write: bool,

    /// Exit non-zero if any input is not already formatted
    #[arg(long)]
    check: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent_size: usize,

    /// Uppercase SQL keywords while formatting
    #[arg(long)]
    uppercase_keywords: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FormatterConfig::default()
        .with_indent_size(cli.indent_size)
        .with_uppercase_keywords(cli.uppercase_keywords);
    let formatter = SqlFormatter::new(config);

    if cli.files.is_empty() {
        if cli.write {
            bail!("--write requires file arguments");
        }
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let formatted = formatter.format(&input);
        if cli.check {
            if needs_reformat(&input, &formatted) {
                std::process::exit(1);
            }
            return Ok(());
        }
        println!("{formatted}");
        return Ok(());
    }

    let mut unformatted: Vec<&Path> = Vec::new();
    for path in &cli.files {
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let formatted = formatter.format(&input);
        let changed = needs_reformat(&input, &formatted);
        debug!(path = %path.display(), changed, "formatted");

        if cli.check {
            if changed {
                unformatted.push(path);
            }
        } else if cli.write {
            if changed {
                fs::write(path, format!("{formatted}\n"))
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        } else {
            println!("{formatted}");
        }
    }

    if !unformatted.is_empty() {
        for path in &unformatted {
            eprintln!("{}", path.display());
        }
        std::process::exit(1);
    }
    Ok(())
}

/// A file counts as formatted when its content (modulo the trailing newline
/// `--write` appends) matches the formatter output.
fn needs_reformat(input: &str, formatted: &str) -> bool {
    input != formatted && input.trim_end() != formatted
}
